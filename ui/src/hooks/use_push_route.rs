use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Callback that navigates to a route. Re-selecting the current route is a
/// no-op so the view keeps its state.
#[hook]
pub fn use_push_route() -> Callback<Route> {
    let navigator = use_navigator();
    let current = use_route::<Route>();

    Callback::from(move |route: Route| {
        if current.as_ref() == Some(&route) {
            return;
        }
        match &navigator {
            Some(navigator) => navigator.push(&route),
            None => tracing::warn!(?route, "navigation requested outside a router"),
        }
    })
}
