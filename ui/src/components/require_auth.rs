use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::components::Spinner;
use crate::state::{AuthState, State};

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    #[prop_or_default]
    pub children: Children,
}

/// Renders its children only once the session is known to be valid, so
/// their fetch hooks never run without a token. Logged-out visitors are
/// sent to the login page.
#[function_component]
pub fn RequireAuth(props: &RequireAuthProps) -> Html {
    let (state, _) = use_store::<State>();

    match state.auth_state {
        AuthState::Unknown => html! {
            <div class="py-16"><Spinner /></div>
        },
        AuthState::LoggedOut => html! { <Redirect<Route> to={Route::Login} /> },
        AuthState::LoggedIn => html! { <>{for props.children.iter()}</> },
    }
}
