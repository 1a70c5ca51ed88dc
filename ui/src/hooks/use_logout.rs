use crate::contexts::toast::use_toast;
use crate::{Route, session, state::State};
use yew::prelude::*;
use yewdux::prelude::*;

use super::use_push_route;

/// Drops the stored token, clears any queued toasts and returns to the
/// login screen.
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();
    let push_route = use_push_route();
    let toasts = use_toast();

    Callback::from(move |_: MouseEvent| {
        tracing::info!("signing out");
        session::clear_token();
        dispatch.reduce_mut(|state| state.logout());
        toasts.clear();
        push_route.emit(Route::Login);
    })
}
