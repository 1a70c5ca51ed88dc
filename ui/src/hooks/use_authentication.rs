use yew::prelude::*;
use yewdux::prelude::*;

use crate::{get_api_client, session, state::State};

/// Validate the stored token once on startup. Any failure, including a
/// network error, counts as logged out and discards the token.
#[hook]
pub fn use_authentication() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), move |_| {
        if session::load_token().is_none() {
            dispatch.reduce_mut(|state| state.logout());
            return;
        }

        yew::platform::spawn_local(async move {
            match get_api_client().validate_token().await {
                Ok(()) => {
                    tracing::debug!("stored session is valid");
                    dispatch.reduce_mut(|state| state.login());
                }
                Err(e) => {
                    tracing::info!(error = %e, "stored session rejected");
                    session::clear_token();
                    dispatch.reduce_mut(|state| state.logout());
                }
            }
        });
    });
}
