use yew::prelude::*;
use yewdux::prelude::*;

use super::use_mounted;
use crate::{get_api_client, state::State};

/// Item the administrative screens are gated on.
pub const MANAGE_USERS: &str = "User";

/// Whether the current user may manage `item`. `None` until the backend
/// has answered; a failed check counts as no permission.
#[hook]
pub fn use_permission(item: &'static str) -> Option<bool> {
    let (state, _) = use_store::<State>();
    let allowed = use_state_eq(|| None::<bool>);
    let mounted = use_mounted();

    {
        let allowed = allowed.clone();
        use_effect_with((item, state.is_authenticated()), move |(item, logged_in)| {
            allowed.set(None);
            if !*logged_in {
                return;
            }
            let item = *item;
            yew::platform::spawn_local(async move {
                let result = match get_api_client().has_permission(item).await {
                    Ok(result) => result,
                    Err(e) => {
                        tracing::warn!(%item, error = %e, "permission check failed");
                        false
                    }
                };
                if mounted.get() {
                    allowed.set(Some(result));
                }
            });
        });
    }

    *allowed
}
