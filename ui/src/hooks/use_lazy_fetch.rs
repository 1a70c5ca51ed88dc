use serde::de::DeserializeOwned;
use yew::prelude::*;

use super::use_mounted;
use crate::contexts::toast::use_toast;
use crate::get_api_client;

pub struct UseLazyFetchHandle<T> {
    /// Last successfully fetched body; kept when a later fetch fails.
    pub data: Option<T>,
    pub is_loading: bool,
    /// `(endpoint, error_message)`. The message is toasted on failure.
    pub fetch: Callback<(String, String)>,
}

/// Load data with no natural refetch key. Nothing happens until the caller
/// emits `fetch`, typically from its own mount effect.
#[hook]
pub fn use_lazy_fetch<T>() -> UseLazyFetchHandle<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let data = use_state(|| None::<T>);
    let is_loading = use_state(|| false);
    let mounted = use_mounted();
    let toast = use_toast();

    let fetch = {
        let data = data.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |(endpoint, error_message): (String, String)| {
            let data = data.clone();
            let is_loading = is_loading.clone();
            let mounted = mounted.clone();
            let toast = toast.clone();

            is_loading.set(true);
            yew::platform::spawn_local(async move {
                let result = get_api_client()
                    .get_json::<T>(&endpoint, &Default::default())
                    .await;
                if !mounted.get() {
                    return;
                }
                match result {
                    Ok(value) => data.set(Some(value)),
                    Err(e) => toast.client_error(&error_message, &e),
                }
                is_loading.set(false);
            });
        })
    };

    UseLazyFetchHandle {
        data: (*data).clone(),
        is_loading: *is_loading,
        fetch,
    }
}
