use payloads::QueryParams;
use serde::de::DeserializeOwned;
use yew::prelude::*;

use super::{FetchState, use_mounted};
use crate::get_api_client;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// - No data + loading: "Loading {context}..."
    /// - No data + error: "Error loading {context}: ..."
    /// - Has data: `render_fn(data, is_loading, error)`, so a failed
    ///   refetch keeps showing the previous data.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if self.is_loading {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                } else if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!("Error loading {}: {}", context, error)}
                            </p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
        }
    }
}

/// What a [`use_fetch_item`] instance is currently pointed at.
///
/// Two requests are equal when they would put the same URL on the wire, so
/// rebuilding an identical parameter map every render does not refetch.
#[derive(Debug, Clone)]
pub struct ItemRequest {
    pub endpoint: String,
    pub params: QueryParams,
    pub enabled: bool,
}

impl ItemRequest {
    /// An empty endpoint means "nothing to fetch", same as disabled.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.endpoint.is_empty()
    }
}

impl PartialEq for ItemRequest {
    fn eq(&self, other: &Self) -> bool {
        self.endpoint == other.endpoint
            && self.enabled == other.enabled
            && self.params.to_query_string() == other.params.to_query_string()
    }
}

/// Fetch one resource, refetching whenever the endpoint, the rendered
/// parameters or `enabled` change.
///
/// While inactive no request is made and `data` stays unset. `refetch`
/// replays the current request without clearing what is shown.
#[hook]
pub fn use_fetch_item<T>(
    endpoint: &str,
    params: QueryParams,
    enabled: bool,
) -> FetchHookReturn<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let generation = use_mut_ref(|| 0_u64);
    let mounted = use_mounted();

    let request = ItemRequest {
        endpoint: endpoint.to_string(),
        params,
        enabled,
    };

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();

        use_callback(request.clone(), move |_, request: &ItemRequest| {
            *generation.borrow_mut() += 1;
            let ticket = *generation.borrow();

            if !request.is_active() {
                data.set(FetchState::NotFetched);
                error.set(None);
                is_loading.set(false);
                return;
            }

            let request = request.clone();
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let generation = generation.clone();
            let mounted = mounted.clone();

            is_loading.set(true);
            error.set(None);

            yew::platform::spawn_local(async move {
                let result = get_api_client()
                    .get_json::<T>(&request.endpoint, &request.params)
                    .await;

                if !mounted.get() || *generation.borrow() != ticket {
                    tracing::debug!(endpoint = %request.endpoint, "stale item response dropped");
                    return;
                }

                match result {
                    Ok(value) => data.set(FetchState::Fetched(value)),
                    Err(e) => {
                        tracing::warn!(endpoint = %request.endpoint, error = %e, "item fetch failed");
                        error.set(Some(e.to_string()));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    {
        let data = data.clone();
        let refetch = refetch.clone();

        use_effect_with(request, move |_| {
            data.set(FetchState::NotFetched);
            refetch.emit(());
        });
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(endpoint: &str, params: QueryParams, enabled: bool) -> ItemRequest {
        ItemRequest {
            endpoint: endpoint.to_string(),
            params,
            enabled,
        }
    }

    #[test]
    fn empty_endpoint_is_inactive() {
        assert!(!request("", QueryParams::new(), true).is_active());
        assert!(!request("/farmer/1", QueryParams::new(), false).is_active());
        assert!(request("/farmer/1", QueryParams::new(), true).is_active());
    }

    #[test]
    fn requests_compare_by_rendered_query() {
        let a = request(
            "/farmer",
            QueryParams::new().with("value", "ana").with("typeId", None::<i64>),
            true,
        );
        let b = request("/farmer", QueryParams::new().with("value", "ana"), true);
        assert_eq!(a, b);

        let c = request("/farmer", QueryParams::new().with("value", "anab"), true);
        assert_ne!(a, c);
        assert_ne!(b, request("/farmer", QueryParams::new().with("value", "ana"), false));
    }
}
