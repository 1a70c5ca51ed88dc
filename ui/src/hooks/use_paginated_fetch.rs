use std::rc::Rc;

use payloads::QueryParams;
use serde::de::DeserializeOwned;
use yew::prelude::*;

use super::use_mounted;
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::paging::{FetchOutcome, PageFetch, PaginatedList};

pub struct UsePaginatedFetchHandle<T> {
    /// Rows of the current page, in server order.
    pub data: Vec<T>,
    /// 1-based.
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub page_size: u32,
    pub is_loading: bool,
    /// `(page, filters)`. `None` reuses the filters of the previous request.
    pub fetch_page: Callback<(u32, Option<QueryParams>)>,
    /// Restarts from page 1 with only the default filters.
    pub set_page_size: Callback<u32>,
}

impl<T> UsePaginatedFetchHandle<T> {
    /// Page-size handler that goes back to page 1 with `filters` still
    /// applied. Use it wherever the filter controls stay on screen.
    pub fn resize_keeping(&self, filters: QueryParams) -> Callback<u32> {
        let set_page_size = self.set_page_size.clone();
        let fetch_page = self.fetch_page.clone();
        Callback::from(move |size: u32| {
            set_page_size.emit(size);
            fetch_page.emit((1, Some(filters.clone())));
        })
    }
}

/// Paginated list bound to `endpoint`.
///
/// Nothing is fetched until `fetch_page` is emitted. A failed request
/// raises an error toast and leaves the previous page in place; a response
/// that arrives after a newer request was issued is dropped.
#[hook]
pub fn use_paginated_fetch<T>(
    endpoint: &str,
    page_size: u32,
    default_filters: QueryParams,
) -> UsePaginatedFetchHandle<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let list = use_mut_ref(move || PaginatedList::<T>::new(page_size, default_filters));
    let update = use_force_update();
    let mounted = use_mounted();
    let toast = use_toast();

    let run = {
        let list = list.clone();
        let endpoint = endpoint.to_string();

        Rc::new(move |fetch: PageFetch| {
            update.force_update();

            let list = list.clone();
            let endpoint = endpoint.clone();
            let update = update.clone();
            let mounted = mounted.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                let result = get_api_client()
                    .get_page::<T>(&endpoint, &fetch.query)
                    .await;

                if !mounted.get() {
                    tracing::debug!(%endpoint, "dropping page fetched after unmount");
                    return;
                }

                let outcome = list.borrow_mut().complete(&fetch, result);
                match outcome {
                    FetchOutcome::Applied => {}
                    FetchOutcome::Failed(error) => {
                        toast.client_error(
                            &format!("Failed to load page {}", fetch.page),
                            &error,
                        );
                    }
                    FetchOutcome::Superseded => {
                        tracing::debug!(%endpoint, token = fetch.token, "superseded page response dropped");
                        return;
                    }
                }
                update.force_update();
            });
        })
    };

    let fetch_page = {
        let list = list.clone();
        let run = run.clone();
        Callback::from(move |(page, filters): (u32, Option<QueryParams>)| {
            let fetch = list.borrow_mut().begin_fetch(page, filters);
            run(fetch);
        })
    };

    let set_page_size = {
        let list = list.clone();
        Callback::from(move |size: u32| {
            let fetch = list.borrow_mut().begin_page_size_change(size);
            run(fetch);
        })
    };

    let snapshot = list.borrow();
    UsePaginatedFetchHandle {
        data: snapshot.data().to_vec(),
        current_page: snapshot.current_page(),
        total_pages: snapshot.total_pages(),
        total_items: snapshot.total_items(),
        page_size: snapshot.page_size(),
        is_loading: snapshot.is_loading(),
        fetch_page,
        set_page_size,
    }
}

/// Handle driven by a bare [`PaginatedList`], recording the query of every
/// request it would send.
#[cfg(test)]
pub(crate) fn detached_handle<T: Clone + 'static>(
    list: PaginatedList<T>,
) -> (UsePaginatedFetchHandle<T>, Rc<std::cell::RefCell<Vec<String>>>) {
    use std::cell::RefCell;

    let list = Rc::new(RefCell::new(list));
    let sent = Rc::new(RefCell::new(Vec::new()));

    let fetch_page = {
        let list = list.clone();
        let sent = sent.clone();
        Callback::from(move |(page, filters): (u32, Option<QueryParams>)| {
            let fetch = list.borrow_mut().begin_fetch(page, filters);
            sent.borrow_mut().push(fetch.query.to_query_string());
        })
    };
    let set_page_size = {
        let list = list.clone();
        let sent = sent.clone();
        Callback::from(move |size: u32| {
            let fetch = list.borrow_mut().begin_page_size_change(size);
            sent.borrow_mut().push(fetch.query.to_query_string());
        })
    };

    let snapshot = list.borrow();
    let handle = UsePaginatedFetchHandle {
        data: snapshot.data().to_vec(),
        current_page: snapshot.current_page(),
        total_pages: snapshot.total_pages(),
        total_items: snapshot.total_items(),
        page_size: snapshot.page_size(),
        is_loading: snapshot.is_loading(),
        fetch_page,
        set_page_size,
    };
    drop(snapshot);
    (handle, sent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_resize_drops_filters_but_resize_keeping_restores_them() {
        let (handle, sent) =
            detached_handle(PaginatedList::<u32>::new(10, QueryParams::new().with("typeId", 1)));
        let search = QueryParams::new().with("search", "ana");

        handle.fetch_page.emit((3, Some(search.clone())));
        handle.set_page_size.emit(20);
        handle.resize_keeping(search).emit(50);

        assert_eq!(
            *sent.borrow(),
            [
                "page=2&size=10&typeId=1&search=ana",
                "page=0&size=20&typeId=1",
                "page=0&size=50&typeId=1",
                "page=0&size=50&typeId=1&search=ana",
            ]
        );
    }
}
