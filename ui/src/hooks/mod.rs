pub mod use_authentication;
pub mod use_debounced_value;
pub mod use_fetch_item;
pub mod use_lazy_fetch;
pub mod use_logout;
pub mod use_mounted;
pub mod use_paginated_fetch;
pub mod use_permission;
pub mod use_push_route;
pub mod use_title;

pub use use_authentication::use_authentication;
pub use use_debounced_value::use_debounced_value;
pub use use_fetch_item::{FetchHookReturn, use_fetch_item};
pub use use_lazy_fetch::{UseLazyFetchHandle, use_lazy_fetch};
pub use use_logout::use_logout;
pub use use_mounted::{Mounted, use_mounted};
pub use use_paginated_fetch::{UsePaginatedFetchHandle, use_paginated_fetch};
pub use use_permission::{MANAGE_USERS, use_permission};
pub use use_push_route::use_push_route;
pub use use_title::use_title;

/// Distinguishes "not fetched yet" from "fetched and empty".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }
}
