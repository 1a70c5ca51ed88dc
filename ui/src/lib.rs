use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod contexts;
pub mod hooks;
pub mod logs;
pub mod pages;
pub mod paging;
pub mod session;
pub mod state;
pub mod utils;

use components::{RequireAuth, ToastContainer};
use contexts::toast::ToastProvider;
use hooks::use_authentication;
use pages::{HomePage, HomeView, LoginPage, NotFoundPage};

/// API client for the configured backend, carrying the session token when
/// one is stored.
///
/// The backend address comes from `BACKEND_URL` at build time, falling back
/// to the page's own origin.
pub fn get_api_client() -> APIClient {
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(|| web_sys::window()?.location().origin().ok())
        .unwrap_or_default();

    let client = APIClient::new(address);
    match session::load_token() {
        Some(token) => client.with_token(token),
        None => client,
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/farmers")]
    Farmers,
    #[at("/family-groups")]
    FamilyGroups,
    #[at("/reports")]
    Reports,
    #[at("/dashboard")]
    Dashboard,
    #[at("/users")]
    Users,
    #[at("/branches")]
    Branches,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <AppContent />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[function_component]
fn AppContent() -> Html {
    use_authentication();

    html! {
        <div class="min-h-screen bg-neutral-50 dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
            <Switch<Route> render={switch} />
            <ToastContainer />
        </div>
    }
}

fn switch(route: Route) -> Html {
    let view = match route {
        Route::Login => return html! { <LoginPage /> },
        Route::NotFound => return html! { <NotFoundPage /> },
        Route::Home | Route::FamilyGroups => HomeView::FamilyGroups,
        Route::Farmers => HomeView::Farmers,
        Route::Reports => HomeView::Reports,
        Route::Dashboard => HomeView::Dashboard,
        Route::Users => HomeView::Users,
        Route::Branches => HomeView::Branches,
    };

    html! {
        <RequireAuth>
            <HomePage {view} />
        </RequireAuth>
    }
}
