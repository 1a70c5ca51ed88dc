use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Page not found");

    html! {
        <div class="flex flex-col items-center justify-center min-h-screen gap-4 text-center">
            <h1 class="text-4xl font-bold text-neutral-900 dark:text-neutral-100">{"404"}</h1>
            <p class="text-neutral-600 dark:text-neutral-400">{"Page not found"}</p>
            <Link<Route>
                to={Route::Home}
                classes="text-neutral-900 dark:text-neutral-100 underline font-medium"
            >
                {"Back to family groups"}
            </Link<Route>>
        </div>
    }
}
