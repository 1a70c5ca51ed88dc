use yew::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::components::LoginForm;
use crate::hooks::{use_push_route, use_title};
use crate::state::State;
use crate::utils::is_dev_mode;

/// Sign-in screen. A visitor who already holds a valid session goes
/// straight to the family groups view.
#[function_component]
pub fn LoginPage() -> Html {
    use_title("Sign in");
    let push_route = use_push_route();
    let (state, _) = use_store::<State>();

    {
        let push_route = push_route.clone();
        use_effect_with(state.is_authenticated(), move |signed_in| {
            if *signed_in {
                push_route.emit(Route::Home);
            }
        });
    }

    let on_success = Callback::from(move |_: ()| {
        tracing::info!("signed in");
        push_route.emit(Route::Home);
    });

    html! {
        <main class="flex flex-col items-center justify-center gap-6 min-h-screen px-4">
            <header class="text-center">
                <h1 class="text-2xl font-semibold">{"Family Groups"}</h1>
                <p class="text-sm text-neutral-500">{"Farmer and cultivation records"}</p>
            </header>
            <LoginForm {on_success} show_dev_credentials={is_dev_mode()} />
        </main>
    }
}
