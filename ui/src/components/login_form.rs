use payloads::requests;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use super::styles;
use crate::{session, state::State};

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub on_success: Callback<()>,
    #[prop_or_default]
    pub show_dev_credentials: bool,
}

#[function_component]
pub fn LoginForm(props: &LoginFormProps) -> Html {
    let (_state, dispatch) = use_store::<State>();

    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value_of = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let username = value_of(&username_ref).trim().to_string();
            let password = value_of(&password_ref);

            if username.is_empty() || password.is_empty() {
                error_message.set(Some(
                    "Please enter both username and password".to_string(),
                ));
                return;
            }

            let credentials = requests::LoginCredentials { username, password };
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let on_success = on_success.clone();
            let dispatch = dispatch.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                match crate::get_api_client().login(&credentials).await {
                    Ok(token) => {
                        session::store_token(&token.token);
                        dispatch.reduce_mut(|state| state.login());
                        tracing::info!(username = %credentials.username, "logged in");
                        on_success.emit(());
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "login failed");
                        dispatch.reduce_mut(|state| state.logout());
                        let message = if e.is_unauthorized() {
                            "Invalid username or password".to_string()
                        } else {
                            e.to_string()
                        };
                        error_message.set(Some(message));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
            <div class="mb-8 text-center">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                    {"Sign in"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Enter your credentials to continue"}
                </p>
            </div>

            <form onsubmit={on_submit} class="space-y-6">
                if let Some(error) = &*error_message {
                    <div class={styles::ERROR_BOX}>
                        <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                    </div>
                }

                <div>
                    <label for="username" class={styles::LABEL}>
                        {"Username"}
                    </label>
                    <input
                        ref={username_ref}
                        type="text"
                        id="username"
                        name="username"
                        autocomplete="username"
                        required={true}
                        class={styles::INPUT}
                        placeholder="Enter your username"
                    />
                </div>

                <div>
                    <label for="password" class={styles::LABEL}>
                        {"Password"}
                    </label>
                    <input
                        ref={password_ref}
                        type="password"
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        required={true}
                        class={styles::INPUT}
                        placeholder="Enter your password"
                    />
                </div>

                <button
                    type="submit"
                    disabled={*is_loading}
                    class={classes!(styles::BUTTON_PRIMARY, "w-full", "flex", "justify-center")}
                >
                    if *is_loading {
                        {"Signing in..."}
                    } else {
                        {"Sign in"}
                    }
                </button>
            </form>

            if props.show_dev_credentials {
                <div class="mt-6 text-center">
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {"Development credentials: admin / admin"}
                    </p>
                </div>
            }
        </div>
    }
}
