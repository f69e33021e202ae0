//! Login page: exchanges username + password for a session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::error::ClientError;
use crate::net::api::ApiClient;
use crate::net::types::LoginRequest;
use crate::router::Navigator;
use crate::state::session::SessionHandle;

const MISSING_CREDENTIALS: &str = "Enter both username and password.";

/// Trim the username and require both fields. Passwords are sent untouched.
fn validate_login_input(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

fn login_failed_message(err: &ClientError) -> String {
    format!("Login failed: {}", err.user_message())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let navigator = expect_context::<Navigator>();
    let api = expect_context::<ApiClient>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.login(&credentials).await {
                    Ok(response) => {
                        session.set_session(&response);
                        info.set(String::new());
                        navigator.push("/");
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        info.set(login_failed_message(&e));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, credentials, session, navigator);
            info.set(login_failed_message(&ClientError::Unavailable));
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"IFMS"</h1>
                <p class="login-card__subtitle">"Item & Feedback Management"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
