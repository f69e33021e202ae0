//! Common chrome for authenticated pages: navigation, user badge, logout.

#[cfg(test)]
#[path = "page_shell_test.rs"]
mod page_shell_test;

use leptos::prelude::*;

use crate::router::Navigator;
use crate::router::guard::LOGIN_PATH;
use crate::router::location::HashLocation;
use crate::state::session::SessionHandle;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/item/create", "New item"),
    ("/todo", "To-do"),
    ("/stats", "Stats"),
    ("/logs", "Logs"),
    ("/groups", "Groups"),
];

fn nav_href(path: &str) -> String {
    HashLocation::parse(path).to_hash()
}

#[component]
pub fn PageShell(title: String, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let navigator = expect_context::<Navigator>();

    let on_logout = move |_| {
        session.clear_session();
        navigator.replace(LOGIN_PATH);
    };

    let links = NAV_LINKS
        .iter()
        .map(|(path, label)| view! { <a class="page-nav__link" href=nav_href(path)>{*label}</a> })
        .collect_view();

    view! {
        <div class="page">
            <header class="page-header">
                <nav class="page-nav">{links}</nav>
                <div class="page-header__user">
                    <span class="page-header__name">{move || session.username().unwrap_or_default()}</span>
                    <Show when=move || session.is_admin()>
                        <span class="page-header__badge">"admin"</span>
                    </Show>
                    <button class="page-header__logout" on:click=on_logout>"Log out"</button>
                </div>
            </header>
            <h1 class="page__title">{title}</h1>
            <section class="page__body">{children.map(|children| children())}</section>
        </div>
    }
}
