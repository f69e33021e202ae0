//! Dashboard page, the authenticated landing route.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::state::session::SessionHandle;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    let greeting = move || match session.username() {
        Some(name) => format!("Welcome back, {name}."),
        None => "Welcome back.".to_owned(),
    };

    view! {
        <PageShell title="Dashboard".to_owned()>
            <p class="dashboard__greeting">{greeting}</p>
            <Show when=move || session.is_admin()>
                <p class="dashboard__hint">"You are signed in as an administrator."</p>
            </Show>
        </PageShell>
    }
}
