//! Route-level shells for the item, feedback, and admin screens.
//!
//! Each page renders its title and route parameter inside the shared shell.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;

#[component]
pub fn ItemCreatePage() -> impl IntoView {
    view! { <PageShell title="New item".to_owned()/> }
}

#[component]
pub fn ItemDetailPage(id: String) -> impl IntoView {
    let title = format!("Item #{id}");
    view! {
        <PageShell title=title>
            <p class="page__meta">"Item id: " {id}</p>
        </PageShell>
    }
}

#[component]
pub fn FeedbackPage(item_id: String) -> impl IntoView {
    let title = format!("Feedback for item #{item_id}");
    view! {
        <PageShell title=title>
            <p class="page__meta">"Item id: " {item_id}</p>
        </PageShell>
    }
}

#[component]
pub fn TodoPage() -> impl IntoView {
    view! { <PageShell title="To-do".to_owned()/> }
}

#[component]
pub fn StatsPage() -> impl IntoView {
    view! { <PageShell title="Statistics".to_owned()/> }
}

#[component]
pub fn LogsPage() -> impl IntoView {
    view! { <PageShell title="Operation log".to_owned()/> }
}

#[component]
pub fn GroupsPage() -> impl IntoView {
    view! { <PageShell title="Groups".to_owned()/> }
}
