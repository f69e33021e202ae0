//! Route outlet driven by the URL hash.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by `App`. Listens for `hashchange`, runs the navigation guard
//! against the shared session, and renders the view the table resolves.

#[cfg(test)]
#[path = "hash_router_test.rs"]
mod hash_router_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::sections::{
    FeedbackPage, GroupsPage, ItemCreatePage, ItemDetailPage, LogsPage, StatsPage, TodoPage,
};
use crate::router::Navigator;
use crate::router::guard::{Navigation, before_each};
use crate::router::table::{RouteMatch, View, resolve};
use crate::state::session::SessionHandle;

/// Redirect whenever the guard rejects the current location.
///
/// Re-runs on every location change and on every login/logout.
pub fn install_navigation_guard(session: SessionHandle, navigator: Navigator) {
    Effect::new(move || {
        enforce_guard(session, navigator);
    });
}

/// Run the guard once against the current location, redirecting if it
/// refuses. Reads both signals tracked.
fn enforce_guard(session: SessionHandle, navigator: Navigator) -> Navigation {
    let path = navigator.location().with(|loc| loc.path.clone());
    let decision = before_each(&path, session.is_logged_in());
    if let Navigation::Redirect(target) = decision {
        navigator.replace(target);
    }
    decision
}

#[component]
pub fn HashRouter() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let navigator = expect_context::<Navigator>();

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::hashchange, move |_| navigator.sync_from_window());
        on_cleanup(move || handle.remove());
    }

    install_navigation_guard(session, navigator);

    let location = navigator.location();
    let outlet = move || {
        let path = location.with(|loc| loc.path.clone());
        // Render nothing while a redirect is pending.
        if before_each(&path, session.is_logged_in()) != Navigation::Proceed {
            return ().into_any();
        }
        match resolve(&path) {
            Some(matched) => render_route(&matched),
            None => "Page not found.".into_any(),
        }
    };

    view! { <main class="app-main">{outlet}</main> }
}

fn render_route(matched: &RouteMatch) -> AnyView {
    let param = |name: &str| matched.param(name).unwrap_or_default().to_owned();
    match matched.view {
        View::Login => view! { <LoginPage/> }.into_any(),
        View::Dashboard => view! { <DashboardPage/> }.into_any(),
        View::ItemCreate => view! { <ItemCreatePage/> }.into_any(),
        View::ItemDetail => {
            let id = param("id");
            view! { <ItemDetailPage id=id/> }.into_any()
        }
        View::Feedback => {
            let item_id = param("itemId");
            view! { <FeedbackPage item_id=item_id/> }.into_any()
        }
        View::Todo => view! { <TodoPage/> }.into_any(),
        View::Stats => view! { <StatsPage/> }.into_any(),
        View::Logs => view! { <LogsPage/> }.into_any(),
        View::Groups => view! { <GroupsPage/> }.into_any(),
    }
}
