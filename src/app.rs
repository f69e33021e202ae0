//! Root application component with context providers and routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::hash_router::HashRouter;
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::router::Navigator;
use crate::state::session::SessionHandle;
use crate::util::storage::AppStorage;

/// Root application component.
///
/// Restores the session from storage, builds the one API client on top of
/// it, and provides both to every page along with the navigator.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionHandle::restore(AppStorage::default());
    let navigator = Navigator::from_window();
    let api = ApiClient::new(ApiConfig::load(), session);

    provide_context(session);
    provide_context(navigator);
    provide_context(api);

    view! {
        <Title text="IFMS"/>
        <HashRouter/>
    }
}
