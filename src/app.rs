use std::sync::Arc;

use canifly_core::{AccountCapability, AppData, AppStore, SkillPlanCapability, TracingSink};
use dioxus::prelude::*;

use crate::clipboard::SystemClipboard;
use crate::components::{BoundarySink, ErrorBoundary, Footer};
use crate::context::{get_config, SharedStore};
use crate::pages::{Accounts, SkillPlans};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Account cards with their characters
/// - `/skill-plans` - Skill plan table
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Accounts {},
    #[route("/skill-plans")]
    SkillPlans {},
}

/// Root application component.
///
/// Owns the store, provides it and its capability objects as context, and
/// mirrors every store revision into a signal the pages read.
#[component]
pub fn App() -> Element {
    let store: SharedStore = use_hook(|| Arc::new(AppStore::new(Arc::new(SystemClipboard))));
    let mut data: Signal<Option<AppData>> = use_signal(|| None);
    // Written from store listeners, which must be Send + Sync
    let revision = use_signal_sync(|| 0u64);

    use_context_provider(|| data);
    use_context_provider(|| BoundarySink(Arc::new(TracingSink)));
    use_context_provider(|| AccountCapability::new(store.clone()));
    use_context_provider(|| SkillPlanCapability::new(store.clone()));

    use_hook({
        let store = store.clone();
        move || {
            store.subscribe(move |rev| {
                let mut revision = revision;
                revision.set(rev);
            });
        }
    });

    // Refresh the snapshot on every revision
    use_effect({
        let store = store.clone();
        move || {
            let rev = *revision.read();
            tracing::debug!(revision = rev, "Refreshing data snapshot");
            data.set(store.snapshot());
        }
    });

    // Load the data file on mount
    use_effect({
        let store = store.clone();
        move || {
            let Some(path) = get_config().data_file else {
                tracing::info!("No data file given, waiting for data");
                return;
            };
            let store = store.clone();
            spawn(async move {
                let path_display = path.display().to_string();
                match tokio::task::spawn_blocking(move || store.load_file(&path)).await {
                    Ok(Ok(())) => tracing::info!(path = %path_display, "Data file loaded"),
                    Ok(Err(e)) => tracing::error!(path = %path_display, "Failed to load data file: {}", e),
                    Err(e) => tracing::error!("Data load task failed: {}", e),
                }
            });
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        ErrorBoundary {
            name: "root",
            Router::<Route> {}
        }
    }
}

/// Navigation, page outlet and footer around every route.
#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "app-shell",
            nav { class: "app-nav",
                span { class: "app-nav__brand", "CanIFly" }
                Link { to: Route::Accounts {}, active_class: "active", "Accounts" }
                Link { to: Route::SkillPlans {}, active_class: "active", "Skill Plans" }
            }
            main { class: "app-main",
                ErrorBoundary {
                    name: "page",
                    Outlet::<Route> {}
                }
            }
            Footer {}
        }
    }
}
