//! Application footer.

use dioxus::prelude::*;

pub const APP_NAME: &str = "CanIFly";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "app-footer",
            "{APP_NAME} v{APP_VERSION}"
        }
    }
}
