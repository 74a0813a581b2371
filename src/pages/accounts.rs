//! Accounts page: one card per account.

use canifly_ui::{SkeletonKind, SkeletonLoader};
use dioxus::prelude::*;

use crate::components::AccountCard;
use crate::context::{use_account_actions, use_app_data};

#[component]
pub fn Accounts() -> Element {
    let data = use_app_data();
    let actions = use_account_actions();

    let Some(data) = data() else {
        return rsx! {
            h2 { class: "page-title", "Accounts" }
            SkeletonLoader { count: 3, kind: SkeletonKind::Card }
        };
    };

    rsx! {
        h2 { class: "page-title", "Accounts" }
        if data.accounts.is_empty() {
            p { class: "empty-state", "No accounts yet" }
        } else {
            div { class: "account-grid",
                for (index, account) in data.accounts.iter().enumerate() {
                    AccountCard {
                        key: "{index}-{account.id}",
                        account: account.clone(),
                        roles: data.roles.clone(),
                        actions: actions.clone(),
                    }
                }
            }
        }
    }
}
