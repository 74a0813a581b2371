//! Account card component.
//!
//! Shows one account with its status badge and characters. The only local
//! state is the rename buffer in [`AccountCardState`]; every change is an
//! [`AccountCardAction`] dispatched to the injected [`AccountCapability`].
//!
//! ## Components
//!
//! - [`AccountCard`] - Header with name, status and remove, plus characters
//! - [`CharacterRow`] - One character with role selector, MCT flag and remove

use canifly_core::{
    format_skill_points, role_options, status_class, Account, AccountCapability,
    AccountCardAction, AccountCardState, CharacterIdentity, CharacterUpdate,
};
use canifly_ui::{Button, ButtonVariant, IconButton};
use dioxus::prelude::*;

/// One account with its characters.
///
/// # Props
///
/// * `account` - The account to display, never mutated here
/// * `roles` - Configured role names for the role selectors
/// * `actions` - Owner that receives every change
#[component]
pub fn AccountCard(account: Account, roles: Vec<String>, actions: AccountCapability) -> Element {
    let mut state = use_signal(AccountCardState::new);

    let account_id = account.id;
    let dispatch = use_callback(move |action: AccountCardAction| {
        action.dispatch(account_id, &*actions)
    });

    let commit = use_callback({
        let account = account.clone();
        move |()| {
            let action = state.write().confirm(&account);
            if let Some(action) = action {
                dispatch.call(action);
            }
        }
    });

    let current_name = account.name.clone();
    let status_label = account.status.as_str().to_string();
    let badge_class = status_class(&account.status).to_string();
    let editing = state.read().is_editing();
    let buffer = state.read().buffer().unwrap_or_default().to_string();

    rsx! {
        div { class: "account-card",
            div { class: "account-card__header",
                if editing {
                    input {
                        class: "account-card__rename",
                        value: "{buffer}",
                        autofocus: true,
                        oninput: move |e| state.write().set_buffer(e.value()),
                        onkeydown: move |evt: KeyboardEvent| match evt.key() {
                            Key::Enter => commit.call(()),
                            Key::Escape => state.write().cancel(),
                            _ => {}
                        },
                    }
                    IconButton {
                        aria_label: "Save name",
                        onclick: move |_| commit.call(()),
                        "\u{2713}"
                    }
                    IconButton {
                        aria_label: "Cancel rename",
                        onclick: move |_| state.write().cancel(),
                        "\u{00D7}"
                    }
                } else {
                    h3 { class: "account-card__name", "{account.name}" }
                    IconButton {
                        aria_label: "Rename account",
                        onclick: move |_| state.write().begin_edit(&current_name),
                        "\u{270E}"
                    }
                }
                Button {
                    variant: ButtonVariant::Badge,
                    class: "{badge_class}",
                    title: "Toggle Alpha/Omega",
                    onclick: move |_| dispatch.call(AccountCardAction::ToggleStatus),
                    "{status_label}"
                }
                IconButton {
                    aria_label: "Remove account",
                    class: "danger",
                    onclick: move |_| dispatch.call(AccountCardAction::RemoveAccount),
                    "\u{1F5D1}"
                }
            }
            if account.characters.is_empty() {
                p { class: "empty-state", "No characters" }
            } else {
                ul { class: "character-list",
                    for (index, identity) in account.characters.iter().enumerate() {
                        CharacterRow {
                            key: "{index}-{identity.id()}",
                            identity: identity.clone(),
                            roles: roles.clone(),
                            on_update: {
                                let id = identity.id();
                                move |update: CharacterUpdate| dispatch.call(AccountCardAction::UpdateCharacter(id, update))
                            },
                            on_remove: {
                                let id = identity.id();
                                move |_: ()| dispatch.call(AccountCardAction::RemoveCharacter(id))
                            },
                        }
                    }
                }
            }
        }
    }
}

/// One character inside an account card.
///
/// The role selector is hidden when no roles are configured.
///
/// # Props
///
/// * `identity` - Character plus its role and MCT flag
/// * `roles` - Configured role names
/// * `on_update` - Called with a partial update (role or MCT)
/// * `on_remove` - Called when the remove button is clicked
#[component]
pub fn CharacterRow(
    identity: CharacterIdentity,
    roles: Vec<String>,
    on_update: EventHandler<CharacterUpdate>,
    on_remove: EventHandler<()>,
) -> Element {
    let options = role_options(&roles, &identity.role);
    let sp = format_skill_points(identity.character.total_sp);
    let mct = identity.mct;
    let current_role = identity.role.clone();

    rsx! {
        li { class: "character-row",
            span { class: "character-row__name", "{identity.name()}" }
            span { class: "character-row__sp", "{sp} SP" }
            if !options.is_empty() {
                select {
                    "aria-label": "Role",
                    onchange: move |e| on_update.call(CharacterUpdate::role(e.value())),
                    if current_role.is_empty() {
                        option { value: "", selected: true, disabled: true, "Select role" }
                    }
                    for role in options {
                        option {
                            key: "{role}",
                            value: "{role}",
                            selected: role == current_role,
                            "{role}"
                        }
                    }
                }
            }
            label { class: "character-row__mct",
                input {
                    r#type: "checkbox",
                    checked: mct,
                    onchange: move |_| on_update.call(CharacterUpdate::mct(!mct)),
                }
                "MCT"
            }
            IconButton {
                aria_label: "Remove character",
                class: "danger",
                onclick: move |_| on_remove.call(()),
                "\u{00D7}"
            }
        }
    }
}
