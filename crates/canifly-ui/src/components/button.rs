//! Button Components
//!
//! - Primary: main actions
//! - Danger: destructive actions (delete plan, remove account)
//! - Ghost: low-emphasis actions (cancel, expand)
//! - Badge: status chips that are also clickable

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Danger,
    Ghost,
    Badge,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Badge => "btn-badge",
        }
    }
}

/// Join a base class with optional extra classes
pub fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|e| !e.is_empty()) {
        Some(extra) => format!("{} {}", base, extra),
        None => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Tooltip and accessible label
    #[props(default)]
    pub title: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Danger,
///         onclick: move |_| delete_plan(),
///         "Delete"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());
    let title = props.title.clone().unwrap_or_default();

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            title: "{title}",
            "aria-label": "{title}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact row actions (copy, delete, expand)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub children: Element,
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_classes("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            title: "{props.aria_label}",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Danger.class(), "btn-danger");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
        assert_eq!(ButtonVariant::Badge.class(), "btn-badge");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn join_classes_skips_blank_extra() {
        assert_eq!(join_classes("icon-btn", None), "icon-btn");
        assert_eq!(join_classes("icon-btn", Some("  ")), "icon-btn");
        assert_eq!(join_classes("icon-btn", Some("danger")), "icon-btn danger");
    }
}
