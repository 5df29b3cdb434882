//! Button Component
//!
//! Styled button with variants, sizes, loading spinner and optional icons.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Success,
    Warning,
}

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Danger => "danger",
            ButtonVariant::Success => "success",
            ButtonVariant::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }
}

/// HTML `type` attribute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Visual and behavioural flags of a button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonLook {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub loading: bool,
    pub full_width: bool,
}

impl ButtonLook {
    pub fn class(&self, extra: &str) -> String {
        let mut parts = vec![
            "button".to_string(),
            format!("button--{}", self.variant.as_str()),
            format!("button--{}", self.size.as_str()),
        ];
        if self.disabled {
            parts.push("button--disabled".into());
        }
        if self.loading {
            parts.push("button--loading".into());
        }
        if self.full_width {
            parts.push("button--full-width".into());
        }
        if !extra.is_empty() {
            parts.push(extra.to_string());
        }
        parts.join(" ")
    }

    /// Native `disabled` attribute
    pub fn inert(&self) -> bool {
        self.disabled || self.loading
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] button_type: ButtonType,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] loading: bool,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] icon_left: Option<String>,
    #[prop(optional, into)] icon_right: Option<String>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let look = ButtonLook { variant, size, disabled, loading, full_width };

    let handle_click = move |_| {
        if look.inert() {
            return;
        }
        if let Some(on_click) = on_click {
            on_click.run(());
        }
    };

    view! {
        <button
            class=look.class(&class)
            disabled=look.inert()
            type=button_type.as_str()
            on:click=handle_click
        >
            {loading.then(|| view! {
                <span class="button__loader">
                    <svg class="button__spinner" viewBox="0 0 50 50">
                        <circle class="button__spinner-path" cx="25" cy="25" r="20" fill="none" stroke-width="5" />
                    </svg>
                </span>
            })}
            {icon_left.filter(|_| !loading).map(|icon| view! { <span class="button__icon-left">{icon}</span> })}
            <span class="button__content">{children()}</span>
            {icon_right.filter(|_| !loading).map(|icon| view! { <span class="button__icon-right">{icon}</span> })}
        </button>
    }
}
