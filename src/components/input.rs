//! Input Component
//!
//! Text field with label, clear button, password visibility toggle,
//! prefix/suffix adornments and an error or helper line.

use leptos::prelude::*;

const CLEAR_PATH: &str = "M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z";
const EYE_PATH: &str = "M12 4.5C7 4.5 2.73 7.61 1 12c1.73 4.39 6 7.5 11 7.5s9.27-3.11 11-7.5c-1.73-4.39-6-7.5-11-7.5zM12 17c-2.76 0-5-2.24-5-5s2.24-5 5-5 5 2.24 5 5-2.24 5-5 5zm0-8c-1.66 0-3 1.34-3 3s1.34 3 3 3 3-1.34 3-3-1.34-3-3-3z";
const EYE_OFF_PATH: &str = "M12 7c2.76 0 5 2.24 5 5 0 .65-.13 1.26-.36 1.83l2.92 2.92c1.51-1.26 2.7-2.89 3.43-4.75-1.73-4.39-6-7.5-11-7.5-1.4 0-2.74.25-3.98.7l2.16 2.16C10.74 7.13 11.35 7 12 7zM2 4.27l2.28 2.28.46.46C3.08 8.3 1.78 10.02 1 12c1.73 4.39 6 7.5 11 7.5 1.55 0 3.03-.3 4.38-.84l.42.42L19.73 22 21 20.73 3.27 3 2 4.27zM7.53 9.8l1.55 1.55c-.05.21-.08.43-.08.65 0 1.66 1.34 3 3 3 .22 0 .44-.03.65-.08l1.55 1.55c-.67.33-1.41.53-2.2.53-2.76 0-5-2.24-5-5 0-.79.2-1.53.53-2.2zm4.31-.78l3.15 3.15.02-.16c0-1.66-1.34-3-3-3l-.17.01z";

/// Length of the random part of generated ids
const ID_SUFFIX_LEN: usize = 9;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Tel,
    Search,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Number => "number",
            InputType::Tel => "tel",
            InputType::Search => "search",
        }
    }

    /// Type attribute actually rendered; a revealed password is plain text
    pub fn effective(&self, toggle_enabled: bool, password_visible: bool) -> &'static str {
        if *self == InputType::Password && toggle_enabled && password_visible {
            "text"
        } else {
            self.as_str()
        }
    }
}

pub fn shows_clear_button(clearable: bool, value: &str, disabled: bool) -> bool {
    clearable && !value.is_empty() && !disabled
}

pub fn shows_suffix(has_suffix: bool, clear_visible: bool, kind: InputType) -> bool {
    has_suffix && !clear_visible && kind != InputType::Password
}

/// Error wins over helper text; `None` when both are empty
pub fn message_line<'a>(error: &'a str, helper_text: &'a str) -> Option<&'a str> {
    if !error.is_empty() {
        Some(error)
    } else if !helper_text.is_empty() {
        Some(helper_text)
    } else {
        None
    }
}

/// Base-36 digits of a fraction in [0, 1)
fn base36_suffix(mut fraction: f64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut out = String::with_capacity(ID_SUFFIX_LEN);
    for _ in 0..ID_SUFFIX_LEN {
        fraction *= 36.0;
        let digit = (fraction.floor() as usize).min(35);
        out.push(DIGITS[digit] as char);
        fraction -= digit as f64;
    }
    out
}

fn generate_id() -> String {
    format!("input-{}", base36_suffix(js_sys::Math::random()))
}

#[component]
pub fn Input(
    #[prop(optional)] input_type: InputType,
    #[prop(into, default = Signal::stored(String::new()))] value: Signal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] disabled: bool,
    #[prop(into, default = Signal::stored(String::new()))] error: Signal<String>,
    #[prop(optional, into)] helper_text: String,
    #[prop(optional, into)] label: String,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] clearable: bool,
    #[prop(optional)] show_password_toggle: Option<bool>,
    #[prop(optional, into)] prefix: Option<String>,
    #[prop(optional, into)] suffix: Option<String>,
    #[prop(optional, into)] on_change: Option<Callback<String>>,
    #[prop(optional, into)] on_focus: Option<Callback<()>>,
    #[prop(optional, into)] on_blur: Option<Callback<()>>,
    #[prop(optional)] read_only: bool,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let current = RwSignal::new(value.get_untracked());
    let (focused, set_focused) = signal(false);
    let (password_visible, set_password_visible) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Follow the caller's value when it changes
    Effect::new(move |_| current.set(value.get()));

    let toggle_enabled = show_password_toggle.unwrap_or(input_type == InputType::Password);
    let input_id = id.unwrap_or_else(generate_id);
    let helper = StoredValue::new(helper_text);
    let has_suffix = suffix.is_some();

    let clear_visible = move || current.with(|v| shows_clear_button(clearable, v, disabled));

    let emit_change = move |next: String| {
        current.set(next.clone());
        if let Some(on_change) = on_change {
            on_change.run(next);
        }
    };

    let handle_clear = move |_| {
        emit_change(String::new());
        if let Some(input) = input_ref.get() {
            if let Err(e) = input.focus() {
                log::debug!("[Input] Refocus after clear failed: {:?}", e);
            }
        }
    };

    let container_class = move || {
        let mut c = String::from("input-container");
        if focused.get() {
            c.push_str(" input-container--focused");
        }
        if error.with(|e| !e.is_empty()) {
            c.push_str(" input-container--error");
        }
        if disabled {
            c.push_str(" input-container--disabled");
        }
        c
    };

    let wrapper_class = if class.is_empty() {
        "input-wrapper".to_string()
    } else {
        format!("input-wrapper {}", class)
    };

    let message = move || {
        let error = error.get();
        helper.with_value(|helper| {
            message_line(&error, helper).map(|text| {
                let class = if error.is_empty() { "input-message" } else { "input-message input-message--error" };
                view! { <div class=class>{text.to_string()}</div> }
            })
        })
    };

    view! {
        <div class=wrapper_class>
            {(!label.is_empty()).then(|| view! {
                <label for=input_id.clone() class="input-label">
                    {label.clone()}
                    {required.then(|| view! { <span class="input-required">"*"</span> })}
                </label>
            })}

            <div class=container_class>
                {prefix.map(|prefix| view! { <span class="input-prefix">{prefix}</span> })}
                <input
                    node_ref=input_ref
                    id=input_id.clone()
                    type=move || input_type.effective(toggle_enabled, password_visible.get())
                    prop:value=move || current.get()
                    placeholder=placeholder
                    disabled=disabled
                    required=required
                    readonly=read_only
                    class="input-field"
                    on:input=move |ev| emit_change(event_target_value(&ev))
                    on:focus=move |_| {
                        set_focused.set(true);
                        if let Some(on_focus) = on_focus {
                            on_focus.run(());
                        }
                    }
                    on:blur=move |_| {
                        set_focused.set(false);
                        if let Some(on_blur) = on_blur {
                            on_blur.run(());
                        }
                    }
                    on:click=move |_| {
                        if let Some(on_click) = on_click {
                            on_click.run(());
                        }
                    }
                />

                <div class="input-suffix-container">
                    <Show when=clear_visible>
                        <button type="button" class="input-clear-button" aria-label="Clear input" on:click=handle_clear>
                            <svg class="input-clear-icon" viewBox="0 0 24 24">
                                <path d=CLEAR_PATH />
                            </svg>
                        </button>
                    </Show>

                    {(input_type == InputType::Password && toggle_enabled).then(|| view! {
                        <button
                            type="button"
                            class="input-password-toggle"
                            aria-label=move || if password_visible.get() { "Hide password" } else { "Show password" }
                            on:click=move |_| set_password_visible.update(|v| *v = !*v)
                        >
                            <svg
                                class=move || if password_visible.get() { "input-eye-icon" } else { "input-eye-off-icon" }
                                viewBox="0 0 24 24"
                            >
                                <path d=move || if password_visible.get() { EYE_PATH } else { EYE_OFF_PATH } />
                            </svg>
                        </button>
                    })}

                    {suffix.map(|suffix| view! {
                        <Show when=move || shows_suffix(has_suffix, clear_visible(), input_type)>
                            <span class="input-suffix">{suffix.clone()}</span>
                        </Show>
                    })}
                </div>
            </div>

            {message}
        </div>
    }
}
