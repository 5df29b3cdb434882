//! Showcase App
//!
//! Sidebar navigation plus a page of component demos.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_navtree::{MenuItem, SidebarMenu};
use reactive_stores::Store;

use crate::browser;
use crate::components::{Button, ButtonSize, ButtonVariant, Input, InputType, Toast, ToastContainer};
use crate::config::{FooterLink, ShowcaseConfig};
use crate::context::{use_app_context, AppContext};
use crate::markdown::parse_markdown;
use crate::models::{ToastKind, ToastPosition};
use crate::store::{store_toggle_menu, use_showcase_store, ShowcaseState, ShowcaseStateStoreFields};
use crate::validation::email_error;

const API_KEY: &str = "sk_live_1234567890abcdef";

const USAGE_DOC: &str = r##"Add the crates next to Leptos:

```toml
[dependencies]
leptos = { version = "0.8", features = ["csr"] }
leptos-navtree = { path = "crates/leptos-navtree" }
```

Then render a menu:

```rust
use leptos_navtree::{MenuItem, SidebarMenu};

view! {
    <SidebarMenu
        items=vec![MenuItem::new("home", "Home")]
        on_item_click=move |item: MenuItem| log::info!("{}", item.label)
    />
}
```
"##;

#[component]
pub fn App(config: ShowcaseConfig) -> impl IntoView {
    let ShowcaseConfig {
        title,
        sidebar,
        toast,
        menu,
        footer_links,
        ..
    } = config;

    let store = Store::new(ShowcaseState {
        menu_collapsed: sidebar.collapsed,
        ..Default::default()
    });
    provide_context(store);
    let ctx = AppContext::new(store, toast.auto_close_ms);
    provide_context(ctx);

    let collapsed = Signal::derive(move || store.menu_collapsed().get());

    let handle_menu_click = Callback::new(move |item: MenuItem| {
        browser::log_object("Menu item clicked:", &item);
        ctx.notify(ToastKind::Info, format!("{} clicked", item.label));
    });

    view! {
        <div class="app">
            <SidebarMenu
                items=menu
                title=title.clone()
                collapsed=collapsed
                default_active_id=sidebar.default_active_id
                show_dividers=sidebar.show_dividers
                on_item_click=handle_menu_click
            />

            <main class="main-content">
                <div class="hero-section">
                    <h1>{title}</h1>
                    <p class="subtitle">
                        "A collection of reusable Leptos components built with Rust and WebAssembly"
                    </p>
                    <Button
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Small
                        on_click=Callback::new(move |_: ()| store_toggle_menu(&store))
                    >
                        {move || if collapsed.get() { "Expand menu" } else { "Collapse menu" }}
                    </Button>
                </div>

                <div class="components-showcase">
                    <ButtonSection />
                    <InputSection />
                    <UsageSection />
                </div>

                <Footer links=footer_links />
            </main>

            <ToastStack position=toast.position auto_close=toast.auto_close_ms />
        </div>
    }
}

/// One titled demo tile
#[component]
fn DemoCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="component-demo">
            <h3>{title}</h3>
            {children()}
        </div>
    }
}

#[component]
fn ButtonSection() -> impl IntoView {
    view! {
        <section class="component-section">
            <h2>"Button Components"</h2>
            <p class="section-description">"Buttons with various styles, sizes, and states"</p>

            <div class="component-grid">
                <DemoCard title="Variants">
                    <div class="demo-group">
                        <Button variant=ButtonVariant::Primary>"Primary"</Button>
                        <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                        <Button variant=ButtonVariant::Success>"Success"</Button>
                        <Button variant=ButtonVariant::Danger>"Danger"</Button>
                        <Button variant=ButtonVariant::Warning>"Warning"</Button>
                    </div>
                </DemoCard>

                <DemoCard title="Sizes">
                    <div class="demo-group">
                        <Button size=ButtonSize::Small>"Small"</Button>
                        <Button size=ButtonSize::Medium>"Medium"</Button>
                        <Button size=ButtonSize::Large>"Large"</Button>
                    </div>
                </DemoCard>

                <DemoCard title="States">
                    <div class="demo-group">
                        <Button loading=true>"Loading..."</Button>
                        <Button disabled=true>"Disabled"</Button>
                        <Button full_width=true>"Full Width"</Button>
                    </div>
                </DemoCard>

                <DemoCard title="Button with icon">
                    <div class="demo-group">
                        <Button
                            icon_left="📎"
                            on_click=Callback::new(|_: ()| log::info!("[Showcase] Attach clicked"))
                        >
                            "Attach File"
                        </Button>
                        <Button
                            icon_right="→"
                            on_click=Callback::new(|_: ()| log::info!("[Showcase] Continue clicked"))
                        >
                            "Next Page"
                        </Button>
                    </div>
                </DemoCard>
            </div>
        </section>
    }
}

#[component]
fn InputSection() -> impl IntoView {
    let ctx = use_app_context();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let email_message = Signal::derive(move || email_error(&username.get()));

    let copy_api_key = Callback::new(move |_: ()| {
        spawn_local(async move {
            match browser::copy_to_clipboard(API_KEY).await {
                Ok(()) => ctx.notify(ToastKind::Success, "API Key copied to clipboard!"),
                Err(e) => {
                    log::warn!("[Showcase] Clipboard write failed: {}", e);
                    ctx.notify(ToastKind::Error, "Failed to copy to clipboard");
                }
            }
        });
    });

    view! {
        <section class="component-section">
            <h2>"Smart Input Components"</h2>
            <p class="section-description">
                "Input fields with advanced features like password toggle, clear button, and validation"
            </p>

            <div class="component-grid">
                <DemoCard title="Text Input">
                    <Input
                        label="Username"
                        placeholder="Enter your username"
                        value=username
                        on_change=Callback::new(move |v: String| set_username.set(v))
                        clearable=true
                    />
                    <p class="demo-value">"Value: " {move || username.get()}</p>
                </DemoCard>

                <DemoCard title="Password Input">
                    <Input
                        input_type=InputType::Password
                        label="Password"
                        placeholder="Enter your password"
                        value=password
                        on_change=Callback::new(move |v: String| set_password.set(v))
                        show_password_toggle=true
                    />
                </DemoCard>

                <DemoCard title="Email with Validation">
                    <Input
                        input_type=InputType::Email
                        label="Email Address"
                        placeholder="user@example.com"
                        error=email_message
                        value=username
                        on_change=Callback::new(move |v: String| set_username.set(v))
                        clearable=true
                    />
                </DemoCard>

                <DemoCard title="Disabled Input">
                    <Input
                        label="Disabled Field"
                        placeholder="This input is disabled"
                        value="Cannot edit this".to_string()
                        disabled=true
                    />
                </DemoCard>

                <DemoCard title="With Helper Text">
                    <Input
                        label="Phone Number"
                        placeholder="+1 (555) 123-4567"
                        helper_text="Enter with country code"
                    />
                </DemoCard>

                <DemoCard title="With Prefix & Suffix">
                    <Input label="Price" placeholder="0.00" prefix="$" suffix="USD" />
                </DemoCard>
            </div>

            <div class="component-grid" style="margin-top: 20px;">
                <DemoCard title="Input with Error">
                    <Input
                        label="Email with Error"
                        placeholder="invalid-email"
                        error="Please enter a valid email address".to_string()
                        value="invalid-email".to_string()
                    />
                </DemoCard>

                <DemoCard title="Required Field">
                    <Input label="Required Field" placeholder="This field is required" required=true />
                </DemoCard>

                <DemoCard title="Number Input">
                    <Input input_type=InputType::Number label="Quantity" placeholder="Enter quantity" />
                </DemoCard>

                <DemoCard title="Search Input">
                    <Input input_type=InputType::Search label="Search" placeholder="Search..." clearable=true />
                </DemoCard>

                <DemoCard title="Phone Input">
                    <Input input_type=InputType::Tel label="Phone" placeholder="+1 234 567 8900" />
                </DemoCard>

                <DemoCard title="Read-only Value with Copy">
                    <Input
                        label="API Key"
                        value=API_KEY.to_string()
                        read_only=true
                        helper_text="Click to copy"
                        on_click=copy_api_key
                    />
                </DemoCard>
            </div>
        </section>
    }
}

#[component]
fn UsageSection() -> impl IntoView {
    view! {
        <section class="component-section">
            <h2>"Installation & Usage"</h2>
            <div class="code-block" inner_html=parse_markdown(USAGE_DOC)></div>
        </section>
    }
}

#[component]
fn Footer(links: Vec<FooterLink>) -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Built with Leptos and WebAssembly"</p>
            <div class="footer-links">
                {links
                    .into_iter()
                    .map(|link| {
                        let url = link.url.clone();
                        view! {
                            <Button
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Small
                                on_click=Callback::new(move |_: ()| {
                                    if let Err(e) = browser::open_in_new_tab(&url) {
                                        log::warn!("[Showcase] Could not open {}: {}", url, e);
                                    }
                                })
                            >
                                {link.label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}

/// Renders the queued toasts from the store
#[component]
fn ToastStack(position: ToastPosition, auto_close: Option<u32>) -> impl IntoView {
    let store = use_showcase_store();
    let ctx = use_app_context();

    view! {
        <ToastContainer position=position>
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <Toast
                            kind=toast.kind
                            message=toast.message
                            position=position
                            auto_close=auto_close
                            on_close=Callback::new(move |_: ()| ctx.dismiss(id))
                        />
                    }
                }
            />
        </ToastContainer>
    }
}
