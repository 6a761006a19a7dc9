use std::rc::Rc;
use dioxus::prelude::*;
use portfolio::utils::dom::set_root_attribute;
use portfolio::{ LocalStore, Route, SiteConfig, ThemeState };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger setup failed: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let site = use_hook(|| {
        Rc::new(
            SiteConfig::load().unwrap_or_else(|e| {
                log::error!("{}; using fallback content", e);
                SiteConfig::fallback()
            })
        )
    });
    use_context_provider(|| site);

    let theme = use_signal(|| ThemeState::restore(&LocalStore::open()));
    use_context_provider(|| theme);

    use_effect(move || {
        let current = theme().theme;
        if let Err(e) = set_root_attribute("data-theme", current.as_str()) {
            log::warn!("Could not apply theme: {}", e);
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
