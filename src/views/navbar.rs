use std::rc::Rc;
use dioxus::prelude::*;
use crate::components::{ AnchorLink, Footer, ProgressBar, ThemeToggle };
use crate::configs::SiteConfig;
use crate::routes::Route;
use crate::utils::MenuState;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    let site = use_context::<Rc<SiteConfig>>();
    let mut menu = use_signal(MenuState::default);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        ProgressBar {}
        header { class: "site-header",
            nav { class: "nav container",
                AnchorLink { class: "brand", href: "#top", "{site.owner}" }
                button {
                    class: "nav-toggle",
                    r#type: "button",
                    "aria-controls": "nav-menu",
                    "aria-expanded": menu().aria_expanded(),
                    "aria-label": "Toggle navigation",
                    onclick: move |_| {
                        let open = menu.write().toggle();
                        log::debug!("Navigation menu {}", if open { "opened" } else { "closed" });
                    },
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
                ul {
                    id: "nav-menu",
                    class: menu().class(),
                    for section in site.sections.iter() {
                        li { key: "{section.id}",
                            AnchorLink { href: format!("#{}", section.id), "{section.title}" }
                        }
                    }
                }
                ThemeToggle {}
            }
        }
        Outlet::<Route> {}
        Footer {}
    }
}
