use std::rc::Rc;
use dioxus::prelude::*;
use crate::configs::SiteConfig;
use crate::utils::current_year;

#[component]
pub fn Footer() -> Element {
    let site = use_context::<Rc<SiteConfig>>();
    let year = current_year();

    rsx! {
        footer { class: "footer",
            div { class: "container footer-inner",
                p {
                    "© "
                    span { id: "year", "{year}" }
                    " {site.owner}"
                }
                ul { class: "socials",
                    for social in site.socials.iter() {
                        li { key: "{social.url}",
                            a { href: "{social.url}", target: "_blank", rel: "noopener", "{social.label}" }
                        }
                    }
                }
            }
        }
    }
}
