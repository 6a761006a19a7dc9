use std::rc::Rc;
use dioxus::prelude::*;
use crate::components::{ ContactForm, MagneticButton, TiltCard, Typing };
use crate::configs::SiteConfig;
use crate::utils::dom::{ RevealObserver, REVEAL_SELECTORS };

#[component]
pub fn Home() -> Element {
    let site = use_context::<Rc<SiteConfig>>();
    let mut reveal = use_signal(|| None::<RevealObserver>);

    // Runs once the sections are in the DOM; dropping the observer on
    // unmount disconnects it.
    use_effect(move || {
        match RevealObserver::observe_all(REVEAL_SELECTORS) {
            Ok(observer) => reveal.set(Some(observer)),
            Err(e) => log::warn!("Reveal animations disabled: {}", e),
        }
    });

    rsx! {
        main { id: "top",
            section { class: "hero container",
                p { class: "eyebrow", "Hi, I'm {site.owner}" }
                h1 { class: "hero-title",
                    "I'm a "
                    Typing { words: site.roles.clone() }
                    span { class: "caret", "aria-hidden": "true", "|" }
                }
                p { class: "hero-intro", "{site.intro}" }
                div { class: "hero-actions",
                    if site.section_title("projects").is_some() {
                        MagneticButton { href: "#projects", label: "See my work", primary: true }
                    }
                    if site.section_title("contact").is_some() {
                        MagneticButton { href: "#contact", label: "Get in touch" }
                    }
                }
            }

            if let Some(title) = site.section_title("about") {
                section { id: "about", class: "section container",
                    h2 { "{title}" }
                    div { class: "glass",
                        for paragraph in site.about.iter() {
                            p { "{paragraph}" }
                        }
                    }
                }
            }

            if let Some(title) = site.section_title("skills") {
                section { id: "skills", class: "section container",
                    h2 { "{title}" }
                    ul { class: "skills",
                        for skill in site.skills.iter() {
                            li { key: "{skill}", class: "skill", "{skill}" }
                        }
                    }
                }
            }

            if let Some(title) = site.section_title("projects") {
                section { id: "projects", class: "section container",
                    h2 { "{title}" }
                    div { class: "project-grid",
                        for project in site.projects.iter() {
                            TiltCard { key: "{project.title}", class: "project-card glass",
                                h3 { "{project.title}" }
                                p { "{project.summary}" }
                                ul { class: "tags",
                                    for tag in project.tags.iter() {
                                        li { class: "tag", "{tag}" }
                                    }
                                }
                                if let Some(link) = &project.link {
                                    a { class: "project-link", href: "{link}", target: "_blank", rel: "noopener", "View project" }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(title) = site.section_title("experience") {
                section { id: "experience", class: "section container",
                    h2 { "{title}" }
                    ol { class: "timeline",
                        for job in site.experience.iter() {
                            li { class: "item",
                                h3 { "{job.role} · {job.company}" }
                                span { class: "period", "{job.period}" }
                                p { "{job.summary}" }
                            }
                        }
                    }
                }
            }

            if let Some(title) = site.section_title("testimonials") {
                section { id: "testimonials", class: "section container",
                    h2 { "{title}" }
                    div { class: "testimonial-grid",
                        for testimonial in site.testimonials.iter() {
                            blockquote { class: "testimonial glass",
                                p { "“{testimonial.quote}”" }
                                cite { "{testimonial.author}" }
                            }
                        }
                    }
                }
            }

            if let Some(title) = site.section_title("contact") {
                section { id: "contact", class: "section container",
                    h2 { "{title}" }
                    if let Some(email) = &site.contact_email {
                        p { class: "contact-note",
                            "Prefer email? Write to "
                            a { href: "mailto:{email}", "{email}" }
                            "."
                        }
                    }
                    ContactForm {}
                }
            }
        }
    }
}
