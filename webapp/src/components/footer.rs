use dioxus::prelude::*;

use folio_api::section::CONTACT;

use crate::{common::current_year, state::use_site_config};

#[component]
pub fn Footer() -> Element {
    let config = use_site_config();
    let site = &config.site;
    let year = current_year();

    rsx! {
        footer { id: CONTACT,
            h2 { style: "margin-bottom: 1rem;", "Let's Connect!" }
            p { "Ready to create something amazing together?" }
            div { class: "contact-links",
                for link in site.contact.iter() {
                    a {
                        key: "{link.href}",
                        href: "{link.href}",
                        class: "contact-link",
                        target: if link.external { "_blank" },
                        rel: if link.external { "noreferrer" },
                        i { class: "{link.icon}" }
                        "{link.label}"
                    }
                }
            }
            p { class: "copyright", "© {year} {site.profile.name}. {site.footer}" }
        }
    }
}
