use dioxus::prelude::*;

use folio_api::section::{ORGANIZATIONS, SectionId};

use crate::{common::section::PageSection, state::use_site_config};

#[component]
pub fn Organizations() -> Element {
    let config = use_site_config();

    rsx! {
        PageSection { id: SectionId::from(ORGANIZATIONS),
            h2 { class: "section-title", "Organizations & Activities" }
            div { class: "org-grid",
                for (index, org) in config.site.organizations.iter().enumerate() {
                    div { key: "{index}", class: "card org-item",
                        if let Some(image) = org.image.as_ref() {
                            img { src: "{image}", alt: "{org.title}" }
                        }
                        div {
                            h3 { class: "entry-title", "{org.title}" }
                            p { class: "org-subtitle", "{org.subtitle}" }
                            p { "{org.description}" }
                        }
                    }
                }
            }
        }
    }
}
