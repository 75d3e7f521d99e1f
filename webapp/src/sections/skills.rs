use dioxus::prelude::*;

use folio_api::section::{SKILLS, SectionId};

use crate::{common::section::PageSection, state::use_site_config};

#[component]
pub fn Skills() -> Element {
    let config = use_site_config();

    rsx! {
        PageSection { id: SectionId::from(SKILLS),
            h2 { class: "section-title", "Skills & Expertise" }
            div { class: "card",
                div { class: "skills-grid",
                    // --i staggers the entrance animation
                    for (order, skill) in (1..).zip(config.site.skills.iter()) {
                        div {
                            key: "{order}",
                            class: "skill-item",
                            style: "--i: {order};",
                            div { class: "skill-icon",
                                i { class: "{skill.icon}" }
                            }
                            div {
                                h4 { "{skill.title}" }
                                p { "{skill.text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
