use dioxus::prelude::*;

use folio_api::section::{ABOUT, PROJECTS, SectionId};
use folio_common::parallax::Parallax;

use crate::{
    common::{reveal::use_reveal, section::PageSection, typewriter::use_typewriter},
    state::{use_app_state, use_site_config},
};

#[component]
pub fn Hero() -> Element {
    let config = use_site_config();
    let mut lightbox = use_app_state().lightbox;
    let scroll_y = use_app_state().scroll_y;

    let profile = &config.site.profile;
    let reveal = use_reveal(config.effects.reveal);
    let role = use_typewriter(profile.role.clone(), config.effects.typewriter);

    let parallax = Parallax::new(config.effects.parallax_factor);
    let transform = format!("transform: {};", parallax.transform(scroll_y()));

    let portrait = profile.portrait.clone();
    let resume = profile.resume.clone();
    let resume_name = resume
        .as_deref()
        .and_then(|path| path.rsplit('/').next())
        .unwrap_or_default()
        .to_owned();

    rsx! {
        PageSection {
            id: SectionId::from(ABOUT),
            class: "hero",
            fade: false,
            style: transform,
            div {
                class: "hero-content fade-in {reveal.class()}",
                onmounted: move |event| reveal.mounted(event),
                div { class: "hero-text",
                    h1 {
                        "Hi, I'm "
                        span { class: "gradient-text", "{profile.name}" }
                    }
                    p { class: "subtitle typewriter", "{role}" }
                    for paragraph in profile.bio.iter() {
                        p { "{paragraph}" }
                    }
                    div { class: "cta-buttons",
                        a {
                            href: SectionId::from(PROJECTS).anchor(),
                            class: "btn btn-primary",
                            i { class: "fas fa-rocket" }
                            "View My Work"
                        }
                        if let Some(resume) = resume {
                            a {
                                href: "{resume}",
                                download: "{resume_name}",
                                class: "btn btn-secondary",
                                i { class: "fas fa-download" }
                                "Download CV"
                            }
                        }
                    }
                }
                div { class: "hero-image floating",
                    img {
                        src: "{profile.portrait}",
                        alt: "{profile.name}",
                        onclick: move |_| lightbox.write().open(portrait.clone()),
                    }
                }
            }
        }
    }
}
