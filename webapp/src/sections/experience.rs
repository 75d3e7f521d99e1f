use dioxus::prelude::*;

use folio_api::{
    profile::ExperienceEntry,
    section::{EXPERIENCE, SectionId},
};
use folio_common::experience::{ExperienceView, ViewChange};

use crate::{
    common::{
        dom,
        events::{key_of, use_document_listener},
        reveal::use_reveal,
        section::PageSection,
    },
    state::{use_app_state, use_site_config},
};

// Experience elements
//
// the section starts as a list of cards; clicking one swaps the list for that
// entry's details, and back (or escape) swaps it back.  either way the
// container is scrolled into view so the switch is not lost off-screen
#[component]
pub fn Experience() -> Element {
    let config = use_site_config();
    let lightbox = use_app_state().lightbox;
    let entries = config.site.experience.clone();

    let mut view = use_signal(|| ExperienceView::new(entries.len()));
    let mut container = use_signal(|| None::<web_sys::Element>);

    let apply = move |change: ViewChange| {
        if change == ViewChange::ScrollIntoView {
            if let Some(element) = container.peek().as_ref() {
                dom::scroll_into_view(element);
            }
        }
    };

    use_document_listener("keydown", move |event| {
        if view.peek().is_detail() && key_of(&event).as_deref() == Some("Escape") {
            let change = view.write().escape(lightbox.peek().is_open());
            apply(change);
        }
    });

    let selected = view.read().selected();

    rsx! {
        PageSection { id: SectionId::from(EXPERIENCE),
            h2 { class: "section-title", "Experience" }
            div {
                class: "experience-container",
                onmounted: move |event: MountedEvent| {
                    container.set(event.data().downcast::<web_sys::Element>().cloned());
                },
                {match selected.and_then(|index| entries.get(index).cloned()) {
                    Some(entry) => rsx! {
                        ExperienceDetail {
                            entry,
                            on_back: move |_| {
                                let change = view.write().back();
                                apply(change);
                            },
                        }
                    },
                    None => rsx! {
                        div { class: "experience-grid",
                            for (index, entry) in entries.iter().enumerate() {
                                ExperienceCard {
                                    key: "{index}",
                                    entry: entry.clone(),
                                    on_select: move |_| {
                                        let change = view.write().select(index);
                                        apply(change);
                                    },
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ExperienceCardProps {
    entry: ExperienceEntry,
    on_select: EventHandler<()>,
}

// cards slide in the first time they scroll into range
#[component]
fn ExperienceCard(props: ExperienceCardProps) -> Element {
    let reveal = use_reveal(use_site_config().effects.reveal);
    let entry = props.entry;

    rsx! {
        div {
            class: "card experience-item reveal-item {reveal.class()}",
            onmounted: move |event| reveal.mounted(event),
            onclick: move |_| props.on_select.call(()),
            if let Some(image) = entry.image.as_ref() {
                img { src: "{image}", alt: "{entry.title}" }
            }
            div {
                h3 { class: "entry-title", "{entry.title}" }
                p { class: "entry-period", "{entry.period}" }
                p { "{entry.summary}" }
                span { class: "entry-more", "Read more →" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ExperienceDetailProps {
    entry: ExperienceEntry,
    on_back: EventHandler<()>,
}

#[component]
fn ExperienceDetail(props: ExperienceDetailProps) -> Element {
    let entry = props.entry;

    rsx! {
        div { class: "card experience-detail",
            button {
                class: "btn btn-secondary back-btn",
                onclick: move |_| props.on_back.call(()),
                "← Back"
            }
            if let Some(image) = entry.image.as_ref() {
                img { src: "{image}", alt: "{entry.title}" }
            }
            h3 { class: "entry-title", "{entry.title}" }
            p { class: "entry-period", "{entry.period}" }
            if entry.details.is_empty() {
                p { "{entry.summary}" }
            } else {
                for (index, paragraph) in entry.details.iter().enumerate() {
                    p { key: "{index}", "{paragraph}" }
                }
            }
        }
    }
}
