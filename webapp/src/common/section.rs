use dioxus::prelude::*;

use folio_api::section::SectionId;

use crate::{
    common::{dom, reveal::use_reveal},
    state::{use_app_state, use_site_config},
};

// page section
//
// registers its id and top offset with the active-section tracker when it
// mounts and deregisters when it goes away; the page re-reads every top before
// the tracker is consulted.  sections with `fade` set also reveal on scroll
#[derive(Clone, PartialEq, Props)]
pub struct PageSectionProps {
    id: SectionId,
    #[props(default)]
    class: String,
    #[props(default = true)]
    fade: bool,
    #[props(default)]
    style: String,
    children: Element,
}

#[component]
pub fn PageSection(props: PageSectionProps) -> Element {
    let mut sections = use_app_state().sections;
    let options = use_site_config().effects.reveal;
    let reveal = use_reveal(options);

    let id = props.id.clone();
    use_drop(move || {
        if let Ok(mut sections) = sections.try_write() {
            sections.deregister(id.as_str());
        }
    });

    let id = props.id.clone();
    let fade = props.fade;
    let class = match (fade, reveal.class()) {
        (false, _) => format!("section {}", props.class),
        (true, state) => format!("section fade-in {state} {}", props.class),
    };

    rsx! {
        section {
            id: "{props.id}",
            class: "{class}",
            style: "{props.style}",
            onmounted: move |event: MountedEvent| {
                let top = event
                    .data()
                    .downcast::<web_sys::Element>()
                    .and_then(dom::offset_top);
                if let Some(top) = top {
                    sections.write().register(id.clone(), top);
                }
                if fade {
                    reveal.mounted(event);
                }
            },
            {props.children}
        }
    }
}
