use dioxus::prelude::*;

use folio_common::lightbox::LightboxClick;

use crate::{
    common::events::{key_of, use_document_listener},
    state::use_app_state,
};

#[component]
pub fn LightboxOverlay() -> Element {
    let lightbox = use_app_state().lightbox;

    match lightbox.read().image() {
        Some(image) => rsx! {
            LightboxOpen { image: image.clone() }
        },
        None => rsx! {},
    }
}

#[derive(Clone, PartialEq, Props)]
struct LightboxOpenProps {
    image: String,
}

// only mounted while an image is shown, so the escape listener lives exactly as
// long as the overlay
#[component]
fn LightboxOpen(props: LightboxOpenProps) -> Element {
    let mut lightbox = use_app_state().lightbox;

    use_document_listener("keydown", move |event| {
        if key_of(&event).as_deref() == Some("Escape") {
            lightbox.write().close();
        }
    });

    rsx! {
        div {
            class: "lightbox open",
            // clicks that reach the backdrop close it, the image and the
            // button stop propagation
            onclick: move |_| {
                lightbox.write().click(LightboxClick::Backdrop);
            },
            button {
                class: "close",
                aria_label: "Close",
                onclick: move |event| {
                    event.stop_propagation();
                    lightbox.write().click(LightboxClick::Dismiss);
                },
                "×"
            }
            img {
                src: "{props.image}",
                alt: "preview",
                onclick: move |event| {
                    event.stop_propagation();
                    lightbox.write().click(LightboxClick::Image);
                },
            }
        }
    }
}
