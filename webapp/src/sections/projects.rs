use dioxus::prelude::*;

use folio_api::{
    project::Slide,
    section::{PROJECTS, SectionId},
};
use folio_common::{
    carousel::{Carousel, SwipeGesture},
    lightbox::Lightbox,
};

use crate::{
    common::section::PageSection,
    state::{use_app_state, use_site_config},
};

// horizontal screen coordinate of the touch that started or ended the event
fn changed_touch_x(event: &TouchEvent) -> Option<f64> {
    event
        .data()
        .touches_changed()
        .first()
        .map(|touch| touch.screen_coordinates().x)
}

// Projects carousel
//
// one slide is shown at a time; the strip of cards is translated by -index *
// 100% and the arrows, the pagination dots and horizontal swipes all move the
// same Carousel
#[component]
pub fn Projects() -> Element {
    let config = use_site_config();
    let lightbox = use_app_state().lightbox;
    let slides = config.site.projects.clone();

    let mut carousel = use_signal(|| Carousel::new(slides.len()));
    let mut swipe = use_signal(|| SwipeGesture::new(config.effects.swipe_threshold));

    let current = carousel();
    let transform = current.transform();

    rsx! {
        PageSection { id: SectionId::from(PROJECTS),
            h2 { class: "section-title", "Featured Projects" }
            div { class: "carousel-container",
                div { class: "carousel-wrapper",
                    div {
                        class: "projects-grid",
                        id: "projectsGrid",
                        style: "transform: {transform};",
                        ontouchstart: move |event: TouchEvent| {
                            if let Some(x) = changed_touch_x(&event) {
                                swipe.write().touch_start(x);
                            }
                        },
                        ontouchend: move |event: TouchEvent| {
                            let direction = changed_touch_x(&event)
                                .and_then(|x| swipe.write().touch_end(x));
                            if let Some(direction) = direction {
                                carousel.write().navigate(direction);
                            }
                        },
                        ontouchcancel: move |_| swipe.write().cancel(),
                        for (index, slide) in slides.iter().enumerate() {
                            ProjectCard { key: "{index}", slide: slide.clone(), lightbox }
                        }
                    }
                }
                div { class: "carousel-controls",
                    div { class: "carousel-nav",
                        button {
                            class: "nav-btn",
                            id: "prevBtn",
                            disabled: !current.can_prev(),
                            onclick: move |_| carousel.write().prev(),
                            "←"
                        }
                        button {
                            class: "nav-btn",
                            id: "nextBtn",
                            disabled: !current.can_next(),
                            onclick: move |_| carousel.write().next(),
                            "→"
                        }
                    }
                    div { class: "pagination", id: "pagination",
                        for (index, active) in current.markers() {
                            div {
                                key: "{index}",
                                class: if active { "pagination-dot active" } else { "pagination-dot" },
                                onclick: move |_| carousel.write().go_to(index),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    slide: Slide,
    lightbox: Signal<Lightbox>,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let lightbox = props.lightbox;
    let slide = props.slide;

    rsx! {
        div { class: "card-inline",
            div { class: "project-card",
                div { class: "project-image",
                    GalleryImage {
                        src: slide.hero.clone(),
                        alt: slide.title.clone(),
                        lightbox,
                    }
                }
                div { class: "project-content",
                    h3 { "{slide.title}" }
                    p { "{slide.description}" }
                    div { class: "project-gallery",
                        for (number, thumbnail) in (1..).zip(slide.thumbnails.iter()) {
                            GalleryImage {
                                key: "{number}",
                                src: thumbnail.clone(),
                                alt: format!("Screenshot {number}"),
                                lightbox,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct GalleryImageProps {
    src: String,
    alt: String,
    lightbox: Signal<Lightbox>,
}

// any picture on the page opens the lightbox when clicked
#[component]
fn GalleryImage(props: GalleryImageProps) -> Element {
    let mut lightbox = props.lightbox;
    let image = props.src.clone();

    rsx! {
        img {
            src: "{props.src}",
            alt: "{props.alt}",
            onclick: move |_| lightbox.write().open(image.clone()),
        }
    }
}
