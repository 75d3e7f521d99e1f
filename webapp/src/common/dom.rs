use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

// small wrappers over the document, all of which quietly do nothing when there
// is no window (e.g. while prerendering)

pub fn js_err(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

fn body() -> Option<HtmlElement> {
    document().and_then(|document| document.body())
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = body() else {
        return;
    };

    let classes = body.class_list();
    let result = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };

    if let Err(err) = result {
        tracing::warn!("failed to update body class {class}: {err:?}");
    }
}

// stop the page behind an overlay from scrolling; an empty value hands the
// property back to the stylesheet
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = body() else {
        return;
    };

    let value = if locked { "hidden" } else { "" };
    if let Err(err) = body.style().set_property("overflow", value) {
        tracing::warn!("failed to set body overflow: {err:?}");
    }
}

// run once on the next animation frame
pub fn on_next_frame(callback: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::once_into_js(callback);
    if let Err(err) = window.request_animation_frame(callback.unchecked_ref()) {
        tracing::warn!("requestAnimationFrame failed: {err:?}");
    }
}

pub fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_section(id: &str) {
    match document().and_then(|document| document.get_element_by_id(id)) {
        Some(element) => scroll_into_view(&element),
        None => tracing::warn!("no element with id {id} to scroll to"),
    }
}

// whether the event target sits inside the element with the given id
pub fn event_within(event: &web_sys::Event, id: &str) -> bool {
    let Some(container) = document().and_then(|document| document.get_element_by_id(id)) else {
        return false;
    };

    let target = event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok());

    container.contains(target.as_ref())
}

// current offsetTop of the element with the given id
pub fn element_top(id: &str) -> Option<f64> {
    document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| offset_top(&element))
}

pub fn offset_top(element: &Element) -> Option<f64> {
    element
        .dyn_ref::<HtmlElement>()
        .map(|element| f64::from(element.offset_top()))
}
