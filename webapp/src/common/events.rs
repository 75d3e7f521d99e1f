use std::rc::Rc;

use dioxus::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Event, EventTarget};

use crate::common::dom::{document, js_err};

// event listener registration
//
// owns the js closure and removes it from the target when dropped, so storing
// one of these in a hook ties the listener's lifetime to the component
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(js_err)?;

        Ok(EventListener {
            target,
            event,
            callback,
        })
    }

    pub fn window(event: &'static str, handler: impl FnMut(Event) + 'static) -> anyhow::Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window"))?;
        EventListener::new(window.into(), event, handler)
    }

    pub fn document(event: &'static str, handler: impl FnMut(Event) + 'static) -> anyhow::Result<Self> {
        let document = document().ok_or_else(|| anyhow::Error::msg("no document"))?;
        EventListener::new(document.into(), event, handler)
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

fn keep(event: &'static str, listener: anyhow::Result<EventListener>) -> Rc<Option<EventListener>> {
    match listener {
        Ok(listener) => Rc::new(Some(listener)),
        Err(err) => {
            tracing::error!("failed to listen for {event}: {err}");
            Rc::new(None)
        }
    }
}

// listen on the window for as long as the calling component is mounted
pub fn use_window_listener(event: &'static str, handler: impl FnMut(Event) + 'static) {
    use_hook(move || keep(event, EventListener::window(event, handler)));
}

pub fn use_document_listener(event: &'static str, handler: impl FnMut(Event) + 'static) {
    use_hook(move || keep(event, EventListener::document(event, handler)));
}

pub fn key_of(event: &Event) -> Option<String> {
    event
        .dyn_ref::<web_sys::KeyboardEvent>()
        .map(|event| event.key())
}
