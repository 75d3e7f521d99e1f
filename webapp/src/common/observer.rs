use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use folio_common::reveal::RevealOptions;

use crate::common::dom::js_err;

// intersection observer on a single element
//
// the callback receives is_intersecting for every entry the browser reports;
// the threshold and root margin are applied by the browser.  dropping the observer disconnects it
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl VisibilityObserver {
    pub fn observe(
        element: &Element,
        options: &RevealOptions,
        mut on_entry: impl FnMut(bool) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_entry(entry.is_intersecting());
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(js_err)?;
        observer.observe(element);

        Ok(VisibilityObserver {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
