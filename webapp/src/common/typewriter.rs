use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use folio_common::typewriter::{Clock, TypewriterConfig, TypewriterTask};

// setTimeout-backed clock; dropping a gloo Timeout clears it
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    type Timer = Timeout;

    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, callback)
    }
}

// typewriter hook
//
// restarts from scratch whenever the text or the timing changes; the previous
// task is dropped, and with it its pending timer
pub fn use_typewriter(text: String, config: TypewriterConfig) -> Signal<String> {
    let mut output = use_signal(String::new);
    let mut task = use_signal(|| None::<TypewriterTask<BrowserClock>>);

    use_effect(use_reactive!(|(text, config)| {
        let next = TypewriterTask::start(text, config, BrowserClock, move |shown| {
            output.set(shown)
        });
        task.set(Some(next));
    }));

    use_drop(move || {
        if let Ok(mut task) = task.try_write() {
            task.take();
        }
    });

    output
}
