use dioxus::prelude::*;

use folio_common::reveal::{Reveal, RevealOptions};

use crate::common::observer::VisibilityObserver;

// fade-in hook
//
// call mounted() from the element's onmounted handler; the observer lives as
// long as the component and flips `reveal` the first time the element is
// visible enough
#[derive(Clone, Copy)]
pub struct RevealHandle {
    reveal: Signal<Reveal>,
    observer: Signal<Option<VisibilityObserver>>,
    options: RevealOptions,
}

impl RevealHandle {
    pub fn class(&self) -> &'static str {
        self.reveal.read().class()
    }

    pub fn mounted(mut self, event: MountedEvent) {
        let Some(element) = event.data().downcast::<web_sys::Element>().cloned() else {
            return;
        };

        let mut reveal = self.reveal;
        let observer = VisibilityObserver::observe(&element, &self.options, move |intersecting| {
            let mut next = *reveal.peek();
            if next.observe(intersecting) {
                reveal.set(next);
            }
        });

        match observer {
            Ok(observer) => self.observer.set(Some(observer)),
            Err(err) => {
                // without an observer the element would stay hidden forever
                tracing::warn!("failed to observe element for fade-in: {err}");
                self.reveal.set(Reveal::revealed());
            }
        }
    }
}

pub fn use_reveal(options: RevealOptions) -> RevealHandle {
    let reveal = use_signal(Reveal::default);
    let observer = use_signal(|| None::<VisibilityObserver>);

    RevealHandle {
        reveal,
        observer,
        options,
    }
}
