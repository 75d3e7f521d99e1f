use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const TYPEWRITER_SPEED_MS: u32 = 85;
pub const TYPEWRITER_START_DELAY_MS: u32 = 300;
pub const TYPEWRITER_LOOP_PAUSE_MS: u32 = 800;

// timer source
//
// the browser implementation wraps setTimeout; tests drive a manual clock.
// dropping the returned timer must cancel the callback if it has not fired yet
pub trait Clock: Clone + 'static {
    type Timer: 'static;

    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Timer;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub speed_ms: u32,
    pub start_delay_ms: u32,
    pub looping: bool,
    pub loop_pause_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        TypewriterConfig {
            speed_ms: TYPEWRITER_SPEED_MS,
            start_delay_ms: TYPEWRITER_START_DELAY_MS,
            looping: false,
            loop_pause_ms: TYPEWRITER_LOOP_PAUSE_MS,
        }
    }
}

// typewriter sequence
//
// each tick reveals the next prefix, from empty up to the full text, and says
// how long to wait before the following tick.  prefixes are cut on character
// boundaries so multibyte text never splits a code point
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    // byte offset of the end of each prefix, boundaries[0] == 0
    boundaries: Vec<usize>,
    config: TypewriterConfig,
    next_len: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, config: TypewriterConfig) -> Self {
        let text = text.into();
        let boundaries = std::iter::once(0)
            .chain(text.char_indices().map(|(i, c)| i + c.len_utf8()))
            .collect();

        Typewriter {
            text,
            boundaries,
            config,
            next_len: 0,
        }
    }

    fn char_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn prefix(&self, chars: usize) -> &str {
        let chars = chars.min(self.char_count());
        &self.text[..self.boundaries[chars]]
    }

    // returns the prefix to show now and the delay until the next tick, if any
    pub fn tick(&mut self) -> (String, Option<u32>) {
        let shown = self.prefix(self.next_len).to_owned();
        self.next_len += 1;

        let next = if self.next_len <= self.char_count() {
            Some(self.config.speed_ms)
        } else if self.config.looping {
            self.next_len = 0;
            Some(self.config.loop_pause_ms)
        } else {
            None
        };

        (shown, next)
    }
}

struct Shared<C: Clock> {
    cancelled: Cell<bool>,
    typewriter: RefCell<Typewriter>,
    timer: RefCell<Option<C::Timer>>,
    on_output: RefCell<Box<dyn FnMut(String)>>,
}

// running typewriter
//
// the only strong reference to the shared state lives in this handle; pending
// timers hold a weak one.  cancelling, or dropping the handle, guarantees that
// on_output is not called again
pub struct TypewriterTask<C: Clock> {
    shared: Rc<Shared<C>>,
}

impl<C: Clock> TypewriterTask<C> {
    pub fn start(
        text: impl Into<String>,
        config: TypewriterConfig,
        clock: C,
        on_output: impl FnMut(String) + 'static,
    ) -> Self {
        let shared = Rc::new(Shared {
            cancelled: Cell::new(false),
            typewriter: RefCell::new(Typewriter::new(text, config)),
            timer: RefCell::new(None),
            on_output: RefCell::new(Box::new(on_output)),
        });

        let timer = schedule(Rc::downgrade(&shared), clock, config.start_delay_ms);
        *shared.timer.borrow_mut() = Some(timer);

        TypewriterTask { shared }
    }

    pub fn is_cancelled(&self) -> bool {
        self.shared.cancelled.get()
    }

    pub fn cancel(&self) {
        if self.shared.cancelled.replace(true) {
            return;
        }

        debug!("cancelling typewriter");
        if let Ok(mut timer) = self.shared.timer.try_borrow_mut() {
            timer.take();
        }
    }
}

impl<C: Clock> Drop for TypewriterTask<C> {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule<C: Clock>(shared: Weak<Shared<C>>, clock: C, delay: u32) -> C::Timer {
    let next_clock = clock.clone();
    clock.after(delay, Box::new(move || fire(shared, next_clock)))
}

fn fire<C: Clock>(weak: Weak<Shared<C>>, clock: C) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    if shared.cancelled.get() {
        return;
    }

    let (shown, next) = shared.typewriter.borrow_mut().tick();
    {
        let mut on_output = shared.on_output.borrow_mut();
        (&mut *on_output)(shown);
    }

    // the output callback may have cancelled us
    if shared.cancelled.get() {
        return;
    }

    if let Some(delay) = next {
        let timer = schedule(weak, clock, delay);
        *shared.timer.borrow_mut() = Some(timer);
    }
}
