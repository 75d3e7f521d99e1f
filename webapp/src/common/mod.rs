pub mod dom;
pub mod events;
pub mod observer;
pub mod reveal;
pub mod section;
pub mod storage;
pub mod style;
pub mod typewriter;

use chrono::{Datelike, Local};

// copyright line in the footer
pub fn current_year() -> i32 {
    Local::now().year()
}
