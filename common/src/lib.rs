// ui state machines
//
// everything in here is plain data driven by the webapp's event handlers.  none
// of it touches the dom, so it is exercised natively by the unit tests and the
// webapp only translates browser events into calls on these types
pub mod carousel;
pub mod config;
pub mod experience;
pub mod lightbox;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod scroll_spy;
pub mod theme;
pub mod typewriter;
