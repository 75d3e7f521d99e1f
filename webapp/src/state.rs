use std::rc::Rc;

use dioxus::prelude::*;

use folio_common::{
    config::SiteConfig, lightbox::Lightbox, scroll_spy::SectionTracker, theme::ThemeState,
};

use crate::common::{dom, storage::LocalThemeStore};

// application state
//
// provided once at the root and read through use_context everywhere else.  each
// signal has a single writer: the theme toggle, the lightbox component, the
// window scroll listener and the page sections respectively
#[derive(Clone, Copy)]
pub struct AppState {
    pub theme: Signal<ThemeState<LocalThemeStore>>,
    pub lightbox: Signal<Lightbox>,
    pub scroll_y: Signal<f64>,
    pub sections: Signal<SectionTracker>,
}

pub fn use_app_state_provider(config: Rc<SiteConfig>) -> AppState {
    let spy = config.effects.scroll_spy.clone();

    let theme = use_signal(|| ThemeState::load(LocalThemeStore));
    let lightbox = use_signal(Lightbox::default);
    let scroll_y = use_signal(dom::scroll_y);
    let sections =
        use_signal(move || SectionTracker::with_lookahead(spy.fallback, spy.lookahead));

    use_context_provider(|| config);
    use_context_provider(|| AppState {
        theme,
        lightbox,
        scroll_y,
        sections,
    })
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}

pub fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>()
}
