#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;

use tracing::{Level, error};

use folio_common::config::{parse_config, SiteConfig};

mod common;

mod components;
use components::{footer::Footer, lightbox::LightboxOverlay, navigation::Header};

mod sections;
use sections::{
    experience::Experience, hero::Hero, organizations::Organizations, projects::Projects,
    skills::Skills,
};

mod state;
use state::{use_app_state_provider, AppState};

// page content and effect tunables, see folio_common::config
const SITE_CONFIG: &str = include_str!("../content.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    let config = use_hook(|| Rc::new(parse_config(SITE_CONFIG).map(Rc::new)));

    match &*config {
        Ok(site) => rsx! {
            style { "{common::style::SITE_STYLES}" }
            Portfolio { config: site.clone() }
        },
        Err(err) => {
            error!("invalid site config: {err}");
            rsx! {
                span { "{err}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct PortfolioProps {
    config: Rc<SiteConfig>,
}

#[component]
fn Portfolio(props: PortfolioProps) -> Element {
    let AppState {
        theme,
        lightbox,
        mut scroll_y,
        mut sections,
    } = use_app_state_provider(props.config);

    // section tops move whenever the layout does (the experience detail view,
    // late images, a resize), so they are re-read before the scroll position
    // that the header derives the active section from
    let sync_scroll = move |_: web_sys::Event| {
        sections
            .write()
            .remeasure(|id| common::dom::element_top(id.as_str()));
        scroll_y.set(common::dom::scroll_y());
    };
    common::events::use_window_listener("scroll", sync_scroll);
    common::events::use_window_listener("resize", sync_scroll);
    common::events::use_window_listener("load", sync_scroll);

    // the toggle applies later changes itself, this only covers the stored theme
    use_effect(move || {
        let dark = theme.peek().theme().is_dark();
        common::dom::set_body_class("dark", dark);
    });

    use_effect(move || {
        common::dom::set_body_scroll_locked(lightbox.read().scroll_locked());
    });

    use_hook(|| common::dom::on_next_frame(|| common::dom::set_body_class("loaded", true)));

    rsx! {
        Header {}
        main { style: "margin-top: 80px;",
            Hero {}
            Experience {}
            Projects {}
            Skills {}
            Organizations {}
        }
        Footer {}
        LightboxOverlay {}
    }
}
