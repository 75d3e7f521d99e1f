use dioxus::prelude::*;

use folio_api::section::{NavEntry, SectionId};
use folio_common::nav::NavMenu;

use crate::{
    common::{dom, events::use_document_listener},
    state::{use_app_state, use_site_config},
};

const NAV_MENU_ID: &str = "navMenu";
const HAMBURGER_ID: &str = "hamburger";

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    entry: NavEntry,
    active: bool,
    menu: Signal<NavMenu>,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let target = props.entry.target.clone();
    let href = target.anchor();
    let mut menu = props.menu;

    rsx! {
        li {
            a {
                class: if props.active { "nav-link active" } else { "nav-link" },
                href,
                onclick: move |event| {
                    event.prevent_default();
                    dom::scroll_to_section(target.as_str());
                    menu.write().close();
                },
                "{props.entry.label}"
            }
        }
    }
}

#[component]
pub fn Header() -> Element {
    let config = use_site_config();
    let state = use_app_state();
    let mut theme = state.theme;
    let sections = state.sections;
    let scroll_y = state.scroll_y;

    let mut menu = use_signal(NavMenu::default);

    // clicks anywhere but the menu and its toggle close the mobile menu
    use_document_listener("click", move |event| {
        if !menu.peek().is_open() {
            return;
        }

        let in_menu = dom::event_within(&event, NAV_MENU_ID);
        let in_toggle = dom::event_within(&event, HAMBURGER_ID);
        menu.write().document_click(in_menu, in_toggle);
    });

    let active: Memo<SectionId> = use_memo(move || sections.read().active(scroll_y()).clone());

    let menu_class = menu.read().class();

    rsx! {
        header {
            div { class: "nav-container",
                div { class: "logo", "{config.site.title}" }
                nav {
                    ul { class: "nav-menu {menu_class}", id: NAV_MENU_ID,
                        for entry in config.site.nav.iter() {
                            NavBarButton {
                                key: "{entry.target}",
                                entry: entry.clone(),
                                active: entry.target == active(),
                                menu,
                            }
                        }
                    }
                }
                div { class: "nav-controls",
                    button {
                        class: "theme-toggle",
                        id: "themeToggle",
                        aria_label: "Toggle theme",
                        onclick: move |_| {
                            let next = theme.write().toggle();
                            dom::set_body_class("dark", next.is_dark());
                        },
                        i { class: if theme.read().theme().is_dark() { "fas fa-sun" } else { "fas fa-moon" } }
                    }
                    div {
                        class: "hamburger {menu_class}",
                        id: HAMBURGER_ID,
                        onclick: move |_| menu.write().toggle(),
                        span {}
                        span {}
                        span {}
                    }
                }
            }
        }
    }
}
