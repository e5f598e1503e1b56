use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::SECTIONS;
use crate::dom;
use crate::scroll::UiState;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    /// In-page fragment such as `#contact`.
    pub href: AttrValue,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub onnavigate: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Fragment link that smooth-scrolls instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let onnavigate = props.onnavigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Err(err) = dom::scroll_to_fragment(&href) {
                log::warn!("smooth scroll skipped: {}", err);
            }
            onnavigate.emit(());
        })
    };

    html! {
        <a href={props.href.clone()} class={props.classes.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

/// Class for the nav link of `section` given the current active section.
pub fn link_classes(section: &str, active: Option<&str>) -> Classes {
    classes!("nav-link", (active == Some(section)).then_some("active"))
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub ui: UiState,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Links only ever close the menu.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let open_class = (*menu_open).then_some("active");
    let scrolled_class = props.ui.scroll.is_past_threshold.then_some("scrolled");

    html! {
        <nav id="navbar" class={classes!("navbar", scrolled_class)}>
            <div class="nav-container">
                <AnchorLink href="#home" classes={classes!("nav-logo")} onnavigate={close_menu.clone()}>
                    <i class="fas fa-industry"></i>
                    <span>{"Global Industrial Supplies"}</span>
                </AnchorLink>

                <ul id="navMenu" class={classes!("nav-menu", open_class)}>
                    { for SECTIONS.iter().map(|(id, label)| html! {
                        <li key={*id}>
                            <AnchorLink
                                href={format!("#{}", id)}
                                classes={link_classes(id, props.ui.active_section)}
                                onnavigate={close_menu.clone()}
                            >
                                { *label }
                            </AnchorLink>
                        </li>
                    }) }
                </ul>

                <button id="navToggle" class={classes!("nav-toggle", open_class)} onclick={toggle_menu}
                    aria-label="Toggle navigation" aria-expanded={(*menu_open).to_string()}>
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_active_section_link_is_marked() {
        let active = Some("about");
        let marked: Vec<&str> = SECTIONS
            .iter()
            .filter(|(id, _)| link_classes(id, active).contains("active"))
            .map(|(id, _)| *id)
            .collect();
        assert_eq!(marked, vec!["about"]);
    }

    #[test]
    fn no_active_section_marks_nothing() {
        assert!(SECTIONS
            .iter()
            .all(|(id, _)| !link_classes(id, None).contains("active")));
        assert!(link_classes("home", None).contains("nav-link"));
    }
}
