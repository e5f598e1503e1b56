use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Err(err) = dom::scroll_to_top() {
            log::warn!("{}", err);
        }
    });

    html! {
        <a href="#home" id="backToTop" class={classes!("back-to-top", props.visible.then_some("visible"))}
            aria-label="Back to top" {onclick}>
            <i class="fas fa-arrow-up"></i>
        </a>
    }
}
