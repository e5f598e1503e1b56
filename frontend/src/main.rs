use yew::prelude::*;
use log::info;

mod config;
mod dom;
mod error;
mod scroll;
mod components {
    pub mod back_to_top;
    pub mod brand_carousel;
    pub mod contact_form;
    pub mod counter;
    pub mod nav;
    pub mod notification;
    pub mod products;
    pub mod reveal;
}
mod pages {
    pub mod home;
}

use components::{
    back_to_top::BackToTop,
    nav::Nav,
    notification::ToastHost,
};
use pages::home::Home;
use scroll::use_ui_state;

#[function_component]
fn Footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <p>{"© 2026 Global Industrial Supplies Ltd. All rights reserved."}</p>
            </div>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    let ui = use_ui_state();

    html! {
        <ToastHost>
            <Nav ui={ui} />
            <Home />
            <Footer />
            <BackToTop visible={ui.scroll.is_past_back_to_top_threshold} />
        </ToastHost>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
