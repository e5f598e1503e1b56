use yew::prelude::*;

const BRANDS: &[&str] = &[
    "Bosch", "Makita", "DeWalt", "3M", "Honeywell", "Stanley", "Milwaukee", "Hilti",
];

pub fn play_state(hovered: bool) -> &'static str {
    if hovered {
        "animation-play-state: paused;"
    } else {
        "animation-play-state: running;"
    }
}

/// Scrolling brand strip; pauses while the pointer is over it.
#[function_component(BrandCarousel)]
pub fn brand_carousel() -> Html {
    let hovered = use_state_eq(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    // The list is rendered twice so the strip loops without a gap.
    let logos = BRANDS
        .iter()
        .chain(BRANDS.iter())
        .enumerate()
        .map(|(i, brand)| html! { <div key={i.to_string()} class="brand-item">{ *brand }</div> });

    html! {
        <div class="brands-carousel" {onmouseenter} {onmouseleave}>
            <div class="brands-track" style={play_state(*hovered)}>
                { for logos }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_pauses_the_track() {
        assert_eq!(play_state(true), "animation-play-state: paused;");
        assert_eq!(play_state(false), "animation-play-state: running;");
    }
}
