use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Safety,
    Tools,
    Electrical,
    Fasteners,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Safety,
        Category::Tools,
        Category::Electrical,
        Category::Fasteners,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Safety => "Safety Equipment",
            Category::Tools => "Power Tools",
            Category::Electrical => "Electrical",
            Category::Fasteners => "Fasteners",
        }
    }
}

/// `None` means every category.
pub type ProductFilter = Option<Category>;

pub fn is_shown(filter: ProductFilter, category: Category) -> bool {
    filter.map_or(true, |wanted| wanted == category)
}

struct Product {
    name: &'static str,
    blurb: &'static str,
    icon: &'static str,
    category: Category,
}

const PRODUCTS: &[Product] = &[
    Product { name: "Hard Hats & Helmets", blurb: "Impact-rated head protection for every site.", icon: "fas fa-hard-hat", category: Category::Safety },
    Product { name: "High-Visibility Wear", blurb: "Vests and jackets to EN ISO 20471.", icon: "fas fa-vest", category: Category::Safety },
    Product { name: "Cordless Drills", blurb: "Brushless drivers and hammer drills.", icon: "fas fa-screwdriver", category: Category::Tools },
    Product { name: "Angle Grinders", blurb: "115mm to 230mm, mains and battery.", icon: "fas fa-cog", category: Category::Tools },
    Product { name: "Cable & Conduit", blurb: "Armoured cable, trunking and glands.", icon: "fas fa-plug", category: Category::Electrical },
    Product { name: "Lighting", blurb: "LED floodlights and site lighting.", icon: "fas fa-lightbulb", category: Category::Electrical },
    Product { name: "Bolts & Anchors", blurb: "Stainless and zinc-plated, bulk packs.", icon: "fas fa-wrench", category: Category::Fasteners },
];

#[function_component(ProductGrid)]
pub fn product_grid() -> Html {
    let filter = use_state_eq(|| None::<Category>);
    // Cards keep their plain class until the first filter so the scroll
    // observer owns their fade-in.
    let filtered = use_state_eq(|| false);

    let select = |choice: ProductFilter| {
        let filter = filter.clone();
        let filtered = filtered.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("filtering products by {:?}", choice);
            filter.set(choice);
            filtered.set(true);
        })
    };

    let button = |choice: ProductFilter, label: &'static str| {
        let active = (*filter == choice).then_some("active");
        html! {
            <button class={classes!("filter-btn", active)} onclick={select(choice)}>{ label }</button>
        }
    };

    html! {
        <>
            <div class="product-filters">
                { button(None, "All") }
                { for Category::ALL.iter().map(|c| button(Some(*c), c.label())) }
            </div>
            <div class="products-grid">
                { for PRODUCTS.iter().map(|product| {
                    let shown = is_shown(*filter, product.category);
                    let class = classes!(
                        "product-card",
                        (*filtered && shown).then_some(classes!("fade-in", "visible"))
                    );
                    html! {
                        <div key={product.name} {class} style={(!shown).then_some("display: none;")}>
                            <div class="product-icon"><i class={product.icon}></i></div>
                            <h3>{ product.name }</h3>
                            <p>{ product.blurb }</p>
                        </div>
                    }
                }) }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shows_every_category() {
        assert!(Category::ALL.iter().all(|c| is_shown(None, *c)));
    }

    #[test]
    fn a_category_hides_the_others() {
        let shown: Vec<&str> = PRODUCTS
            .iter()
            .filter(|p| is_shown(Some(Category::Tools), p.category))
            .map(|p| p.name)
            .collect();
        assert_eq!(shown, vec!["Cordless Drills", "Angle Grinders"]);
    }
}
