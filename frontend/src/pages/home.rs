use yew::prelude::*;

use crate::components::brand_carousel::BrandCarousel;
use crate::components::contact_form::ContactForm;
use crate::components::counter::AnimatedCounter;
use crate::components::nav::AnchorLink;
use crate::components::products::ProductGrid;
use crate::components::reveal::{use_reveal_on_scroll, use_seen_once};
use crate::config::HERO_STATS_THRESHOLD;

const STATS: &[(u64, &str, &str)] = &[
    (25, "+", "Years in Business"),
    (15000, "+", "Products in Stock"),
    (4800, "", "Trade Customers"),
    (98, "%", "On-Time Delivery"),
];

const FEATURES: &[(&str, &str, &str)] = &[
    ("fas fa-truck", "Next-Day Delivery", "Orders placed before 3pm ship the same day."),
    ("fas fa-certificate", "Certified Stock", "Every line meets CE and UKCA requirements."),
    ("fas fa-handshake", "Trade Accounts", "30-day terms and volume pricing."),
];

const CATALOGUES: &[(&str, &str)] = &[
    ("Safety & PPE 2026", "148 pages"),
    ("Tools & Machinery", "212 pages"),
    ("Electrical Supplies", "96 pages"),
];

#[function_component(Home)]
pub fn home() -> Html {
    use_reveal_on_scroll();
    let hero_seen = use_seen_once("home", HERO_STATS_THRESHOLD);

    html! {
        <main>
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>{"Industrial supplies, delivered."}</h1>
                    <p>{"Tools, safety equipment and consumables for trade and industry."}</p>
                    <div class="hero-buttons">
                        <AnchorLink href="#products" classes={classes!("btn", "btn-primary")}>
                            {"Browse Products"}
                        </AnchorLink>
                        <AnchorLink href="#contact" classes={classes!("btn", "btn-secondary")}>
                            {"Request a Quote"}
                        </AnchorLink>
                    </div>
                    <div class="hero-stats">
                        { for STATS.iter().map(|(target, suffix, label)| html! {
                            <div class="stat" key={*label}>
                                <AnimatedCounter target={*target} suffix={*suffix} start={hero_seen} />
                                <span class="stat-label">{ *label }</span>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="products" class="products">
                <div class="container">
                    <h2 class="section-title">{"Our Products"}</h2>
                    <ProductGrid />
                </div>
            </section>

            <section id="about" class="about">
                <div class="container">
                    <div class="about-content">
                        <h2 class="section-title">{"About Us"}</h2>
                        <p>{"A family-run distributor supplying contractors and manufacturers since 2001."}</p>
                    </div>
                    <div class="about-features">
                        { for FEATURES.iter().map(|(icon, title, text)| html! {
                            <div class="feature-item" key={*title}>
                                <i class={*icon}></i>
                                <h4>{ *title }</h4>
                                <p>{ *text }</p>
                            </div>
                        }) }
                    </div>
                    <div class="image-card">
                        <img src="/assets/warehouse.jpg" alt="Our warehouse" />
                    </div>
                </div>
            </section>

            <section id="catalogue" class="catalogue">
                <div class="container">
                    <h2 class="section-title">{"Catalogues"}</h2>
                    <div class="catalogue-grid">
                        { for CATALOGUES.iter().map(|(title, pages)| html! {
                            <div class="catalogue-card" key={*title}>
                                <i class="fas fa-book-open"></i>
                                <h3>{ *title }</h3>
                                <span>{ *pages }</span>
                            </div>
                        }) }
                    </div>
                    <BrandCarousel />
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container">
                    <h2 class="section-title">{"Contact Us"}</h2>
                    <div class="contact-grid">
                        <div class="contact-info">
                            <div class="info-card">
                                <i class="fas fa-map-marker-alt"></i>
                                <p>{"Unit 4, Riverside Industrial Estate"}</p>
                            </div>
                            <div class="info-card">
                                <i class="fas fa-phone"></i>
                                <p>{"+44 161 555 0142"}</p>
                            </div>
                            <div class="info-card">
                                <i class="fas fa-envelope"></i>
                                <p>{"sales@globalindustrial.example"}</p>
                            </div>
                        </div>
                        <ContactForm />
                    </div>
                </div>
            </section>
        </main>
    }
}
