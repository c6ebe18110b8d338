use gloo_timers::callback::Timeout;
use log::{info, Level};
use stylist::yew::Global;
use yew::prelude::*;

mod catalog;
mod config;
mod reveal {
    pub mod controller;
    pub mod timeline;
    pub mod trigger;
}
mod components {
    pub mod header;
    pub mod pager;
    pub mod product_card;
}
mod sections {
    pub mod bestsellers;
    pub mod bundles;
    pub mod category_icons;
    pub mod concerns;
    pub mod glow;
    pub mod groomfluencer;
    pub mod hero;
    pub mod newsletter;
    pub mod occasions;
    pub mod promises;
    pub mod skincare;
    pub mod testimonials;
}

use components::header::Header;
use config::PAGE_FADE_IN_MS;
use sections::{
    bestsellers::Bestsellers, bundles::Bundles, category_icons::CategoryIcons,
    concerns::Concerns, glow::Glow, groomfluencer::GroomFluencer, hero::Hero,
    newsletter::Newsletter, occasions::Occasions, promises::Promises, skincare::SkinCare,
    testimonials::Testimonials,
};

const GLOBAL_CSS: &str = r#"
    * { box-sizing: border-box; }
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #1a1a1a;
        background: #fff;
    }
    html { scroll-behavior: smooth; }
    .section-shell {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .section-title {
        font-size: 1.9rem;
        font-weight: 700;
        color: #1a1a1a;
        margin: 0 0 0.5rem;
    }
    .title-underline {
        width: 5rem;
        height: 4px;
        background: #c9a24b;
        border-radius: 9999px;
    }
    .title-underline.centered { margin: 0 auto; }
    .view-all {
        font-size: 0.85rem;
        font-weight: 500;
        color: #c9a24b;
        text-decoration: none;
    }
    .view-all:hover { text-decoration: underline; }
    .btn-primary {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        background: #1a1a1a;
        color: #fff;
        padding: 0.9rem 2rem;
        border-radius: 0.5rem;
        font-weight: 500;
        text-decoration: none;
        transition: background 0.3s ease;
    }
    .btn-primary:hover { background: #3a3a3a; }
    .btn-secondary {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        background: transparent;
        color: #1a1a1a;
        padding: 0.9rem 2rem;
        border: 1px solid #1a1a1a;
        border-radius: 0.5rem;
        font-weight: 500;
        text-decoration: none;
        transition: all 0.3s ease;
    }
    .btn-secondary:hover { background: #1a1a1a; color: #fff; }
    .product-card {
        background: #fff;
        border-radius: 0.75rem;
        overflow: hidden;
        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
        transition: box-shadow 0.3s ease;
    }
    .product-card:hover { box-shadow: 0 12px 32px rgba(0, 0, 0, 0.12); }
    .product-image {
        position: relative;
        aspect-ratio: 3 / 4;
        overflow: hidden;
        background: #f3f4f6;
    }
    .product-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.5s ease;
    }
    .product-card:hover .product-image img { transform: scale(1.1); }
    .badge {
        position: absolute;
        top: 0.75rem;
        left: 0.75rem;
        z-index: 10;
        background: #1a1a1a;
        color: #fff;
        font-size: 0.7rem;
        font-weight: 600;
        padding: 0.25rem 0.6rem;
        border-radius: 0.25rem;
    }
    .badge-new { background: #16a34a; }
    .discount-badge {
        position: absolute;
        top: 0.75rem;
        right: 0.75rem;
        z-index: 10;
        background: #c9a24b;
        color: #fff;
        font-size: 0.7rem;
        font-weight: 600;
        padding: 0.25rem 0.6rem;
        border-radius: 0.25rem;
    }
    .quick-add {
        position: absolute;
        bottom: 0;
        left: 0;
        right: 0;
        padding: 1rem;
        transform: translateY(100%);
        transition: transform 0.3s ease;
    }
    .product-card:hover .quick-add,
    .fluencer-card:hover .quick-add { transform: translateY(0); }
    .quick-add-button {
        width: 100%;
        background: #1a1a1a;
        color: #fff;
        padding: 0.75rem;
        border: none;
        border-radius: 0.5rem;
        font-weight: 500;
        cursor: pointer;
        transition: background 0.3s ease;
    }
    .quick-add-button:hover { background: #3a3a3a; }
    .quick-add-button.gold { background: #c9a24b; color: #1a1a1a; }
    .quick-add-button.gold:hover { background: #fff; }
    .product-body { padding: 1rem; }
    .product-rating {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 0.5rem;
        font-size: 0.85rem;
    }
    .rating-star { color: #c9a24b; }
    .rating-value { font-weight: 500; }
    .review-count { font-size: 0.75rem; color: #777; }
    .product-name {
        font-size: 0.9rem;
        font-weight: 500;
        color: #1a1a1a;
        margin: 0 0 0.5rem;
    }
    .product-card:hover .product-name { color: #c9a24b; }
    .product-price { display: flex; align-items: center; gap: 0.5rem; }
    .price { font-size: 1.05rem; font-weight: 700; color: #1a1a1a; }
    .price-original {
        font-size: 0.85rem;
        color: #9ca3af;
        text-decoration: line-through;
    }
    .page-shell {
        min-height: 100vh;
        background: #fff;
        opacity: 0;
        transition: opacity 0.5s ease;
    }
    .page-shell.loaded { opacity: 1; }
"#;

#[function_component(App)]
fn app() -> Html {
    let is_loaded = use_state(|| false);

    {
        let is_loaded = is_loaded.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(PAGE_FADE_IN_MS, move || {
                    is_loaded.set(true);
                });
                move || drop(timer)
            },
            (),
        );
    }

    html! {
        <div class={classes!("page-shell", (*is_loaded).then(|| "loaded"))}>
            <Global css={GLOBAL_CSS} />
            <Header />
            <main>
                <Hero />
                <CategoryIcons />
                <Bestsellers />
                <Bundles />
                <SkinCare />
                <Concerns />
                <GroomFluencer />
                <Occasions />
                <Glow />
                <Testimonials />
                <Promises />
                <Newsletter />
            </main>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
