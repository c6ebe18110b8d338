use web_sys::Element;
use yew::prelude::*;

use crate::catalog::BUNDLES;
use crate::reveal::controller::RevealController;
use crate::reveal::timeline::{Easing, Group, StyleProps, Timeline};

fn title_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).y(30.0)
}

fn subtitle_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).blur(8.0)
}

fn card_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).x(80.0)
}

// chained: subtitle and cards overlap the previous step
fn reveal_timeline() -> Timeline {
    Timeline::new(vec![
        Group::new("bundle-title")
            .from_style(title_hidden())
            .to_style(StyleProps::new().opacity(1.0).y(0.0))
            .duration(0.7),
        Group::new("bundle-subtitle")
            .from_style(subtitle_hidden())
            .to_style(StyleProps::new().opacity(1.0).blur(0.0))
            .duration(0.5)
            .ease(Easing::SoftOut)
            .after_prev_end(-0.4),
        Group::new("bundle-card")
            .from_style(card_hidden())
            .to_style(StyleProps::new().opacity(1.0).x(0.0))
            .duration(0.6)
            .stagger(0.15)
            .after_prev_end(-0.3),
    ])
}

#[function_component(Bundles)]
pub fn bundles() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let reveal = RevealController::arm(
                    section_ref.cast::<Element>(),
                    reveal_timeline(),
                    0.7,
                    true,
                );
                move || reveal.dispose()
            },
            (),
        );
    }

    html! {
        <section ref={section_ref} id="bundles" class="bundle-section">
            <div class="bundle-backdrop">
                <div class="bundle-glow bundle-glow-left"></div>
                <div class="bundle-glow bundle-glow-right"></div>
            </div>

            <div class="section-shell bundle-shell">
                <div class="bundle-header">
                    <h2 class="bundle-title" data-reveal="bundle-title" style={title_hidden().css()}>
                        {"Build Your Bundle"}
                    </h2>
                    <p class="bundle-subtitle" data-reveal="bundle-subtitle" style={subtitle_hidden().css()}>
                        {"Get Super Saving Deals - Starting at "}
                        <span class="bundle-price-accent">{"₹599"}</span>
                    </p>
                </div>

                <div class="bundle-grid">
                    {
                        for BUNDLES.iter().map(|bundle| html! {
                            <div
                                key={bundle.id}
                                class="bundle-card"
                                data-reveal="bundle-card"
                                style={card_hidden().css()}
                            >
                                <div
                                    class="bundle-tag"
                                    style={format!("background: {};", bundle.accent)}
                                >
                                    {bundle.icon}{" "}{bundle.tagline}
                                </div>
                                <h3 class="bundle-name">{bundle.name}</h3>
                                <ul class="bundle-items">
                                    {
                                        for bundle.items.iter().map(|item| html! {
                                            <li>{*item}</li>
                                        })
                                    }
                                </ul>
                                <div class="bundle-pricing">
                                    <span class="bundle-price">{format!("₹{}", bundle.price)}</span>
                                    <span class="bundle-original">{format!("₹{}", bundle.original_price)}</span>
                                    <span class="bundle-saving">
                                        {format!("{}% off", bundle.discount_percent())}
                                    </span>
                                </div>
                                <button class="bundle-cta">{"Build Box →"}</button>
                            </div>
                        })
                    }
                </div>

                <div class="bundle-footer">
                    <a href="#all-bundles" class="bundle-view-all">{"View All Bundles →"}</a>
                </div>
            </div>

            <style>
                {r#"
                    .bundle-section {
                        position: relative;
                        padding: 5rem 0;
                        background: #1a1a1a;
                        overflow: hidden;
                    }
                    .bundle-backdrop { position: absolute; inset: 0; pointer-events: none; }
                    .bundle-glow {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(64px);
                        background: rgba(201, 162, 75, 0.05);
                    }
                    .bundle-glow-left { top: 0; left: 25%; width: 24rem; height: 24rem; }
                    .bundle-glow-right { bottom: 0; right: 25%; width: 20rem; height: 20rem; }
                    .bundle-shell { position: relative; z-index: 10; }
                    .bundle-header { text-align: center; margin-bottom: 3rem; }
                    .bundle-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #fff;
                        margin: 0 0 0.75rem;
                    }
                    .bundle-subtitle { font-size: 1.1rem; color: #9ca3af; }
                    .bundle-price-accent { color: #c9a24b; font-weight: 600; }
                    .bundle-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }
                    .bundle-card {
                        position: relative;
                        background: rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(4px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1rem;
                        padding: 1.5rem;
                        transition: all 0.5s ease;
                    }
                    .bundle-card:hover {
                        background: rgba(255, 255, 255, 0.1);
                        margin-top: -0.75rem;
                        box-shadow: 0 0 32px rgba(201, 162, 75, 0.25);
                    }
                    .bundle-tag {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.35rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-weight: 500;
                        color: #fff;
                        margin-bottom: 1rem;
                    }
                    .bundle-name {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #fff;
                        margin: 0 0 0.5rem;
                    }
                    .bundle-items {
                        list-style: none;
                        padding: 0;
                        margin: 0 0 1.5rem;
                    }
                    .bundle-items li {
                        font-size: 0.85rem;
                        color: #9ca3af;
                        padding: 0.2rem 0 0.2rem 1rem;
                        position: relative;
                    }
                    .bundle-items li::before {
                        content: '';
                        position: absolute;
                        left: 0;
                        top: 50%;
                        width: 4px;
                        height: 4px;
                        background: #c9a24b;
                        border-radius: 9999px;
                    }
                    .bundle-pricing {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .bundle-price { font-size: 1.5rem; font-weight: 700; color: #fff; }
                    .bundle-original {
                        font-size: 0.85rem;
                        color: #6b7280;
                        text-decoration: line-through;
                    }
                    .bundle-saving { font-size: 0.75rem; font-weight: 500; color: #4ade80; }
                    .bundle-cta {
                        width: 100%;
                        background: #fff;
                        color: #1a1a1a;
                        padding: 0.75rem;
                        border: none;
                        border-radius: 0.75rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .bundle-cta:hover { background: #c9a24b; color: #fff; }
                    .bundle-footer { text-align: center; margin-top: 3rem; }
                    .bundle-view-all {
                        color: #c9a24b;
                        text-decoration: none;
                        font-weight: 500;
                        transition: color 0.2s ease;
                    }
                    .bundle-view-all:hover { color: #fff; }
                    @media (max-width: 1024px) {
                        .bundle-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .bundle-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
