use web_sys::Element;
use yew::prelude::*;

use crate::reveal::controller::RevealController;
use crate::reveal::timeline::{Easing, Group, StyleProps, Timeline};

const STATS: &[(&str, &str)] = &[
    ("2M+", "Happy Customers"),
    ("200+", "Premium Products"),
    ("4.8", "Average Rating"),
];

fn eyebrow_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).y(20.0)
}

fn title_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).y(40.0)
}

fn subtitle_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).blur(10.0)
}

fn cta_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).scale(0.9)
}

fn image_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).x(100.0).rotate_y(25.0)
}

fn decor_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).scale(0.0)
}

fn hero_timeline() -> Timeline {
    Timeline::new(vec![
        Group::new("hero-eyebrow")
            .from_style(eyebrow_hidden())
            .to_style(StyleProps::new().opacity(1.0).y(0.0))
            .duration(0.6),
        Group::new("hero-title-line")
            .from_style(title_hidden())
            .to_style(StyleProps::new().opacity(1.0).y(0.0))
            .duration(0.8)
            .stagger(0.1)
            .after_prev_end(-0.3),
        Group::new("hero-subtitle")
            .from_style(subtitle_hidden())
            .to_style(StyleProps::new().opacity(1.0).blur(0.0))
            .duration(0.6)
            .ease(Easing::SoftOut)
            .after_prev_end(-0.4),
        Group::new("hero-cta")
            .from_style(cta_hidden())
            .to_style(StyleProps::new().opacity(1.0).scale(1.0))
            .duration(0.5)
            .ease(Easing::BackOut)
            .after_prev_end(-0.2),
        Group::new("hero-image")
            .from_style(image_hidden())
            .to_style(StyleProps::new().opacity(1.0).x(0.0).rotate_y(0.0))
            .duration(1.0)
            .after_prev_end(-0.8),
        Group::new("decor-shape")
            .from_style(decor_hidden())
            .to_style(StyleProps::new().opacity(1.0).scale(1.0))
            .duration(0.6)
            .stagger(0.1)
            .ease(Easing::BackOut)
            .after_prev_end(-0.5),
    ])
    .with_delay(0.3)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let section_ref = use_node_ref();

    // the hero is in view on mount, so the initial check fires the timeline
    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let reveal =
                    RevealController::arm(section_ref.cast::<Element>(), hero_timeline(), 0.8, true);
                move || reveal.dispose()
            },
            (),
        );
    }

    html! {
        <section ref={section_ref} class="hero">
            <div class="hero-decor">
                <div class="decor-shape decor-float decor-a" data-reveal="decor-shape" style={decor_hidden().css()}></div>
                <div class="decor-shape decor-float decor-b" data-reveal="decor-shape" style={decor_hidden().css()}></div>
                <div class="decor-shape decor-float decor-c" data-reveal="decor-shape" style={decor_hidden().css()}></div>
            </div>

            <div class="hero-inner">
                <div class="hero-copy">
                    <div class="hero-eyebrow" data-reveal="hero-eyebrow" style={eyebrow_hidden().css()}>
                        {"✨ NEW COLLECTION 2026"}
                    </div>

                    <h1 class="hero-title">
                        <span class="hero-title-line" data-reveal="hero-title-line" style={title_hidden().css()}>
                            {"Elevate Your"}
                        </span>
                        <span class="hero-title-line hero-title-accent" data-reveal="hero-title-line" style={title_hidden().css()}>
                            {"Grooming Ritual"}
                        </span>
                    </h1>

                    <p class="hero-subtitle" data-reveal="hero-subtitle" style={subtitle_hidden().css()}>
                        {"Premium essentials crafted for the modern gentleman. \
                          Discover our curated collection of fragrances, skincare, and grooming tools."}
                    </p>

                    <div class="hero-cta" data-reveal="hero-cta" style={cta_hidden().css()}>
                        <a href="#bestsellers" class="btn-primary">{"Shop Now →"}</a>
                        <a href="#bundles" class="btn-secondary">{"Explore Bundles"}</a>
                    </div>

                    <div class="hero-stats">
                        {
                            for STATS.iter().map(|(value, label)| html! {
                                <div class="hero-stat">
                                    <div class="stat-value">{*value}</div>
                                    <div class="stat-label">{*label}</div>
                                </div>
                            })
                        }
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="hero-image" data-reveal="hero-image" style={image_hidden().css()}>
                        <div class="hero-glow"></div>
                        <img src="/assets/hero-product.jpg" alt="Premium Grooming Collection" />
                        <div class="hero-badge-card">
                            <div class="hero-badge-icon">{"✨"}</div>
                            <div>
                                <div class="hero-badge-title">{"Premium Quality"}</div>
                                <div class="hero-badge-sub">{"100% Authentic"}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        background: linear-gradient(135deg, #f7f7f5, #ffffff 50%, #f7f7f5);
                        padding-top: 6rem;
                    }
                    .hero-decor {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                    }
                    .decor-shape { position: absolute; border-radius: 9999px; }
                    .decor-a {
                        top: 8rem; left: 2.5rem;
                        width: 5rem; height: 5rem;
                        background: rgba(201, 162, 75, 0.1);
                        filter: blur(24px);
                    }
                    .decor-b {
                        top: 12rem; right: 5rem;
                        width: 8rem; height: 8rem;
                        background: rgba(201, 162, 75, 0.05);
                        filter: blur(40px);
                        animation-delay: 1s;
                    }
                    .decor-c {
                        bottom: 8rem; left: 25%;
                        width: 4rem; height: 4rem;
                        background: rgba(26, 26, 26, 0.05);
                        filter: blur(24px);
                        animation-delay: 0.5s;
                    }
                    @keyframes decor-drift {
                        0%, 100% { margin-top: 0; }
                        50% { margin-top: -20px; }
                    }
                    .decor-float { animation: decor-drift 3s ease-in-out infinite; }
                    .hero-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        width: 100%;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .hero-copy { position: relative; z-index: 10; }
                    .hero-eyebrow {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: rgba(201, 162, 75, 0.1);
                        color: #c9a24b;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.85rem;
                        font-weight: 500;
                        margin-bottom: 1.5rem;
                    }
                    .hero-title {
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        font-weight: 700;
                        color: #1a1a1a;
                        line-height: 1.1;
                        margin: 0 0 1.5rem;
                    }
                    .hero-title-line { display: block; }
                    .hero-title-accent {
                        font-family: Georgia, serif;
                        font-style: italic;
                        color: #c9a24b;
                    }
                    .hero-subtitle {
                        font-size: 1.15rem;
                        color: #555;
                        max-width: 36rem;
                        margin-bottom: 2rem;
                    }
                    .hero-cta { display: flex; gap: 1rem; }
                    .hero-stats {
                        margin-top: 3rem;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        max-width: 28rem;
                    }
                    .stat-value { font-size: 1.75rem; font-weight: 700; color: #1a1a1a; }
                    .stat-label { font-size: 0.8rem; color: #777; }
                    .hero-visual {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        perspective: 1000px;
                    }
                    .hero-image { position: relative; }
                    .hero-image img {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        max-width: 28rem;
                        border-radius: 1rem;
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.25);
                    }
                    .hero-glow {
                        position: absolute;
                        inset: 0;
                        background: rgba(201, 162, 75, 0.2);
                        border-radius: 9999px;
                        filter: blur(48px);
                        transform: scale(0.75);
                        animation: glow-pulse 4s ease-in-out infinite;
                    }
                    @keyframes glow-pulse {
                        0%, 100% { opacity: 0.6; }
                        50% { opacity: 1; }
                    }
                    .hero-badge-card {
                        position: absolute;
                        bottom: -1rem;
                        left: -1rem;
                        z-index: 20;
                        background: #fff;
                        border-radius: 0.75rem;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.15);
                        padding: 1rem;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        animation: decor-drift 3s ease-in-out infinite;
                    }
                    .hero-badge-icon {
                        width: 3rem;
                        height: 3rem;
                        background: rgba(201, 162, 75, 0.1);
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                    }
                    .hero-badge-title { font-size: 0.85rem; font-weight: 600; color: #1a1a1a; }
                    .hero-badge-sub { font-size: 0.75rem; color: #777; }
                    @media (max-width: 1024px) {
                        .hero-inner { grid-template-columns: 1fr; text-align: center; }
                        .hero-cta { justify-content: center; }
                        .hero-stats { margin-left: auto; margin-right: auto; }
                        .hero-subtitle { margin-left: auto; margin-right: auto; }
                    }
                "#}
            </style>
        </section>
    }
}
