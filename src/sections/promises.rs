use web_sys::Element;
use yew::prelude::*;

use crate::reveal::controller::RevealController;
use crate::reveal::timeline::{Easing, Group, StyleProps, Timeline};

const PROMISES: &[(&str, &str, &str)] = &[
    ("🛡", "Premium Quality", "Crafted with the finest ingredients for superior results"),
    ("🌿", "Natural Ingredients", "Free from harmful chemicals like SLS and parabens"),
    ("💚", "Cruelty Free", "Never tested on animals, 100% vegan products"),
    ("🚚", "Fast Delivery", "Free shipping on orders above ₹999"),
];

fn card_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).y(30.0)
}

fn icon_hidden() -> StyleProps {
    StyleProps::new().scale(0.0)
}

fn title_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).y(15.0)
}

fn reveal_timeline() -> Timeline {
    Timeline::new(vec![
        Group::new("promise-card")
            .from_style(card_hidden())
            .to_style(StyleProps::new().opacity(1.0).y(0.0))
            .duration(0.5)
            .stagger(0.1),
        Group::new("promise-icon")
            .from_style(icon_hidden())
            .to_style(StyleProps::new().scale(1.0))
            .duration(0.6)
            .stagger(0.1)
            .ease(Easing::BackOut)
            .at(0.2),
        Group::new("promise-title")
            .from_style(title_hidden())
            .to_style(StyleProps::new().opacity(1.0).y(0.0))
            .duration(0.4)
            .stagger(0.1)
            .at(0.4),
    ])
}

#[function_component(Promises)]
pub fn promises() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let reveal = RevealController::arm(
                    section_ref.cast::<Element>(),
                    reveal_timeline(),
                    0.8,
                    true,
                );
                move || reveal.dispose()
            },
            (),
        );
    }

    html! {
        <section ref={section_ref} class="promise-section">
            <div class="section-shell">
                <div class="promise-header">
                    <h2 class="section-title">{"Brand Promises"}</h2>
                    <div class="title-underline centered"></div>
                </div>

                <div class="promise-grid">
                    {
                        for PROMISES.iter().map(|(icon, title, description)| html! {
                            <div class="promise-card" data-reveal="promise-card" style={card_hidden().css()}>
                                <div class="promise-icon" data-reveal="promise-icon" style={icon_hidden().css()}>
                                    {*icon}
                                </div>
                                <h3 class="promise-title" data-reveal="promise-title" style={title_hidden().css()}>
                                    {*title}
                                </h3>
                                <p class="promise-text">{*description}</p>
                            </div>
                        })
                    }
                </div>
            </div>

            <style>
                {r#"
                    .promise-section { padding: 4rem 0; background: #fff; }
                    .promise-header { text-align: center; margin-bottom: 3rem; }
                    .promise-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .promise-card { text-align: center; padding: 1.5rem; }
                    .promise-icon {
                        width: 4rem;
                        height: 4rem;
                        background: rgba(201, 162, 75, 0.1);
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.75rem;
                        margin: 0 auto 1rem;
                    }
                    .promise-title {
                        font-size: 1.1rem;
                        font-weight: 600;
                        color: #1a1a1a;
                        margin: 0 0 0.5rem;
                    }
                    .promise-text { font-size: 0.85rem; color: #777; }
                    @media (max-width: 1024px) {
                        .promise-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .promise-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
