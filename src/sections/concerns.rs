use web_sys::Element;
use yew::prelude::*;

use crate::catalog::{anchor_slug, CONCERNS};
use crate::reveal::controller::RevealController;
use crate::reveal::timeline::{Easing, Group, StyleProps, Timeline};

fn title_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).y(20.0)
}

fn tile_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).scale(0.0)
}

fn reveal_timeline() -> Timeline {
    Timeline::new(vec![
        Group::new("concern-title")
            .from_style(title_hidden())
            .to_style(StyleProps::new().opacity(1.0).y(0.0))
            .duration(0.5),
        Group::new("concern-tile")
            .from_style(tile_hidden())
            .to_style(StyleProps::new().opacity(1.0).scale(1.0))
            .duration(0.4)
            .stagger(0.06)
            .ease(Easing::BackOut),
    ])
}

#[function_component(Concerns)]
pub fn concerns() -> Html {
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
        <section ref={section_ref} id="concerns" class="concern-section">
            <div class="section-shell">
                <div class="concern-header">
                    <div data-reveal="concern-title" style={title_hidden().css()}>
                        <h2 class="section-title">{"Shop by Concern"}</h2>
                        <div class="title-underline centered"></div>
                    </div>
                </div>

                <div class="concern-grid">
                    {
                        for CONCERNS.iter().map(|concern| html! {
                            <a
                                href={format!("#{}", anchor_slug(concern.name))}
                                class="concern-tile"
                                data-reveal="concern-tile"
                                style={tile_hidden().css()}
                            >
                                <img src={concern.image} alt={concern.name} loading="lazy" />
                                <div
                                    class="concern-overlay"
                                    style={format!("background: {};", concern.overlay)}
                                ></div>
                                <div class="concern-label">
                                    <h3>{concern.name}</h3>
                                    <span class="concern-cta">{"Shop Now →"}</span>
                                </div>
                            </a>
                        })
                    }
                </div>
            </div>

            <style>
                {r#"
                    .concern-section { padding: 4rem 0; background: #fafaf8; }
                    .concern-header { text-align: center; margin-bottom: 3rem; }
                    .concern-grid {
                        display: grid;
                        grid-template-columns: repeat(5, 1fr);
                        gap: 1rem;
                    }
                    .concern-tile {
                        position: relative;
                        aspect-ratio: 1;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        text-decoration: none;
                        display: block;
                    }
                    .concern-tile img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .concern-tile:hover img { transform: scale(1.1); }
                    .concern-overlay {
                        position: absolute;
                        inset: 0;
                        opacity: 0.85;
                        transition: opacity 0.3s ease;
                    }
                    .concern-tile:hover .concern-overlay { opacity: 0.95; }
                    .concern-label {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        text-align: center;
                    }
                    .concern-label h3 {
                        color: #fff;
                        font-size: 0.95rem;
                        font-weight: 600;
                        margin: 0 0 0.5rem;
                    }
                    .concern-cta {
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 0.75rem;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .concern-tile:hover .concern-cta { opacity: 1; }
                    @media (max-width: 1024px) {
                        .concern-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .concern-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
        </section>
    }
}
