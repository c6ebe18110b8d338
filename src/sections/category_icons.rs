use web_sys::Element;
use yew::prelude::*;

use crate::catalog::{anchor_slug, CATEGORIES};
use crate::reveal::controller::RevealController;
use crate::reveal::timeline::{Group, StyleProps, Timeline};

fn card_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).rotate_y(90.0)
}

fn reveal_timeline() -> Timeline {
    Timeline::new(vec![Group::new("category-card")
        .from_style(card_hidden())
        .to_style(StyleProps::new().opacity(1.0).rotate_y(0.0))
        .duration(0.5)
        .stagger(0.08)])
}

#[function_component(CategoryIcons)]
pub fn category_icons() -> Html {
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
        <section ref={section_ref} class="category-section">
            <div class="section-shell">
                <div class="category-grid">
                    {
                        for CATEGORIES.iter().map(|category| html! {
                            <a
                                href={format!("#{}", anchor_slug(category.name))}
                                class="category-card"
                                data-reveal="category-card"
                                style={card_hidden().css()}
                            >
                                <div class="category-tile">
                                    <div
                                        class="category-icon"
                                        style={format!("background: {};", category.tint)}
                                    >
                                        {category.icon}
                                    </div>
                                    <span class="category-name">{category.name}</span>
                                </div>
                            </a>
                        })
                    }
                </div>
            </div>

            <style>
                {r#"
                    .category-section { padding: 4rem 0; background: #fff; }
                    .category-grid {
                        display: grid;
                        grid-template-columns: repeat(7, 1fr);
                        gap: 1rem;
                        perspective: 1000px;
                    }
                    .category-card { display: block; text-decoration: none; }
                    .category-tile {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: #fff;
                        border: 1px solid #f3f4f6;
                        transition: all 0.3s ease;
                    }
                    .category-tile:hover {
                        box-shadow: 0 12px 24px rgba(0, 0, 0, 0.08);
                        transform: translateY(-8px);
                    }
                    .category-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.4rem;
                        margin-bottom: 0.75rem;
                        transition: transform 0.3s ease;
                    }
                    .category-tile:hover .category-icon { transform: scale(1.1); }
                    .category-name {
                        font-size: 0.85rem;
                        font-weight: 500;
                        color: #1a1a1a;
                        text-align: center;
                    }
                    .category-tile:hover .category-name { color: #c9a24b; }
                    @media (max-width: 1024px) {
                        .category-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .category-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
        </section>
    }
}
