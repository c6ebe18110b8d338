use web_sys::Element;
use yew::prelude::*;

use crate::catalog::VITAMIN_C;
use crate::components::product_card::ProductCard;
use crate::reveal::controller::RevealController;
use crate::reveal::timeline::{Group, StyleProps, Timeline};

fn title_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).y(30.0)
}

fn card_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).y(50.0)
}

fn reveal_timeline() -> Timeline {
    Timeline::new(vec![
        Group::new("glow-title")
            .from_style(title_hidden())
            .to_style(StyleProps::new().opacity(1.0).y(0.0))
            .duration(0.6),
        Group::new("glow-card")
            .from_style(card_hidden())
            .to_style(StyleProps::new().opacity(1.0).y(0.0))
            .duration(0.6)
            .stagger(0.1)
            .at(0.2),
    ])
}

#[function_component(Glow)]
pub fn glow() -> Html {
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
        <section ref={section_ref} id="vitamin-c" class="glow-section">
            <div class="section-shell">
                <div class="glow-header">
                    <div class="glow-heading">
                        <div class="glow-sun">{"☀️"}</div>
                        <div data-reveal="glow-title" style={title_hidden().css()}>
                            <h2 class="section-title">{"Begin Your Glow"}</h2>
                            <p class="glow-tagline">{"Vitamin C Collection for Radiant Skin"}</p>
                        </div>
                    </div>
                    <a href="#vitamin-c" class="view-all">{"View all"}</a>
                </div>

                <div class="glow-grid">
                    {
                        for VITAMIN_C.iter().map(|product| html! {
                            <ProductCard
                                key={product.id}
                                product={*product}
                                reveal_tag="glow-card"
                                hidden={card_hidden()}
                                class={classes!("glow-card")}
                            />
                        })
                    }
                </div>
            </div>

            <style>
                {r#"
                    .glow-section {
                        padding: 4rem 0;
                        background: linear-gradient(135deg, #fff7ed, #ffffff 50%, #fffbeb);
                    }
                    .glow-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-bottom: 2.5rem;
                    }
                    .glow-heading { display: flex; align-items: center; gap: 0.75rem; }
                    .glow-sun {
                        width: 3rem;
                        height: 3rem;
                        background: linear-gradient(135deg, #fb923c, #f59e0b);
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                    }
                    .glow-tagline { font-size: 0.85rem; color: #777; margin: 0.25rem 0 0; }
                    .glow-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .glow-card .badge { background: linear-gradient(90deg, #f97316, #f59e0b); }
                    .glow-card .quick-add-button { background: linear-gradient(90deg, #f97316, #f59e0b); }
                    .glow-card .product-name:hover { color: #f97316; }
                    @media (max-width: 1024px) {
                        .glow-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .glow-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
