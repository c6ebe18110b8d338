use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::catalog::{occasion_products, OCCASIONS};
use crate::components::product_card::ProductCard;
use crate::reveal::controller::RevealController;
use crate::reveal::timeline::{Group, StyleProps, Timeline};

fn title_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).y(30.0)
}

fn card_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).scale(0.9)
}

fn reveal_timeline() -> Timeline {
    Timeline::new(vec![
        Group::new("occasion-title")
            .from_style(title_hidden())
            .to_style(StyleProps::new().opacity(1.0).y(0.0))
            .duration(0.5),
        Group::new("occasion-card")
            .from_style(card_hidden())
            .to_style(StyleProps::new().opacity(1.0).scale(1.0))
            .duration(0.4)
            .stagger(0.08)
            .at(0.2),
    ])
}

#[function_component(Occasions)]
pub fn occasions() -> Html {
    let active = use_state(|| OCCASIONS[0].id);
    let section_ref = use_node_ref();

    // the grid re-renders on occasion change, so the reveal re-arms with it
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
            *active,
        );
    }

    html! {
        <section ref={section_ref} id="occasions" class="occasion-section">
            <div class="section-shell">
                <div class="occasion-header">
                    <div data-reveal="occasion-title" style={title_hidden().css()}>
                        <h2 class="section-title">{"Shop by Occasion"}</h2>
                        <div class="title-underline centered"></div>
                    </div>
                </div>

                <div class="occasion-tabs">
                    {
                        for OCCASIONS.iter().map(|occasion| {
                            let is_active = *active == occasion.id;
                            let onclick = {
                                let active = active.clone();
                                Callback::from(move |_: MouseEvent| {
                                    active.set(occasion.id);
                                })
                            };
                            html! {
                                <button
                                    class={classes!("occasion-tab", is_active.then(|| "active"))}
                                    {onclick}
                                >
                                    <span class="occasion-icon">{occasion.icon}</span>
                                    {occasion.name}
                                </button>
                            }
                        })
                    }
                </div>

                <div class="occasion-grid">
                    {
                        for occasion_products(*active).iter().map(|product| html! {
                            <ProductCard
                                key={product.id}
                                product={*product}
                                reveal_tag="occasion-card"
                                hidden={card_hidden()}
                            />
                        })
                    }
                </div>
            </div>

            <style>
                {r#"
                    .occasion-section { padding: 4rem 0; background: #fff; }
                    .occasion-header { text-align: center; margin-bottom: 2.5rem; }
                    .occasion-tabs {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-bottom: 2.5rem;
                    }
                    .occasion-tab {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.25rem;
                        border: none;
                        border-radius: 9999px;
                        background: #f3f4f6;
                        color: #555;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .occasion-tab:hover { background: #e5e7eb; }
                    .occasion-tab.active {
                        background: #1a1a1a;
                        color: #fff;
                        box-shadow: 0 8px 20px rgba(0, 0, 0, 0.2);
                    }
                    .occasion-icon { font-size: 1rem; }
                    .occasion-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }
                    @media (max-width: 1024px) {
                        .occasion-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .occasion-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
