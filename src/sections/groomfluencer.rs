use web_sys::Element;
use yew::prelude::*;

use crate::catalog::FLUENCER_PICKS;
use crate::reveal::controller::RevealController;
use crate::reveal::timeline::{Group, StyleProps, Timeline};

fn title_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).y(30.0)
}

fn watermark_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).scale(0.8)
}

fn card_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).rotate_y(45.0)
}

fn reveal_timeline() -> Timeline {
    Timeline::new(vec![
        Group::new("fluencer-title")
            .from_style(title_hidden())
            .to_style(StyleProps::new().opacity(1.0).y(0.0))
            .duration(0.5),
        // the watermark only ever reaches a whisper of opacity
        Group::new("fluencer-watermark")
            .from_style(watermark_hidden())
            .to_style(StyleProps::new().opacity(0.05).scale(1.0))
            .duration(1.0)
            .at(0.2),
        Group::new("fluencer-card")
            .from_style(card_hidden())
            .to_style(StyleProps::new().opacity(1.0).rotate_y(0.0))
            .duration(0.7)
            .stagger(0.1)
            .at(0.3),
    ])
}

#[function_component(GroomFluencer)]
pub fn groom_fluencer() -> Html {
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
        <section ref={section_ref} class="fluencer-section">
            <div
                class="fluencer-watermark"
                data-reveal="fluencer-watermark"
                style={watermark_hidden().css()}
            >
                {"20% OFF"}
            </div>
            <div class="fluencer-glow"></div>

            <div class="section-shell fluencer-shell">
                <div class="fluencer-header">
                    <h2 class="fluencer-title" data-reveal="fluencer-title" style={title_hidden().css()}>
                        {"Our Groom-Fluencer"}
                    </h2>
                    <p class="fluencer-offer">{"Exclusive 20% OFF"}</p>
                </div>

                <div class="fluencer-track">
                    {
                        for FLUENCER_PICKS.iter().map(|product| html! {
                            <div
                                key={product.id}
                                class="fluencer-card"
                                data-reveal="fluencer-card"
                                style={card_hidden().css()}
                            >
                                <div class="fluencer-image">
                                    {
                                        if let Some(discount) = product.discount {
                                            html! {
                                                <span class="fluencer-discount">
                                                    {format!("{}% OFF", discount)}
                                                </span>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <img src={product.image} alt={product.name} loading="lazy" />
                                    <div class="quick-add">
                                        <button class="quick-add-button gold">{"Add to Cart"}</button>
                                    </div>
                                </div>
                                <div class="fluencer-body">
                                    <div class="fluencer-rating">
                                        <span class="rating-star gold-star">{"★"}</span>
                                        <span>{product.rating}</span>
                                    </div>
                                    <h3 class="fluencer-name">{product.name}</h3>
                                    <div class="fluencer-pricing">
                                        <span class="fluencer-price">{format!("₹{}", product.price)}</span>
                                        {
                                            if let Some(original) = product.original_price {
                                                html! {
                                                    <span class="fluencer-original">
                                                        {format!("₹{}", original)}
                                                    </span>
                                                }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                </div>
                            </div>
                        })
                    }
                </div>

                <div class="fluencer-dots">
                    <button class="dot active"></button>
                    <button class="dot"></button>
                    <button class="dot"></button>
                </div>
            </div>

            <style>
                {r#"
                    .fluencer-section {
                        position: relative;
                        padding: 5rem 0;
                        background: #1a1a1a;
                        overflow: hidden;
                    }
                    .fluencer-watermark {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 12rem;
                        font-weight: 700;
                        color: #fff;
                        pointer-events: none;
                        user-select: none;
                    }
                    .fluencer-glow {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 37rem;
                        height: 37rem;
                        background: rgba(201, 162, 75, 0.1);
                        border-radius: 9999px;
                        filter: blur(64px);
                    }
                    .fluencer-shell { position: relative; z-index: 10; }
                    .fluencer-header { text-align: center; margin-bottom: 3rem; }
                    .fluencer-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #fff;
                        margin: 0 0 0.5rem;
                    }
                    .fluencer-offer { color: #c9a24b; font-size: 1.1rem; font-weight: 500; }
                    .fluencer-track {
                        display: flex;
                        gap: 1.5rem;
                        overflow-x: auto;
                        padding-bottom: 1rem;
                        scrollbar-width: none;
                        perspective: 1000px;
                    }
                    .fluencer-track::-webkit-scrollbar { display: none; }
                    .fluencer-card {
                        flex-shrink: 0;
                        width: 16rem;
                        background: rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(4px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.75rem;
                        overflow: hidden;
                        transition: background 0.5s ease;
                    }
                    .fluencer-card:hover { background: rgba(255, 255, 255, 0.1); }
                    .fluencer-image {
                        position: relative;
                        aspect-ratio: 3 / 4;
                        overflow: hidden;
                    }
                    .fluencer-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .fluencer-card:hover .fluencer-image img { transform: scale(1.1); }
                    .fluencer-discount {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        z-index: 10;
                        background: #c9a24b;
                        color: #1a1a1a;
                        font-size: 0.7rem;
                        font-weight: 700;
                        padding: 0.25rem 0.5rem;
                        border-radius: 0.25rem;
                    }
                    .fluencer-body { padding: 1rem; }
                    .fluencer-rating {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #fff;
                        font-size: 0.85rem;
                        margin-bottom: 0.5rem;
                    }
                    .gold-star { color: #c9a24b; }
                    .fluencer-name {
                        color: #fff;
                        font-size: 0.9rem;
                        font-weight: 500;
                        margin: 0 0 0.5rem;
                    }
                    .fluencer-card:hover .fluencer-name { color: #c9a24b; }
                    .fluencer-pricing { display: flex; align-items: center; gap: 0.5rem; }
                    .fluencer-price { font-size: 1.25rem; font-weight: 700; color: #fff; }
                    .fluencer-original {
                        font-size: 0.85rem;
                        color: #6b7280;
                        text-decoration: line-through;
                    }
                    .fluencer-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 1.5rem;
                    }
                    .dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        border: none;
                        background: rgba(255, 255, 255, 0.3);
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .dot:hover { background: rgba(255, 255, 255, 0.5); }
                    .dot.active { background: #c9a24b; width: 1.5rem; }
                "#}
            </style>
        </section>
    }
}
