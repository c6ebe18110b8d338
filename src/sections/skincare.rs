use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::catalog::SKIN_CARE;
use crate::components::product_card::ProductCard;
use crate::config::CAROUSEL_SCROLL_PX;
use crate::reveal::controller::RevealController;
use crate::reveal::timeline::{Group, StyleProps, Timeline};

fn title_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).x(-60.0)
}

fn card_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).y(40.0)
}

fn reveal_timeline() -> Timeline {
    Timeline::new(vec![
        Group::new("skincare-title")
            .from_style(title_hidden())
            .to_style(StyleProps::new().opacity(1.0).x(0.0))
            .duration(0.6),
        Group::new("skincare-card")
            .from_style(card_hidden())
            .to_style(StyleProps::new().opacity(1.0).y(0.0))
            .duration(0.5)
            .stagger(0.1)
            .at(0.2),
    ])
}

fn scroll_carousel(track: &Element, delta: f64) {
    let options = ScrollToOptions::new();
    options.set_left(delta);
    options.set_behavior(ScrollBehavior::Smooth);
    track.scroll_by_with_scroll_to_options(&options);
}

#[function_component(SkinCare)]
pub fn skin_care() -> Html {
    let section_ref = use_node_ref();
    let track_ref = use_node_ref();

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

    let scroll_left = {
        let track_ref = track_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(track) = track_ref.cast::<Element>() {
                scroll_carousel(&track, -CAROUSEL_SCROLL_PX);
            }
        })
    };

    let scroll_right = {
        let track_ref = track_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(track) = track_ref.cast::<Element>() {
                scroll_carousel(&track, CAROUSEL_SCROLL_PX);
            }
        })
    };

    html! {
        <section ref={section_ref} id="skincare" class="skincare-section">
            <div class="section-shell">
                <div class="carousel-header">
                    <div data-reveal="skincare-title" style={title_hidden().css()}>
                        <h2 class="section-title">{"Skin Care"}</h2>
                        <div class="title-underline"></div>
                    </div>

                    <div class="carousel-controls">
                        <a href="#all-skincare" class="view-all">{"View all"}</a>
                        <button class="page-button" onclick={scroll_left}>{"‹"}</button>
                        <button class="page-button" onclick={scroll_right}>{"›"}</button>
                    </div>
                </div>

                <div ref={track_ref} class="carousel-track">
                    {
                        for SKIN_CARE.iter().map(|product| html! {
                            <ProductCard
                                key={product.id}
                                product={*product}
                                reveal_tag="skincare-card"
                                hidden={card_hidden()}
                                class={classes!("carousel-card")}
                            />
                        })
                    }
                </div>
            </div>

            <style>
                {r#"
                    .skincare-section { padding: 4rem 0; background: #fff; }
                    .carousel-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-bottom: 2.5rem;
                    }
                    .carousel-controls {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .carousel-track {
                        display: flex;
                        gap: 1.5rem;
                        overflow-x: auto;
                        padding-bottom: 1rem;
                        scroll-snap-type: x mandatory;
                        scrollbar-width: none;
                    }
                    .carousel-track::-webkit-scrollbar { display: none; }
                    .carousel-card {
                        flex-shrink: 0;
                        width: 18rem;
                        scroll-snap-align: start;
                    }
                "#}
            </style>
        </section>
    }
}
