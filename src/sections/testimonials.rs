use web_sys::Element;
use yew::prelude::*;

use crate::catalog::{Testimonial, TESTIMONIALS};
use crate::reveal::controller::RevealController;
use crate::reveal::timeline::{Group, StyleProps, Timeline};

fn title_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).y(30.0)
}

fn card_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).x(50.0)
}

fn reveal_timeline() -> Timeline {
    Timeline::new(vec![
        Group::new("testimonial-title")
            .from_style(title_hidden())
            .to_style(StyleProps::new().opacity(1.0).y(0.0))
            .duration(0.5),
        Group::new("testimonial-card")
            .from_style(card_hidden())
            .to_style(StyleProps::new().opacity(1.0).x(0.0))
            .duration(0.6)
            .stagger(0.15)
            .at(0.2),
    ])
}

fn testimonial_card(testimonial: &Testimonial) -> Html {
    html! {
        <div
            class="testimonial-card"
            data-reveal="testimonial-card"
            style={card_hidden().css()}
        >
            <div class="quote-mark">{"❝"}</div>
            <div class="testimonial-stars">
                { for (0..testimonial.rating).map(|_| html! { <span>{"★"}</span> }) }
            </div>
            <p class="testimonial-text">{format!("\"{}\"", testimonial.text)}</p>
            <div class="testimonial-author">
                <div class="author-avatar">{testimonial.avatar}</div>
                <div>
                    <div class="author-name">
                        {testimonial.name}
                        { if testimonial.verified { html! { <span class="verified-mark">{"✓"}</span> } } else { html!{} } }
                    </div>
                    <span class="author-sub">{"Verified Buyer"}</span>
                </div>
            </div>
            <div class="testimonial-product">
                <img src={testimonial.product_image} alt={testimonial.product} loading="lazy" />
                <span>{testimonial.product}</span>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
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
        <section ref={section_ref} class="testimonial-section">
            <div class="section-shell">
                <div class="testimonial-header">
                    <div data-reveal="testimonial-title" style={title_hidden().css()}>
                        <h2 class="section-title">{"Why 2M+ Customers Love Us"}</h2>
                        <div class="title-underline centered"></div>
                    </div>
                </div>

                <div class="marquee">
                    <div class="marquee-fade marquee-fade-left"></div>
                    <div class="marquee-fade marquee-fade-right"></div>
                    <div class="marquee-track">
                        // the list is doubled so the loop is seamless
                        { for TESTIMONIALS.iter().map(testimonial_card) }
                        { for TESTIMONIALS.iter().map(testimonial_card) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .testimonial-section {
                        padding: 4rem 0;
                        background: #fafaf8;
                        overflow: hidden;
                    }
                    .testimonial-header { text-align: center; margin-bottom: 3rem; }
                    .marquee { position: relative; }
                    .marquee-fade {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 5rem;
                        z-index: 10;
                        pointer-events: none;
                    }
                    .marquee-fade-left {
                        left: 0;
                        background: linear-gradient(90deg, #fafaf8, transparent);
                    }
                    .marquee-fade-right {
                        right: 0;
                        background: linear-gradient(270deg, #fafaf8, transparent);
                    }
                    .marquee-track {
                        display: flex;
                        gap: 1.5rem;
                        width: max-content;
                        animation: marquee-scroll 40s linear infinite;
                    }
                    .marquee-track:hover { animation-play-state: paused; }
                    @keyframes marquee-scroll {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                    .testimonial-card {
                        flex-shrink: 0;
                        width: 20rem;
                        background: #fff;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
                    }
                    .quote-mark { font-size: 2rem; color: rgba(201, 162, 75, 0.3); }
                    .testimonial-stars { color: #c9a24b; margin-bottom: 1rem; }
                    .testimonial-text {
                        font-size: 0.9rem;
                        color: #555;
                        margin-bottom: 1.5rem;
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .author-avatar {
                        width: 2.5rem;
                        height: 2.5rem;
                        background: #1a1a1a;
                        color: #fff;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 600;
                    }
                    .author-name {
                        font-weight: 600;
                        color: #1a1a1a;
                        display: flex;
                        align-items: center;
                        gap: 0.25rem;
                    }
                    .verified-mark { color: #22c55e; font-size: 0.85rem; }
                    .author-sub { font-size: 0.75rem; color: #777; }
                    .testimonial-product {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding-top: 1rem;
                        border-top: 1px solid #f3f4f6;
                    }
                    .testimonial-product img {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.5rem;
                        object-fit: cover;
                    }
                    .testimonial-product span { font-size: 0.75rem; color: #777; }
                "#}
            </style>
        </section>
    }
}
