use gloo_timers::callback::Timeout;
use web_sys::{Element, HtmlInputElement};
use yew::events::{InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::config::NEWSLETTER_RESET_MS;
use crate::reveal::controller::RevealController;
use crate::reveal::timeline::{Group, StyleProps, Timeline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupStatus {
    Idle,
    Submitted,
}

/// Next status for a submit attempt, or `None` when the attempt is ignored.
/// Blank and whitespace-only input never leaves Idle and schedules nothing.
pub fn submit_transition(status: SignupStatus, email: &str) -> Option<SignupStatus> {
    match status {
        SignupStatus::Idle if !email.trim().is_empty() => Some(SignupStatus::Submitted),
        _ => None,
    }
}

fn content_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).x(-50.0)
}

fn image_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).x(50.0)
}

fn reveal_timeline() -> Timeline {
    Timeline::new(vec![
        Group::new("newsletter-content")
            .from_style(content_hidden())
            .to_style(StyleProps::new().opacity(1.0).x(0.0))
            .duration(0.7),
        Group::new("newsletter-image")
            .from_style(image_hidden())
            .to_style(StyleProps::new().opacity(1.0).x(0.0))
            .duration(0.7)
            .at(0.2),
    ])
}

#[function_component(Newsletter)]
pub fn newsletter() -> Html {
    let email = use_state(String::new);
    let status = use_state(|| SignupStatus::Idle);
    let reset_timer = use_mut_ref(|| None::<Timeout>);
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        let reset_timer = reset_timer.clone();
        use_effect_with_deps(
            move |_| {
                let reveal = RevealController::arm(
                    section_ref.cast::<Element>(),
                    reveal_timeline(),
                    0.8,
                    true,
                );
                move || {
                    // unmount cancels both the reveal and a pending reset
                    reveal.dispose();
                    reset_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let status = status.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(next) = submit_transition(*status, &email) {
                status.set(next);
                let email = email.clone();
                let status = status.clone();
                let timer = Timeout::new(NEWSLETTER_RESET_MS, move || {
                    status.set(SignupStatus::Idle);
                    email.set(String::new());
                });
                *reset_timer.borrow_mut() = Some(timer);
            }
        })
    };

    let submitted = *status == SignupStatus::Submitted;

    html! {
        <section ref={section_ref} class="newsletter-section">
            <div class="section-shell">
                <div class="newsletter-panel">
                    <div
                        class="newsletter-content"
                        data-reveal="newsletter-content"
                        style={content_hidden().css()}
                    >
                        <div class="newsletter-eyebrow">{"✉ Newsletter"}</div>
                        <h2 class="newsletter-title">
                            {"Get Exclusive Deals & Access to New Launches"}
                        </h2>
                        <p class="newsletter-copy">
                            {"Subscribe to our newsletter and be the first to know about special offers, \
                              new products, and grooming tips."}
                        </p>

                        <form class="newsletter-form" {onsubmit}>
                            <input
                                type="email"
                                placeholder="Enter your email"
                                value={(*email).clone()}
                                {oninput}
                                disabled={submitted}
                            />
                            <button
                                type="submit"
                                class={classes!("newsletter-submit", submitted.then(|| "confirmed"))}
                                disabled={submitted}
                            >
                                { if submitted { "✓ Subscribed!" } else { "Subscribe →" } }
                            </button>
                        </form>

                        <p class="newsletter-footnote">
                            {"By subscribing, you agree to our Privacy Policy and consent to receive updates."}
                        </p>
                    </div>

                    <div
                        class="newsletter-image"
                        data-reveal="newsletter-image"
                        style={image_hidden().css()}
                    >
                        <img src="/assets/newsletter-image.jpg" alt="Grooming Lifestyle" loading="lazy" />
                        <div class="newsletter-image-fade"></div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .newsletter-section { padding: 4rem 0; background: #fafaf8; }
                    .newsletter-panel {
                        background: #1a1a1a;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                    }
                    .newsletter-content {
                        padding: 4rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                    }
                    .newsletter-eyebrow {
                        color: #c9a24b;
                        font-size: 0.85rem;
                        font-weight: 500;
                        margin-bottom: 1rem;
                    }
                    .newsletter-title {
                        font-size: 2rem;
                        font-weight: 700;
                        color: #fff;
                        margin: 0 0 1rem;
                    }
                    .newsletter-copy { color: #9ca3af; margin-bottom: 2rem; }
                    .newsletter-form { display: flex; gap: 1rem; }
                    .newsletter-form input {
                        flex: 1;
                        padding: 1rem 1.25rem;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 0.75rem;
                        color: #fff;
                        font-size: 0.95rem;
                        outline: none;
                        transition: border-color 0.2s ease;
                    }
                    .newsletter-form input:focus { border-color: #c9a24b; }
                    .newsletter-form input::placeholder { color: #6b7280; }
                    .newsletter-submit {
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: #c9a24b;
                        color: #1a1a1a;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .newsletter-submit:hover { background: #fff; }
                    .newsletter-submit.confirmed { background: #22c55e; color: #fff; }
                    .newsletter-footnote {
                        font-size: 0.75rem;
                        color: #6b7280;
                        margin-top: 1rem;
                    }
                    .newsletter-image { position: relative; }
                    .newsletter-image img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .newsletter-image-fade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(90deg, #1a1a1a, rgba(26, 26, 26, 0.5), transparent);
                    }
                    @media (max-width: 1024px) {
                        .newsletter-panel { grid-template-columns: 1fr; }
                        .newsletter-image { display: none; }
                        .newsletter-content { padding: 2.5rem; }
                        .newsletter-form { flex-direction: column; }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_moves_idle_to_submitted() {
        assert_eq!(
            submit_transition(SignupStatus::Idle, "arjun@example.com"),
            Some(SignupStatus::Submitted)
        );
    }

    #[test]
    fn blank_input_is_ignored() {
        assert_eq!(submit_transition(SignupStatus::Idle, ""), None);
        assert_eq!(submit_transition(SignupStatus::Idle, "   "), None);
    }

    #[test]
    fn resubmitting_while_confirmed_is_ignored() {
        assert_eq!(
            submit_transition(SignupStatus::Submitted, "arjun@example.com"),
            None
        );
    }
}
