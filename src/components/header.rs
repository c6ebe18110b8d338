use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::catalog::{anchor_slug, NAV_ITEMS};
use crate::config::HEADER_SOLID_AFTER_PX;

#[function_component(Header)]
pub fn header() -> Html {
    let is_scrolled = use_state(|| false);
    let menu_open = use_state(|| false);
    let active_dropdown = use_state(|| None::<&'static str>);
    let cart_count = use_state(|| 0u32);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Ok(scroll_y) = window_clone.scroll_y() {
                        is_scrolled.set(scroll_y > HEADER_SOLID_AFTER_PX);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <>
            <div class="top-banner">
                {"Free shipping on orders above ₹999 | Use code: GENTLEMAN"}
            </div>

            <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
                <div class="header-content">
                    <a href="#" class="site-logo">
                        <span class="logo-serif">{"Gentleman's"}</span>
                        <span class="logo-gold">{" Essentials"}</span>
                    </a>

                    <nav class="desktop-nav">
                        {
                            for NAV_ITEMS.iter().map(|item| {
                                let has_dropdown = !item.dropdown.is_empty();
                                let open = *active_dropdown == Some(item.name);
                                let on_enter = {
                                    let active_dropdown = active_dropdown.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        if has_dropdown {
                                            active_dropdown.set(Some(item.name));
                                        }
                                    })
                                };
                                let on_leave = {
                                    let active_dropdown = active_dropdown.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        active_dropdown.set(None);
                                    })
                                };
                                html! {
                                    <div
                                        class="nav-item"
                                        onmouseenter={on_enter}
                                        onmouseleave={on_leave}
                                    >
                                        <a href={item.href} class="nav-link">
                                            {item.name}
                                            { if has_dropdown { html! { <span class="nav-caret">{"▾"}</span> } } else { html!{} } }
                                        </a>
                                        {
                                            if has_dropdown && open {
                                                html! {
                                                    <div class="nav-dropdown">
                                                        {
                                                            for item.dropdown.iter().map(|sub_item| html! {
                                                                <a
                                                                    href={format!("#{}", anchor_slug(sub_item))}
                                                                    class="dropdown-link"
                                                                >
                                                                    {*sub_item}
                                                                </a>
                                                            })
                                                        }
                                                    </div>
                                                }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                }
                            })
                        }
                    </nav>

                    <div class="header-icons">
                        <button class="icon-button" title="Search">{"🔍"}</button>
                        <button class="icon-button hide-mobile" title="Account">{"👤"}</button>
                        <button class="icon-button cart-button" title="Bag">
                            {"🛍"}
                            {
                                if *cart_count > 0 {
                                    html! { <span class="cart-count">{*cart_count}</span> }
                                } else {
                                    html! {}
                                }
                            }
                        </button>
                        <button class="icon-button burger-menu" onclick={toggle_menu}>
                            { if *menu_open { "✕" } else { "☰" } }
                        </button>
                    </div>
                </div>
            </header>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            <div class="mobile-backdrop" onclick={close_menu.clone()}></div>
                            <nav class="mobile-panel">
                                {
                                    for NAV_ITEMS.iter().map(|item| html! {
                                        <a
                                            href={item.href}
                                            class="mobile-link"
                                            onclick={close_menu.clone()}
                                        >
                                            {item.name}
                                        </a>
                                    })
                                }
                            </nav>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .top-banner {
                        background: #1a1a1a;
                        color: #fff;
                        text-align: center;
                        padding: 0.5rem 1rem;
                        font-size: 0.75rem;
                        font-weight: 500;
                        position: relative;
                        z-index: 60;
                    }
                    .site-header {
                        position: fixed;
                        top: 2rem;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.25rem 0;
                        background: transparent;
                        transition: all 0.5s ease;
                    }
                    .site-header.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                        padding: 0.75rem 0;
                    }
                    .header-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .site-logo {
                        font-size: 1.4rem;
                        font-weight: 700;
                        color: #1a1a1a;
                        text-decoration: none;
                        letter-spacing: -0.02em;
                    }
                    .logo-serif { font-family: Georgia, serif; font-style: italic; }
                    .logo-gold { color: #c9a24b; }
                    .desktop-nav {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-item { position: relative; }
                    .nav-link {
                        color: #1a1a1a;
                        text-decoration: none;
                        font-size: 0.9rem;
                        font-weight: 500;
                        padding: 0.5rem 0;
                        display: inline-flex;
                        align-items: center;
                        gap: 0.25rem;
                    }
                    .nav-link:hover { color: #c9a24b; }
                    .nav-caret { font-size: 0.6rem; }
                    .nav-dropdown {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        margin-top: 0.5rem;
                        width: 14rem;
                        background: #fff;
                        border: 1px solid #f0f0f0;
                        border-radius: 0.5rem;
                        box-shadow: 0 12px 32px rgba(0, 0, 0, 0.12);
                        padding: 0.5rem 0;
                        animation: dropdown-fade 0.2s ease-out;
                    }
                    @keyframes dropdown-fade {
                        from { opacity: 0; transform: translateY(-6px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .dropdown-link {
                        display: block;
                        padding: 0.5rem 1rem;
                        font-size: 0.85rem;
                        color: #555;
                        text-decoration: none;
                    }
                    .dropdown-link:hover { background: #fafafa; color: #c9a24b; }
                    .header-icons {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .icon-button {
                        background: none;
                        border: none;
                        font-size: 1.1rem;
                        padding: 0.5rem;
                        border-radius: 9999px;
                        cursor: pointer;
                        position: relative;
                    }
                    .icon-button:hover { background: #f3f4f6; }
                    .cart-count {
                        position: absolute;
                        top: -0.15rem;
                        right: -0.15rem;
                        width: 1.25rem;
                        height: 1.25rem;
                        background: #c9a24b;
                        color: #fff;
                        font-size: 0.7rem;
                        font-weight: 700;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .burger-menu { display: none; }
                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        z-index: 40;
                    }
                    .mobile-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                    }
                    .mobile-panel {
                        position: absolute;
                        top: 6rem;
                        left: 0;
                        right: 0;
                        background: #fff;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.15);
                        padding: 1rem 0;
                        animation: panel-slide 0.25s ease-out;
                    }
                    @keyframes panel-slide {
                        from { opacity: 0; transform: translateY(-12px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .mobile-link {
                        display: block;
                        padding: 0.75rem 1.5rem;
                        color: #1a1a1a;
                        text-decoration: none;
                    }
                    .mobile-link:hover { background: #fafafa; color: #c9a24b; }
                    @media (max-width: 1024px) {
                        .desktop-nav { display: none; }
                        .burger-menu { display: block; }
                    }
                    @media (max-width: 640px) {
                        .hide-mobile { display: none; }
                    }
                "#}
            </style>
        </>
    }
}
