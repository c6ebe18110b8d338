use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::catalog::{Product, BESTSELLERS, NEW_ARRIVALS};
use crate::components::pager::Pager;
use crate::components::product_card::ProductCard;
use crate::config::SHELF_PAGE_SIZE;
use crate::reveal::controller::RevealController;
use crate::reveal::timeline::{Group, StyleProps, Timeline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Bestsellers,
    NewArrivals,
}

impl Tab {
    fn products(self) -> &'static [Product] {
        match self {
            Tab::Bestsellers => BESTSELLERS,
            Tab::NewArrivals => NEW_ARRIVALS,
        }
    }
}

/// Tab + page state for the shelf. Selecting a tab always lands on the first
/// page of that tab's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShelfState {
    tab: Tab,
    pager: Pager,
}

impl ShelfState {
    pub fn new() -> Self {
        Self {
            tab: Tab::Bestsellers,
            pager: Pager::new(BESTSELLERS.len(), SHELF_PAGE_SIZE),
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages()
    }

    pub fn select(&mut self, tab: Tab) {
        self.tab = tab;
        self.pager = Pager::new(tab.products().len(), SHELF_PAGE_SIZE);
    }

    pub fn next_page(&mut self) {
        self.pager.next();
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
    }

    pub fn visible(&self) -> &'static [Product] {
        self.pager.slice(self.tab.products())
    }
}

fn card_hidden() -> StyleProps {
    StyleProps::new().opacity(0.0).y(60.0)
}

fn reveal_timeline() -> Timeline {
    Timeline::new(vec![Group::new("shelf-card")
        .from_style(card_hidden())
        .to_style(StyleProps::new().opacity(1.0).y(0.0))
        .duration(0.6)
        .stagger(0.1)])
}

#[function_component(Bestsellers)]
pub fn bestsellers() -> Html {
    let shelf = use_state(ShelfState::new);
    let section_ref = use_node_ref();

    // re-arm whenever the visible cards change, so the fresh DOM plays again
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
            *shelf,
        );
    }

    let select_tab = |tab: Tab| {
        let shelf = shelf.clone();
        Callback::from(move |_: MouseEvent| {
            let mut state = *shelf;
            state.select(tab);
            shelf.set(state);
        })
    };

    let next_page = {
        let shelf = shelf.clone();
        Callback::from(move |_: MouseEvent| {
            let mut state = *shelf;
            state.next_page();
            shelf.set(state);
        })
    };

    let prev_page = {
        let shelf = shelf.clone();
        Callback::from(move |_: MouseEvent| {
            let mut state = *shelf;
            state.prev_page();
            shelf.set(state);
        })
    };

    let tab_class = |tab: Tab| {
        if shelf.tab() == tab {
            "shelf-tab active"
        } else {
            "shelf-tab"
        }
    };

    html! {
        <section ref={section_ref} id="bestsellers" class="shelf-section">
            <div class="section-shell">
                <div class="shelf-header">
                    <div>
                        <h2 class="section-title">{"Bestsellers"}</h2>
                        <div class="title-underline"></div>
                    </div>

                    <div class="shelf-controls">
                        <div class="shelf-tabs">
                            <button
                                class={tab_class(Tab::Bestsellers)}
                                onclick={select_tab(Tab::Bestsellers)}
                            >
                                {"Bestsellers"}
                            </button>
                            <button
                                class={tab_class(Tab::NewArrivals)}
                                onclick={select_tab(Tab::NewArrivals)}
                            >
                                {"New Arrivals"}
                            </button>
                        </div>
                        <a href="#products" class="view-all">{"View all"}</a>
                    </div>
                </div>

                <div class="shelf-grid">
                    {
                        for shelf.visible().iter().map(|product| html! {
                            <ProductCard
                                key={product.id}
                                product={*product}
                                reveal_tag="shelf-card"
                                hidden={card_hidden()}
                            />
                        })
                    }
                </div>

                <div class="shelf-pagination">
                    <button class="page-button" onclick={prev_page}>{"‹"}</button>
                    <span class="page-indicator">
                        {format!("{} / {}", shelf.page() + 1, shelf.total_pages())}
                    </span>
                    <button class="page-button" onclick={next_page}>{"›"}</button>
                </div>
            </div>

            <style>
                {r#"
                    .shelf-section { padding: 4rem 0; background: #fafaf8; }
                    .shelf-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        margin-bottom: 2.5rem;
                        flex-wrap: wrap;
                    }
                    .shelf-controls { display: flex; align-items: center; gap: 1rem; }
                    .shelf-tabs {
                        display: flex;
                        background: #fff;
                        border-radius: 9999px;
                        padding: 0.25rem;
                        border: 1px solid #e5e7eb;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                    }
                    .shelf-tab {
                        padding: 0.5rem 1rem;
                        border: none;
                        background: none;
                        border-radius: 9999px;
                        font-size: 0.85rem;
                        font-weight: 500;
                        color: #777;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .shelf-tab:hover { color: #1a1a1a; }
                    .shelf-tab.active { background: #1a1a1a; color: #fff; }
                    .shelf-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }
                    .shelf-pagination {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        margin-top: 2.5rem;
                    }
                    .page-button {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        border: 1px solid #e5e7eb;
                        background: none;
                        font-size: 1.2rem;
                        cursor: pointer;
                        transition: background 0.2s ease;
                    }
                    .page-button:hover { background: #f3f4f6; }
                    .page-indicator { font-size: 0.85rem; color: #777; }
                    @media (max-width: 1024px) {
                        .shelf-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .shelf-grid { grid-template-columns: 1fr; }
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
    fn switching_tabs_resets_to_the_first_page() {
        let mut shelf = ShelfState::new();
        shelf.next_page();
        assert_eq!(shelf.page(), 1);
        shelf.select(Tab::NewArrivals);
        assert_eq!(shelf.page(), 0);
        assert_eq!(shelf.tab(), Tab::NewArrivals);
    }

    #[test]
    fn six_bestsellers_paginate_as_two_pages_of_four() {
        let shelf = ShelfState::new();
        assert_eq!(shelf.total_pages(), 2);
        assert_eq!(shelf.visible().len(), 4);
    }

    #[test]
    fn prev_from_the_first_page_shows_the_tail_page() {
        let mut shelf = ShelfState::new();
        shelf.prev_page();
        assert_eq!(shelf.page(), 1);
        assert_eq!(shelf.visible().len(), 2);
    }

    #[test]
    fn reselecting_the_same_tab_still_resets_paging() {
        let mut shelf = ShelfState::new();
        shelf.next_page();
        shelf.select(Tab::Bestsellers);
        assert_eq!(shelf.page(), 0);
    }
}
