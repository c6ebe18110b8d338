use yew::prelude::*;

use crate::catalog::Product;
use crate::reveal::timeline::StyleProps;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    /// Matched by the owning section's reveal timeline.
    pub reveal_tag: &'static str,
    /// Pre-animation style, baked into the markup so the card is hidden from
    /// the very first paint.
    pub hidden: StyleProps,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;

    html! {
        <div
            class={classes!("product-card", props.class.clone())}
            data-reveal={props.reveal_tag}
            style={props.hidden.css()}
        >
            <div class="product-image">
                {
                    if let Some(badge) = product.badge {
                        html! {
                            <span class={classes!("badge", product.is_new.then(|| "badge-new"))}>
                                {badge}
                            </span>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(discount) = product.discount {
                        html! { <span class="discount-badge">{format!("{}% off", discount)}</span> }
                    } else {
                        html! {}
                    }
                }
                <img src={product.image} alt={product.name} loading="lazy" />
                <div class="quick-add">
                    <button class="quick-add-button">{"Add to Cart"}</button>
                </div>
            </div>
            <div class="product-body">
                <div class="product-rating">
                    <span class="rating-star">{"★"}</span>
                    <span class="rating-value">{product.rating}</span>
                    {
                        if product.reviews > 0 {
                            html! {
                                <span class="review-count">
                                    {format!("| {} Reviews", product.reviews)}
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <h3 class="product-name">{product.name}</h3>
                <div class="product-price">
                    <span class="price">{format!("₹{}", product.price)}</span>
                    {
                        if let Some(original) = product.original_price {
                            html! { <span class="price-original">{format!("₹{}", original)}</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </div>
    }
}
