//! Book Now catalog card with a select/deselect toggle.

use leptos::prelude::*;

use crate::state::catalog::Product;

#[component]
pub fn ProductCard(
    product: Product,
    #[prop(into)] selected: Signal<bool>,
    on_toggle: Callback<Product>,
) -> impl IntoView {
    let toggle_product = product.clone();
    view! {
        <article class="product-card" class:product-card--selected=move || selected.get()>
            <img class="product-card__image" src=product.image.clone() alt=product.name.clone() loading="lazy"/>
            <div class="product-card__body">
                <h3 class="product-card__name">{product.name.clone()}</h3>
                <p class="product-card__description">{product.description.clone()}</p>
                <div class="product-card__footer">
                    <span class="product-card__price">{product.price.clone()}</span>
                    <button
                        class="product-card__toggle"
                        aria-pressed=move || selected.get().to_string()
                        on:click=move |_| on_toggle.run(toggle_product.clone())
                    >
                        {move || if selected.get() { "Selected" } else { "Select" }}
                    </button>
                </div>
            </div>
        </article>
    }
}
