//! Book Now catalog: filter sidebar, unit cards, and the cart.

use leptos::prelude::*;

use crate::components::cart_launcher::CartLauncher;
use crate::components::cart_panel::CartPanel;
use crate::components::filter_sidebar::FilterSidebar;
use crate::components::product_card::ProductCard;
use crate::state::cart::CartState;
use crate::state::catalog::{FILTER_ALL, Product, filter_products, products};
use crate::util::session_storage::BrowserSession;

#[component]
pub fn BookNowPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let catalog = StoredValue::new(products());
    let filter = RwSignal::new(FILTER_ALL.to_owned());

    let visible = move || filter.with(|f| catalog.with_value(|p| filter_products(p, f)));
    let on_toggle = Callback::new(move |product: Product| {
        cart.update(|c| c.toggle(&product, &BrowserSession));
    });

    view! {
        <div class="book-now">
            <h1 class="book-now__title">"Complete your needs at the lowest price"</h1>
            <div class="book-now__layout">
                <FilterSidebar selected=filter/>
                <div class="book-now__grid">
                    <For each=visible key=|p| p.id let:product>
                        {
                            let id = product.id;
                            let selected = Signal::derive(move || cart.with(|c| c.selection.contains(id)));
                            view! { <ProductCard product=product selected=selected on_toggle=on_toggle/> }
                        }
                    </For>
                    <Show when=move || filter.with(|f| catalog.with_value(|p| filter_products(p, f).is_empty()))>
                        <p class="book-now__empty">"No units match this filter."</p>
                    </Show>
                </div>
            </div>
            <CartLauncher/>
            <CartPanel/>
        </div>
    }
}
