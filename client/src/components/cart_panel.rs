//! Slide-in cart drawer listing the selected units.
//!
//! Reads and mutates the shared [`CartState`]. "Proceed" navigates to the
//! reservation page unless the visitor is already on it, in which case the
//! drawer just closes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::RESERVE_PATH;
use crate::state::cart::CartState;
use crate::util::session_storage::BrowserSession;

#[component]
pub fn CartPanel() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let location = use_location();
    let navigate = use_navigate();

    let is_open = move || cart.with(|c| c.panel_open);
    let is_empty = move || cart.with(|c| c.selection.is_empty());
    let count = move || cart.with(|c| c.selection.len());

    let close = move || cart.update(CartState::close_panel);
    let proceed = RwSignal::new(false);
    Effect::new(move || {
        if !proceed.get() {
            return;
        }
        proceed.set(false);
        let path = location.pathname.get_untracked();
        if CartState::proceed_needs_navigation(&path) {
            navigate(RESERVE_PATH, NavigateOptions::default());
        }
    });
    let on_proceed = move |_| {
        close();
        proceed.set(true);
    };

    view! {
        <Show when=is_open>
            <div class="cart-backdrop" on:click=move |_| close()>
                <aside
                    class="cart-panel"
                    role="dialog"
                    aria-label="Selected Units"
                    on:click=|ev| ev.stop_propagation()
                >
                    <header class="cart-panel__header">
                        <h2>"Selected Units"</h2>
                        <Show when=move || !is_empty()>
                            <button
                                class="cart-panel__clear"
                                on:click=move |_| cart.update(|c| c.clear(&BrowserSession))
                            >
                                "Clear Cart"
                            </button>
                        </Show>
                        <button class="cart-panel__close" aria-label="Close" on:click=move |_| close()>
                            "✕"
                        </button>
                    </header>
                    <Show
                        when=move || !is_empty()
                        fallback=|| view! { <p class="cart-panel__empty">"No units selected yet"</p> }
                    >
                        <ul class="cart-panel__items">
                            <For
                                each=move || cart.with(|c| c.selection.items().to_vec())
                                key=|p| p.id
                                let:product
                            >
                                {
                                    let id = product.id;
                                    view! {
                                        <li class="cart-panel__item">
                                            <img src=product.image.clone() alt=product.name.clone()/>
                                            <div>
                                                <p class="cart-panel__item-name">{product.name.clone()}</p>
                                                <p class="cart-panel__item-price">{product.price.clone()}</p>
                                            </div>
                                            <button
                                                class="cart-panel__remove"
                                                aria-label="Remove"
                                                on:click=move |_| cart.update(|c| c.remove(id, &BrowserSession))
                                            >
                                                "✕"
                                            </button>
                                        </li>
                                    }
                                }
                            </For>
                        </ul>
                    </Show>
                    <footer class="cart-panel__footer">
                        <p>"Total Units: " {count}</p>
                        <button class="cart-panel__proceed" disabled=is_empty on:click=on_proceed>
                            "Proceed to Contact Form"
                        </button>
                    </footer>
                </aside>
            </div>
        </Show>
    }
}
