//! Floating, draggable cart button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gesture math lives in [`LauncherState`]; this component only feeds it
//! pointer coordinates and viewport sizes. A press that never travels past
//! the drag threshold is delivered as a click and opens the cart drawer.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use crate::state::cart::CartState;
use crate::state::launcher::{DEFAULT_LAUNCHER_SIZE, LauncherState, Point, Size};

#[cfg(feature = "hydrate")]
fn viewport_size() -> Option<Size> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Size { width, height })
}

#[cfg(feature = "hydrate")]
fn element_size(el: &web_sys::HtmlElement) -> Size {
    let width = f64::from(el.offset_width());
    let height = f64::from(el.offset_height());
    if width > 0.0 && height > 0.0 { Size { width, height } } else { DEFAULT_LAUNCHER_SIZE }
}

fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point { x: f64::from(ev.client_x()), y: f64::from(ev.client_y()) }
}

#[component]
pub fn CartLauncher() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let launcher = RwSignal::new(LauncherState::default());
    let button_ref = NodeRef::<leptos::html::Button>::new();
    let mounted = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let measure = move || {
            let Some(viewport) = viewport_size() else {
                return;
            };
            let element = button_ref.get_untracked().map_or(DEFAULT_LAUNCHER_SIZE, |b| element_size(&b));
            launcher.update(|l| l.resize(viewport, element));
        };

        Effect::new(move || {
            if button_ref.get().is_some() && !mounted.get_untracked() {
                measure();
                mounted.set(true);
            }
        });

        let handle = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || handle.remove());
    }

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        launcher.update(|l| l.pointer_down(pointer_point(&ev)));
        #[cfg(feature = "hydrate")]
        {
            if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                let _ = target.set_pointer_capture(ev.pointer_id());
            }
        }
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !launcher.with_untracked(LauncherState::is_dragging) {
            return;
        }
        ev.prevent_default();
        launcher.update(|l| {
            l.pointer_move(pointer_point(&ev));
        });
    };

    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        launcher.update(LauncherState::pointer_up);
    };

    let on_click = move |_| {
        let mut open = false;
        launcher.update(|l| open = l.click());
        if open {
            cart.update(CartState::open_panel);
        }
    };

    let style = move || {
        let p = launcher.with(LauncherState::position);
        let cursor = if launcher.with(LauncherState::is_dragging) { "grabbing" } else { "grab" };
        format!("left: {}px; top: {}px; cursor: {cursor};", p.x, p.y)
    };
    let count = move || cart.with(|c| c.selection.len());

    view! {
        <button
            node_ref=button_ref
            class="cart-launcher"
            class:cart-launcher--ready=move || mounted.get()
            aria-label="Open cart"
            style=style
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
            on:click=on_click
        >
            <span class="cart-launcher__icon" aria-hidden="true">"🛒"</span>
            <Show when=move || { count() > 0 }>
                <span class="cart-launcher__badge">{count}</span>
            </Show>
        </button>
    }
}
