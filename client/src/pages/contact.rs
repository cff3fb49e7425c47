//! Reservation page for the units in the cart.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::HOME_PATH;
use crate::components::cart_launcher::CartLauncher;
use crate::components::cart_panel::CartPanel;
use crate::components::contact_form::ContactForm;
use crate::state::cart::CartState;
use crate::util::session_storage::BrowserSession;

#[component]
pub fn ContactPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let navigate = use_navigate();
    let completed = RwSignal::new(false);

    Effect::new(move || {
        if completed.get() {
            cart.update(|c| c.clear(&BrowserSession));
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });

    let on_complete = Callback::new(move |()| completed.set(true));
    let on_back = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                let _ = history.back();
            }
        }
    });

    view! {
        <div class="reserve">
            <section class="page-hero">
                <h1>"Reserve Your Units"</h1>
                <p>"Tell us where to reach you and we'll confirm your selection."</p>
            </section>
            <ContactForm on_back=on_back on_complete=on_complete/>
            <CartLauncher/>
            <CartPanel/>
        </div>
    }
}
