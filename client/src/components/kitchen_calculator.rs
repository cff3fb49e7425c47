//! Home-page kitchen price estimator.
//!
//! Keystrokes that would make either field a non-decimal are rejected. A new
//! estimate is revealed only after the inputs have been still for
//! [`SETTLE_DELAY_MS`]; each edit bumps a generation counter so a stale timer
//! never overwrites a newer result.

use leptos::prelude::*;

use crate::state::estimator::{Estimate, EstimatorInputs, INVALID_DIMENSIONS_MESSAGE, SETTLE_DELAY_MS};
use crate::util::format::egp;

#[component]
pub fn KitchenCalculator() -> impl IntoView {
    let inputs = RwSignal::new(EstimatorInputs::default());
    let shown = RwSignal::new(Estimate::Pending);
    let calculating = RwSignal::new(false);
    let generation = RwSignal::new(0_u64);

    let schedule = move || {
        let estimate = inputs.with_untracked(EstimatorInputs::estimate);
        generation.update(|g| *g += 1);
        if estimate == Estimate::Pending {
            calculating.set(false);
            shown.set(Estimate::Pending);
            return;
        }
        calculating.set(true);
        #[cfg(feature = "hydrate")]
        {
            let ticket = generation.get_untracked();
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(SETTLE_DELAY_MS).await;
                if generation.get_untracked() != ticket {
                    return;
                }
                calculating.set(false);
                shown.set(estimate);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = SETTLE_DELAY_MS;
            calculating.set(false);
            shown.set(estimate);
        }
    };

    let on_width = move |ev: leptos::ev::Event| {
        let mut accepted = false;
        inputs.update(|i| accepted = i.set_width(event_target_value(&ev)));
        if accepted {
            schedule();
        }
    };
    let on_height = move |ev: leptos::ev::Event| {
        let mut accepted = false;
        inputs.update(|i| accepted = i.set_height(event_target_value(&ev)));
        if accepted {
            schedule();
        }
    };

    let result = move || {
        if calculating.get() {
            return view! { <p class="calculator__pending">"Calculating..."</p> }.into_any();
        }
        match shown.get() {
            Estimate::Pending => view! { <p class="calculator__hint">"Enter width and height in meters."</p> }.into_any(),
            Estimate::Invalid => view! { <p class="calculator__error">{INVALID_DIMENSIONS_MESSAGE}</p> }.into_any(),
            Estimate::Price(price) => view! {
                <p class="calculator__result">
                    "Estimated price: "
                    <strong>{egp(price)}</strong>
                </p>
            }
            .into_any(),
        }
    };

    view! {
        <section class="calculator">
            <h2>"Estimate Your Kitchen"</h2>
            <div class="calculator__inputs">
                <label>
                    <span>"Width (m)"</span>
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || inputs.with(|i| i.width.clone())
                        on:input=on_width
                    />
                </label>
                <label>
                    <span>"Height (m)"</span>
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || inputs.with(|i| i.height.clone())
                        on:input=on_height
                    />
                </label>
            </div>
            {result}
        </section>
    }
}
