//! Reservation form that posts contact details plus the selected units.
//!
//! SYSTEM CONTEXT
//! ==============
//! The selection itself is the shared cart; this component only removes
//! entries from it. Field values, validation and the submit lifecycle live
//! in [`ContactFormState`], held in a component-local signal.
//!
//! ERROR HANDLING
//! ==============
//! Validation and transport failures both land in `SubmitStatus::Failed`
//! and render inline. The form keeps its values so the visitor can retry.

use leptos::prelude::*;

use crate::state::cart::CartState;
use crate::state::contact::{ContactField, ContactFormState, Governorate, SUBMIT_SUCCESS_MESSAGE, SubmitStatus, submit_disabled};
use crate::util::session_storage::BrowserSession;

#[component]
fn TextField(
    state: RwSignal<ContactFormState>,
    field: ContactField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="contact-form__field">
            <span>{label}</span>
            <input
                type=input_type
                required
                prop:value=move || state.with(|s| s.form.value(field))
                on:input=move |ev| state.update(|s| s.edit(field, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
pub fn ContactForm(on_back: Callback<()>, on_complete: Callback<()>) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let state = RwSignal::new(ContactFormState::default());

    let busy = move || state.with(|s| s.status.is_busy());
    let disabled = move || {
        let gov = state.with(|s| s.form.governorate);
        cart.with(|c| submit_disabled(busy(), gov, &c.selection))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let selection = cart.with_untracked(|c| c.selection.clone());
        let mut payload = None;
        state.update(|s| payload = s.begin_submit(&selection));
        let Some(submission) = payload else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::submit_contact(&submission).await;
            if let Err(e) = &outcome {
                log::warn!("contact submission failed: {e}");
            }
            state.update(|s| s.finish_submit(&outcome));
            if outcome.is_ok() {
                log::info!("{SUBMIT_SUCCESS_MESSAGE}");
                on_complete.run(());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (submission, on_complete);
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <section class="contact-form__units">
                <h2>"Selected Units"</h2>
                <Show
                    when=move || cart.with(|c| !c.selection.is_empty())
                    fallback=|| view! { <p class="contact-form__no-units">"No units selected."</p> }
                >
                    <ul>
                        <For each=move || cart.with(|c| c.selection.items().to_vec()) key=|p| p.id let:product>
                            {
                                let id = product.id;
                                view! {
                                    <li class="contact-form__unit">
                                        <span>{product.name.clone()}</span>
                                        <span>{product.price.clone()}</span>
                                        <button
                                            type="button"
                                            on:click=move |_| cart.update(|c| c.remove(id, &BrowserSession))
                                        >
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            }
                        </For>
                    </ul>
                </Show>
            </section>

            <div class="contact-form__row">
                <TextField state=state field=ContactField::FirstName label="First Name"/>
                <TextField state=state field=ContactField::LastName label="Last Name"/>
            </div>
            <div class="contact-form__row">
                <TextField state=state field=ContactField::Email label="Email" input_type="email"/>
                <TextField state=state field=ContactField::Phone label="Phone" input_type="tel"/>
            </div>
            <TextField state=state field=ContactField::Address label="Address"/>

            <label class="contact-form__field">
                <span>"Governorate"</span>
                <select
                    required
                    prop:value=move || state.with(|s| s.form.value(ContactField::Governorate))
                    on:change=move |ev| state.update(|s| s.edit(ContactField::Governorate, event_target_value(&ev)))
                >
                    <option value="">"Select governorate"</option>
                    {Governorate::ALL
                        .iter()
                        .map(|g| view! { <option value=g.label()>{g.label()}</option> })
                        .collect_view()}
                </select>
            </label>

            <label class="contact-form__field">
                <span>"Message"</span>
                <textarea
                    rows="4"
                    required
                    prop:value=move || state.with(|s| s.form.message.clone())
                    on:input=move |ev| state.update(|s| s.edit(ContactField::Message, event_target_value(&ev)))
                ></textarea>
            </label>

            {move || {
                state
                    .with(|s| s.status.error().map(str::to_owned))
                    .map(|msg| view! { <p class="contact-form__error" role="alert">{msg}</p> })
            }}
            <Show when=move || state.with(|s| s.status == SubmitStatus::Sent)>
                <p class="contact-form__success">{SUBMIT_SUCCESS_MESSAGE}</p>
            </Show>

            <div class="contact-form__actions">
                <button type="button" class="contact-form__back" on:click=move |_| on_back.run(())>
                    "Back"
                </button>
                <button type="submit" class="contact-form__submit" disabled=disabled>
                    {move || if busy() { "Sending..." } else { "Submit" }}
                </button>
            </div>
        </form>
    }
}
