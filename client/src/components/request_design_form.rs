//! 3D design request form. Submission is simulated locally.

use leptos::prelude::*;

use crate::state::contact::Governorate;
use crate::state::design_request::{DesignField, DesignRequestForm, ProjectType, SIMULATED_SUBMIT_MS};

const SUCCESS_MESSAGE: &str = "Your request has been sent! We'll contact you soon.";

#[component]
fn Input(
    form: RwSignal<DesignRequestForm>,
    field: DesignField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="design-form__field">
            <span>{label}</span>
            <input
                type=input_type
                required
                prop:value=move || form.with(|f| f.value(field))
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
pub fn RequestDesignForm() -> impl IntoView {
    let form = RwSignal::new(DesignRequestForm::default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        sent.set(false);
        if let Err(msg) = form.with_untracked(DesignRequestForm::validate) {
            error.set(Some(msg));
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SIMULATED_SUBMIT_MS).await;
            log::info!("design request accepted");
            form.set(DesignRequestForm::default());
            busy.set(false);
            sent.set(true);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = SIMULATED_SUBMIT_MS;
            form.set(DesignRequestForm::default());
            busy.set(false);
            sent.set(true);
        }
    };

    view! {
        <form class="design-form" on:submit=on_submit>
            <Input form=form field=DesignField::Name label="Full Name"/>
            <div class="design-form__row">
                <Input form=form field=DesignField::Email label="Email" input_type="email"/>
                <Input form=form field=DesignField::Phone label="Phone" input_type="tel"/>
            </div>
            <Input form=form field=DesignField::Address label="Address"/>
            <div class="design-form__row">
                <label class="design-form__field">
                    <span>"Governorate"</span>
                    <select
                        required
                        prop:value=move || form.with(|f| f.value(DesignField::Governorate))
                        on:change=move |ev| form.update(|f| f.set(DesignField::Governorate, event_target_value(&ev)))
                    >
                        <option value="">"Select governorate"</option>
                        {Governorate::ALL
                            .iter()
                            .map(|g| view! { <option value=g.label()>{g.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="design-form__field">
                    <span>"Project Type"</span>
                    <select
                        required
                        prop:value=move || form.with(|f| f.value(DesignField::ProjectType))
                        on:change=move |ev| form.update(|f| f.set(DesignField::ProjectType, event_target_value(&ev)))
                    >
                        <option value="">"Select project type"</option>
                        {ProjectType::ALL
                            .iter()
                            .map(|t| view! { <option value=t.label()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <Input form=form field=DesignField::Area label="Area (m²)"/>
            <label class="design-form__field">
                <span>"Message"</span>
                <textarea
                    rows="4"
                    required
                    prop:value=move || form.with(|f| f.value(DesignField::Message))
                    on:input=move |ev| form.update(|f| f.set(DesignField::Message, event_target_value(&ev)))
                ></textarea>
            </label>

            {move || error.get().map(|msg| view! { <p class="design-form__error" role="alert">{msg}</p> })}
            <Show when=move || sent.get()>
                <p class="design-form__success">{SUCCESS_MESSAGE}</p>
            </Show>

            <button type="submit" class="design-form__submit" disabled=move || busy.get()>
                {move || if busy.get() { "Sending..." } else { "Send Request" }}
            </button>
        </form>
    }
}
