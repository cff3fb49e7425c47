//! General enquiries page. Nothing leaves the browser.

use leptos::prelude::*;

use crate::state::contact_us::{EnquiryForm, EnquiryStatus, SUCCESS_BANNER_MS};

#[component]
pub fn ContactUsPage() -> impl IntoView {
    let form = RwSignal::new(EnquiryForm::default());
    let status = RwSignal::new(None::<EnquiryStatus>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut outcome = EnquiryStatus::Error;
        form.update(|f| outcome = f.submit());
        status.set(Some(outcome));
        if outcome != EnquiryStatus::Success {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SUCCESS_BANNER_MS).await;
            if status.get_untracked() == Some(EnquiryStatus::Success) {
                status.set(None);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = SUCCESS_BANNER_MS;
        }
    };

    view! {
        <div class="contact-us">
            <section class="page-hero">
                <h1>"Contact Us"</h1>
                <p>"Questions about a project? Send us a message."</p>
            </section>
            <div class="contact-us__layout">
                <aside class="contact-us__details">
                    <p>"Email: info@asma.com"</p>
                    <p>"Phone: +20 123 456 7890"</p>
                    <p>"Address: 123 Design Street, Cairo, Egypt"</p>
                </aside>
                <form class="contact-us__form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Your name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="Your email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Subject (optional)"
                        prop:value=move || form.with(|f| f.subject.clone())
                        on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                    />
                    <textarea
                        rows="5"
                        placeholder="Your message"
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                    <button type="submit" class="button button--primary">"Send Message"</button>
                    {move || match status.get() {
                        Some(EnquiryStatus::Success) => {
                            Some(view! { <p class="contact-us__success">"Thank you! Your message has been sent."</p> }.into_any())
                        }
                        Some(EnquiryStatus::Error) => {
                            Some(view! { <p class="contact-us__error" role="alert">"Please fill in your name, email and message."</p> }.into_any())
                        }
                        None => None,
                    }}
                </form>
            </div>
        </div>
    }
}
