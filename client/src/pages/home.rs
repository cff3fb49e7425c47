//! Landing page: hero, process steps, gallery preview, estimator, and CTA.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{BOOK_NOW_PATH, GALLERY_PATH, REQUEST_DESIGN_PATH};
use crate::components::kitchen_calculator::KitchenCalculator;

struct Step {
    title: &'static str,
    description: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        title: "Consultation",
        description: "We visit your home to assess your space, take accurate measurements, and understand your kitchen needs.",
    },
    Step {
        title: "3D Kitchen Design",
        description: "Get a personalized 3D kitchen design tailored to your space, style, and budget.",
    },
    Step {
        title: "Installation",
        description: "We build and install your kitchen using high-quality materials and professional fitting.",
    },
    Step {
        title: "Maintenance",
        description: "We offer continued support, maintenance, and service visits to keep your kitchen in perfect shape.",
    },
];

const PREVIEW_IMAGES: [&str; 3] = ["/images/Modern-Kitchen.png", "/images/login.jpg", "/images/Web-title.png"];

#[component]
pub fn HomePage() -> impl IntoView {
    let active_step = RwSignal::new(0_usize);

    view! {
        <div class="home">
            <section class="hero" style="background-image: url('/images/Modern-Kitchen.png');">
                <div class="hero__content">
                    <h1>"Your dream kitchen starts here"</h1>
                    <h3>"Transform your cooking space with our expert design and installation services"</h3>
                    <A href=REQUEST_DESIGN_PATH attr:class="button button--primary">
                        "Start Your Journey"
                    </A>
                </div>
            </section>

            <section class="steps">
                <h2>"We make high quality modern kitchens people love to spend all time in"</h2>
                <div class="steps__grid">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(idx, step)| {
                            view! {
                                <button
                                    class="steps__card"
                                    class:steps__card--active=move || active_step.get() == idx
                                    on:click=move |_| active_step.set(idx)
                                >
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="gallery-preview">
                <h2>"Our Recent Work"</h2>
                <div class="gallery-preview__grid">
                    {PREVIEW_IMAGES
                        .iter()
                        .map(|src| view! { <img src=*src alt="Kitchen project" loading="lazy"/> })
                        .collect_view()}
                </div>
                <A href=GALLERY_PATH attr:class="button">"View Gallery"</A>
            </section>

            <KitchenCalculator/>

            <section class="cta">
                <h2>"Ready to Transform Your Kitchen into a Masterpiece ?"</h2>
                <div class="cta__actions">
                    <A href=REQUEST_DESIGN_PATH attr:class="button button--primary">"Get 3D Design"</A>
                    <A href=BOOK_NOW_PATH attr:class="button">"Book Now"</A>
                </div>
            </section>
        </div>
    }
}
