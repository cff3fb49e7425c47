//! Company profile page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::CONTACT_US_PATH;

const STATS: [(&str, &str); 4] = [
    ("500", "Projects Completed"),
    ("15", "Years Experience"),
    ("1000", "Happy Clients"),
    ("50", "Team Members"),
];

const FEATURES: [(&str, &str); 4] = [
    (
        "Expert Design",
        "Our team of experienced designers creates stunning kitchen layouts that maximize space and functionality.",
    ),
    (
        "Quality Craftsmanship",
        "We use only the finest materials and employ skilled craftsmen to ensure exceptional quality.",
    ),
    (
        "Innovative Solutions",
        "We stay ahead of trends and incorporate innovative solutions to create modern, efficient kitchens.",
    ),
    (
        "Customer Satisfaction",
        "Your satisfaction is our priority. We work closely with you to bring your vision to life.",
    ),
];

const VALUES: [(&str, &str); 4] = [
    (
        "Uncompromising Quality",
        "We are committed to using premium materials and precise techniques to deliver kitchens that stand the test of time.",
    ),
    (
        "Innovation in Design",
        "We continuously explore new trends and technologies to offer creative and functional design solutions.",
    ),
    (
        "Client-Centric Approach",
        "Your vision is our priority. We listen, collaborate, and tailor our services to meet your unique needs and desires.",
    ),
    (
        "Integrity & Transparency",
        "We conduct our business with honesty, fairness, and full transparency in pricing and project progress.",
    ),
];

fn cards(items: &'static [(&'static str, &'static str)]) -> impl IntoView {
    items
        .iter()
        .map(|(title, description)| {
            view! {
                <article class="feature-card">
                    <h3>{*title}</h3>
                    <p>{*description}</p>
                </article>
            }
        })
        .collect_view()
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about">
            <section class="page-hero">
                <h1>"About ASMA Kitchens"</h1>
                <p>"Crafting exceptional kitchen experiences since 2008"</p>
            </section>

            <section class="about__stats">
                {STATS
                    .iter()
                    .map(|(number, label)| {
                        view! {
                            <div class="stat-card">
                                <span class="stat-card__number">{*number}<span class="accent">"+"</span></span>
                                <span class="stat-card__label">{*label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="about__story">
                <h2>"Our Story"</h2>
                <p>
                    "Founded in 2008, ASMA Kitchens has been at the forefront of kitchen design and renovation in the region. "
                    "We combine traditional craftsmanship with modern innovation to create kitchens that are both beautiful and functional."
                </p>
                <p>
                    "Our commitment to quality and customer satisfaction has made us the preferred choice for homeowners "
                    "looking to transform their kitchens into spaces they love."
                </p>
            </section>

            <section class="about__features">
                <h2>"Why Choose Us"</h2>
                <div class="card-grid">{cards(&FEATURES)}</div>
            </section>

            <section class="about__values">
                <h2>"Our Core Values"</h2>
                <div class="card-grid">{cards(&VALUES)}</div>
            </section>

            <section class="cta">
                <h2>"Ready to Start Your Kitchen Project?"</h2>
                <p>"Let's create your dream kitchen together. Schedule a free consultation today."</p>
                <A href=CONTACT_US_PATH attr:class="button button--primary">"Contact Us"</A>
            </section>
        </div>
    }
}
