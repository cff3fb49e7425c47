//! Service catalogue and design process.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::REQUEST_DESIGN_PATH;

struct Service {
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const SERVICES: [Service; 6] = [
    Service {
        title: "Kitchen Design",
        description: "Custom kitchen designs that combine functionality with aesthetic appeal.",
        features: ["3D Design Visualization", "Space Optimization", "Material Selection", "Color Coordination"],
    },
    Service {
        title: "Interior Design",
        description: "Complete interior design solutions for your kitchen and living spaces.",
        features: ["Layout Planning", "Style Consultation", "Furniture Selection", "Lighting Design"],
    },
    Service {
        title: "Custom Measurements",
        description: "Precise measurements and space planning for optimal kitchen functionality.",
        features: ["Detailed Measurements", "Space Analysis", "Traffic Flow Planning", "Storage Solutions"],
    },
    Service {
        title: "Installation",
        description: "Professional installation services for all kitchen components.",
        features: ["Cabinet Installation", "Appliance Setup", "Plumbing & Electrical", "Quality Assurance"],
    },
    Service {
        title: "Renovation",
        description: "Complete kitchen renovation services to transform your space.",
        features: ["Structural Changes", "Modern Upgrades", "Material Replacement", "Complete Makeovers"],
    },
    Service {
        title: "Finishing & Detailing",
        description: "Attention to detail in every aspect of your kitchen project.",
        features: ["Custom Finishes", "Hardware Selection", "Color Matching", "Final Touches"],
    },
];

const PROCESS: [(&str, &str); 4] = [
    (
        "Site Visit & Consultation",
        "We visit your home to assess your space, take accurate measurements, and understand your kitchen needs before starting the design process.",
    ),
    (
        "3D Kitchen Design",
        "Get a personalized 3D kitchen design tailored to your space, style, and budget. Visualize it before it's built!",
    ),
    (
        "Manufacturing & Installation",
        "We build and install your kitchen using high-quality materials and professional fitting to bring your dream kitchen to life.",
    ),
    (
        "After-Sales Support",
        "We offer continued support, maintenance, and service visits to keep your kitchen in perfect shape.",
    ),
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="services">
            <section class="page-hero">
                <h1>"Kitchen Design Services"</h1>
                <p>"Transform your kitchen into a masterpiece of design and functionality"</p>
            </section>

            <section class="card-grid">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <article class="service-card">
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <ul>{service.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}</ul>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="process">
                <h2>"Our Design Process"</h2>
                <ol class="process__steps">
                    {PROCESS
                        .iter()
                        .enumerate()
                        .map(|(i, (title, description))| {
                            view! {
                                <li class="process-step">
                                    <span class="process-step__number">{i + 1}</span>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>

            <section class="cta">
                <h2>"Ready to Transform Your Kitchen?"</h2>
                <A href=REQUEST_DESIGN_PATH attr:class="button button--primary">"Get 3D Design"</A>
            </section>
        </div>
    }
}
