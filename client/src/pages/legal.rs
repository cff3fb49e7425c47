//! Privacy policy and terms of service.

use leptos::prelude::*;

type Section = (&'static str, &'static [&'static str]);

const PRIVACY_SECTIONS: &[Section] = &[
    (
        "Information We Collect",
        &[
            "Personal information (name, email, phone number)",
            "Address and location information",
            "Design preferences and requirements",
            "Payment information",
            "Communication history",
        ],
    ),
    (
        "How We Use Your Information",
        &[
            "To provide and improve our services",
            "To communicate with you about your projects",
            "To process payments and transactions",
            "To send you updates and marketing materials (with your consent)",
            "To comply with legal obligations",
        ],
    ),
    (
        "Information Sharing",
        &[
            "We do not sell your personal information",
            "We may share information with service providers who assist in our operations",
            "We may disclose information when required by law",
            "We maintain strict confidentiality with all client information",
        ],
    ),
    (
        "Data Security",
        &[
            "We implement appropriate security measures to protect your information",
            "We regularly review and update our security practices",
            "We use encryption for sensitive data transmission",
            "We maintain secure servers and systems",
        ],
    ),
    (
        "Your Rights",
        &[
            "Access your personal information",
            "Correct inaccurate information",
            "Request deletion of your information",
            "Opt-out of marketing communications",
            "File a complaint about our data practices",
        ],
    ),
    (
        "Cookies and Tracking",
        &[
            "We use cookies to improve your browsing experience",
            "You can control cookie settings in your browser",
            "We use analytics to understand website usage",
            "We respect Do Not Track signals",
        ],
    ),
];

const TERMS_SECTIONS: &[Section] = &[
    (
        "Agreement to Terms",
        &[
            "By accessing and using ASMA services, you agree to be bound by these Terms of Service.",
            "These terms apply to all users of our website and services.",
            "We reserve the right to modify these terms at any time.",
            "Continued use of our services after changes constitutes acceptance of the new terms.",
        ],
    ),
    (
        "Services and Products",
        &[
            "We provide kitchen design and renovation services.",
            "All designs and products are subject to availability.",
            "We reserve the right to modify or discontinue any service without notice.",
            "Prices are subject to change without prior notice.",
            "Custom designs may require additional time and costs.",
        ],
    ),
    (
        "User Responsibilities",
        &[
            "Provide accurate and complete information.",
            "Maintain the security of your account.",
            "Notify us of any unauthorized access.",
            "Comply with all applicable laws and regulations.",
            "Respect intellectual property rights.",
        ],
    ),
    (
        "Payment Terms",
        &[
            "Payment terms will be specified in individual project agreements.",
            "We accept various payment methods as indicated during checkout.",
            "All prices are in Egyptian Pounds unless otherwise stated.",
            "Payment plans may be available for larger projects.",
            "Refund policies vary by service type.",
        ],
    ),
    (
        "Intellectual Property",
        &[
            "All designs and content are protected by copyright.",
            "Users may not reproduce or distribute our designs without permission.",
            "We retain rights to all design concepts and materials.",
            "Custom designs become client property upon full payment.",
            "We may use project photos for marketing with client consent.",
        ],
    ),
    (
        "Limitation of Liability",
        &[
            "We are not liable for indirect or consequential damages.",
            "Our liability is limited to the amount paid for the service.",
            "We are not responsible for delays beyond our control.",
            "Clients are responsible for maintaining their property.",
            "We provide warranties as specified in project agreements.",
        ],
    ),
    (
        "Termination",
        &[
            "We may terminate services for violation of these terms.",
            "Clients may cancel services according to project agreements.",
            "Cancellation fees may apply as specified in agreements.",
            "We reserve the right to refuse service to anyone.",
            "Termination does not affect accrued rights and obligations.",
        ],
    ),
];

#[component]
fn LegalDocument(
    title: &'static str,
    intro: &'static str,
    sections: &'static [Section],
    contact_email: &'static str,
    contact_topic: &'static str,
) -> impl IntoView {
    view! {
        <div class="legal">
            <section class="page-hero">
                <h1>{title}</h1>
                <p>{intro}</p>
            </section>
            {sections
                .iter()
                .map(|(heading, items)| {
                    view! {
                        <section class="legal__section">
                            <h2>{*heading}</h2>
                            <ul>{items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
                        </section>
                    }
                })
                .collect_view()}
            <section class="legal__contact">
                <h2>"Contact Us"</h2>
                <p>"If you have any questions about our " {contact_topic} ", please contact us at:"</p>
                <ul>
                    <li>"Email: " {contact_email}</li>
                    <li>"Phone: +20 123 456 7890"</li>
                    <li>"Address: 123 Design Street, Cairo, Egypt"</li>
                </ul>
            </section>
        </div>
    }
}

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! {
        <LegalDocument
            title="Privacy Policy"
            intro="Your privacy is important to us. Learn how we protect and manage your information."
            sections=PRIVACY_SECTIONS
            contact_email="privacy@asma.com"
            contact_topic="Privacy Policy"
        />
    }
}

#[component]
pub fn TermsOfServicePage() -> impl IntoView {
    view! {
        <LegalDocument
            title="Terms of Service"
            intro="Please read these terms carefully before using our services."
            sections=TERMS_SECTIONS
            contact_email="legal@asma.com"
            contact_topic="Terms of Service"
        />
    }
}
