//! Site footer with contact shortcuts and legal links.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{ABOUT_PATH, BOOK_NOW_PATH, CONTACT_US_PATH, PRIVACY_PATH, SERVICES_PATH, TERMS_PATH};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__brand">
                <h3>"ASMA"</h3>
                <p>"Custom kitchens designed, manufactured and installed across Egypt."</p>
            </div>
            <nav class="site-footer__links">
                <A href=ABOUT_PATH>"About"</A>
                <A href=SERVICES_PATH>"Services"</A>
                <A href=BOOK_NOW_PATH>"Book Now"</A>
                <A href=CONTACT_US_PATH>"Contact Us"</A>
            </nav>
            <nav class="site-footer__legal">
                <A href=PRIVACY_PATH>"Privacy Policy"</A>
                <A href=TERMS_PATH>"Terms of Service"</A>
            </nav>
            <p class="site-footer__copy">"© ASMA. All rights reserved."</p>
        </footer>
    }
}
