//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_modal::AuthModal;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::{
    about::AboutPage,
    admin::AdminPage,
    book_now::BookNowPage,
    contact::ContactPage,
    contact_us::ContactUsPage,
    dashboard::DashboardPage,
    gallery::GalleryPage,
    home::HomePage,
    legal::{PrivacyPolicyPage, TermsOfServicePage},
    login::LoginPage,
    request_design::RequestDesignPage,
    services::ServicesPage,
};
use crate::state::{auth::AuthState, cart::CartState, ui::UiState};
use crate::util::session_storage::BrowserSession;

pub const HOME_PATH: &str = "/";
pub const ABOUT_PATH: &str = "/about";
pub const SERVICES_PATH: &str = "/services";
pub const GALLERY_PATH: &str = "/gallery";
pub const BOOK_NOW_PATH: &str = "/book-now";
/// Reservation form for the selected units.
pub const RESERVE_PATH: &str = "/contact";
pub const CONTACT_US_PATH: &str = "/contact-us";
pub const REQUEST_DESIGN_PATH: &str = "/request-design";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ADMIN_PATH: &str = "/admin";
pub const LOGIN_PATH: &str = "/login";
pub const PRIVACY_PATH: &str = "/privacy-policy";
pub const TERMS_PATH: &str = "/terms-of-service";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
/// Session-backed state starts empty so server and client render the same
/// markup, then rehydrates from `sessionStorage` once mounted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cart = RwSignal::new(CartState::default());
    let auth = RwSignal::new(AuthState { session: None, loading: true });
    let ui = RwSignal::new(UiState::default());

    provide_context(cart);
    provide_context(auth);
    provide_context(ui);

    Effect::new(move || {
        let store = BrowserSession;
        cart.set(CartState::load(&store));
        auth.set(AuthState::load(&store));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/asma-storefront.css"/>
        <Title text="ASMA Kitchens"/>
        <Meta name="description" content="Custom kitchen design, manufacturing and installation."/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("gallery") view=GalleryPage/>
                    <Route path=StaticSegment("book-now") view=BookNowPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("contact-us") view=ContactUsPage/>
                    <Route path=StaticSegment("request-design") view=RequestDesignPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("privacy-policy") view=PrivacyPolicyPage/>
                    <Route path=StaticSegment("terms-of-service") view=TermsOfServicePage/>
                </Routes>
            </main>
            <Footer/>
            <Show when=move || ui.get().auth_modal_open>
                <AuthModal/>
            </Show>
        </Router>
    }
}
