//! Site header: logo, main navigation, and the sign-in entry point.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::app::{ABOUT_PATH, BOOK_NOW_PATH, DASHBOARD_PATH, GALLERY_PATH, HOME_PATH, REQUEST_DESIGN_PATH, SERVICES_PATH};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

const NAV_LINKS: &[(&str, &str)] = &[
    ("About", ABOUT_PATH),
    ("Services", SERVICES_PATH),
    ("Gallery", GALLERY_PATH),
    ("Book Now", BOOK_NOW_PATH),
    ("Get 3D Design", REQUEST_DESIGN_PATH),
];

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    // Any navigation collapses the mobile menu.
    Effect::new(move || {
        location.pathname.track();
        if ui.with_untracked(|u| u.mobile_menu_open) {
            ui.update(UiState::close_mobile_menu);
        }
    });

    let signed_in = move || auth.with(|a| a.session.is_some());
    let menu_open = move || ui.with(|u| u.mobile_menu_open);

    view! {
        <header class="site-header">
            <A href=HOME_PATH attr:class="site-header__logo">
                <img src="/images/Web-logo.jpeg" alt="ASMA" width="40" height="40"/>
                <span>"ASMA"</span>
            </A>
            <button
                class="site-header__menu-toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || menu_open().to_string()
                on:click=move |_| ui.update(UiState::toggle_mobile_menu)
            >
                "☰"
            </button>
            <nav class="site-header__nav" class:site-header__nav--open=menu_open>
                {NAV_LINKS
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <A href=*href attr:class="site-header__link">
                                {*label}
                            </A>
                        }
                    })
                    .collect_view()}
                <Show
                    when=signed_in
                    fallback=move || {
                        view! {
                            <button class="site-header__login" on:click=move |_| ui.update(UiState::open_auth_modal)>
                                "Login"
                            </button>
                        }
                    }
                >
                    <A href=DASHBOARD_PATH attr:class="site-header__login">
                        "My Account"
                    </A>
                </Show>
            </nav>
        </header>
    }
}
