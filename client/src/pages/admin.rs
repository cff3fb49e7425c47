//! Admin dashboard with tabs for gallery projects and Book Now units.
//!
//! Tables are seeded fresh on every visit and never persisted.

use leptos::prelude::*;

use crate::components::admin_tables::{ProjectTable, UnitTable};
use crate::state::admin::{AdminTab, AdminTable, seed_projects, seed_units};

#[component]
pub fn AdminPage() -> impl IntoView {
    let tab = RwSignal::new(AdminTab::default());
    let projects = RwSignal::new(AdminTable::new(seed_projects()));
    let units = RwSignal::new(AdminTable::new(seed_units()));

    view! {
        <div class="admin">
            <h1>"Admin Dashboard"</h1>
            <nav class="admin__tabs">
                {[AdminTab::Projects, AdminTab::Units]
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="admin__tab"
                                class:admin__tab--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            {move || match tab.get() {
                AdminTab::Projects => view! { <ProjectTable table=projects/> }.into_any(),
                AdminTab::Units => view! { <UnitTable table=units/> }.into_any(),
            }}
        </div>
    }
}
