//! Unit-type filter list for the Book Now page.

use leptos::prelude::*;

use crate::state::catalog::FILTER_OPTIONS;

#[component]
pub fn FilterSidebar(selected: RwSignal<String>) -> impl IntoView {
    view! {
        <aside class="filter-sidebar">
            <h2 class="filter-sidebar__title">"Unit Types"</h2>
            <ul class="filter-sidebar__list">
                {FILTER_OPTIONS
                    .iter()
                    .map(|label| {
                        let label = *label;
                        view! {
                            <li>
                                <button
                                    class="filter-sidebar__option"
                                    class:filter-sidebar__option--active=move || selected.get() == label
                                    on:click=move |_| selected.set(label.to_owned())
                                >
                                    {label}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
