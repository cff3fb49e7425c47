//! Editable admin tables for units and projects.
//!
//! Both render an [`AdminTable`] held in a page-local signal: rows with
//! inline edit/save/cancel and delete, followed by an "add" row bound to
//! its own draft. Rows are keyed by value so a saved edit re-renders.

use leptos::prelude::*;

use crate::state::admin::{AdminProject, AdminTable, AdminUnit, DraftSlot};

#[component]
pub fn UnitTable(table: RwSignal<AdminTable<AdminUnit>>) -> impl IntoView {
    let invalid = RwSignal::new(false);
    let attempt = move |ok: bool| invalid.set(!ok);

    let editor_cells = move |slot: DraftSlot| {
        view! {
            <td>
                <input
                    prop:value=move || table.with(|t| t.draft(slot).name.clone())
                    on:input=move |ev| table.update(|t| t.draft_mut(slot).name = event_target_value(&ev))
                />
            </td>
            <td>
                <input
                    prop:value=move || table.with(|t| t.draft(slot).price.clone())
                    on:input=move |ev| table.update(|t| t.draft_mut(slot).price = event_target_value(&ev))
                />
            </td>
            <td>
                <input
                    type="checkbox"
                    prop:checked=move || table.with(|t| t.draft(slot).available)
                    on:change=move |ev| table.update(|t| t.draft_mut(slot).available = event_target_checked(&ev))
                />
            </td>
        }
    };

    view! {
        <table class="admin-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Price"</th>
                    <th>"Available"</th>
                    <th>"Actions"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For each=move || table.with(|t| t.rows().to_vec()) key=Clone::clone let:unit>
                    {
                        let id = unit.id.clone();
                        let editing = {
                            let id = id.clone();
                            move || table.with(|t| t.is_editing(&id))
                        };
                        let on_edit = {
                            let id = id.clone();
                            move |_| table.update(|t| t.edit(&id))
                        };
                        let on_delete = move |_| table.update(|t| t.delete(&id));
                        view! {
                            <tr>
                                <Show
                                    when=editing
                                    fallback=move || {
                                        view! {
                                            <td>{unit.name.clone()}</td>
                                            <td>{unit.price.clone()}</td>
                                            <td>{if unit.available { "Yes" } else { "No" }}</td>
                                            <td>
                                                <button on:click=on_edit.clone()>"Edit"</button>
                                            </td>
                                        }
                                    }
                                >
                                    {editor_cells(DraftSlot::Edit)}
                                    <td>
                                        <button on:click=move |_| {
                                            let mut ok = false;
                                            table.update(|t| ok = t.save());
                                            attempt(ok);
                                        }>"Save"</button>
                                        <button on:click=move |_| table.update(AdminTable::cancel)>"Cancel"</button>
                                    </td>
                                </Show>
                                <td>
                                    <button class="admin-table__delete" on:click=on_delete>"Delete"</button>
                                </td>
                            </tr>
                        }
                    }
                </For>
                <Show when=move || table.with(|t| t.editing().is_none())>
                    <tr class="admin-table__add">
                        {editor_cells(DraftSlot::Add)}
                        <td>
                            <button on:click=move |_| {
                                let mut ok = false;
                                table.update(|t| ok = t.add());
                                attempt(ok);
                            }>"Add Unit"</button>
                        </td>
                    </tr>
                </Show>
            </tbody>
        </table>
        <Show when=move || invalid.get()>
            <p class="admin-table__error">"Name and price are required."</p>
        </Show>
    }
}

#[component]
pub fn ProjectTable(table: RwSignal<AdminTable<AdminProject>>) -> impl IntoView {
    let invalid = RwSignal::new(false);
    let attempt = move |ok: bool| invalid.set(!ok);

    let editor_cells = move |slot: DraftSlot| {
        view! {
            <td>
                <input
                    prop:value=move || table.with(|t| t.draft(slot).title.clone())
                    on:input=move |ev| table.update(|t| t.draft_mut(slot).title = event_target_value(&ev))
                />
            </td>
            <td>
                <input
                    prop:value=move || table.with(|t| t.draft(slot).category.clone())
                    on:input=move |ev| table.update(|t| t.draft_mut(slot).category = event_target_value(&ev))
                />
            </td>
            <td>
                <input
                    prop:value=move || table.with(|t| t.draft(slot).image_url.clone())
                    on:input=move |ev| table.update(|t| t.draft_mut(slot).image_url = event_target_value(&ev))
                />
            </td>
        }
    };

    view! {
        <table class="admin-table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Category"</th>
                    <th>"Image"</th>
                    <th>"Actions"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For each=move || table.with(|t| t.rows().to_vec()) key=Clone::clone let:project>
                    {
                        let id = project.id.clone();
                        let editing = {
                            let id = id.clone();
                            move || table.with(|t| t.is_editing(&id))
                        };
                        let on_edit = {
                            let id = id.clone();
                            move |_| table.update(|t| t.edit(&id))
                        };
                        let on_delete = move |_| table.update(|t| t.delete(&id));
                        view! {
                            <tr>
                                <Show
                                    when=editing
                                    fallback=move || {
                                        view! {
                                            <td>{project.title.clone()}</td>
                                            <td>{project.category.clone()}</td>
                                            <td>
                                                <img class="admin-table__thumb" src=project.image_url.clone() alt=project.title.clone()/>
                                            </td>
                                            <td>
                                                <button on:click=on_edit.clone()>"Edit"</button>
                                            </td>
                                        }
                                    }
                                >
                                    {editor_cells(DraftSlot::Edit)}
                                    <td>
                                        <button on:click=move |_| {
                                            let mut ok = false;
                                            table.update(|t| ok = t.save());
                                            attempt(ok);
                                        }>"Save"</button>
                                        <button on:click=move |_| table.update(AdminTable::cancel)>"Cancel"</button>
                                    </td>
                                </Show>
                                <td>
                                    <button class="admin-table__delete" on:click=on_delete>"Delete"</button>
                                </td>
                            </tr>
                        }
                    }
                </For>
                <Show when=move || table.with(|t| t.editing().is_none())>
                    <tr class="admin-table__add">
                        {editor_cells(DraftSlot::Add)}
                        <td>
                            <button on:click=move |_| {
                                let mut ok = false;
                                table.update(|t| ok = t.add());
                                attempt(ok);
                            }>"Add Project"</button>
                        </td>
                    </tr>
                </Show>
            </tbody>
        </table>
        <Show when=move || invalid.get()>
            <p class="admin-table__error">"Title, category and image URL are required."</p>
        </Show>
    }
}
