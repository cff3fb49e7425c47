//! Design gallery with category tabs and a lightbox.

use leptos::prelude::*;

use crate::components::gallery_lightbox::GalleryLightbox;
use crate::state::gallery::{GalleryCategory, Lightbox, filter_projects, projects, related_images};

#[component]
pub fn GalleryPage() -> impl IntoView {
    let all = StoredValue::new(projects());
    let category = RwSignal::new(GalleryCategory::All);
    let lightbox = RwSignal::new(Lightbox::default());

    let visible = move || all.with_value(|p| filter_projects(p, category.get()));

    view! {
        <div class="gallery">
            <section class="page-hero">
                <h1>"Design Gallery"</h1>
                <p>"Explore kitchens, bathrooms and living spaces we have brought to life."</p>
            </section>

            <nav class="gallery__tabs">
                {GalleryCategory::ALL
                    .iter()
                    .map(|tab| {
                        let tab = *tab;
                        view! {
                            <button
                                class="gallery__tab"
                                class:gallery__tab--active=move || category.get() == tab
                                on:click=move |_| category.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="gallery__grid">
                <For each=visible key=|p| p.id.clone() let:project>
                    {
                        let image = project.image_url.clone();
                        view! {
                            <figure class="gallery__item" on:click=move |_| lightbox.update(|l| l.open(image.clone(), related_images()))>
                                <img src=project.image_url.clone() alt=project.title.clone() loading="lazy"/>
                                <figcaption>
                                    <span>{project.title.clone()}</span>
                                    <span class="gallery__category">{project.category.clone()}</span>
                                </figcaption>
                            </figure>
                        }
                    }
                </For>
            </div>

            <Show when=move || lightbox.with(Lightbox::is_open)>
                <GalleryLightbox lightbox=lightbox/>
            </Show>
        </div>
    }
}
