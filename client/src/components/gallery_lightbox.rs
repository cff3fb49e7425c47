//! Full-screen image viewer for the gallery.

use leptos::prelude::*;

use crate::state::gallery::Lightbox;
use crate::util::page_lock::{LockMode, PageLock};

/// Rendered only while `lightbox` is open; holds a scroll lock for its
/// lifetime.
#[component]
pub fn GalleryLightbox(lightbox: RwSignal<Lightbox>) -> impl IntoView {
    let lock = PageLock::acquire(LockMode::Scroll);
    on_cleanup(move || drop(lock));

    let close = move || lightbox.update(Lightbox::close);
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    });

    let selected = move || lightbox.with(|l| l.selected.clone().unwrap_or_default());

    view! {
        <div class="lightbox" on:click=move |_| close()>
            <div
                class="lightbox__content"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <button class="lightbox__close" aria-label="Close" on:click=move |_| close()>
                    "✕"
                </button>
                <img class="lightbox__image" src=selected alt="Selected project"/>
                <div class="lightbox__thumbnails">
                    <For each=move || lightbox.with(|l| l.thumbnails.clone()) key=Clone::clone let:thumb>
                        {
                            let src = thumb.clone();
                            let active = thumb.clone();
                            view! {
                                <button
                                    class="lightbox__thumb"
                                    class:lightbox__thumb--active=move || lightbox.with(|l| l.selected.as_deref() == Some(active.as_str()))
                                    on:click=move |_| lightbox.update(|l| l.show(src.clone()))
                                >
                                    <img src=thumb.clone() alt="Related project"/>
                                </button>
                            }
                        }
                    </For>
                </div>
            </div>
        </div>
    }
}
