//! "Get 3D Design" request page.

use leptos::prelude::*;

use crate::components::request_design_form::RequestDesignForm;

#[component]
pub fn RequestDesignPage() -> impl IntoView {
    view! {
        <div class="request-design">
            <section class="page-hero">
                <h1>"Request Your 3D Kitchen Design"</h1>
                <p>"Share your space and style. Our designers will prepare a personalized 3D design."</p>
            </section>
            <RequestDesignForm/>
        </div>
    }
}
