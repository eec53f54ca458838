use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found text-center py-12">
            <h1 class="text-3xl font-bold">"Page not found !"</h1>
        </div>
    }
}
