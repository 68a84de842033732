use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span>"eCommerce GT"</span>
            <span class="footer-muted">"Plataforma de comercio para Guatemala"</span>
        </footer>
    }
}
