use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="landing">
            <div class="landing-card">
                <h1>"eCommerce GT"</h1>
                <p class="subtitle">
                    "Compra y vende productos, con moderaci\u{f3}n y env\u{ed}os incluidos."
                </p>
                <div class="landing-actions">
                    <A href="/login" attr:class="btn btn-primary">
                        "Iniciar sesi\u{f3}n"
                    </A>
                    <A href="/register" attr:class="btn btn-outline">
                        "Crear una cuenta"
                    </A>
                </div>
            </div>
        </div>
    }
}
