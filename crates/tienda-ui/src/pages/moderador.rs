use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ModeradorPanel() -> impl IntoView {
    view! {
        <div class="dashboard-header">
            <h1>"Panel de moderaci\u{f3}n"</h1>
            <p class="subtitle">"Solicitudes de publicaci\u{f3}n y sanciones"</p>
        </div>
        <div class="panel-grid">
            <A href="/dashboard/moderador/solicitudes" attr:class="panel-card">
                <h2>"Solicitudes"</h2>
                <p>"Productos pendientes de aprobaci\u{f3}n"</p>
            </A>
            <A href="/dashboard/moderador/sanciones" attr:class="panel-card">
                <h2>"Sanciones"</h2>
                <p>"Historial y registro de sanciones"</p>
            </A>
        </div>
    }
}
