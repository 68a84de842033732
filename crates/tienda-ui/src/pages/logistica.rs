use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LogisticaPanel() -> impl IntoView {
    view! {
        <div class="dashboard-header">
            <h1>"Panel de log\u{ed}stica"</h1>
            <p class="subtitle">"Seguimiento de env\u{ed}os"</p>
        </div>
        <div class="panel-grid">
            <A href="/dashboard/logistica/pedidos" attr:class="panel-card">
                <h2>"Pedidos en curso"</h2>
                <p>"Programar fechas de entrega y marcar entregados"</p>
            </A>
        </div>
    }
}
