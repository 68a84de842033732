use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AdminPanel() -> impl IntoView {
    view! {
        <div class="dashboard-header">
            <h1>"Panel de administraci\u{f3}n"</h1>
            <p class="subtitle">"Cuentas de empleados y reportes de ventas"</p>
        </div>
        <div class="panel-grid">
            <A href="/dashboard/admin/usuarios" attr:class="panel-card">
                <h2>"Usuarios"</h2>
                <p>"Crear, editar y activar cuentas de empleados"</p>
            </A>
            <A href="/dashboard/admin/reportes" attr:class="panel-card">
                <h2>"Reportes"</h2>
                <p>"Ventas y productos m\u{e1}s vendidos por rango de fechas"</p>
            </A>
        </div>
    }
}
