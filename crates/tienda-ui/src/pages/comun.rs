use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ComunPanel() -> impl IntoView {
    view! {
        <div class="dashboard-header">
            <h1>"Mi panel"</h1>
            <p class="subtitle">"Compra en la tienda o administra tus publicaciones"</p>
        </div>
        <div class="panel-grid">
            <A href="/dashboard/tienda" attr:class="panel-card">
                <h2>"Tienda"</h2>
                <p>"Productos disponibles de otros vendedores"</p>
            </A>
            <A href="/dashboard/mis-productos" attr:class="panel-card">
                <h2>"Mis productos"</h2>
                <p>"Publica y edita tus art\u{ed}culos"</p>
            </A>
            <A href="/dashboard/carrito" attr:class="panel-card">
                <h2>"Carrito"</h2>
                <p>"Revisa y paga tu compra"</p>
            </A>
            <A href="/dashboard/pedidos" attr:class="panel-card">
                <h2>"Pedidos"</h2>
                <p>"Env\u{ed}os en curso"</p>
            </A>
            <A href="/dashboard/mis-compras" attr:class="panel-card">
                <h2>"Mis compras"</h2>
                <p>"Historial de compras entregadas"</p>
            </A>
            <A href="/dashboard/perfil" attr:class="panel-card">
                <h2>"Perfil"</h2>
                <p>"Datos de tu cuenta"</p>
            </A>
        </div>
    }
}
