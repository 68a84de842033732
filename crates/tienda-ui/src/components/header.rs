use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use tienda_auth::Role;

use crate::session::end_session;

/// Nav entries for each role's area. COMUN gets the buyer/seller
/// surface; the staff roles get their own boards.
fn links_for(role: Option<Role>) -> Vec<(&'static str, &'static str)> {
    match role {
        Some(Role::Admin) => vec![
            ("/dashboard/admin", "Panel Admin"),
            ("/dashboard/admin/usuarios", "Usuarios"),
            ("/dashboard/admin/reportes", "Reportes"),
        ],
        Some(Role::Moderador) => vec![
            ("/dashboard/moderador", "Panel"),
            ("/dashboard/moderador/solicitudes", "Solicitudes"),
            ("/dashboard/moderador/sanciones", "Sanciones"),
        ],
        Some(Role::Logistica) => vec![
            ("/dashboard/logistica", "Panel"),
            ("/dashboard/logistica/pedidos", "Pedidos en Curso"),
        ],
        Some(Role::Comun) | None => vec![
            ("/dashboard/comun", "Inicio"),
            ("/dashboard/tienda", "Tienda"),
            ("/dashboard/mis-productos", "Mis Productos"),
            ("/dashboard/carrito", "Carrito"),
            ("/dashboard/pedidos", "Pedidos"),
            ("/dashboard/mis-compras", "Mis Compras"),
            ("/dashboard/resenas", "Rese\u{f1}as"),
            ("/dashboard/perfil", "Perfil"),
        ],
    }
}

#[component]
pub fn Header(role: Option<Role>, name: String) -> impl IntoView {
    let navigate = use_navigate();
    let logout = move |_| {
        end_session();
        navigate("/login", Default::default());
    };

    view! {
        <header class="topbar">
            <A href="/dashboard" attr:class="brand">
                "eCommerce GT"
            </A>
            <nav class="topbar-links">
                {links_for(role)
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <A href=href attr:class="topbar-link">
                                {label}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="topbar-session">
                <span class="session-name">{name}</span>
                <button class="btn btn-outline" on:click=logout>
                    "Salir"
                </button>
            </div>
        </header>
    }
}
