use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};

use tienda_auth::Role;

use crate::components::layout::DashboardLayout;
use crate::components::protected::Guarded;
use crate::components::toast::ToastProvider;
use crate::pages::admin::AdminPanel;
use crate::pages::admin_reportes::AdminReportesPage;
use crate::pages::admin_usuario_form::AdminUsuarioFormPage;
use crate::pages::admin_usuarios::AdminUsuariosPage;
use crate::pages::carrito::CarritoPage;
use crate::pages::comun::ComunPanel;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::logistica::LogisticaPanel;
use crate::pages::mis_compras::MisComprasPage;
use crate::pages::mis_productos::MisProductosPage;
use crate::pages::moderador::ModeradorPanel;
use crate::pages::pedidos::PedidosPage;
use crate::pages::pedidos_logistica::PedidosLogisticaPage;
use crate::pages::perfil::PerfilPage;
use crate::pages::producto::ProductoPage;
use crate::pages::producto_form::ProductoFormPage;
use crate::pages::redirect::DashboardRedirect;
use crate::pages::register::RegisterPage;
use crate::pages::resenas::ResenasPage;
use crate::pages::sanciones::SancionesPage;
use crate::pages::solicitudes::SolicitudesPage;
use crate::pages::tarjetas::TarjetasPage;
use crate::pages::tienda::TiendaPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Authentication-only gate plus the dashboard chrome. The index route
/// uses this so the role redirect runs for any signed-in session.
#[component]
fn Area(children: ChildrenFn) -> impl IntoView {
    let children = StoredValue::new(children);
    view! {
        <Guarded>
            <DashboardLayout>{children.with_value(|children| children())}</DashboardLayout>
        </Guarded>
    }
}

/// Role-restricted gate plus the dashboard chrome.
#[component]
fn AreaDe(role: Role, children: ChildrenFn) -> impl IntoView {
    let children = StoredValue::new(children);
    view! {
        <Guarded allowed=vec![role]>
            <DashboardLayout>{children.with_value(|children| children())}</DashboardLayout>
        </Guarded>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/tienda-console.css" />
        <Title text="eCommerce GT" />
        <ToastProvider>
            <Router>
                <Routes fallback=|| view! { <p>"P\u{e1}gina no encontrada."</p> }.into_any()>
                    <Route path=StaticSegment("") view=HomePage />
                    <Route path=StaticSegment("login") view=LoginPage />
                    <Route path=StaticSegment("register") view=RegisterPage />

                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <Area><DashboardRedirect /></Area> }
                    />

                    // ==== Usuario comun ====
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("comun"))
                        view=|| view! { <AreaDe role=Role::Comun><ComunPanel /></AreaDe> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("tienda"))
                        view=|| view! { <AreaDe role=Role::Comun><TiendaPage /></AreaDe> }
                    />
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            StaticSegment("producto"),
                            ParamSegment("id"),
                        )
                        view=|| view! { <AreaDe role=Role::Comun><ProductoPage /></AreaDe> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("mis-productos"))
                        view=|| view! { <AreaDe role=Role::Comun><MisProductosPage /></AreaDe> }
                    />
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            StaticSegment("mis-productos"),
                            StaticSegment("nuevo"),
                        )
                        view=|| view! { <AreaDe role=Role::Comun><ProductoFormPage /></AreaDe> }
                    />
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            StaticSegment("mis-productos"),
                            StaticSegment("editar"),
                            ParamSegment("productoId"),
                        )
                        view=|| view! { <AreaDe role=Role::Comun><ProductoFormPage /></AreaDe> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("carrito"))
                        view=|| view! { <AreaDe role=Role::Comun><CarritoPage /></AreaDe> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("tarjetas"))
                        view=|| view! { <AreaDe role=Role::Comun><TarjetasPage /></AreaDe> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("pedidos"))
                        view=|| view! { <AreaDe role=Role::Comun><PedidosPage /></AreaDe> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("mis-compras"))
                        view=|| view! { <AreaDe role=Role::Comun><MisComprasPage /></AreaDe> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("resenas"))
                        view=|| view! { <AreaDe role=Role::Comun><ResenasPage /></AreaDe> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("perfil"))
                        view=|| view! { <AreaDe role=Role::Comun><PerfilPage /></AreaDe> }
                    />

                    // ==== Moderador ====
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("moderador"))
                        view=|| view! { <AreaDe role=Role::Moderador><ModeradorPanel /></AreaDe> }
                    />
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            StaticSegment("moderador"),
                            StaticSegment("solicitudes"),
                        )
                        view=|| view! { <AreaDe role=Role::Moderador><SolicitudesPage /></AreaDe> }
                    />
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            StaticSegment("moderador"),
                            StaticSegment("sanciones"),
                        )
                        view=|| view! { <AreaDe role=Role::Moderador><SancionesPage /></AreaDe> }
                    />

                    // ==== Logistica ====
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("logistica"))
                        view=|| view! { <AreaDe role=Role::Logistica><LogisticaPanel /></AreaDe> }
                    />
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            StaticSegment("logistica"),
                            StaticSegment("pedidos"),
                        )
                        view=|| {
                            view! { <AreaDe role=Role::Logistica><PedidosLogisticaPage /></AreaDe> }
                        }
                    />

                    // ==== Administrador ====
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("admin"))
                        view=|| view! { <AreaDe role=Role::Admin><AdminPanel /></AreaDe> }
                    />
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            StaticSegment("admin"),
                            StaticSegment("usuarios"),
                        )
                        view=|| view! { <AreaDe role=Role::Admin><AdminUsuariosPage /></AreaDe> }
                    />
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            StaticSegment("admin"),
                            StaticSegment("usuarios"),
                            StaticSegment("nuevo"),
                        )
                        view=|| view! { <AreaDe role=Role::Admin><AdminUsuarioFormPage /></AreaDe> }
                    />
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            StaticSegment("admin"),
                            StaticSegment("usuarios"),
                            StaticSegment("editar"),
                            ParamSegment("usuarioId"),
                        )
                        view=|| view! { <AreaDe role=Role::Admin><AdminUsuarioFormPage /></AreaDe> }
                    />
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            StaticSegment("admin"),
                            StaticSegment("reportes"),
                        )
                        view=|| view! { <AreaDe role=Role::Admin><AdminReportesPage /></AreaDe> }
                    />
                </Routes>
            </Router>
        </ToastProvider>
    }
}
