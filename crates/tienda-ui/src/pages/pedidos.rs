use leptos::prelude::*;

use tienda_types::Pedido;

use crate::components::pedidos_table::PedidosTable;

#[server]
async fn get_pedidos(usuario_id: i64) -> Result<Vec<Pedido>, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.pedidos_de_usuario(usuario_id).await.map_err(to_server_error)
}

#[component]
pub fn PedidosPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (pedidos, setPedidos) = signal(Option::<Result<Vec<Pedido>, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        use crate::session::current_user_id;

        if let Some(usuarioId) = current_user_id() {
            spawn_local(async move {
                let result = get_pedidos(usuarioId).await.map_err(|e| e.to_string());
                setPedidos.set(Some(result));
            });
        }
    }

    view! {
        <div class="dashboard-header">
            <h1>"Pedidos"</h1>
            <p class="subtitle">"Compras pagadas que a\u{fa}n est\u{e1}n en camino"</p>
        </div>
        {move || {
            match pedidos.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Cargando pedidos..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"No se pudieron cargar los pedidos: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(lista)) => {
                    view! { <PedidosTable pedidos=lista vacio="No tienes pedidos en curso." /> }
                        .into_any()
                }
            }
        }}
    }
}
