use leptos::prelude::*;

use tienda_types::Pedido;

use crate::components::pedidos_table::PedidosTable;

#[server]
async fn get_compras(usuario_id: i64) -> Result<Vec<Pedido>, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.compras_de_usuario(usuario_id).await.map_err(to_server_error)
}

#[component]
pub fn MisComprasPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (compras, setCompras) = signal(Option::<Result<Vec<Pedido>, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        use crate::session::current_user_id;

        if let Some(usuarioId) = current_user_id() {
            spawn_local(async move {
                let result = get_compras(usuarioId).await.map_err(|e| e.to_string());
                setCompras.set(Some(result));
            });
        }
    }

    view! {
        <div class="dashboard-header">
            <h1>"Mis compras"</h1>
            <p class="subtitle">"Pedidos ya entregados"</p>
        </div>
        {move || {
            match compras.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Cargando compras..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"No se pudieron cargar tus compras: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(lista)) => {
                    view! {
                        <PedidosTable pedidos=lista vacio="A\u{fa}n no tienes compras entregadas." />
                    }
                        .into_any()
                }
            }
        }}
    }
}
