use leptos::prelude::*;
use leptos_router::components::A;

use tienda_types::Producto;

#[server]
async fn get_disponibles(usuario_id: i64) -> Result<Vec<Producto>, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.tienda_disponibles(usuario_id).await.map_err(to_server_error)
}

#[server]
async fn agregar_al_carrito(
    usuario_id: i64,
    producto_id: i64,
    cantidad: i64,
) -> Result<(), ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?
        .agregar_al_carrito(usuario_id, producto_id, cantidad)
        .await
        .map_err(to_server_error)
}

#[component]
pub fn TiendaPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (productos, setProductos) = signal(Option::<Result<Vec<Producto>, String>>::None);
    #[allow(unused_variables)]
    let toasts = expect_context::<crate::components::toast::ToastContext>();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        use crate::session::current_user_id;

        if let Some(usuarioId) = current_user_id() {
            spawn_local(async move {
                let result = get_disponibles(usuarioId).await.map_err(|e| e.to_string());
                setProductos.set(Some(result));
            });
        }
    }

    let handleAgregar = move |productoId: i64| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            use crate::session::current_user_id;

            let Some(usuarioId) = current_user_id() else {
                return;
            };
            spawn_local(async move {
                match agregar_al_carrito(usuarioId, productoId, 1).await {
                    Ok(()) => toasts.success("Producto agregado al carrito"),
                    Err(e) => toasts.error(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = productoId;
    };

    view! {
        <div class="dashboard-header">
            <h1>"Tienda"</h1>
            <p class="subtitle">"Productos aprobados de otros vendedores"</p>
        </div>
        {move || {
            match productos.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Cargando productos..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"No se pudo cargar la tienda: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(items)) if items.is_empty() => {
                    view! {
                        <div class="card">
                            <p>"No hay productos disponibles por ahora."</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(items)) => {
                    items
                        .into_iter()
                        .map(|producto| {
                            let productoId = producto.producto_id;
                            view! {
                                <div class="card producto-card">
                                    <div class="producto-info">
                                        <A href=format!(
                                            "/dashboard/producto/{productoId}",
                                        )>{producto.nombre.clone()}</A>
                                        <span class="producto-categoria">
                                            {producto.categoria.clone().unwrap_or_default()}
                                        </span>
                                    </div>
                                    <div class="producto-meta">
                                        <span class="producto-precio">
                                            {format!("Q {:.2}", producto.precio)}
                                        </span>
                                        <span class="producto-stock">
                                            {format!("{} en stock", producto.stock)}
                                        </span>
                                        <button
                                            class="btn btn-primary"
                                            on:click=move |_| handleAgregar(productoId)
                                        >
                                            "Agregar al carrito"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }
        }}
    }
}
