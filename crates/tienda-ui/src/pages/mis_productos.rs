use leptos::prelude::*;
use leptos_router::components::A;

use tienda_types::Producto;

#[server]
async fn get_mis_productos(usuario_id: i64) -> Result<Vec<Producto>, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.productos_de_usuario(usuario_id).await.map_err(to_server_error)
}

#[server]
async fn eliminar_producto(producto_id: i64) -> Result<(), ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.eliminar_producto(producto_id).await.map_err(to_server_error)
}

fn estado_class(estado: Option<&str>) -> &'static str {
    match estado {
        Some("APROBADO") => "badge badge-ok",
        Some("RECHAZADO") => "badge badge-danger",
        _ => "badge badge-pending",
    }
}

#[component]
pub fn MisProductosPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (productos, setProductos) = signal(Option::<Result<Vec<Producto>, String>>::None);
    #[allow(unused_variables)]
    let toasts = expect_context::<crate::components::toast::ToastContext>();

    #[cfg(feature = "hydrate")]
    let fetch = {
        use wasm_bindgen_futures::spawn_local;

        use crate::session::current_user_id;

        let fetch = move || {
            let Some(usuarioId) = current_user_id() else {
                return;
            };
            spawn_local(async move {
                let result = get_mis_productos(usuarioId).await.map_err(|e| e.to_string());
                setProductos.set(Some(result));
            });
        };
        fetch();
        fetch
    };

    let handleEliminar = move |productoId: i64| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                match eliminar_producto(productoId).await {
                    Ok(()) => {
                        toasts.success("Producto eliminado");
                        fetch();
                    }
                    Err(e) => toasts.error(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = productoId;
    };

    view! {
        <div class="dashboard-header">
            <h1>"Mis productos"</h1>
            <A href="/dashboard/mis-productos/nuevo" attr:class="btn btn-primary">
                "Nuevo producto"
            </A>
        </div>
        {move || {
            match productos.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Cargando..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"No se pudieron cargar tus productos: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(items)) => {
                    view! {
                        <div class="card">
                            <table>
                                <thead>
                                    <tr>
                                        <th>"Nombre"</th>
                                        <th>"Precio"</th>
                                        <th>"Stock"</th>
                                        <th>"Estado"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {if items.is_empty() {
                                        view! {
                                            <tr>
                                                <td colspan="5">"A\u{fa}n no has publicado productos."</td>
                                            </tr>
                                        }
                                            .into_any()
                                    } else {
                                        items
                                            .into_iter()
                                            .map(|producto| {
                                                let productoId = producto.producto_id;
                                                view! {
                                                    <tr>
                                                        <td>{producto.nombre.clone()}</td>
                                                        <td>{format!("Q {:.2}", producto.precio)}</td>
                                                        <td>{producto.stock}</td>
                                                        <td>
                                                            <span class=estado_class(
                                                                producto.estado.as_deref(),
                                                            )>
                                                                {producto
                                                                    .estado
                                                                    .clone()
                                                                    .unwrap_or_else(|| "PENDIENTE".into())}
                                                            </span>
                                                        </td>
                                                        <td>
                                                            <A href=format!(
                                                                "/dashboard/mis-productos/editar/{productoId}",
                                                            )>"Editar"</A>
                                                            <button
                                                                class="btn btn-danger"
                                                                on:click=move |_| handleEliminar(productoId)
                                                            >
                                                                "Eliminar"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()
                                            .into_any()
                                    }}
                                </tbody>
                            </table>
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}
