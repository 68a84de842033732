use leptos::prelude::*;

use tienda_types::Producto;

#[server]
async fn get_pendientes() -> Result<Vec<Producto>, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.productos_pendientes().await.map_err(to_server_error)
}

#[server]
async fn aprobar(producto_id: i64) -> Result<(), ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.aprobar_producto(producto_id).await.map_err(to_server_error)
}

#[server]
async fn rechazar(producto_id: i64, motivo: String) -> Result<(), ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.rechazar_producto(producto_id, &motivo).await.map_err(to_server_error)
}

#[component]
pub fn SolicitudesPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (pendientes, setPendientes) = signal(Option::<Result<Vec<Producto>, String>>::None);
    let (motivo, setMotivo) = signal(String::new());
    #[allow(unused_variables)]
    let toasts = expect_context::<crate::components::toast::ToastContext>();

    #[cfg(feature = "hydrate")]
    let fetch = {
        use wasm_bindgen_futures::spawn_local;

        let fetch = move || {
            spawn_local(async move {
                let result = get_pendientes().await.map_err(|e| e.to_string());
                setPendientes.set(Some(result));
            });
        };
        fetch();
        fetch
    };

    let handleAprobar = move |productoId: i64| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                match aprobar(productoId).await {
                    Ok(()) => {
                        toasts.success("Producto aprobado");
                        fetch();
                    }
                    Err(e) => toasts.error(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = productoId;
    };

    let handleRechazar = move |productoId: i64| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            let texto = motivo.get_untracked();
            if texto.trim().is_empty() {
                toasts.error("Indica el motivo del rechazo");
                return;
            }
            spawn_local(async move {
                match rechazar(productoId, texto).await {
                    Ok(()) => {
                        setMotivo.set(String::new());
                        toasts.success("Producto rechazado");
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
            <h1>"Solicitudes de publicaci\u{f3}n"</h1>
            <p class="subtitle">"Productos pendientes de revisi\u{f3}n"</p>
        </div>
        <div class="card form-inline">
            <label for="motivo">"Motivo de rechazo"</label>
            <input
                type="text"
                id="motivo"
                placeholder="Se aplica al pulsar Rechazar"
                prop:value=motivo
                on:input=move |ev| setMotivo.set(event_target_value(&ev))
            />
        </div>
        {move || {
            match pendientes.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Cargando solicitudes..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"No se pudieron cargar las solicitudes: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(lista)) if lista.is_empty() => {
                    view! {
                        <div class="card">
                            <p>"No hay solicitudes pendientes."</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(lista)) => {
                    lista
                        .into_iter()
                        .map(|producto| {
                            let productoId = producto.producto_id;
                            view! {
                                <div class="card producto-card">
                                    <div class="producto-info">
                                        <span class="card-title">{producto.nombre.clone()}</span>
                                        <p>{producto.descripcion.clone().unwrap_or_default()}</p>
                                    </div>
                                    <div class="producto-meta">
                                        <span class="producto-precio">
                                            {format!("Q {:.2}", producto.precio)}
                                        </span>
                                        <button
                                            class="btn btn-primary"
                                            on:click=move |_| handleAprobar(productoId)
                                        >
                                            "Aprobar"
                                        </button>
                                        <button
                                            class="btn btn-danger"
                                            on:click=move |_| handleRechazar(productoId)
                                        >
                                            "Rechazar"
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
