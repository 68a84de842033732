use leptos::prelude::*;

use tienda_types::Pedido;

#[server]
async fn get_en_curso() -> Result<Vec<Pedido>, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.pedidos_en_curso().await.map_err(to_server_error)
}

#[server]
async fn actualizar_fecha(pedido_id: i64, fecha: String) -> Result<(), ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.actualizar_fecha_entrega(pedido_id, &fecha).await.map_err(to_server_error)
}

#[server]
async fn entregar(pedido_id: i64) -> Result<(), ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.marcar_entregado(pedido_id).await.map_err(to_server_error)
}

#[component]
pub fn PedidosLogisticaPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (pedidos, setPedidos) = signal(Option::<Result<Vec<Pedido>, String>>::None);
    let (fecha, setFecha) = signal(String::new());
    #[allow(unused_variables)]
    let toasts = expect_context::<crate::components::toast::ToastContext>();

    #[cfg(feature = "hydrate")]
    let fetch = {
        use wasm_bindgen_futures::spawn_local;

        let fetch = move || {
            spawn_local(async move {
                let result = get_en_curso().await.map_err(|e| e.to_string());
                setPedidos.set(Some(result));
            });
        };
        fetch();
        fetch
    };

    let handleFecha = move |pedidoId: i64| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            let nueva = fecha.get_untracked();
            if nueva.is_empty() {
                toasts.error("Selecciona una fecha de entrega");
                return;
            }
            spawn_local(async move {
                match actualizar_fecha(pedidoId, nueva).await {
                    Ok(()) => {
                        toasts.success("Fecha de entrega actualizada");
                        fetch();
                    }
                    Err(e) => toasts.error(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = pedidoId;
    };

    let handleEntregar = move |pedidoId: i64| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                match entregar(pedidoId).await {
                    Ok(()) => {
                        toasts.success("Pedido marcado como entregado");
                        fetch();
                    }
                    Err(e) => toasts.error(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = pedidoId;
    };

    view! {
        <div class="dashboard-header">
            <h1>"Pedidos en curso"</h1>
            <p class="subtitle">"Programa entregas o marca pedidos como entregados"</p>
        </div>
        <div class="card form-inline">
            <label for="fecha">"Nueva fecha de entrega"</label>
            <input
                type="date"
                id="fecha"
                prop:value=fecha
                on:input=move |ev| setFecha.set(event_target_value(&ev))
            />
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
                Some(Ok(lista)) if lista.is_empty() => {
                    view! {
                        <div class="card">
                            <p>"No hay pedidos en curso."</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(lista)) => {
                    view! {
                        <div class="card">
                            <table>
                                <thead>
                                    <tr>
                                        <th>"Pedido"</th>
                                        <th>"Fecha"</th>
                                        <th>"Entrega programada"</th>
                                        <th>"Total"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {lista
                                        .into_iter()
                                        .map(|pedido| {
                                            let pedidoId = pedido.pedido_id;
                                            view! {
                                                <tr>
                                                    <td>{format!("#{pedidoId}")}</td>
                                                    <td>{pedido.fecha.clone().unwrap_or_default()}</td>
                                                    <td>
                                                        {pedido
                                                            .fecha_entrega
                                                            .clone()
                                                            .unwrap_or_else(|| "Por programar".into())}
                                                    </td>
                                                    <td>{format!("Q {:.2}", pedido.total)}</td>
                                                    <td>
                                                        <button
                                                            class="btn btn-outline"
                                                            on:click=move |_| handleFecha(pedidoId)
                                                        >
                                                            "Actualizar fecha"
                                                        </button>
                                                        <button
                                                            class="btn btn-primary"
                                                            on:click=move |_| handleEntregar(pedidoId)
                                                        >
                                                            "Entregar"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
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
