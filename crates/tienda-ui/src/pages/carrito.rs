use leptos::prelude::*;
use leptos_router::components::A;

use tienda_types::{CarritoItem, Tarjeta};

#[server]
async fn get_carrito(usuario_id: i64) -> Result<Vec<CarritoItem>, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.carrito(usuario_id).await.map_err(to_server_error)
}

#[server]
async fn get_tarjetas(usuario_id: i64) -> Result<Vec<Tarjeta>, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.tarjetas(usuario_id).await.map_err(to_server_error)
}

#[server]
async fn quitar_item(item_id: i64) -> Result<(), ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.quitar_item(item_id).await.map_err(to_server_error)
}

#[server]
async fn vaciar_carrito(usuario_id: i64) -> Result<(), ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.vaciar_carrito(usuario_id).await.map_err(to_server_error)
}

#[server]
async fn pagar(usuario_id: i64, tarjeta_id: i64) -> Result<(), ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.pagar(usuario_id, tarjeta_id).await.map_err(to_server_error)
}

#[component]
pub fn CarritoPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (items, setItems) = signal(Option::<Result<Vec<CarritoItem>, String>>::None);
    #[allow(unused_variables)]
    let (tarjetas, setTarjetas) = signal(Vec::<Tarjeta>::new());
    let (tarjetaId, setTarjetaId) = signal(Option::<i64>::None);
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
                let result = get_carrito(usuarioId).await.map_err(|e| e.to_string());
                setItems.set(Some(result));
            });
            spawn_local(async move {
                if let Ok(lista) = get_tarjetas(usuarioId).await {
                    if tarjetaId.get_untracked().is_none() {
                        setTarjetaId.set(lista.first().map(|t| t.tarjeta_id));
                    }
                    setTarjetas.set(lista);
                }
            });
        };
        fetch();
        fetch
    };

    let handleQuitar = move |itemId: i64| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                match quitar_item(itemId).await {
                    Ok(()) => fetch(),
                    Err(e) => toasts.error(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = itemId;
    };

    let handleVaciar = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            use crate::session::current_user_id;

            let Some(usuarioId) = current_user_id() else {
                return;
            };
            spawn_local(async move {
                match vaciar_carrito(usuarioId).await {
                    Ok(()) => fetch(),
                    Err(e) => toasts.error(e.to_string()),
                }
            });
        }
    };

    let handlePagar = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            use crate::session::current_user_id;

            let (Some(usuarioId), Some(tarjeta)) = (current_user_id(), tarjetaId.get_untracked())
            else {
                toasts.error("Selecciona una tarjeta para pagar");
                return;
            };
            spawn_local(async move {
                match pagar(usuarioId, tarjeta).await {
                    Ok(()) => {
                        toasts.success("Compra realizada, revisa tus pedidos");
                        fetch();
                    }
                    Err(e) => toasts.error(e.to_string()),
                }
            });
        }
    };

    view! {
        <div class="dashboard-header">
            <h1>"Carrito"</h1>
        </div>
        {move || {
            match items.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Cargando carrito..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"No se pudo cargar el carrito: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(lineas)) if lineas.is_empty() => {
                    view! {
                        <div class="card">
                            <p>"Tu carrito est\u{e1} vac\u{ed}o."</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(lineas)) => {
                    let total: f64 = lineas.iter().map(|l| l.precio * l.cantidad as f64).sum();
                    view! {
                        <div class="card">
                            <table>
                                <thead>
                                    <tr>
                                        <th>"Producto"</th>
                                        <th>"Precio"</th>
                                        <th>"Cantidad"</th>
                                        <th>"Subtotal"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {lineas
                                        .into_iter()
                                        .map(|linea| {
                                            let itemId = linea.item_id;
                                            view! {
                                                <tr>
                                                    <td>{linea.nombre.clone()}</td>
                                                    <td>{format!("Q {:.2}", linea.precio)}</td>
                                                    <td>{linea.cantidad}</td>
                                                    <td>
                                                        {format!(
                                                            "Q {:.2}",
                                                            linea.precio * linea.cantidad as f64,
                                                        )}
                                                    </td>
                                                    <td>
                                                        <button
                                                            class="btn btn-danger"
                                                            on:click=move |_| handleQuitar(itemId)
                                                        >
                                                            "Quitar"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                            <div class="carrito-total">{format!("Total: Q {:.2}", total)}</div>
                            <div class="form-inline">
                                <label for="tarjeta">"Pagar con"</label>
                                <select
                                    id="tarjeta"
                                    on:change=move |ev| {
                                        setTarjetaId.set(event_target_value(&ev).parse().ok());
                                    }
                                >
                                    {tarjetas
                                        .get()
                                        .into_iter()
                                        .map(|tarjeta| {
                                            view! {
                                                <option value=tarjeta
                                                    .tarjeta_id
                                                    .to_string()>
                                                    {format!("{} \u{2022} {}", tarjeta.titular, tarjeta.numero)}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                                <button class="btn btn-primary" on:click=handlePagar>
                                    "Pagar"
                                </button>
                                <button class="btn btn-outline" on:click=handleVaciar>
                                    "Vaciar carrito"
                                </button>
                            </div>
                            <p class="form-hint">
                                <A href="/dashboard/tarjetas">"Administrar mis tarjetas"</A>
                            </p>
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}
