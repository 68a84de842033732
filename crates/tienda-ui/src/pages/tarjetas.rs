use leptos::prelude::*;

use tienda_types::{NuevaTarjeta, Tarjeta};

#[server]
async fn get_tarjetas(usuario_id: i64) -> Result<Vec<Tarjeta>, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.tarjetas(usuario_id).await.map_err(to_server_error)
}

#[server]
async fn guardar_tarjeta(tarjeta: NuevaTarjeta) -> Result<Tarjeta, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.guardar_tarjeta(&tarjeta).await.map_err(to_server_error)
}

#[server]
async fn eliminar_tarjeta(tarjeta_id: i64) -> Result<(), ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.eliminar_tarjeta(tarjeta_id).await.map_err(to_server_error)
}

#[component]
pub fn TarjetasPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (tarjetas, setTarjetas) = signal(Option::<Result<Vec<Tarjeta>, String>>::None);
    let (numero, setNumero) = signal(String::new());
    let (titular, setTitular) = signal(String::new());
    let (vencimiento, setVencimiento) = signal(String::new());
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
                let result = get_tarjetas(usuarioId).await.map_err(|e| e.to_string());
                setTarjetas.set(Some(result));
            });
        };
        fetch();
        fetch
    };

    let onSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            use crate::session::current_user_id;

            let Some(usuarioId) = current_user_id() else {
                return;
            };
            let nueva = NuevaTarjeta {
                numero: numero.get_untracked(),
                titular: titular.get_untracked(),
                vencimiento: vencimiento.get_untracked(),
                usuario_id: usuarioId,
            };
            spawn_local(async move {
                match guardar_tarjeta(nueva).await {
                    Ok(_) => {
                        setNumero.set(String::new());
                        setTitular.set(String::new());
                        setVencimiento.set(String::new());
                        toasts.success("Tarjeta guardada");
                        fetch();
                    }
                    Err(e) => toasts.error(e.to_string()),
                }
            });
        }
    };

    let handleEliminar = move |tarjetaId: i64| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                match eliminar_tarjeta(tarjetaId).await {
                    Ok(()) => fetch(),
                    Err(e) => toasts.error(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = tarjetaId;
    };

    view! {
        <div class="dashboard-header">
            <h1>"Mis tarjetas"</h1>
        </div>
        {move || {
            match tarjetas.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Cargando tarjetas..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"No se pudieron cargar las tarjetas: " {e}</p>
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
                                        <th>"N\u{fa}mero"</th>
                                        <th>"Titular"</th>
                                        <th>"Vence"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {if lista.is_empty() {
                                        view! {
                                            <tr>
                                                <td colspan="4">"No tienes tarjetas guardadas."</td>
                                            </tr>
                                        }
                                            .into_any()
                                    } else {
                                        lista
                                            .into_iter()
                                            .map(|tarjeta| {
                                                let tarjetaId = tarjeta.tarjeta_id;
                                                view! {
                                                    <tr>
                                                        <td>{tarjeta.numero.clone()}</td>
                                                        <td>{tarjeta.titular.clone()}</td>
                                                        <td>{tarjeta.vencimiento.clone().unwrap_or_default()}</td>
                                                        <td>
                                                            <button
                                                                class="btn btn-danger"
                                                                on:click=move |_| handleEliminar(tarjetaId)
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

        <div class="card">
            <div class="card-title">"Agregar tarjeta"</div>
            <form on:submit=onSubmit>
                <div class="form-group">
                    <label for="numero">"N\u{fa}mero"</label>
                    <input
                        type="text"
                        id="numero"
                        prop:value=numero
                        on:input=move |ev| setNumero.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="titular">"Titular"</label>
                    <input
                        type="text"
                        id="titular"
                        prop:value=titular
                        on:input=move |ev| setTitular.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="vencimiento">"Vencimiento (MM/AA)"</label>
                    <input
                        type="text"
                        id="vencimiento"
                        prop:value=vencimiento
                        on:input=move |ev| setVencimiento.set(event_target_value(&ev))
                        required
                    />
                </div>
                <button type="submit" class="btn btn-primary">
                    "Guardar"
                </button>
            </form>
        </div>
    }
}
