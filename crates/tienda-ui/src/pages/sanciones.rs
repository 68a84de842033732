use leptos::prelude::*;

use tienda_types::{NuevaSancion, Sancion, Usuario};

#[server]
async fn get_usuarios() -> Result<Vec<Usuario>, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.usuarios_moderables().await.map_err(to_server_error)
}

#[server]
async fn get_sanciones() -> Result<Vec<Sancion>, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.sanciones().await.map_err(to_server_error)
}

#[server]
async fn sancionar(sancion: NuevaSancion) -> Result<Sancion, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.sancionar(&sancion).await.map_err(to_server_error)
}

#[component]
pub fn SancionesPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (usuarios, setUsuarios) = signal(Vec::<Usuario>::new());
    #[allow(unused_variables)]
    let (sanciones, setSanciones) = signal(Option::<Result<Vec<Sancion>, String>>::None);
    let (usuarioId, setUsuarioId) = signal(Option::<i64>::None);
    let (motivo, setMotivo) = signal(String::new());
    #[allow(unused_variables)]
    let toasts = expect_context::<crate::components::toast::ToastContext>();

    #[cfg(feature = "hydrate")]
    let fetchSanciones = {
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            if let Ok(lista) = get_usuarios().await {
                if usuarioId.get_untracked().is_none() {
                    setUsuarioId.set(lista.first().map(|u| u.usuario_id));
                }
                setUsuarios.set(lista);
            }
        });

        let fetch = move || {
            spawn_local(async move {
                let result = get_sanciones().await.map_err(|e| e.to_string());
                setSanciones.set(Some(result));
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

            let Some(objetivo) = usuarioId.get_untracked() else {
                toasts.error("Selecciona un usuario");
                return;
            };
            let nueva = NuevaSancion {
                usuario_id: objetivo,
                motivo: motivo.get_untracked(),
            };
            spawn_local(async move {
                match sancionar(nueva).await {
                    Ok(_) => {
                        setMotivo.set(String::new());
                        toasts.success("Sanci\u{f3}n registrada");
                        fetchSanciones();
                    }
                    Err(e) => toasts.error(e.to_string()),
                }
            });
        }
    };

    view! {
        <div class="dashboard-header">
            <h1>"Sanciones"</h1>
        </div>

        <div class="card">
            <div class="card-title">"Registrar sanci\u{f3}n"</div>
            <form on:submit=onSubmit>
                <div class="form-inline">
                    <label for="usuario">"Usuario"</label>
                    <select
                        id="usuario"
                        on:change=move |ev| {
                            setUsuarioId.set(event_target_value(&ev).parse().ok());
                        }
                    >
                        {move || {
                            usuarios
                                .get()
                                .into_iter()
                                .map(|usuario| {
                                    view! {
                                        <option value=usuario
                                            .usuario_id
                                            .to_string()>{usuario.username.clone()}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                    <input
                        type="text"
                        placeholder="Motivo"
                        prop:value=motivo
                        on:input=move |ev| setMotivo.set(event_target_value(&ev))
                        required
                    />
                    <button type="submit" class="btn btn-danger">
                        "Sancionar"
                    </button>
                </div>
            </form>
        </div>

        {move || {
            match sanciones.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Cargando sanciones..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"No se pudieron cargar las sanciones: " {e}</p>
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
                                        <th>"Usuario"</th>
                                        <th>"Motivo"</th>
                                        <th>"Fecha"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {if lista.is_empty() {
                                        view! {
                                            <tr>
                                                <td colspan="3">"No hay sanciones registradas."</td>
                                            </tr>
                                        }
                                            .into_any()
                                    } else {
                                        lista
                                            .into_iter()
                                            .map(|sancion| {
                                                view! {
                                                    <tr>
                                                        <td>
                                                            {sancion
                                                                .username
                                                                .clone()
                                                                .unwrap_or_else(|| format!(
                                                                    "Usuario #{}",
                                                                    sancion.usuario_id,
                                                                ))}
                                                        </td>
                                                        <td>{sancion.motivo.clone()}</td>
                                                        <td>{sancion.fecha.clone().unwrap_or_default()}</td>
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
