use leptos::prelude::*;
use leptos_router::components::A;

use tienda_types::Usuario;

#[server]
async fn get_empleados() -> Result<Vec<Usuario>, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.empleados().await.map_err(to_server_error)
}

#[server]
async fn cambiar_estado(usuario_id: i64, estado: String) -> Result<(), ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.cambiar_estado_empleado(usuario_id, &estado).await.map_err(to_server_error)
}

#[component]
pub fn AdminUsuariosPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (empleados, setEmpleados) = signal(Option::<Result<Vec<Usuario>, String>>::None);
    #[allow(unused_variables)]
    let toasts = expect_context::<crate::components::toast::ToastContext>();

    #[cfg(feature = "hydrate")]
    let fetch = {
        use wasm_bindgen_futures::spawn_local;

        let fetch = move || {
            spawn_local(async move {
                let result = get_empleados().await.map_err(|e| e.to_string());
                setEmpleados.set(Some(result));
            });
        };
        fetch();
        fetch
    };

    let handleEstado = move |usuarioId: i64, activo: bool| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            let nuevo = if activo { "INACTIVO" } else { "ACTIVO" };
            spawn_local(async move {
                match cambiar_estado(usuarioId, nuevo.to_string()).await {
                    Ok(()) => fetch(),
                    Err(e) => toasts.error(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (usuarioId, activo);
    };

    view! {
        <div class="dashboard-header">
            <h1>"Usuarios"</h1>
            <A href="/dashboard/admin/usuarios/nuevo" attr:class="btn btn-primary">
                "Nuevo usuario"
            </A>
        </div>
        {move || {
            match empleados.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Cargando usuarios..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"No se pudieron cargar los usuarios: " {e}</p>
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
                                        <th>"Email"</th>
                                        <th>"Rol"</th>
                                        <th>"Estado"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {if lista.is_empty() {
                                        view! {
                                            <tr>
                                                <td colspan="5">"No hay cuentas de empleados."</td>
                                            </tr>
                                        }
                                            .into_any()
                                    } else {
                                        lista
                                            .into_iter()
                                            .map(|usuario| {
                                                let usuarioId = usuario.usuario_id;
                                                let activo = usuario.estado.as_deref()
                                                    != Some("INACTIVO");
                                                view! {
                                                    <tr>
                                                        <td>{usuario.username.clone()}</td>
                                                        <td>{usuario.email.clone()}</td>
                                                        <td>{usuario.role.clone().unwrap_or_default()}</td>
                                                        <td>
                                                            <span class=if activo {
                                                                "badge badge-ok"
                                                            } else {
                                                                "badge badge-danger"
                                                            }>{if activo { "ACTIVO" } else { "INACTIVO" }}</span>
                                                        </td>
                                                        <td>
                                                            <A href=format!(
                                                                "/dashboard/admin/usuarios/editar/{usuarioId}",
                                                            )>"Editar"</A>
                                                            <button
                                                                class="btn btn-outline"
                                                                on:click=move |_| handleEstado(usuarioId, activo)
                                                            >
                                                                {if activo { "Desactivar" } else { "Activar" }}
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
