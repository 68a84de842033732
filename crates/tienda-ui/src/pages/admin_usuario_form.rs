use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use tienda_types::{EmpleadoForm, Usuario};

#[server]
async fn get_empleado(usuario_id: i64) -> Result<Usuario, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.empleado(usuario_id).await.map_err(to_server_error)
}

#[server]
async fn crear_empleado(form: EmpleadoForm) -> Result<Usuario, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.crear_empleado(&form).await.map_err(to_server_error)
}

#[server]
async fn actualizar_empleado(usuario_id: i64, form: EmpleadoForm) -> Result<(), ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.actualizar_empleado(usuario_id, &form).await.map_err(to_server_error)
}

/// Create and edit share this form; the `usuarioId` route param picks
/// the mode. On edit an empty password field leaves the current
/// password untouched.
#[component]
pub fn AdminUsuarioFormPage() -> impl IntoView {
    let params = use_params_map();
    let editId = params
        .get_untracked()
        .get("usuarioId")
        .and_then(|raw| raw.parse::<i64>().ok());

    let (username, setUsername) = signal(String::new());
    let (email, setEmail) = signal(String::new());
    let (role, setRole) = signal(String::from("MODERADOR"));
    let (password, setPassword) = signal(String::new());
    #[allow(unused_variables)]
    let (error, setError) = signal(Option::<String>::None);
    #[allow(unused_variables)]
    let navigate = use_navigate();
    #[allow(unused_variables)]
    let toasts = expect_context::<crate::components::toast::ToastContext>();

    // Edit mode: preload the current account into the form.
    #[cfg(feature = "hydrate")]
    if let Some(usuarioId) = editId {
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            match get_empleado(usuarioId).await {
                Ok(usuario) => {
                    setUsername.set(usuario.username);
                    setEmail.set(usuario.email);
                    setRole.set(usuario.role.unwrap_or_else(|| "MODERADOR".into()));
                }
                Err(e) => setError.set(Some(e.to_string())),
            }
        });
    }

    let onSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            let passwordVal = password.get_untracked();
            if editId.is_none() && passwordVal.is_empty() {
                setError.set(Some("La contrase\u{f1}a es obligatoria".into()));
                return;
            }
            let form = EmpleadoForm {
                username: username.get_untracked(),
                email: email.get_untracked(),
                role: role.get_untracked(),
                password: Some(passwordVal).filter(|p| !p.is_empty()),
            };

            let navigate = navigate.clone();
            setError.set(None);
            spawn_local(async move {
                let result = match editId {
                    Some(usuarioId) => actualizar_empleado(usuarioId, form).await,
                    None => crear_empleado(form).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        toasts.success("Cuenta guardada");
                        navigate(
                            "/dashboard/admin/usuarios",
                            NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(e) => setError.set(Some(e.to_string())),
                }
            });
        }
    };

    let titulo = if editId.is_some() { "Editar usuario" } else { "Nuevo usuario" };

    view! {
        <div class="dashboard-header">
            <h1>{titulo}</h1>
            <p class="subtitle">"Cuentas internas de moderaci\u{f3}n, log\u{ed}stica y administraci\u{f3}n"</p>
        </div>

        {move || error.get().map(|message| view! { <div class="login-error">{message}</div> })}

        <div class="card">
            <form on:submit=onSubmit>
                <div class="form-group">
                    <label for="username">"Usuario"</label>
                    <input
                        type="text"
                        id="username"
                        prop:value=username
                        on:input=move |ev| setUsername.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=email
                        on:input=move |ev| setEmail.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="role">"Rol"</label>
                    <select
                        id="role"
                        prop:value=role
                        on:change=move |ev| setRole.set(event_target_value(&ev))
                    >
                        <option value="MODERADOR">"Moderador"</option>
                        <option value="LOGISTICA">"Log\u{ed}stica"</option>
                        <option value="ADMIN">"Administrador"</option>
                        <option value="COMUN">"Com\u{fa}n"</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="password">"Contrase\u{f1}a"</label>
                    <input
                        type="password"
                        id="password"
                        prop:value=password
                        on:input=move |ev| setPassword.set(event_target_value(&ev))
                        placeholder=move || {
                            if editId.is_some() { "Dejar en blanco para no cambiarla" } else { "" }
                        }
                    />
                </div>
                <button type="submit" class="btn btn-primary">
                    "Guardar"
                </button>
            </form>
        </div>
    }
}
