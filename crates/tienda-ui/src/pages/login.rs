use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use tienda_types::LoginResponse;

#[server]
async fn login(email: String, password: String) -> Result<LoginResponse, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.login(&email, &password).await.map_err(to_server_error)
}

/// Map the backend's 401 bodies onto the messages the form shows.
fn friendly_error(raw: &str) -> String {
    if raw.contains("Usuario no encontrado") {
        "El correo no existe o el usuario no est\u{e1} registrado".to_string()
    } else if raw.contains("Contrase\u{f1}a incorrecta") {
        "La contrase\u{f1}a ingresada es incorrecta".to_string()
    } else if raw.contains("401") {
        "Credenciales incorrectas o usuario no encontrado".to_string()
    } else {
        "Error en el servidor. Intenta de nuevo m\u{e1}s tarde.".to_string()
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, setEmail) = signal(String::new());
    let (password, setPassword) = signal(String::new());
    #[allow(unused_variables)]
    let (error, setError) = signal(Option::<String>::None);
    #[allow(unused_variables)]
    let navigate = use_navigate();
    #[allow(unused_variables)]
    let query = use_query_map();

    // An already-authenticated visit skips the form entirely.
    #[cfg(feature = "hydrate")]
    {
        use tienda_auth::{check_access, Access};

        use crate::session::{now_secs, BrowserStore};

        let navigate = navigate.clone();
        Effect::new(move |_| {
            if check_access(&BrowserStore, &[], now_secs()) == Access::Granted {
                navigate(
                    "/dashboard",
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        });
    }

    let onSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            use crate::session::start_session;

            let navigate = navigate.clone();
            let query = query.clone();
            setError.set(None);
            spawn_local(async move {
                match login(email.get_untracked(), password.get_untracked()).await {
                    Ok(resp) => {
                        start_session(&resp.token, &resp.user);
                        // Forward to wherever the guard bounced us from.
                        let destination = query
                            .get_untracked()
                            .get("from")
                            .unwrap_or_else(|| "/dashboard".to_string());
                        navigate(
                            &destination,
                            NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(e) => setError.set(Some(friendly_error(&e.to_string()))),
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <h1>"Iniciar sesi\u{f3}n"</h1>
                </div>

                {move || {
                    error.get().map(|message| view! { <div class="login-error">{message}</div> })
                }}

                <form on:submit=onSubmit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="Ingrese su correo"
                            prop:value=email
                            on:input=move |ev| setEmail.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Contrase\u{f1}a"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Ingrese su contrase\u{f1}a"
                            prop:value=password
                            on:input=move |ev| setPassword.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">
                        "Ingresar"
                    </button>
                </form>

                <div class="login-footer">
                    <span>"\u{bf}No tienes cuenta? "</span>
                    <A href="/register">"Crear una cuenta"</A>
                </div>
            </div>
        </div>
    }
}
