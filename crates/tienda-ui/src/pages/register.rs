use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use tienda_types::{RegisterRequest, Usuario};

#[server]
async fn register(username: String, email: String, password: String) -> Result<Usuario, ServerFnError> {
    use crate::api::{backend, to_server_error};
    let request = RegisterRequest {
        username,
        email,
        password,
    };
    backend()?.register(&request).await.map_err(to_server_error)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (username, setUsername) = signal(String::new());
    let (email, setEmail) = signal(String::new());
    let (password, setPassword) = signal(String::new());
    #[allow(unused_variables)]
    let (error, setError) = signal(Option::<String>::None);
    #[allow(unused_variables)]
    let navigate = use_navigate();

    let onSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            let navigate = navigate.clone();
            setError.set(None);
            spawn_local(async move {
                let result = register(
                    username.get_untracked(),
                    email.get_untracked(),
                    password.get_untracked(),
                )
                .await;
                match result {
                    // New accounts always land on the login form.
                    Ok(_) => navigate(
                        "/login",
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    ),
                    Err(e) => setError.set(Some(e.to_string())),
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <h1>"Crear una cuenta"</h1>
                </div>

                {move || {
                    error.get().map(|message| view! { <div class="login-error">{message}</div> })
                }}

                <form on:submit=onSubmit>
                    <div class="form-group">
                        <label for="username">"Nombre de usuario"</label>
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
                        <label for="password">"Contrase\u{f1}a"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=password
                            on:input=move |ev| setPassword.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">
                        "Registrarme"
                    </button>
                </form>

                <div class="login-footer">
                    <span>"\u{bf}Ya tienes cuenta? "</span>
                    <A href="/login">"Iniciar sesi\u{f3}n"</A>
                </div>
            </div>
        </div>
    }
}
