use leptos::prelude::*;

use tienda_types::Usuario;

/// Session data straight from the browser: the cached profile plus the
/// role claim of the credential. Nothing here round-trips the backend.
#[component]
pub fn PerfilPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (perfil, setPerfil) = signal(Option::<(Usuario, Option<String>)>::None);

    #[cfg(feature = "hydrate")]
    {
        use crate::session::{current_role, current_user};

        if let Some(user) = current_user() {
            let role = current_role().map(|r| r.code().to_string());
            setPerfil.set(Some((user, role)));
        }
    }

    view! {
        <div class="dashboard-header">
            <h1>"Perfil"</h1>
        </div>
        {move || {
            match perfil.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                        </div>
                    }
                        .into_any()
                }
                Some((user, role)) => {
                    view! {
                        <div class="card">
                            <div class="perfil-row">
                                <span class="perfil-label">"Usuario"</span>
                                <span>{user.username.clone()}</span>
                            </div>
                            <div class="perfil-row">
                                <span class="perfil-label">"Email"</span>
                                <span>{user.email.clone()}</span>
                            </div>
                            <div class="perfil-row">
                                <span class="perfil-label">"Rol"</span>
                                <span>{role.unwrap_or_else(|| "COMUN".into())}</span>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}
