use leptos::prelude::*;

use tienda_types::Resena;

#[server]
async fn get_mis_resenas(usuario_id: i64) -> Result<Vec<Resena>, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.resenas_de_usuario(usuario_id).await.map_err(to_server_error)
}

/// The buyer's own published reviews; writing one happens from the
/// product detail page.
#[component]
pub fn ResenasPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (resenas, setResenas) = signal(Option::<Result<Vec<Resena>, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        use crate::session::current_user_id;

        if let Some(usuarioId) = current_user_id() {
            spawn_local(async move {
                let result = get_mis_resenas(usuarioId).await.map_err(|e| e.to_string());
                setResenas.set(Some(result));
            });
        }
    }

    view! {
        <div class="dashboard-header">
            <h1>"Mis rese\u{f1}as"</h1>
        </div>
        {move || {
            match resenas.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Cargando rese\u{f1}as..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"No se pudieron cargar tus rese\u{f1}as: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(lista)) if lista.is_empty() => {
                    view! {
                        <div class="card">
                            <p>"A\u{fa}n no has publicado rese\u{f1}as."</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(lista)) => {
                    lista
                        .into_iter()
                        .map(|resena| {
                            view! {
                                <div class="card resena">
                                    <div class="card-title">
                                        {resena
                                            .producto_nombre
                                            .clone()
                                            .unwrap_or_else(|| format!(
                                                "Producto #{}",
                                                resena.producto_id,
                                            ))}
                                    </div>
                                    <span class="resena-calificacion">
                                        {format!("{}/5", resena.calificacion)}
                                    </span>
                                    <p>{resena.comentario.clone()}</p>
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
