use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use tienda_types::{NuevaResena, Producto, Resena};

#[server]
async fn get_producto(producto_id: i64) -> Result<Producto, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.producto(producto_id).await.map_err(to_server_error)
}

#[server]
async fn get_resenas(producto_id: i64) -> Result<Vec<Resena>, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.resenas_de_producto(producto_id).await.map_err(to_server_error)
}

#[server]
async fn agregar_al_carrito(
    usuario_id: i64,
    producto_id: i64,
    cantidad: i64,
) -> Result<(), ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?
        .agregar_al_carrito(usuario_id, producto_id, cantidad)
        .await
        .map_err(to_server_error)
}

#[server]
async fn publicar_resena(resena: NuevaResena) -> Result<Resena, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.publicar_resena(&resena).await.map_err(to_server_error)
}

#[component]
pub fn ProductoPage() -> impl IntoView {
    let params = use_params_map();
    let productoId = params
        .get_untracked()
        .get("id")
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or_default();

    #[allow(unused_variables)]
    let (producto, setProducto) = signal(Option::<Result<Producto, String>>::None);
    #[allow(unused_variables)]
    let (resenas, setResenas) = signal(Vec::<Resena>::new());
    let (cantidad, setCantidad) = signal(1i64);
    let (comentario, setComentario) = signal(String::new());
    let (calificacion, setCalificacion) = signal(5i32);
    #[allow(unused_variables)]
    let toasts = expect_context::<crate::components::toast::ToastContext>();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            let result = get_producto(productoId).await.map_err(|e| e.to_string());
            setProducto.set(Some(result));
        });
        spawn_local(async move {
            if let Ok(lista) = get_resenas(productoId).await {
                setResenas.set(lista);
            }
        });
    }

    let handleAgregar = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            use crate::session::current_user_id;

            let Some(usuarioId) = current_user_id() else {
                return;
            };
            spawn_local(async move {
                match agregar_al_carrito(usuarioId, productoId, cantidad.get_untracked()).await {
                    Ok(()) => toasts.success("Producto agregado al carrito"),
                    Err(e) => toasts.error(e.to_string()),
                }
            });
        }
    };

    let handleResena = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            use crate::session::current_user_id;

            let Some(usuarioId) = current_user_id() else {
                return;
            };
            let nueva = NuevaResena {
                producto_id: productoId,
                usuario_id: usuarioId,
                comentario: comentario.get_untracked(),
                calificacion: calificacion.get_untracked(),
            };
            spawn_local(async move {
                match publicar_resena(nueva).await {
                    Ok(resena) => {
                        setComentario.set(String::new());
                        setResenas.update(|lista| lista.push(resena));
                        toasts.success("Rese\u{f1}a publicada");
                    }
                    Err(e) => toasts.error(e.to_string()),
                }
            });
        }
    };

    view! {
        {move || {
            match producto.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Cargando producto..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"No se pudo cargar el producto: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(p)) => {
                    view! {
                        <div class="dashboard-header">
                            <h1>{p.nombre.clone()}</h1>
                            <p class="subtitle">
                                {p.categoria.clone().unwrap_or_else(|| "Sin categor\u{ed}a".into())}
                            </p>
                        </div>
                        <div class="card">
                            <p>{p.descripcion.clone().unwrap_or_default()}</p>
                            <p class="producto-precio">{format!("Q {:.2}", p.precio)}</p>
                            <p class="producto-stock">{format!("{} en stock", p.stock)}</p>
                            <div class="form-inline">
                                <label for="cantidad">"Cantidad"</label>
                                <input
                                    type="number"
                                    id="cantidad"
                                    min="1"
                                    prop:value=move || cantidad.get().to_string()
                                    on:input=move |ev| {
                                        if let Ok(v) = event_target_value(&ev).parse() {
                                            setCantidad.set(v);
                                        }
                                    }
                                />
                                <button class="btn btn-primary" on:click=handleAgregar>
                                    "Agregar al carrito"
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }
        }}

        <div class="card">
            <div class="card-title">"Rese\u{f1}as"</div>
            {move || {
                let lista = resenas.get();
                if lista.is_empty() {
                    view! { <p>"Este producto a\u{fa}n no tiene rese\u{f1}as."</p> }.into_any()
                } else {
                    lista
                        .into_iter()
                        .map(|resena| {
                            view! {
                                <div class="resena">
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
            }}
            <form on:submit=handleResena>
                <div class="form-group">
                    <label for="comentario">"Escribe una rese\u{f1}a"</label>
                    <textarea
                        id="comentario"
                        prop:value=comentario
                        on:input=move |ev| setComentario.set(event_target_value(&ev))
                        required
                    ></textarea>
                </div>
                <div class="form-inline">
                    <label for="calificacion">"Calificaci\u{f3}n"</label>
                    <select
                        id="calificacion"
                        on:change=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse() {
                                setCalificacion.set(v);
                            }
                        }
                    >
                        <option value="5" selected>"5"</option>
                        <option value="4">"4"</option>
                        <option value="3">"3"</option>
                        <option value="2">"2"</option>
                        <option value="1">"1"</option>
                    </select>
                    <button type="submit" class="btn btn-outline">
                        "Publicar"
                    </button>
                </div>
            </form>
        </div>
    }
}
