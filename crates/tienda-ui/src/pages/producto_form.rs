use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use tienda_types::{Producto, ProductoForm};

#[server]
async fn get_producto(producto_id: i64) -> Result<Producto, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.producto(producto_id).await.map_err(to_server_error)
}

#[server]
async fn crear_producto(usuario_id: i64, form: ProductoForm) -> Result<Producto, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.crear_producto(usuario_id, &form).await.map_err(to_server_error)
}

#[server]
async fn actualizar_producto(producto_id: i64, form: ProductoForm) -> Result<(), ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?.actualizar_producto(producto_id, &form).await.map_err(to_server_error)
}

/// Create and edit share this form; the `productoId` route param picks
/// the mode. Editing resets the listing to pending review on the
/// backend side.
#[component]
pub fn ProductoFormPage() -> impl IntoView {
    let params = use_params_map();
    let editId = params
        .get_untracked()
        .get("productoId")
        .and_then(|raw| raw.parse::<i64>().ok());

    let (nombre, setNombre) = signal(String::new());
    let (descripcion, setDescripcion) = signal(String::new());
    let (precio, setPrecio) = signal(String::new());
    let (stock, setStock) = signal(String::new());
    let (categoria, setCategoria) = signal(String::new());
    #[allow(unused_variables)]
    let (error, setError) = signal(Option::<String>::None);
    #[allow(unused_variables)]
    let navigate = use_navigate();
    #[allow(unused_variables)]
    let toasts = expect_context::<crate::components::toast::ToastContext>();

    // Edit mode: preload the current listing into the form.
    #[cfg(feature = "hydrate")]
    if let Some(productoId) = editId {
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            match get_producto(productoId).await {
                Ok(producto) => {
                    setNombre.set(producto.nombre);
                    setDescripcion.set(producto.descripcion.unwrap_or_default());
                    setPrecio.set(format!("{}", producto.precio));
                    setStock.set(producto.stock.to_string());
                    setCategoria.set(producto.categoria.unwrap_or_default());
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

            use crate::session::current_user_id;

            let Ok(precioVal) = precio.get_untracked().parse::<f64>() else {
                setError.set(Some("El precio no es v\u{e1}lido".into()));
                return;
            };
            let Ok(stockVal) = stock.get_untracked().parse::<i64>() else {
                setError.set(Some("El stock no es v\u{e1}lido".into()));
                return;
            };
            let categoriaVal = categoria.get_untracked();
            let form = ProductoForm {
                nombre: nombre.get_untracked(),
                descripcion: Some(descripcion.get_untracked()).filter(|d| !d.is_empty()),
                precio: precioVal,
                stock: stockVal,
                categoria: Some(categoriaVal).filter(|c| !c.is_empty()),
            };

            let navigate = navigate.clone();
            setError.set(None);
            spawn_local(async move {
                let result = match editId {
                    Some(productoId) => actualizar_producto(productoId, form).await,
                    None => match current_user_id() {
                        Some(usuarioId) => crear_producto(usuarioId, form).await.map(|_| ()),
                        None => return,
                    },
                };
                match result {
                    Ok(()) => {
                        toasts.success("Producto enviado a revisi\u{f3}n");
                        navigate(
                            "/dashboard/mis-productos",
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

    let titulo = if editId.is_some() { "Editar producto" } else { "Nuevo producto" };

    view! {
        <div class="dashboard-header">
            <h1>{titulo}</h1>
            <p class="subtitle">"Toda publicaci\u{f3}n pasa por moderaci\u{f3}n antes de venderse"</p>
        </div>

        {move || error.get().map(|message| view! { <div class="login-error">{message}</div> })}

        <div class="card">
            <form on:submit=onSubmit>
                <div class="form-group">
                    <label for="nombre">"Nombre"</label>
                    <input
                        type="text"
                        id="nombre"
                        prop:value=nombre
                        on:input=move |ev| setNombre.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="descripcion">"Descripci\u{f3}n"</label>
                    <textarea
                        id="descripcion"
                        prop:value=descripcion
                        on:input=move |ev| setDescripcion.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-group">
                    <label for="precio">"Precio (Q)"</label>
                    <input
                        type="number"
                        id="precio"
                        step="0.01"
                        min="0"
                        prop:value=precio
                        on:input=move |ev| setPrecio.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="stock">"Stock"</label>
                    <input
                        type="number"
                        id="stock"
                        min="0"
                        prop:value=stock
                        on:input=move |ev| setStock.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="categoria">"Categor\u{ed}a"</label>
                    <input
                        type="text"
                        id="categoria"
                        prop:value=categoria
                        on:input=move |ev| setCategoria.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary">
                    "Guardar"
                </button>
            </form>
        </div>
    }
}
