use leptos::prelude::*;

use tienda_types::ReporteFila;

#[server]
async fn get_reporte(
    tipo: String,
    desde: Option<String>,
    hasta: Option<String>,
) -> Result<Vec<ReporteFila>, ServerFnError> {
    use crate::api::{backend, to_server_error};
    backend()?
        .reporte(&tipo, desde.as_deref(), hasta.as_deref())
        .await
        .map_err(to_server_error)
}

#[component]
pub fn AdminReportesPage() -> impl IntoView {
    let (tipo, setTipo) = signal(String::from("ventas"));
    let (desde, setDesde) = signal(String::new());
    let (hasta, setHasta) = signal(String::new());
    #[allow(unused_variables)]
    let (filas, setFilas) = signal(Option::<Result<Vec<ReporteFila>, String>>::None);

    let onSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            let tipoVal = tipo.get_untracked();
            let desdeVal = Some(desde.get_untracked()).filter(|d| !d.is_empty());
            let hastaVal = Some(hasta.get_untracked()).filter(|h| !h.is_empty());
            setFilas.set(None);
            spawn_local(async move {
                let result = get_reporte(tipoVal, desdeVal, hastaVal)
                    .await
                    .map_err(|e| e.to_string());
                setFilas.set(Some(result));
            });
        }
    };

    view! {
        <div class="dashboard-header">
            <h1>"Reportes"</h1>
            <p class="subtitle">"Resumen de ventas y actividad de la tienda"</p>
        </div>

        <div class="card">
            <form class="report-filters" on:submit=onSubmit>
                <div class="form-group">
                    <label for="tipo">"Tipo"</label>
                    <select
                        id="tipo"
                        prop:value=tipo
                        on:change=move |ev| setTipo.set(event_target_value(&ev))
                    >
                        <option value="ventas">"Ventas"</option>
                        <option value="productos">"Productos m\u{e1}s vendidos"</option>
                        <option value="usuarios">"Usuarios m\u{e1}s activos"</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="desde">"Desde"</label>
                    <input
                        type="date"
                        id="desde"
                        prop:value=desde
                        on:input=move |ev| setDesde.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="hasta">"Hasta"</label>
                    <input
                        type="date"
                        id="hasta"
                        prop:value=hasta
                        on:input=move |ev| setHasta.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary">
                    "Consultar"
                </button>
            </form>
        </div>

        {move || {
            match filas.get() {
                None => ().into_any(),
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"No se pudo generar el reporte: " {e}</p>
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
                                        <th>"Concepto"</th>
                                        <th>"Cantidad"</th>
                                        <th>"Total (Q)"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {if lista.is_empty() {
                                        view! {
                                            <tr>
                                                <td colspan="3">"Sin datos para el rango elegido."</td>
                                            </tr>
                                        }
                                            .into_any()
                                    } else {
                                        lista
                                            .into_iter()
                                            .map(|fila| {
                                                view! {
                                                    <tr>
                                                        <td>{fila.concepto}</td>
                                                        <td>{fila.cantidad}</td>
                                                        <td>{format!("{:.2}", fila.total)}</td>
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
