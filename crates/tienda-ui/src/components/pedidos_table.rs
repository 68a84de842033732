use leptos::prelude::*;

use tienda_types::Pedido;

/// Order listing shared by the buyer's open-orders and purchase-history
/// pages. Detail lines come embedded in each order.
#[component]
pub fn PedidosTable(pedidos: Vec<Pedido>, vacio: &'static str) -> impl IntoView {
    view! {
        <div class="card">
            <table>
                <thead>
                    <tr>
                        <th>"Pedido"</th>
                        <th>"Fecha"</th>
                        <th>"Estado"</th>
                        <th>"Entrega"</th>
                        <th>"Total"</th>
                    </tr>
                </thead>
                <tbody>
                    {if pedidos.is_empty() {
                        view! {
                            <tr>
                                <td colspan="5">{vacio}</td>
                            </tr>
                        }
                            .into_any()
                    } else {
                        pedidos
                            .into_iter()
                            .map(|pedido| {
                                let detalles = pedido
                                    .detalles
                                    .iter()
                                    .map(|d| {
                                        format!("{} x{}", d.producto_nombre, d.cantidad)
                                    })
                                    .collect::<Vec<_>>()
                                    .join(", ");
                                view! {
                                    <tr>
                                        <td>{format!("#{}", pedido.pedido_id)}</td>
                                        <td>{pedido.fecha.clone().unwrap_or_default()}</td>
                                        <td>{pedido.estado.clone()}</td>
                                        <td>
                                            {pedido
                                                .fecha_entrega
                                                .clone()
                                                .unwrap_or_else(|| "Por programar".into())}
                                        </td>
                                        <td>{format!("Q {:.2}", pedido.total)}</td>
                                    </tr>
                                    <tr class="detalle-row">
                                        <td colspan="5">{detalles}</td>
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
}
