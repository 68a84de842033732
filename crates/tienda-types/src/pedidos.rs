use serde::{Deserialize, Serialize};

/// One line of the current user's shopping cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarritoItem {
    pub item_id: i64,
    pub producto_id: i64,
    pub nombre: String,
    pub precio: f64,
    pub cantidad: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tarjeta {
    pub tarjeta_id: i64,
    pub numero: String,
    pub titular: String,
    #[serde(default)]
    pub vencimiento: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NuevaTarjeta {
    pub numero: String,
    pub titular: String,
    pub vencimiento: String,
    pub usuario_id: i64,
}

/// Checkout request: pay the current cart with a saved card.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagoRequest {
    pub tarjeta_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pedido {
    pub pedido_id: i64,
    #[serde(default)]
    pub fecha: Option<String>,
    /// Backend-owned state string, e.g. EN_CURSO or ENTREGADO.
    pub estado: String,
    pub total: f64,
    #[serde(default)]
    pub fecha_entrega: Option<String>,
    #[serde(default)]
    pub detalles: Vec<DetallePedido>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetallePedido {
    pub producto_nombre: String,
    pub cantidad: i64,
    pub precio: f64,
}

/// Logistics update: reschedule the estimated delivery date.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FechaEntregaUpdate {
    pub fecha_entrega: String,
}
