use tienda_types::{CarritoItem, NuevaTarjeta, PagoRequest, Tarjeta};

use crate::{ApiClient, ClientError};

impl ApiClient {
    pub async fn carrito(&self, usuario_id: i64) -> Result<Vec<CarritoItem>, ClientError> {
        self.get(&format!("carrito/{usuario_id}")).await
    }

    /// Quantity travels as query parameters, matching the backend's
    /// `?productoId=..&cantidad=..` contract.
    pub async fn agregar_al_carrito(
        &self,
        usuario_id: i64,
        producto_id: i64,
        cantidad: i64,
    ) -> Result<(), ClientError> {
        self.post_with_query(
            &format!("carrito/{usuario_id}/agregar"),
            &[("productoId", producto_id), ("cantidad", cantidad)],
        )
        .await
    }

    pub async fn quitar_item(&self, item_id: i64) -> Result<(), ClientError> {
        self.delete(&format!("carrito/item/{item_id}")).await
    }

    pub async fn vaciar_carrito(&self, usuario_id: i64) -> Result<(), ClientError> {
        self.delete(&format!("carrito/{usuario_id}/vaciar")).await
    }

    pub async fn pagar(&self, usuario_id: i64, tarjeta_id: i64) -> Result<(), ClientError> {
        let body = PagoRequest { tarjeta_id };
        self.post::<_, serde_json::Value>(&format!("ventas/pagar/{usuario_id}"), &body)
            .await
            .map(|_| ())
    }

    pub async fn tarjetas(&self, usuario_id: i64) -> Result<Vec<Tarjeta>, ClientError> {
        self.get(&format!("tarjetas/usuario/{usuario_id}")).await
    }

    pub async fn guardar_tarjeta(&self, tarjeta: &NuevaTarjeta) -> Result<Tarjeta, ClientError> {
        let body = serde_json::json!({
            "numero": tarjeta.numero,
            "titular": tarjeta.titular,
            "vencimiento": tarjeta.vencimiento,
            "usuario": { "usuarioId": tarjeta.usuario_id },
        });
        self.post("tarjetas", &body).await
    }

    pub async fn eliminar_tarjeta(&self, tarjeta_id: i64) -> Result<(), ClientError> {
        self.delete(&format!("tarjetas/{tarjeta_id}")).await
    }
}
