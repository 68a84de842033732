use tienda_types::{FechaEntregaUpdate, Pedido};

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// Open orders for a buyer.
    pub async fn pedidos_de_usuario(&self, usuario_id: i64) -> Result<Vec<Pedido>, ClientError> {
        self.get(&format!("pedidos/usuario/{usuario_id}")).await
    }

    /// Delivered orders, i.e. the buyer's purchase history.
    pub async fn compras_de_usuario(&self, usuario_id: i64) -> Result<Vec<Pedido>, ClientError> {
        self.get(&format!("pedidos/usuario/{usuario_id}/entregados")).await
    }

    /// Every in-transit order, for the logistics board.
    pub async fn pedidos_en_curso(&self) -> Result<Vec<Pedido>, ClientError> {
        self.get("pedidos/en-curso").await
    }

    pub async fn actualizar_fecha_entrega(
        &self,
        pedido_id: i64,
        fecha_entrega: &str,
    ) -> Result<(), ClientError> {
        let body = FechaEntregaUpdate {
            fecha_entrega: fecha_entrega.to_string(),
        };
        self.put(&format!("pedidos/actualizar-fecha/{pedido_id}"), &body).await
    }

    pub async fn marcar_entregado(&self, pedido_id: i64) -> Result<(), ClientError> {
        self.put_empty(&format!("pedidos/entregar/{pedido_id}")).await
    }
}
