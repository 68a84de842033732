use tienda_types::{NuevaSancion, Producto, RechazoProducto, Sancion, Usuario};

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// Listings waiting for moderator review.
    pub async fn productos_pendientes(&self) -> Result<Vec<Producto>, ClientError> {
        self.get("productos/pendientes").await
    }

    pub async fn aprobar_producto(&self, producto_id: i64) -> Result<(), ClientError> {
        self.put_empty(&format!("productos/{producto_id}/aprobar")).await
    }

    pub async fn rechazar_producto(&self, producto_id: i64, motivo: &str) -> Result<(), ClientError> {
        let body = RechazoProducto {
            motivo: motivo.to_string(),
        };
        self.put(&format!("productos/{producto_id}/rechazar"), &body).await
    }

    /// Common users visible to the moderator, sanction targets included.
    pub async fn usuarios_moderables(&self) -> Result<Vec<Usuario>, ClientError> {
        self.get("moderador/usuarios").await
    }

    pub async fn sanciones(&self) -> Result<Vec<Sancion>, ClientError> {
        self.get("moderador/sanciones").await
    }

    pub async fn sancionar(&self, sancion: &NuevaSancion) -> Result<Sancion, ClientError> {
        self.post("moderador/sanciones", sancion).await
    }
}
