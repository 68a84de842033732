use tienda_types::{Producto, ProductoForm};

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// Catalog visible to a buyer: approved listings from other users.
    pub async fn tienda_disponibles(&self, usuario_id: i64) -> Result<Vec<Producto>, ClientError> {
        self.get(&format!("tienda/disponibles/{usuario_id}")).await
    }

    pub async fn productos_de_usuario(&self, usuario_id: i64) -> Result<Vec<Producto>, ClientError> {
        self.get(&format!("productos/usuario/{usuario_id}")).await
    }

    pub async fn producto(&self, producto_id: i64) -> Result<Producto, ClientError> {
        self.get(&format!("productos/{producto_id}")).await
    }

    pub async fn crear_producto(
        &self,
        usuario_id: i64,
        form: &ProductoForm,
    ) -> Result<Producto, ClientError> {
        let body = serde_json::json!({
            "nombre": form.nombre,
            "descripcion": form.descripcion,
            "precio": form.precio,
            "stock": form.stock,
            "categoria": form.categoria,
            "usuario": { "usuarioId": usuario_id },
        });
        self.post("productos", &body).await
    }

    pub async fn actualizar_producto(
        &self,
        producto_id: i64,
        form: &ProductoForm,
    ) -> Result<(), ClientError> {
        self.put(&format!("productos/{producto_id}"), form).await
    }

    pub async fn eliminar_producto(&self, producto_id: i64) -> Result<(), ClientError> {
        self.delete(&format!("productos/{producto_id}")).await
    }
}
