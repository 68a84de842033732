use tienda_types::{NuevaResena, Resena};

use crate::{ApiClient, ClientError};

impl ApiClient {
    pub async fn resenas_de_usuario(&self, usuario_id: i64) -> Result<Vec<Resena>, ClientError> {
        self.get(&format!("resenas/usuario/{usuario_id}")).await
    }

    pub async fn resenas_de_producto(&self, producto_id: i64) -> Result<Vec<Resena>, ClientError> {
        self.get(&format!("resenas/producto/{producto_id}")).await
    }

    pub async fn publicar_resena(&self, resena: &NuevaResena) -> Result<Resena, ClientError> {
        self.post("resenas", resena).await
    }
}
