use serde::{Deserialize, Serialize};

/// A product listing as returned by the backend catalog endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
    pub producto_id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: i64,
    #[serde(default)]
    pub categoria: Option<String>,
    /// Moderation state: PENDIENTE, APROBADO or RECHAZADO.
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub usuario_id: Option<i64>,
}

/// Payload for creating or updating a listing. The backend assigns
/// the id and resets the moderation state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductoForm {
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: i64,
    #[serde(default)]
    pub categoria: Option<String>,
}

/// Reason sent when a moderator rejects a pending listing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RechazoProducto {
    pub motivo: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resena {
    pub resena_id: i64,
    pub producto_id: i64,
    #[serde(default)]
    pub producto_nombre: Option<String>,
    pub comentario: String,
    pub calificacion: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NuevaResena {
    pub producto_id: i64,
    pub usuario_id: i64,
    pub comentario: String,
    pub calificacion: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn producto_decodes_backend_shape() {
        let json = r#"{
            "productoId": 7,
            "nombre": "Teclado",
            "precio": 150.0,
            "stock": 3,
            "estado": "APROBADO",
            "usuarioId": 2
        }"#;
        let producto: Producto = serde_json::from_str(json).unwrap();
        assert_eq!(producto.producto_id, 7);
        assert_eq!(producto.estado.as_deref(), Some("APROBADO"));
        assert!(producto.descripcion.is_none());
    }
}
