use tienda_types::{EmpleadoForm, EstadoUpdate, ReporteFila, Usuario};

use crate::{ApiClient, ClientError};

impl ApiClient {
    pub async fn empleados(&self) -> Result<Vec<Usuario>, ClientError> {
        self.get("admin/empleados").await
    }

    pub async fn empleado(&self, usuario_id: i64) -> Result<Usuario, ClientError> {
        self.get(&format!("admin/empleados/{usuario_id}")).await
    }

    pub async fn crear_empleado(&self, form: &EmpleadoForm) -> Result<Usuario, ClientError> {
        self.post("admin/empleados", form).await
    }

    pub async fn actualizar_empleado(
        &self,
        usuario_id: i64,
        form: &EmpleadoForm,
    ) -> Result<(), ClientError> {
        self.put(&format!("admin/empleados/{usuario_id}"), form).await
    }

    /// Activate or deactivate an account without touching the rest of it.
    pub async fn cambiar_estado_empleado(
        &self,
        usuario_id: i64,
        estado: &str,
    ) -> Result<(), ClientError> {
        let body = EstadoUpdate {
            estado: estado.to_string(),
        };
        self.patch(&format!("admin/empleados/{usuario_id}/estado"), &body).await
    }

    /// Aggregated report rows; `tipo` selects the report and the date
    /// range is optional on both ends.
    pub async fn reporte(
        &self,
        tipo: &str,
        desde: Option<&str>,
        hasta: Option<&str>,
    ) -> Result<Vec<ReporteFila>, ClientError> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(desde) = desde {
            query.push(("desde", desde));
        }
        if let Some(hasta) = hasta {
            query.push(("hasta", hasta));
        }
        self.get_with_query(&format!("reportes/{tipo}"), &query).await
    }
}
