use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub usuario_id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    /// Account state: ACTIVO or INACTIVO.
    #[serde(default)]
    pub estado: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Usuario,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Employee account form used by the admin area. Role is one of the
/// closed role codes; password is only sent on creation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmpleadoForm {
    pub username: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EstadoUpdate {
    pub estado: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sancion {
    pub sancion_id: i64,
    pub usuario_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    pub motivo: String,
    #[serde(default)]
    pub fecha: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NuevaSancion {
    pub usuario_id: i64,
    pub motivo: String,
}

/// One aggregated row of an admin report; the backend decides the
/// grouping per report type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporteFila {
    pub concepto: String,
    pub cantidad: i64,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_decodes() {
        let json = r#"{
            "token": "a.b.c",
            "user": { "usuarioId": 1, "username": "ana", "email": "ana@t.gt", "role": "ADMIN" }
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.user.role.as_deref(), Some("ADMIN"));
    }

    #[test]
    fn empleado_form_omits_absent_password() {
        let form = EmpleadoForm {
            username: "mod1".into(),
            email: "mod1@t.gt".into(),
            role: "MODERADOR".into(),
            password: None,
        };
        let json = serde_json::to_string(&form).unwrap();
        assert!(!json.contains("password"));
    }
}
