use tienda_types::{LoginRequest, LoginResponse, RegisterRequest, Usuario};

use crate::{ApiClient, ClientError};

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("auth/login", &body).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<Usuario, ClientError> {
        self.post("auth/register", request).await
    }
}
