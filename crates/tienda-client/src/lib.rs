#![allow(non_snake_case)]

pub mod admin;
pub mod auth;
pub mod carrito;
pub mod moderacion;
pub mod pedidos;
pub mod productos;
pub mod resenas;

use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-2xx reply; `message` is whatever body the backend sent,
    /// e.g. "Usuario no encontrado" on a failed login.
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Thin JSON client for the external backend. All business logic lives
/// on the other side of these calls; this type only shapes requests and
/// decodes replies.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!("backend error {status}: {message}");
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    /// Like [`decode`](Self::decode) for endpoints whose success body
    /// is empty or irrelevant.
    async fn expect_ok(response: reqwest::Response) -> Result<(), ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!("backend error {status}: {message}");
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).query(query).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ClientError> {
        let response = self.http.post(self.url(path)).send().await?;
        Self::expect_ok(response).await
    }

    pub(crate) async fn post_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<(), ClientError> {
        let response = self.http.post(self.url(path)).query(query).send().await?;
        Self::expect_ok(response).await
    }

    pub(crate) async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ClientError> {
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::expect_ok(response).await
    }

    pub(crate) async fn put_empty(&self, path: &str) -> Result<(), ClientError> {
        let response = self.http.put(self.url(path)).send().await?;
        Self::expect_ok(response).await
    }

    pub(crate) async fn patch<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ClientError> {
        let response = self.http.patch(self.url(path)).json(body).send().await?;
        Self::expect_ok(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = self.http.delete(self.url(path)).send().await?;
        Self::expect_ok(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8080/api/");
        assert_eq!(client.url("/productos/7"), "http://localhost:8080/api/productos/7");
        assert_eq!(client.url("productos/7"), "http://localhost:8080/api/productos/7");
    }
}
