use leptos::prelude::{use_context, ServerFnError};
use tienda_client::ApiClient;
use tienda_types::ApiBase;

/// Backend client for `#[server]` fn bodies. The base URL is provided
/// as context by the console binary per request.
pub fn backend() -> Result<ApiClient, ServerFnError> {
    let base = use_context::<ApiBase>()
        .ok_or_else(|| ServerFnError::new("backend base url unavailable"))?;
    Ok(ApiClient::new(base.0))
}

pub fn to_server_error(e: tienda_client::ClientError) -> ServerFnError {
    ServerFnError::new(e.to_string())
}
