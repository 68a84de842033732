#![allow(non_snake_case)]

pub mod catalogo;
pub mod pedidos;
pub mod usuarios;

pub use catalogo::*;
pub use pedidos::*;
pub use usuarios::*;

/// Backend base URL wrapper for sharing via Leptos context.
#[derive(Clone, Debug)]
pub struct ApiBase(pub String);
