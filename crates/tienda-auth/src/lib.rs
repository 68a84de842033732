#![allow(non_snake_case)]

pub mod claims;
pub mod guard;
pub mod role;
pub mod store;

pub use claims::{Claims, ClaimsError};
pub use guard::{check_access, evaluate, Access};
pub use role::Role;
pub use store::{MemoryStore, SessionStore};
