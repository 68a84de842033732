pub mod footer;
pub mod header;
pub mod layout;
pub mod pedidos_table;
pub mod protected;
pub mod toast;
