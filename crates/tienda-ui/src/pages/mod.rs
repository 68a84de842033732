pub mod admin;
pub mod admin_reportes;
pub mod admin_usuario_form;
pub mod admin_usuarios;
pub mod carrito;
pub mod comun;
pub mod home;
pub mod login;
pub mod logistica;
pub mod mis_compras;
pub mod mis_productos;
pub mod moderador;
pub mod pedidos;
pub mod pedidos_logistica;
pub mod perfil;
pub mod producto;
pub mod producto_form;
pub mod redirect;
pub mod register;
pub mod resenas;
pub mod sanciones;
pub mod solicitudes;
pub mod tarjetas;
pub mod tienda;
