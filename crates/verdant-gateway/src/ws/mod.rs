pub mod broadcast;
pub mod connection;
pub mod emitters;
pub mod registry;
