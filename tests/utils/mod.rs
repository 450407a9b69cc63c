pub mod context;
pub mod repositories;
pub mod server;
