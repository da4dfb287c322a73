pub mod api;
pub mod config;
pub mod logging;
pub mod route;
pub mod session;
pub mod shutdown;
pub mod ui;
pub mod validation;
