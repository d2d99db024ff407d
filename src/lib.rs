pub mod classify;
pub mod config;
pub mod credentials;
pub mod cricapi;
pub mod http_client;
pub mod menu;
pub mod model;
pub mod prompt;
pub mod render;
pub mod ticker;
pub mod views;
