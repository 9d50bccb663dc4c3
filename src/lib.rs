pub mod client;
pub mod clock;
pub mod cmdargs;
pub mod config;
pub mod crypto;
pub mod error;
pub mod http;
pub mod logging;
pub mod models;
pub mod server_info;
pub mod service;
pub mod verifier;
