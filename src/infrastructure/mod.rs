//! Infrastructure layer - HTTP transport and configuration

pub mod config;
pub mod transport;

pub use config::{ApiConfig, Config};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
