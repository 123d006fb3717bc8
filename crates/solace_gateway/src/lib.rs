pub mod server;
pub mod types;

pub use server::{spawn_cleanup, GatewayServer};
pub use types::{ChatRequest, ChatResponse, HealthResponse};
