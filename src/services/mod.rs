pub mod api_client;
pub mod auth_service;
pub mod cache_service;

pub use api_client::{ApiClient, RemoteApi};
pub use auth_service::{CredentialGate, Credentials};
pub use cache_service::LinkCache;
