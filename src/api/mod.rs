//! Clients for the external collaborators: the auth service resolving bearer
//! tokens and the weather provider.

pub mod auth_client;
pub mod weather_client;

pub use auth_client::{AuthClient, AuthUser};
pub use weather_client::WeatherClient;
