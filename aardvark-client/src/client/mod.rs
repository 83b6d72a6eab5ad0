//! Client module
//!
//! [`RestaurantClient`] maps each restaurant operation onto one REST call.
//! Requests go through an [`HttpClient`] transport: the network, or an
//! in-process axum router.

pub mod http;
pub mod http_oneshot;
mod restaurant;

// Re-export main types
pub use self::http::{GatewayRequest, GatewayResponse, HttpClient, NetworkHttpClient};
pub use http_oneshot::OneshotHttpClient;
pub use restaurant::RestaurantClient;
