//! Aardvark Client - HTTP gateway to the restaurant server
//!
//! Translates menu, booking and order operations into REST calls and parses
//! the JSON responses back into the domain types of the `shared` crate.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;

pub use client::{
    GatewayRequest, GatewayResponse, HttpClient, NetworkHttpClient, OneshotHttpClient,
    RestaurantClient,
};
pub use config::ClientConfig;
pub use endpoint::Endpoint;
pub use error::{ClientError, ClientResult};

// Re-export shared types for convenience
pub use shared::client::{BookingRequest, MenuEntry};
pub use shared::models::TimeSlot;
pub use shared::{Food, FoodType, Menu};
