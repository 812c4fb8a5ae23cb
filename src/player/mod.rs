pub mod artwork;
pub mod client;
pub mod config;
pub mod error;
pub mod state;
pub mod traits;

pub use client::PlayerStateClient;
