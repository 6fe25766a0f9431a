//! HTTP clients for the engine's two external collaborators: the legislative
//! bill registry and the hosted sentiment classifier.

pub mod openstates;
pub mod sentiment;

pub use openstates::{RegistryClient, RegistryError};
pub use sentiment::{SentimentClient, SentimentError};
