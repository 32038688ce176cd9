//! Transit data providers.

pub mod documents;
pub mod static_provider;

pub use static_provider::{RouteImpl, StaticTransitProvider, StationImpl};
