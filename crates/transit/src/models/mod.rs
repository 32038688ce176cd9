//! Transit data models, types, and traits.

pub mod color;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use color::{clear_color, color_from_hex, color_to_hex, parse_hex_color, ColorError};
pub use traits::{Route, TransitProvider, TransitStation};
pub use types::{CatalogError, Result, RouteGeometry, TransitError};
