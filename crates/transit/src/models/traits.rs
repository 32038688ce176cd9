//! Core traits for transit entities.
//!
//! These traits define the public interface the gap filler and the geometry
//! resolver read from. Implementations can be in-memory or backed by
//! anything else that can answer station and route lookups.

use geo::{Coord, Point};
use std::sync::Arc;

use crate::identifiers::*;

// ============================================================================
// Core Entity Traits
// ============================================================================

/// A transit route (e.g., "A", "Lexington Ave Express")
pub trait Route: Send + Sync {
    fn id(&self) -> &RouteIdentifier;

    /// Display color as stored in the route catalog (hex RGB, e.g. "#2185d0")
    fn color(&self) -> &str;

    /// Southbound runs, each an ordered list of raw run entries.
    ///
    /// Entries still carry their trailing disambiguation character; use
    /// [`StationIdentifier::from_run_entry`] to get the catalog key.
    fn runs(&self) -> &[Vec<String>];
}

/// A transit station with the curve geometry toward its southern neighbors
pub trait TransitStation: Send + Sync {
    fn id(&self) -> &StationIdentifier;

    /// Station position (x = longitude, y = latitude)
    fn location(&self) -> Point;

    /// True if any southbound path is defined for this station
    fn has_south_paths(&self) -> bool;

    /// True if a southbound path toward `neighbor` is defined
    fn has_south_neighbor(&self, neighbor: &StationIdentifier) -> bool;

    /// First southbound neighbor in catalog order
    fn first_south_neighbor(&self) -> Option<&StationIdentifier>;

    /// Waypoints from this station toward `neighbor`, in stored order
    fn south_waypoints(&self, neighbor: &StationIdentifier) -> Option<&[Coord]>;
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Provider of station and route data with lookup methods
pub trait TransitProvider: Send + Sync {
    // ---- Lookups ----
    fn get_station(&self, id: &StationIdentifier) -> Option<Arc<dyn TransitStation>>;
    fn get_route(&self, id: &RouteIdentifier) -> Option<Arc<dyn Route>>;

    // ---- Collections ----

    /// All routes in catalog order
    fn all_routes(&self) -> Vec<Arc<dyn Route>>;
}
