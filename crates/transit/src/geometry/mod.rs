//! Route geometry derivation: gap filling and polyline expansion.

pub mod gap_fill;
pub mod resolver;

pub use gap_fill::fill_gaps;
pub use resolver::{expand_run, resolve_all_routes, resolve_route};

#[cfg(test)]
pub(crate) mod testing;
