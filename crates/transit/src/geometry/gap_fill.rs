//! Run repair for stations skipped by a route's station list.
//!
//! Route catalogs often list only the stops a service makes, while the
//! station catalog only describes track between physically adjacent
//! stations. When a run jumps from A to B and A has no path toward B, the
//! stations in between are recovered by walking A's *first* southern
//! neighbor until a station adjacent to B is reached.
//!
//! The walk is greedy: it never looks ahead and never backtracks. If it runs
//! out of neighbors the stations inserted so far are kept and the remaining
//! gap is left as is.

use std::collections::HashSet;

use tracing::debug;

use crate::identifiers::StationIdentifier;
use crate::models::traits::TransitProvider;

/// Insert the stations implied by `south` adjacency between each pair of
/// consecutive run stations. Original stations keep their relative order.
pub fn fill_gaps<P>(provider: &P, run: &[StationIdentifier]) -> Vec<StationIdentifier>
where
    P: TransitProvider + ?Sized,
{
    let mut filled = Vec::with_capacity(run.len());

    for (index, current) in run.iter().enumerate() {
        filled.push(current.clone());
        if let Some(next) = run.get(index + 1) {
            bridge(provider, current, next, &mut filled);
        }
    }

    filled
}

/// Push the stations between `from` and `to` onto `out`
fn bridge<P>(
    provider: &P,
    from: &StationIdentifier,
    to: &StationIdentifier,
    out: &mut Vec<StationIdentifier>,
)
where
    P: TransitProvider + ?Sized,
{
    let Some(mut head) = provider.get_station(from) else {
        return;
    };

    if !head.has_south_paths() || head.has_south_neighbor(to) {
        return;
    }

    // A cycle in first-neighbor links would otherwise never terminate
    let mut visited = HashSet::from([from.clone()]);

    loop {
        let Some(neighbor) = head.first_south_neighbor().cloned() else {
            debug!(%from, %to, stuck_at = %head.id(), "gap left open, no further neighbors");
            return;
        };

        if !visited.insert(neighbor.clone()) {
            debug!(%from, %to, %neighbor, "gap left open, neighbor cycle");
            return;
        }

        debug!(%from, %to, inserted = %neighbor, "bridging gap");
        out.push(neighbor.clone());

        head = match provider.get_station(&neighbor) {
            Some(station) => station,
            None => return,
        };

        if head.has_south_neighbor(to) {
            return;
        }
    }
}
