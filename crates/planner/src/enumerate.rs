//! Candidate play enumeration.
//!
//! Builds the full cross product of reachable origin tiles, the four
//! facings, the affordable cards in hand, and the tiles each card's
//! pattern resolves to. No pruning happens here beyond reachability
//! and affordability; filtering to actual hits is downstream work.

use skirmish_core::{Board, Card, Entity, Rotation, Vertex};

use crate::pattern::{PatternError, resolve_pattern};
use crate::reach::ReachableTile;

/// One concrete way to spend the turn: stand on `origin`, face
/// `rotation`, play `card`, touching `target`.
///
/// `damage` is the aggregate damage of the whole (card, origin,
/// rotation) combination and is filled in by the damage evaluator;
/// enumeration leaves it at zero.
#[derive(Clone, Copy, Debug)]
pub struct CandidatePlay<'a> {
    pub origin: Vertex,
    /// Action points spent reaching `origin`.
    pub ap_cost: u32,
    pub rotation: Rotation,
    pub card: &'a Card,
    pub target: Vertex,
    pub damage: u32,
}

/// Enumerates every candidate play available to `active` standing
/// anywhere in `reachable`.
///
/// A card is affordable from a tile when its cost fits what is left of
/// the entity's action points after paying for the move there.
pub fn enumerate_plays<'a>(
    board: &Board,
    active: &'a Entity,
    reachable: &[ReachableTile],
) -> Result<Vec<CandidatePlay<'a>>, PatternError> {
    let dims = board.dims();
    let mut plays = Vec::new();

    for tile in reachable {
        for rotation in Rotation::ALL {
            for card in &active.hand {
                if card.cost > active.ap.current.saturating_sub(tile.ap_cost) {
                    continue;
                }

                for target in resolve_pattern(card, tile.vertex, rotation, dims)? {
                    plays.push(CandidatePlay {
                        origin: tile.vertex,
                        ap_cost: tile.ap_cost,
                        rotation,
                        card,
                        target,
                        damage: 0,
                    });
                }
            }
        }
    }

    tracing::debug!(
        entity = %active.id,
        origins = reachable.len(),
        candidates = plays.len(),
        "enumerated candidate plays"
    );

    Ok(plays)
}
