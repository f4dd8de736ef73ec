//! Single-turn tactical planner.
//!
//! Given one immutable [`BoardSnapshot`], [`plan_turn`] decides where
//! the active entity should move, which card to play and where to aim
//! it, and returns the ordered [`ActionRequest`] sequence for the
//! turn. The pipeline is greedy and single-turn: reachability →
//! candidate enumeration → damage scoring → target selection → action
//! assembly, with a closing move as the fallback when nothing hits.
//!
//! Every invocation is a pure function of its snapshot: no state is
//! kept between turns, so independent snapshots may be planned
//! concurrently.

pub mod enumerate;
pub mod path;
pub mod pattern;
pub mod reach;
pub mod score;
pub mod select;
pub mod turn;

pub use enumerate::{CandidatePlay, enumerate_plays};
pub use path::PathGrid;
pub use pattern::{PatternError, resolve_pattern};
pub use reach::{ReachableTile, reachable_tiles};
pub use score::{PlanPolicy, SelfTileRule, score_plays};
pub use select::select_best;
pub use turn::{TurnAssembler, closest_approach};

use skirmish_core::{ActionRequest, Alignment, BoardSnapshot, EntityId};

/// Planning cannot produce a result.
///
/// Recoverable conditions (no path, no damaging play) are not errors;
/// they degrade to the fallback move inside [`plan_turn`].
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The snapshot names an active entity that is not on the board.
    /// Planning has no actor to move, so this is fatal for the pass.
    #[error("active entity {0} is not present on the board")]
    ActiveEntityMissing(EntityId),

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Plans one turn for the snapshot's active entity against enemies of
/// `hunt` alignment.
///
/// Returns five actions (move, highlight, play, clear, end turn) when
/// a damaging play exists, otherwise two (fallback move toward the
/// nearest enemy, end turn).
pub fn plan_turn(
    snapshot: &BoardSnapshot,
    hunt: Alignment,
    policy: &PlanPolicy,
) -> Result<Vec<ActionRequest>, PlanError> {
    let (position, active) = snapshot
        .active_entity()
        .ok_or(PlanError::ActiveEntityMissing(snapshot.active))?;

    tracing::debug!(
        entity = %active.id,
        %position,
        ap = active.ap.current,
        cards = active.hand.len(),
        %hunt,
        "planning turn"
    );

    let reachable = reachable_tiles(&snapshot.board, position, active.ap.current);
    let mut plays = enumerate_plays(&snapshot.board, active, &reachable)?;
    score_plays(&snapshot.board, &mut plays, policy);

    let enemies = snapshot.board.by_alignment(hunt);

    match select_best(&plays, &enemies) {
        Some(play) => {
            let tiles = resolve_pattern(
                play.card,
                play.origin,
                play.rotation,
                snapshot.board.dims(),
            )?;
            Ok(TurnAssembler::new().assemble_play(position, play, tiles))
        }
        None => {
            // Nothing hits this turn; close distance instead.
            let to = closest_approach(&reachable, &enemies).unwrap_or(position);
            tracing::debug!(%to, "no valid play, falling back to approach move");
            Ok(TurnAssembler::new().assemble_fallback(position, to))
        }
    }
}
