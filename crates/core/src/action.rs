use crate::card::CardInstance;
use crate::grid::Vertex;

/// One outbound request in the canonical turn sequence.
///
/// The planner emits these in order; transport metadata (player ids,
/// pacing between sends) is the embedding process's concern.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionRequest {
    /// Relocate the active entity.
    Move { from: Vertex, to: Vertex },
    /// Show the tiles a pending play will touch.
    Highlight { tiles: Vec<Vertex> },
    /// Play one concrete card copy against the given tiles.
    PlayCard {
        card: CardInstance,
        tiles: Vec<Vertex>,
    },
    /// Remove the pending-play overlay.
    ClearHighlight,
    /// Finish the active entity's turn.
    EndTurn,
}
