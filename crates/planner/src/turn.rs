//! Turn action assembly.
//!
//! Orders a chosen play into the canonical outbound sequence via a
//! linear phase machine: Idle → Move → HighlightTarget → PlayCard →
//! ClearHighlight → EndTurn → Done, one action per transition. When no
//! play was found, a single fallback move toward the nearest hunted
//! enemy replaces the middle of the sequence. The assembler performs
//! no I/O and knows nothing about pacing.

use skirmish_core::{ActionRequest, Entity, Vertex};

use crate::enumerate::CandidatePlay;
use crate::reach::ReachableTile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Move,
    HighlightTarget,
    PlayCard,
    ClearHighlight,
    EndTurn,
    Done,
}

impl Phase {
    fn next(self) -> Phase {
        match self {
            Phase::Idle => Phase::Move,
            Phase::Move => Phase::HighlightTarget,
            Phase::HighlightTarget => Phase::PlayCard,
            Phase::PlayCard => Phase::ClearHighlight,
            Phase::ClearHighlight => Phase::EndTurn,
            Phase::EndTurn | Phase::Done => Phase::Done,
        }
    }
}

/// Emits the ordered action sequence for one turn.
pub struct TurnAssembler {
    phase: Phase,
}

impl TurnAssembler {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Full five-action sequence for a chosen play.
    ///
    /// `tiles` are the resolved tiles of the winning combination; they
    /// back both the highlight overlay and the play request.
    pub fn assemble_play(
        mut self,
        from: Vertex,
        play: &CandidatePlay<'_>,
        tiles: Vec<Vertex>,
    ) -> Vec<ActionRequest> {
        let mut actions = Vec::with_capacity(5);
        while self.phase != Phase::Done {
            self.phase = self.phase.next();
            match self.phase {
                Phase::Move => actions.push(ActionRequest::Move {
                    from,
                    to: play.origin,
                }),
                Phase::HighlightTarget => actions.push(ActionRequest::Highlight {
                    tiles: tiles.clone(),
                }),
                Phase::PlayCard => actions.push(ActionRequest::PlayCard {
                    card: play.card.instance,
                    tiles: tiles.clone(),
                }),
                Phase::ClearHighlight => actions.push(ActionRequest::ClearHighlight),
                Phase::EndTurn => actions.push(ActionRequest::EndTurn),
                Phase::Idle | Phase::Done => {}
            }
        }
        actions
    }

    /// Fallback when nothing hits: close distance, then end the turn.
    pub fn assemble_fallback(self, from: Vertex, to: Vertex) -> Vec<ActionRequest> {
        vec![ActionRequest::Move { from, to }, ActionRequest::EndTurn]
    }
}

impl Default for TurnAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Reachable tile with the globally smallest Manhattan distance to any
/// enemy tile, stable by enumeration order on ties.
pub fn closest_approach(
    reachable: &[ReachableTile],
    enemies: &[(Vertex, &Entity)],
) -> Option<Vertex> {
    let mut best: Option<(u32, Vertex)> = None;

    for tile in reachable {
        for (enemy_vertex, _) in enemies {
            let distance = tile.vertex.manhattan(*enemy_vertex);
            if best.is_none_or(|(d, _)| distance < d) {
                best = Some((distance, tile.vertex));
            }
        }
    }

    best.map(|(_, vertex)| vertex)
}
