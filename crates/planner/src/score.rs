//! Damage evaluation over candidate plays.
//!
//! Every candidate belonging to one (card instance, origin, rotation)
//! combination is annotated with that combination's aggregate damage:
//! the sum of clamped per-tile damage over the distinct tiles the
//! combination touches. Candidates are then stably ordered by
//! descending aggregate so the selector can take the first hit it
//! finds.

use std::collections::HashMap;

use skirmish_core::{Board, CardInstance, Entity, Rotation, Vertex};

use crate::enumerate::CandidatePlay;

/// Whether the play's own origin tile counts toward aggregate damage
/// when something stands on it.
///
/// The caster occupies the origin after moving, so `Exclude` treats
/// any damage rolled onto that tile as self-damage and leaves it out
/// of the sum. `Include` counts the origin like any other hit tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelfTileRule {
    #[default]
    Exclude,
    Include,
}

/// Tunable planning choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlanPolicy {
    pub self_tile: SelfTileRule,
}

/// Damage one card hit deals to the entity on a tile.
///
/// Expressed as headroom under max HP rather than straight subtraction:
/// `clamp(max_hp - (hp - damage), 0, max_hp)`. Never negative, never
/// more than the target's maximum hit points.
fn tile_damage(entity: &Entity, card_damage: u32) -> u32 {
    let headroom = i64::from(entity.hp.maximum)
        - (i64::from(entity.hp.current) - i64::from(card_damage));
    headroom.clamp(0, i64::from(entity.hp.maximum)) as u32
}

/// Annotates every play with its combination's aggregate damage and
/// stably sorts the list by descending aggregate.
pub fn score_plays(board: &Board, plays: &mut [CandidatePlay<'_>], policy: &PlanPolicy) {
    type ComboKey = (CardInstance, Vertex, Rotation);

    // Distinct hit tiles per combination; duplicates within one
    // combination must not double-count.
    let mut combo_tiles: HashMap<ComboKey, Vec<Vertex>> = HashMap::new();
    for play in plays.iter() {
        let tiles = combo_tiles
            .entry((play.card.instance, play.origin, play.rotation))
            .or_default();
        if !tiles.contains(&play.target) {
            tiles.push(play.target);
        }
    }

    let mut combo_damage: HashMap<ComboKey, u32> = HashMap::with_capacity(combo_tiles.len());
    for play in plays.iter() {
        let key = (play.card.instance, play.origin, play.rotation);
        if combo_damage.contains_key(&key) {
            continue;
        }
        let aggregate = combo_tiles[&key]
            .iter()
            .filter(|&&tile| policy.self_tile == SelfTileRule::Include || tile != play.origin)
            .filter_map(|&tile| board.entity_at(tile))
            .map(|entity| tile_damage(entity, play.card.damage))
            .sum();
        combo_damage.insert(key, aggregate);
    }

    for play in plays.iter_mut() {
        play.damage = combo_damage[&(play.card.instance, play.origin, play.rotation)];
    }

    // Stable: ties keep enumeration order.
    plays.sort_by(|a, b| b.damage.cmp(&a.damage));

    tracing::debug!(
        combos = combo_damage.len(),
        best = plays.first().map(|p| p.damage).unwrap_or(0),
        "scored candidate plays"
    );
}
