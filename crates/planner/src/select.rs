//! Greedy target selection.
//!
//! Two-key choice over the scored candidate list: lowest current hit
//! points among the hunted enemies first, then highest aggregate
//! damage among the plays that hit that enemy. The damage ordering is
//! already baked into the candidate list by the evaluator, so the
//! first match per enemy wins.

use skirmish_core::{Entity, Vertex};

use crate::enumerate::CandidatePlay;

/// Picks the best play against the given enemies.
///
/// `plays` must already be sorted by descending aggregate damage;
/// `enemies` is scanned in ascending current-HP order (stable, so
/// equal-HP enemies keep their board enumeration order). Returns
/// `None` when no candidate targets any enemy tile.
pub fn select_best<'p, 'a>(
    plays: &'p [CandidatePlay<'a>],
    enemies: &[(Vertex, &Entity)],
) -> Option<&'p CandidatePlay<'a>> {
    let mut by_hp: Vec<&(Vertex, &Entity)> = enemies.iter().collect();
    by_hp.sort_by_key(|(_, e)| e.hp.current);

    for (vertex, enemy) in by_hp {
        if let Some(play) = plays.iter().find(|p| p.target == *vertex) {
            tracing::debug!(
                enemy = %enemy.id,
                hp = enemy.hp.current,
                damage = play.damage,
                origin = %play.origin,
                "selected play"
            );
            return Some(play);
        }
    }

    tracing::debug!(enemies = enemies.len(), "no candidate hits any enemy");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::{
        Alignment, Card, CardInstance, Direction, EntityId, Meter, PatternLine, Rotation,
    };

    fn enemy(id: u32, hp: u32) -> Entity {
        Entity::new(
            EntityId(id),
            Meter::new(hp, 10),
            Meter::full(5),
            Alignment::Neutral,
        )
    }

    fn card() -> Card {
        Card::new(
            "attack_slash",
            CardInstance(0),
            2,
            2,
            vec![PatternLine::new(Direction::Down, 1, Vec::new())],
        )
    }

    fn play<'a>(card: &'a Card, target: Vertex, damage: u32) -> CandidatePlay<'a> {
        CandidatePlay {
            origin: Vertex::ORIGIN,
            ap_cost: 0,
            rotation: Rotation::South,
            card,
            target,
            damage,
        }
    }

    #[test]
    fn prefers_the_lowest_hp_enemy_on_equal_damage() {
        let c = card();
        let sturdy = enemy(1, 7);
        let frail = enemy(2, 3);
        let enemies = vec![
            (Vertex::new(5, 0), &sturdy),
            (Vertex::new(0, 5), &frail),
        ];

        let plays = vec![
            play(&c, Vertex::new(5, 0), 2),
            play(&c, Vertex::new(0, 5), 2),
        ];

        let best = select_best(&plays, &enemies).expect("both enemies are hit");
        assert_eq!(best.target, Vertex::new(0, 5));
    }

    #[test]
    fn takes_the_strongest_play_against_that_enemy() {
        let c = card();
        let frail = enemy(2, 3);
        let enemies = vec![(Vertex::new(0, 5), &frail)];

        // Damage-sorted list, as the evaluator leaves it.
        let plays = vec![
            play(&c, Vertex::new(1, 1), 9),
            play(&c, Vertex::new(0, 5), 6),
            play(&c, Vertex::new(0, 5), 2),
        ];

        let best = select_best(&plays, &enemies).unwrap();
        assert_eq!(best.damage, 6);
    }

    #[test]
    fn no_hit_reports_no_valid_play() {
        let c = card();
        let frail = enemy(2, 3);
        let enemies = vec![(Vertex::new(0, 5), &frail)];
        let plays = vec![play(&c, Vertex::new(4, 4), 5)];

        assert!(select_best(&plays, &enemies).is_none());
    }
}
