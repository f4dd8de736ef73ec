//! End-to-end planning scenarios on the reference 9x8 board.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use skirmish_core::{
    ActionRequest, Alignment, Board, BoardSnapshot, Card, CardInstance, Direction, Entity,
    EntityId, GridDims, Meter, OffsetStep, PatternLine, Rotation, Vertex,
};
use skirmish_planner::{
    PlanError, PlanPolicy, enumerate_plays, plan_turn, reachable_tiles, score_plays,
};

fn slash(instance: u32) -> Card {
    Card::new(
        "attack_slash_0000",
        CardInstance(instance),
        2,
        2,
        vec![PatternLine::new(
            Direction::Down,
            3,
            vec![OffsetStep::new(Direction::Down, 1)],
        )],
    )
}

fn bash(instance: u32) -> Card {
    Card::new(
        "attack_bash_0000",
        CardInstance(instance),
        3,
        2,
        vec![
            PatternLine::new(Direction::Down, 3, vec![OffsetStep::new(Direction::Down, 1)]),
            PatternLine::new(
                Direction::Down,
                1,
                vec![
                    OffsetStep::new(Direction::Left, 1),
                    OffsetStep::new(Direction::Down, 3),
                ],
            ),
            PatternLine::new(
                Direction::Down,
                1,
                vec![
                    OffsetStep::new(Direction::Right, 1),
                    OffsetStep::new(Direction::Down, 3),
                ],
            ),
        ],
    )
}

fn block(instance: u32) -> Card {
    Card::new(
        "block_wall_0000",
        CardInstance(instance),
        1,
        2,
        vec![PatternLine::new(
            Direction::Down,
            1,
            vec![OffsetStep::new(Direction::Down, 1)],
        )],
    )
}

/// Warrior hand in shuffled draw order, seeded for reproducibility.
fn warrior_hand(seed: u64) -> Vec<Card> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cards = vec![bash(0), slash(1), block(2)];
    cards.shuffle(&mut rng);
    cards
}

fn warrior(hand: Vec<Card>) -> Entity {
    Entity::new(EntityId(1), Meter::full(10), Meter::full(5), Alignment::Friendly)
        .with_hand(hand)
        .with_rotation(Rotation::West)
}

fn neutral_enemy() -> Entity {
    Entity::new(EntityId(2), Meter::full(10), Meter::full(5), Alignment::Neutral)
}

/// Warrior at (0, 0) with 5 AP, lone neutral enemy at (0, 5).
fn reference_snapshot(hand: Vec<Card>) -> BoardSnapshot {
    let mut board = Board::empty(GridDims::new(9, 8));
    board.place(Vertex::new(0, 0), warrior(hand));
    board.place(Vertex::new(0, 5), neutral_enemy());
    BoardSnapshot::new(board, EntityId(1))
}

#[test]
fn enumerator_covers_the_enemy_tile() {
    let snapshot = reference_snapshot(vec![slash(1)]);
    let (position, active) = snapshot.active_entity().unwrap();

    let reachable = reachable_tiles(&snapshot.board, position, active.ap.current);
    let mut plays = enumerate_plays(&snapshot.board, active, &reachable).unwrap();
    score_plays(&snapshot.board, &mut plays, &PlanPolicy::default());

    let hits: Vec<_> = plays
        .iter()
        .filter(|p| p.target == Vertex::new(0, 5))
        .collect();
    assert!(!hits.is_empty(), "some reachable origin must cover (0, 5)");

    // The lone enemy is at full health, so every hitting combination
    // aggregates to exactly the card damage.
    assert!(hits.iter().all(|p| p.damage == 2));
}

#[test]
fn plan_with_a_hit_is_five_actions_ending_in_end_turn() {
    let snapshot = reference_snapshot(warrior_hand(0xDEC1DE));
    let actions = plan_turn(&snapshot, Alignment::Neutral, &PlanPolicy::default()).unwrap();

    assert_eq!(actions.len(), 5);
    assert!(matches!(actions[0], ActionRequest::Move { from, .. } if from == Vertex::new(0, 0)));
    assert!(matches!(actions[1], ActionRequest::Highlight { .. }));
    assert!(
        matches!(&actions[2], ActionRequest::PlayCard { tiles, .. } if tiles.contains(&Vertex::new(0, 5)))
    );
    assert_eq!(actions[3], ActionRequest::ClearHighlight);
    assert_eq!(actions[4], ActionRequest::EndTurn);
}

#[test]
fn empty_hand_falls_back_to_approach_and_end_turn() {
    let snapshot = reference_snapshot(Vec::new());
    let actions = plan_turn(&snapshot, Alignment::Neutral, &PlanPolicy::default()).unwrap();

    // The enemy tile itself is blocked; (0, 4) is the closest the
    // warrior can stand within 5 AP.
    assert_eq!(
        actions,
        vec![
            ActionRequest::Move {
                from: Vertex::new(0, 0),
                to: Vertex::new(0, 4)
            },
            ActionRequest::EndTurn
        ]
    );
}

#[test]
fn unaffordable_hand_also_falls_back() {
    // Cost above max AP: never playable from any tile.
    let mut pricey = slash(9);
    pricey.cost = 11;
    let snapshot = reference_snapshot(vec![pricey]);

    let actions = plan_turn(&snapshot, Alignment::Neutral, &PlanPolicy::default()).unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[1], ActionRequest::EndTurn);
}

#[test]
fn missing_active_entity_is_fatal() {
    let mut board = Board::empty(GridDims::new(9, 8));
    board.place(Vertex::new(0, 5), neutral_enemy());
    let snapshot = BoardSnapshot::new(board, EntityId(1));

    let err = plan_turn(&snapshot, Alignment::Neutral, &PlanPolicy::default()).unwrap_err();
    assert!(matches!(err, PlanError::ActiveEntityMissing(EntityId(1))));
}

#[test]
fn seeded_shuffle_is_reproducible() {
    assert_eq!(warrior_hand(42), warrior_hand(42));

    // Same cards either way, only the order may differ.
    let mut a: Vec<_> = warrior_hand(42).iter().map(|c| c.instance).collect();
    let mut b: Vec<_> = warrior_hand(43).iter().map(|c| c.instance).collect();
    a.sort();
    b.sort();
    assert_eq!(a, b);
}
