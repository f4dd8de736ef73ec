use crate::grid::Direction;

/// Identifier for one concrete copy of a card in a hand.
///
/// Two copies of the same card design carry distinct instances so a
/// play request can name the exact copy being spent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardInstance(pub u32);

/// One displacement step applied before a pattern line is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetStep {
    pub direction: Direction,
    /// Unit steps to take; validated non-negative at resolution time.
    pub distance: i32,
}

impl OffsetStep {
    pub fn new(direction: Direction, distance: i32) -> Self {
        Self {
            direction,
            distance,
        }
    }
}

/// One line of a card's area pattern: a chain of offset steps that
/// displaces the anchor, then a straight draw of `distance` tiles in
/// `direction` starting at the displaced anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternLine {
    pub direction: Direction,
    pub distance: i32,
    pub offsets: Vec<OffsetStep>,
}

impl PatternLine {
    pub fn new(direction: Direction, distance: i32, offsets: Vec<OffsetStep>) -> Self {
        Self {
            direction,
            distance,
            offsets,
        }
    }
}

/// A playable card: an action-point cost, a base damage value, and the
/// pattern describing which tiles it touches before rotation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// Design identifier shared by all copies of this card.
    pub id: String,
    pub instance: CardInstance,
    pub cost: u32,
    pub damage: u32,
    pub pattern: Vec<PatternLine>,
}

impl Card {
    pub fn new(
        id: impl Into<String>,
        instance: CardInstance,
        cost: u32,
        damage: u32,
        pattern: Vec<PatternLine>,
    ) -> Self {
        Self {
            id: id.into(),
            instance,
            cost,
            damage,
            pattern,
        }
    }
}
