use crate::entity::{Alignment, Entity, EntityId};
use crate::grid::{GridDims, Vertex};

/// Rectangular grid of entity slots.
///
/// Slots are stored row-major; a slot is either empty or holds exactly
/// one entity. The board is an immutable snapshot input — the planner
/// never mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    dims: GridDims,
    slots: Vec<Option<Entity>>,
}

impl Board {
    /// Creates an empty board of the given extents.
    pub fn empty(dims: GridDims) -> Self {
        let len = (dims.width * dims.height) as usize;
        Self {
            dims,
            slots: vec![None; len],
        }
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    fn index(&self, v: Vertex) -> Option<usize> {
        self.dims
            .contains(v)
            .then(|| (v.y as u32 * self.dims.width + v.x as u32) as usize)
    }

    /// Entity occupying `v`, if any. Out-of-bounds reads as empty.
    pub fn entity_at(&self, v: Vertex) -> Option<&Entity> {
        self.index(v).and_then(|i| self.slots[i].as_ref())
    }

    pub fn is_occupied(&self, v: Vertex) -> bool {
        self.entity_at(v).is_some()
    }

    /// Places an entity, replacing whatever occupied the slot.
    ///
    /// Returns false (and leaves the board untouched) when `v` is out
    /// of bounds.
    pub fn place(&mut self, v: Vertex, entity: Entity) -> bool {
        match self.index(v) {
            Some(i) => {
                self.slots[i] = Some(entity);
                true
            }
            None => false,
        }
    }

    /// Board position of the entity with the given id.
    pub fn position_of(&self, id: EntityId) -> Option<Vertex> {
        self.iter().find(|(_, e)| e.id == id).map(|(v, _)| v)
    }

    /// All occupied slots in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, &Entity)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            let entity = slot.as_ref()?;
            let v = Vertex::new(
                (i as u32 % self.dims.width) as i32,
                (i as u32 / self.dims.width) as i32,
            );
            Some((v, entity))
        })
    }

    /// Occupied slots holding units of the given alignment, row-major.
    pub fn by_alignment(&self, alignment: Alignment) -> Vec<(Vertex, &Entity)> {
        self.iter()
            .filter(|(_, e)| e.alignment == alignment)
            .collect()
    }
}

/// One immutable planning input: the board plus the unit whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    pub board: Board,
    pub active: EntityId,
}

impl BoardSnapshot {
    pub fn new(board: Board, active: EntityId) -> Self {
        Self { board, active }
    }

    /// The active entity, if it is present on the board.
    pub fn active_entity(&self) -> Option<(Vertex, &Entity)> {
        self.board.iter().find(|(_, e)| e.id == self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Meter;

    fn unit(id: u32, alignment: Alignment) -> Entity {
        Entity::new(EntityId(id), Meter::full(10), Meter::full(5), alignment)
    }

    #[test]
    fn lookup_round_trips_through_placement() {
        let mut board = Board::empty(GridDims::new(9, 8));
        board.place(Vertex::new(3, 2), unit(7, Alignment::Friendly));

        assert_eq!(board.position_of(EntityId(7)), Some(Vertex::new(3, 2)));
        assert!(board.is_occupied(Vertex::new(3, 2)));
        assert!(!board.is_occupied(Vertex::new(2, 3)));
        assert_eq!(board.position_of(EntityId(8)), None);
    }

    #[test]
    fn out_of_bounds_reads_as_empty() {
        let board = Board::empty(GridDims::new(9, 8));
        assert!(board.entity_at(Vertex::new(-1, 0)).is_none());
        assert!(board.entity_at(Vertex::new(0, 8)).is_none());
    }

    #[test]
    fn alignment_filter_is_row_major_stable() {
        let mut board = Board::empty(GridDims::new(9, 8));
        board.place(Vertex::new(5, 1), unit(1, Alignment::Neutral));
        board.place(Vertex::new(0, 0), unit(2, Alignment::Neutral));
        board.place(Vertex::new(4, 4), unit(3, Alignment::Friendly));

        let neutrals = board.by_alignment(Alignment::Neutral);
        let ids: Vec<_> = neutrals.iter().map(|(_, e)| e.id).collect();
        assert_eq!(ids, vec![EntityId(2), EntityId(1)]);
    }
}
