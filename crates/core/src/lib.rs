//! Board-state data model shared between the planner and its hosts.
//!
//! `skirmish-core` defines the canonical value types for one turn of
//! planning: grid coordinates, facings, cards with their area patterns,
//! entities, the board snapshot consumed by the planner, and the
//! outbound action requests it produces. Everything here is plain
//! immutable data; all decision logic lives in `skirmish-planner`.
pub mod action;
pub mod board;
pub mod card;
pub mod entity;
pub mod grid;

pub use action::ActionRequest;
pub use board::{Board, BoardSnapshot};
pub use card::{Card, CardInstance, OffsetStep, PatternLine};
pub use entity::{Alignment, Entity, EntityId, Meter};
pub use grid::{Direction, GridDims, Rotation, Vertex};
