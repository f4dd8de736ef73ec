//! Card pattern geometry.
//!
//! Resolves a card's declarative pattern (offset chains plus line
//! draws) into absolute board tiles for a given caster position and
//! facing. Patterns are authored facing south; the facing is applied
//! as one rigid rotation of the whole resolved set about the caster.

use skirmish_core::{Card, Direction, GridDims, OffsetStep, PatternLine, Rotation, Vertex};

/// A pattern that cannot be resolved into tiles.
///
/// Directions are a closed enum here, so the only malformed shape left
/// is a negative distance. Rejected up front so corrupt coordinates
/// never reach damage scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern line has negative distance {distance}")]
    NegativeLineDistance { distance: i32 },

    #[error("offset step has negative distance {distance}")]
    NegativeOffsetDistance { distance: i32 },
}

/// Resolves `card`'s pattern anchored at `caster` under `rotation`.
///
/// Tiles falling outside `dims` are dropped; duplicates are kept (the
/// damage evaluator de-duplicates per combination).
pub fn resolve_pattern(
    card: &Card,
    caster: Vertex,
    rotation: Rotation,
    dims: GridDims,
) -> Result<Vec<Vertex>, PatternError> {
    let mut tiles = Vec::new();

    for line in &card.pattern {
        let anchor = offset_chain(&line.offsets)?;
        line_draw(line, caster, anchor, &mut tiles)?;
    }

    Ok(tiles
        .into_iter()
        .map(|tile| rotate_about(caster, tile, rotation))
        .filter(|&tile| dims.contains(tile))
        .collect())
}

/// Accumulates the offset chain from local (0, 0) by unit steps.
fn offset_chain(offsets: &[OffsetStep]) -> Result<Vertex, PatternError> {
    let mut cursor = Vertex::ORIGIN;
    for step in offsets {
        if step.distance < 0 {
            return Err(PatternError::NegativeOffsetDistance {
                distance: step.distance,
            });
        }
        let (dx, dy) = step.direction.delta();
        for _ in 0..step.distance {
            cursor = Vertex::new(cursor.x + dx, cursor.y + dy);
        }
    }
    Ok(cursor)
}

/// Walks the line draw, emitting one absolute tile per step starting
/// at the offset-chain anchor.
fn line_draw(
    line: &PatternLine,
    caster: Vertex,
    anchor: Vertex,
    tiles: &mut Vec<Vertex>,
) -> Result<(), PatternError> {
    if line.distance < 0 {
        return Err(PatternError::NegativeLineDistance {
            distance: line.distance,
        });
    }
    let (dx, dy) = line.direction.delta();
    let mut cursor = anchor;
    for _ in 0..line.distance {
        tiles.push(Vertex::new(caster.x + cursor.x, caster.y + cursor.y));
        cursor = Vertex::new(cursor.x + dx, cursor.y + dy);
    }
    Ok(())
}

/// Rigid rotation of `point` about `center` by the facing's clockwise
/// angle, rounded half-to-even back onto the grid.
fn rotate_about(center: Vertex, point: Vertex, rotation: Rotation) -> Vertex {
    let radians = rotation.degrees().to_radians();
    let (sin, cos) = radians.sin_cos();

    let px = f64::from(point.x) - f64::from(center.x);
    let py = f64::from(point.y) - f64::from(center.y);

    let rx = px * cos - py * sin;
    let ry = px * sin + py * cos;

    Vertex::new(
        (rx + f64::from(center.x)).round_ties_even() as i32,
        (ry + f64::from(center.y)).round_ties_even() as i32,
    )
}
