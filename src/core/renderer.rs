use crate::domain::model::{GridDimensions, Point, RenderedGrid, EMPTY_MARKER, INTERFERENCE_MARKER};
use crate::domain::registry::AntennaRegistry;
use std::collections::BTreeSet;

/// 繪製矩陣：先放天線，再把仍為空白的干擾點標成 `#`。
/// 天線永遠優先，干擾點不會覆寫天線格。
pub fn render(
    registry: &AntennaRegistry,
    points: &BTreeSet<Point>,
    dimensions: GridDimensions,
) -> RenderedGrid {
    let mut grid = RenderedGrid::filled(dimensions, EMPTY_MARKER);

    for antenna in registry.iter() {
        let placed = match (usize::try_from(antenna.x), usize::try_from(antenna.y)) {
            (Ok(x), Ok(y)) => grid.set(x, y, antenna.frequency),
            _ => false,
        };
        if !placed {
            tracing::warn!("⚠️ Antenna outside the grid skipped: {}", antenna);
        }
    }

    for point in points {
        if grid.cell(point.x, point.y) == Some(EMPTY_MARKER) {
            grid.set(point.x, point.y, INTERFERENCE_MARKER);
        }
    }

    grid
}
