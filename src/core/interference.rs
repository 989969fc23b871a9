use crate::domain::model::{Antenna, GridDimensions, Point};
use crate::domain::registry::AntennaRegistry;
use std::collections::{BTreeMap, BTreeSet};

/// 一對天線的兩個反射候選點：`a1 - d` 與 `a2 + d`，其中 `d = a2 - a1`。
/// 候選點可能落在矩陣之外。
pub fn candidate_points(a1: &Antenna, a2: &Antenna) -> [(i64, i64); 2] {
    let (x1, y1) = (i64::from(a1.x), i64::from(a1.y));
    let (x2, y2) = (i64::from(a2.x), i64::from(a2.y));
    let (dx, dy) = (x2 - x1, y2 - y1);
    [(x1 - dx, y1 - dy), (x2 + dx, y2 + dy)]
}

/// 計算所有同頻天線對產生、且落在矩陣範圍內的干擾點。
///
/// 每個無序天線對只處理一次，不同頻率之間不互相影響。
/// 結果為集合，同一點被多對天線產生時只出現一次。
pub fn compute_interference(
    registry: &AntennaRegistry,
    dimensions: GridDimensions,
) -> BTreeSet<Point> {
    let mut by_frequency: BTreeMap<char, Vec<&Antenna>> = BTreeMap::new();
    for antenna in registry.iter() {
        by_frequency.entry(antenna.frequency).or_default().push(antenna);
    }

    let mut points = BTreeSet::new();
    for (frequency, antennas) in &by_frequency {
        let before = points.len();

        for (i, a1) in antennas.iter().enumerate() {
            for a2 in &antennas[i + 1..] {
                for (x, y) in candidate_points(a1, a2) {
                    if let Some(point) = dimensions.point_at(x, y) {
                        points.insert(point);
                    }
                }
            }
        }

        tracing::trace!(
            "Frequency '{}': {} antennas, {} new interference points",
            frequency,
            antennas.len(),
            points.len() - before
        );
    }

    points
}
