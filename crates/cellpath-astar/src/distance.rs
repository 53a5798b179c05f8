use cellpath_core::Point;

/// Euclidean (L2) distance between two points, in grid units.
///
/// The heuristic used by the engine; admissible for 8-way movement with
/// unit-or-greater entry costs.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}
