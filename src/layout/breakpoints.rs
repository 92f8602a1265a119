//! Drop-target breakpoints and nearest-breakpoint resolution.

use serde::Serialize;

use crate::types::Column;

/// A content-space boundary associated with a candidate drop column.
///
/// `column == None` means "drop before the first non-sticky column".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakpoint {
    pub x: f64,
    pub column: Option<String>,
}

impl Breakpoint {
    pub fn new(x: f64, column: Option<&str>) -> Self {
        Self {
            x,
            column: column.map(str::to_string),
        }
    }
}

/// Build the breakpoint list for a drag from the visible columns.
///
/// Every visible column contributes its right edge. A sticky column, if
/// present, gets a breakpoint at `x = 0`; otherwise a leading "front"
/// breakpoint is added unless the first visible column is the primary-display
/// column.
pub fn compute_breakpoints(visible: &[Column], sticky: Option<&Column>) -> Vec<Breakpoint> {
    let mut breakpoints = Vec::with_capacity(visible.len() + 1);
    if let Some(sticky) = sticky {
        breakpoints.push(Breakpoint::new(0.0, Some(&sticky.name)));
    } else if visible.first().is_some_and(|c| !c.primary_display) {
        breakpoints.push(Breakpoint::new(0.0, None));
    }
    breakpoints.extend(
        visible
            .iter()
            .map(|c| Breakpoint::new(c.right(), Some(&c.name))),
    );
    breakpoints
}

/// Translate a client x coordinate into grid content space.
pub fn content_x(client_x: f64, grid_left: f64, scroll_left: f64) -> f64 {
    client_x - grid_left + scroll_left
}

/// Find the breakpoint closest to `x`.
///
/// Scans left to right with a strict comparison, so the first breakpoint
/// wins ties. Returns `None` only for an empty list.
pub fn nearest_breakpoint(breakpoints: &[Breakpoint], x: f64) -> Option<&Breakpoint> {
    let mut nearest = None;
    let mut min_distance = f64::INFINITY;
    for point in breakpoints {
        let distance = (point.x - x).abs();
        if distance < min_distance {
            min_distance = distance;
            nearest = Some(point);
        }
    }
    nearest
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn visible(first_primary: bool) -> Vec<Column> {
        let mut a = Column::new("a", 100.0);
        a.primary_display = first_primary;
        let mut b = Column::new("b", 100.0);
        b.left = 100.0;
        let mut c = Column::new("c", 50.0);
        c.left = 200.0;
        vec![a, b, c]
    }

    #[test]
    fn test_front_breakpoint_without_primary() {
        let points = compute_breakpoints(&visible(false), None);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], Breakpoint::new(0.0, None));
        assert_eq!(points[1], Breakpoint::new(100.0, Some("a")));
        assert_eq!(points[3], Breakpoint::new(250.0, Some("c")));
    }

    #[test]
    fn test_no_front_breakpoint_when_primary_first() {
        let points = compute_breakpoints(&visible(true), None);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].column.as_deref(), Some("a"));
    }

    #[test]
    fn test_sticky_breakpoint_comes_first() {
        let sticky = Column::new("id", 60.0);
        let points = compute_breakpoints(&visible(false), Some(&sticky));
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], Breakpoint::new(0.0, Some("id")));
    }

    #[test]
    fn test_empty_visible_without_sticky() {
        assert!(compute_breakpoints(&[], None).is_empty());
    }

    #[test_case(0.0, None ; "at the front")]
    #[test_case(40.0, None ; "closer to front")]
    #[test_case(60.0, Some("a") ; "closer to a")]
    #[test_case(180.0, Some("b") ; "near b")]
    #[test_case(10_000.0, Some("c") ; "past the end")]
    #[test_case(-50.0, None ; "before the grid")]
    fn test_nearest(x: f64, expected: Option<&str>) {
        let points = compute_breakpoints(&visible(false), None);
        let nearest = nearest_breakpoint(&points, x).unwrap();
        assert_eq!(nearest.column.as_deref(), expected);
    }

    #[test]
    fn test_tie_goes_to_leftmost() {
        let points = compute_breakpoints(&visible(false), None);
        // Exactly halfway between the front (0) and a (100)
        let nearest = nearest_breakpoint(&points, 50.0).unwrap();
        assert_eq!(nearest.column, None);
        // Exactly halfway between b (200) and c (250)
        let nearest = nearest_breakpoint(&points, 225.0).unwrap();
        assert_eq!(nearest.column.as_deref(), Some("b"));
    }

    #[test]
    fn test_nearest_empty() {
        assert!(nearest_breakpoint(&[], 10.0).is_none());
    }

    #[test]
    fn test_content_x() {
        assert_eq!(content_x(150.0, 50.0, 300.0), 400.0);
    }
}
