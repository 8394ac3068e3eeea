//! Pointer interaction
//!
//! Nearest-point lookup and tooltip placement for the hover overlay. All of
//! this is plain geometry; the component feeds it pointer coordinates
//! relative to the drawable area.

use super::geometry::{ChartGeometry, MARGIN};

/// Which side of the hovered point the tooltip occupies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipSide {
    Above,
    Below,
}

/// Edge length of the pointer-direction triangle
const TRIANGLE_SIZE: f64 = 10.0;

/// Vertical offset of the tooltip box when placed below the point
const BELOW_OFFSET: f64 = 55.0;

/// Vertical offset of the tooltip box when placed above the point
const ABOVE_OFFSET: f64 = -10.0;

/// Tooltip and triangle placement for a hovered point
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLayout {
    pub side: TooltipSide,
    /// Tooltip anchor in component-wrapper pixels; the box is shifted by
    /// `translate(-50%, -100%)` from here
    pub left: f64,
    pub top: f64,
    /// Triangle path, drawn at the hovered point
    pub triangle_path: String,
    /// Triangle anchor in drawable pixels
    pub triangle_x: f64,
    pub triangle_y: f64,
}

/// Index of the point whose band center is horizontally closest to
/// `pointer_x`. Ties keep the earlier point.
pub fn nearest_index(geometry: &ChartGeometry, pointer_x: f64) -> Option<usize> {
    let mut closest = None;
    let mut closest_distance = f64::INFINITY;
    for (index, point) in geometry.points.iter().enumerate() {
        let distance = (pointer_x - point.x).abs();
        if distance < closest_distance {
            closest_distance = distance;
            closest = Some(index);
        }
    }
    closest
}

/// The tooltip goes below points in the top 30% of the drawable area and
/// above all others, so it never leaves the chart vertically.
pub fn tooltip_side(point_y: f64, height: f64) -> TooltipSide {
    if point_y < height * 0.3 {
        TooltipSide::Below
    } else {
        TooltipSide::Above
    }
}

/// Where the tooltip box and its triangle go for the point at `index`
pub fn tooltip_layout(geometry: &ChartGeometry, index: usize) -> Option<TooltipLayout> {
    let point = geometry.points.get(index)?;
    let side = tooltip_side(point.y, geometry.height);
    let half = TRIANGLE_SIZE / 2.0;

    let (top, triangle_path) = match side {
        TooltipSide::Below => (
            MARGIN.top + point.y + BELOW_OFFSET,
            // Apex at the anchor, base below: points up into the box
            format!("M0,0 L{},{} L-{},{} Z", half, TRIANGLE_SIZE, half, TRIANGLE_SIZE),
        ),
        TooltipSide::Above => (
            MARGIN.top + point.y + ABOVE_OFFSET,
            // Apex at the anchor, base above: points down at the point
            format!("M0,0 L{},-{} L-{},-{} Z", half, TRIANGLE_SIZE, half, TRIANGLE_SIZE),
        ),
    };

    Some(TooltipLayout {
        side,
        left: MARGIN.left + point.x,
        top,
        triangle_path,
        triangle_x: point.x,
        triangle_y: point.y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::geometry::{PointGeometry, XTick, YTick};

    fn point(label: &str, x: f64, y: f64) -> PointGeometry {
        PointGeometry {
            x_label: label.to_string(),
            y_value: 0.0,
            x,
            y,
        }
    }

    fn geometry(points: Vec<PointGeometry>) -> ChartGeometry {
        ChartGeometry {
            width: 520.0,
            height: 320.0,
            points,
            x_ticks: Vec::<XTick>::new(),
            y_ticks: Vec::<YTick>::new(),
            y_domain: (0.0, 1.0),
            line_path: String::new(),
            line_length: 0.0,
        }
    }

    #[test]
    fn test_nearest_index_picks_closest_center() {
        let g = geometry(vec![
            point("a", 100.0, 50.0),
            point("b", 200.0, 50.0),
            point("c", 300.0, 50.0),
        ]);

        assert_eq!(nearest_index(&g, 0.0), Some(0));
        assert_eq!(nearest_index(&g, 199.0), Some(1));
        assert_eq!(nearest_index(&g, 999.0), Some(2));
    }

    #[test]
    fn test_nearest_index_tie_keeps_first() {
        let g = geometry(vec![point("a", 100.0, 50.0), point("b", 200.0, 50.0)]);
        // Exactly halfway between the two centers
        assert_eq!(nearest_index(&g, 150.0), Some(0));
    }

    #[test]
    fn test_nearest_index_empty() {
        let g = geometry(Vec::new());
        assert_eq!(nearest_index(&g, 100.0), None);
    }

    #[test]
    fn test_tooltip_side_threshold() {
        // 30% of 320 is 96
        assert_eq!(tooltip_side(95.9, 320.0), TooltipSide::Below);
        assert_eq!(tooltip_side(96.0, 320.0), TooltipSide::Above);
        assert_eq!(tooltip_side(300.0, 320.0), TooltipSide::Above);
        assert_eq!(tooltip_side(0.0, 320.0), TooltipSide::Below);
    }

    #[test]
    fn test_tooltip_layout_below_high_point() {
        // y = 40 is inside the top 30%, tooltip drops below the point
        let g = geometry(vec![point("a", 130.0, 40.0)]);
        let layout = tooltip_layout(&g, 0).unwrap();

        assert_eq!(layout.side, TooltipSide::Below);
        assert_eq!(layout.left, MARGIN.left + 130.0);
        assert_eq!(layout.top, MARGIN.top + 40.0 + 55.0);
        // Up-pointing triangle: base below the apex
        assert_eq!(layout.triangle_path, "M0,0 L5,10 L-5,10 Z");
        assert_eq!((layout.triangle_x, layout.triangle_y), (130.0, 40.0));
    }

    #[test]
    fn test_tooltip_layout_above_low_point() {
        let g = geometry(vec![point("a", 130.0, 250.0)]);
        let layout = tooltip_layout(&g, 0).unwrap();

        assert_eq!(layout.side, TooltipSide::Above);
        assert_eq!(layout.top, MARGIN.top + 250.0 - 10.0);
        assert_eq!(layout.triangle_path, "M0,0 L5,-10 L-5,-10 Z");
    }

    #[test]
    fn test_tooltip_layout_out_of_range() {
        let g = geometry(vec![point("a", 130.0, 250.0)]);
        assert!(tooltip_layout(&g, 5).is_none());
    }
}
