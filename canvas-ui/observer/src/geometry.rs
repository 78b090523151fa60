use iced::Rectangle;

/// Fraction of the `target` area that lies inside `viewport`.
///
/// The result is always within `[0.0, 1.0]`. Targets with an empty area
/// report `0.0`.
pub fn visible_ratio(target: Rectangle, viewport: Rectangle) -> f32 {
    let area = target.width * target.height;
    if area <= 0.0 {
        return 0.0;
    }

    match overlap(target, viewport) {
        Some((width, height)) => (width * height / area).clamp(0.0, 1.0),
        None => 0.0,
    }
}

/// Whether `target` and `viewport` share a non-empty region.
///
/// Rectangles that only touch along an edge do not overlap.
pub fn overlaps(target: Rectangle, viewport: Rectangle) -> bool {
    overlap(target, viewport).is_some()
}

/// Vertical distance between the centers of `target` and `viewport`.
pub fn center_distance(target: Rectangle, viewport: Rectangle) -> f32 {
    let target_center = target.y + target.height / 2.0;
    let viewport_center = viewport.y + viewport.height / 2.0;
    (target_center - viewport_center).abs()
}

fn overlap(a: Rectangle, b: Rectangle) -> Option<(f32, f32)> {
    let width = (a.x + a.width).min(b.x + b.width) - a.x.max(b.x);
    let height = (a.y + a.height).min(b.y + b.height) - a.y.max(b.y);

    (width > 0.0 && height > 0.0).then_some((width, height))
}

#[cfg(test)]
mod tests {
    use iced::Rectangle;

    use super::{center_distance, overlaps, visible_ratio};

    fn rect(y: f32, height: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y,
            width: 1000.0,
            height,
        }
    }

    #[test]
    fn given_target_fully_inside_viewport_when_ratio_then_returns_one() {
        let ratio = visible_ratio(rect(100.0, 200.0), rect(0.0, 600.0));
        assert!((ratio - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_half_visible_target_when_ratio_then_returns_half() {
        let ratio = visible_ratio(rect(500.0, 200.0), rect(0.0, 600.0));
        assert!((ratio - 0.5).abs() < 1e-6);
    }

    #[test]
    fn given_disjoint_target_when_ratio_then_returns_zero() {
        assert_eq!(visible_ratio(rect(700.0, 200.0), rect(0.0, 600.0)), 0.0);
    }

    #[test]
    fn given_target_taller_than_viewport_when_ratio_then_caps_below_one() {
        let ratio = visible_ratio(rect(0.0, 1800.0), rect(0.0, 600.0));
        assert!((ratio - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn given_empty_target_when_ratio_then_returns_zero() {
        assert_eq!(visible_ratio(rect(100.0, 0.0), rect(0.0, 600.0)), 0.0);
    }

    #[test]
    fn given_edge_touching_rectangles_when_overlaps_then_returns_false() {
        assert!(!overlaps(rect(600.0, 100.0), rect(0.0, 600.0)));
        assert!(overlaps(rect(599.0, 100.0), rect(0.0, 600.0)));
    }

    #[test]
    fn given_centered_target_when_center_distance_then_returns_zero() {
        let distance = center_distance(rect(200.0, 200.0), rect(0.0, 600.0));
        assert_eq!(distance, 0.0);
    }
}
