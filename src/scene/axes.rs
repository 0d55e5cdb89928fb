use super::{NodeKind, SceneNode};
use crate::geometry::Geometry;

const X_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
const Y_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
const Z_COLOR: [f32; 3] = [0.0, 0.0, 1.0];

/// World-space axis indicator: one colored segment per positive axis.
/// It is a static reference marker; the per-frame update leaves it alone.
pub fn create_axes_helper(size: f32) -> SceneNode {
    let positions = vec![
        [0.0, 0.0, 0.0],
        [size, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, size, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, 0.0, size],
    ];
    let colors = vec![X_COLOR, X_COLOR, Y_COLOR, Y_COLOR, Z_COLOR, Z_COLOR];

    SceneNode::new(
        "axes",
        NodeKind::Axes,
        Geometry::with_colors(positions, colors).shared(),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helper_spans_three_segments() {
        let axes = create_axes_helper(5.0);
        let geometry = axes.geometry.borrow();

        assert_eq!(axes.kind, NodeKind::Axes);
        assert_eq!(geometry.vertex_count(), 6);
        assert_eq!(geometry.positions()[1], [5.0, 0.0, 0.0]);
        assert_eq!(geometry.positions()[3], [0.0, 5.0, 0.0]);
        assert_eq!(geometry.positions()[5], [0.0, 0.0, 5.0]);
    }

    #[test]
    fn segment_colors_match_their_axis() {
        let axes = create_axes_helper(5.0);
        let geometry = axes.geometry.borrow();

        assert_eq!(geometry.colors()[0], X_COLOR);
        assert_eq!(geometry.colors()[2], Y_COLOR);
        assert_eq!(geometry.colors()[4], Z_COLOR);
    }

    #[test]
    fn helper_carries_no_material() {
        let axes = create_axes_helper(5.0);
        assert!(axes.material.is_none());
    }
}
