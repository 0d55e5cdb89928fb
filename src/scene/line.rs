use glam::Vec3;

use super::{NodeKind, SceneNode};
use crate::geometry::Geometry;
use crate::material::SharedMaterial;

/// Decorative shallow-V polyline drawn above the beam with the beam's own
/// material.
pub fn create_guide_line(material: &SharedMaterial) -> SceneNode {
    let points = [
        Vec3::new(-3.5, 3.0, 0.0),
        Vec3::new(0.0, 2.8, 0.0),
        Vec3::new(3.5, 3.0, 0.0),
    ];

    SceneNode::new(
        "guide_line",
        NodeKind::Line,
        Geometry::from_points(&points).shared(),
        Some(material.clone()),
    )
}
