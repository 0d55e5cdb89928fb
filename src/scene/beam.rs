use glam::Vec3;

use super::{NodeKind, SceneNode};
use crate::geometry::Geometry;
use crate::material::SharedMaterial;

/// Vertical offset of each flange from the web centerline
const FLANGE_OFFSET: f32 = 1.0;

/// Build the T-beam cross-section: one web centered at the origin and two
/// flanges above and below it, all sharing the given material.
pub fn create_beam_assembly(material: &SharedMaterial) -> [SceneNode; 3] {
    let web = SceneNode::new(
        "web",
        NodeKind::Mesh,
        Geometry::cuboid(7.0, 2.0, 0.1).shared(),
        Some(material.clone()),
    )
    .at(Vec3::ZERO);

    let upper_flange = SceneNode::new(
        "upper_flange",
        NodeKind::Mesh,
        Geometry::cuboid(7.0, 0.1, 0.5).shared(),
        Some(material.clone()),
    )
    .at(Vec3::new(0.0, FLANGE_OFFSET, 0.0));

    let lower_flange = SceneNode::new(
        "lower_flange",
        NodeKind::Mesh,
        Geometry::cuboid(7.0, 0.1, 0.5).shared(),
        Some(material.clone()),
    )
    .at(Vec3::new(0.0, -FLANGE_OFFSET, 0.0));

    [web, upper_flange, lower_flange]
}
