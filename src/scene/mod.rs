mod axes;
mod beam;
mod builder;
mod line;

pub use axes::create_axes_helper;
pub use beam::create_beam_assembly;
pub use builder::{BeamScene, ROTATION_STEP};
pub use line::create_guide_line;

use glam::{Mat4, Vec3};

use crate::geometry::SharedGeometry;
use crate::material::SharedMaterial;

/// How a node is drawn, and whether the per-frame update spins it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Solid triangle mesh
    Mesh,
    /// Polyline through its vertices
    Line,
    /// Axis indicator, line segments with per-vertex colors
    Axes,
}

/// One positioned drawable in the graph
pub struct SceneNode {
    pub name: &'static str,
    pub kind: NodeKind,
    pub geometry: SharedGeometry,
    pub material: Option<SharedMaterial>,
    pub position: Vec3,
    pub rotation_y: f32,
}

impl SceneNode {
    pub fn new(
        name: &'static str,
        kind: NodeKind,
        geometry: SharedGeometry,
        material: Option<SharedMaterial>,
    ) -> Self {
        Self {
            name,
            kind,
            geometry,
            material,
            position: Vec3::ZERO,
            rotation_y: 0.0,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Whether the per-frame update rotates this node
    pub fn is_animated(&self) -> bool {
        matches!(self.kind, NodeKind::Mesh | NodeKind::Line)
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_rotation_y(self.rotation_y)
    }
}

/// Ordered collection of drawable nodes. Lives for one activation; nothing
/// persists across remounts.
#[derive(Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [SceneNode] {
        &mut self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;

    #[test]
    fn model_matrix_translates_then_rotates() {
        let mut node = SceneNode::new(
            "probe",
            NodeKind::Mesh,
            Geometry::cuboid(2.0, 2.0, 2.0).shared(),
            None,
        )
        .at(Vec3::new(0.0, 1.0, 0.0));
        node.rotation_y = std::f32::consts::FRAC_PI_2;

        // A quarter turn about Y maps +X onto -Z, then the offset applies
        let p = node.model_matrix() * glam::Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((p.x - 0.0).abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
        assert!((p.z - -1.0).abs() < 1e-6);
    }

    #[test]
    fn axes_nodes_do_not_spin() {
        let mesh = SceneNode::new(
            "mesh",
            NodeKind::Mesh,
            Geometry::cuboid(1.0, 1.0, 1.0).shared(),
            None,
        );
        let line = SceneNode::new(
            "line",
            NodeKind::Line,
            Geometry::from_points(&[Vec3::ZERO, Vec3::X]).shared(),
            None,
        );
        let axes = SceneNode::new(
            "axes",
            NodeKind::Axes,
            Geometry::with_colors(vec![[0.0; 3]], vec![[1.0; 3]]).shared(),
            None,
        );

        assert!(mesh.is_animated());
        assert!(line.is_animated());
        assert!(!axes.is_animated());
    }
}
