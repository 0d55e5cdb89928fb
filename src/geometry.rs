use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

/// Geometry shared between scene nodes
pub type SharedGeometry = Rc<RefCell<Geometry>>;

/// CPU-side vertex data for one drawable.
///
/// Meshes carry positions plus triangle indices; polylines carry positions
/// only; the axis indicator additionally carries a color per vertex.
/// `dispose` frees the buffers and is terminal — the geometry is not usable
/// afterwards, and nothing stops a caller from disposing twice.
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
    indices: Vec<u32>,
    disposed: bool,
}

impl Geometry {
    /// Axis-aligned rectangular prism centered at the origin
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let (x, y, z) = (width / 2.0, height / 2.0, depth / 2.0);

        let positions = vec![
            [-x, -y, -z],
            [x, -y, -z],
            [x, y, -z],
            [-x, y, -z],
            [-x, -y, z],
            [x, -y, z],
            [x, y, z],
            [-x, y, z],
        ];

        #[rustfmt::skip]
        let indices = vec![
            0, 2, 1, 0, 3, 2, // back
            4, 5, 6, 4, 6, 7, // front
            0, 4, 7, 0, 7, 3, // left
            1, 6, 5, 1, 2, 6, // right
            3, 7, 6, 3, 6, 2, // top
            0, 1, 5, 0, 5, 4, // bottom
        ];

        Self {
            positions,
            colors: Vec::new(),
            indices,
            disposed: false,
        }
    }

    /// Unindexed polyline through the given control points, in order
    pub fn from_points(points: &[Vec3]) -> Self {
        Self {
            positions: points.iter().map(|p| p.to_array()).collect(),
            colors: Vec::new(),
            indices: Vec::new(),
            disposed: false,
        }
    }

    /// Unindexed line segments with one color per vertex
    pub fn with_colors(positions: Vec<[f32; 3]>, colors: Vec<[f32; 3]>) -> Self {
        debug_assert_eq!(positions.len(), colors.len());
        Self {
            positions,
            colors,
            indices: Vec::new(),
            disposed: false,
        }
    }

    pub fn shared(self) -> SharedGeometry {
        Rc::new(RefCell::new(self))
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Free the vertex and index buffers
    pub fn dispose(&mut self) {
        self.positions = Vec::new();
        self.colors = Vec::new();
        self.indices = Vec::new();
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid_spans_the_requested_extents() {
        let geometry = Geometry::cuboid(7.0, 2.0, 0.1);

        assert_eq!(geometry.vertex_count(), 8);
        assert_eq!(geometry.indices().len(), 36);

        let max_x = geometry.positions().iter().map(|p| p[0]).fold(f32::MIN, f32::max);
        let max_y = geometry.positions().iter().map(|p| p[1]).fold(f32::MIN, f32::max);
        let max_z = geometry.positions().iter().map(|p| p[2]).fold(f32::MIN, f32::max);
        assert_eq!((max_x, max_y, max_z), (3.5, 1.0, 0.05));

        let min_x = geometry.positions().iter().map(|p| p[0]).fold(f32::MAX, f32::min);
        assert_eq!(min_x, -3.5);
    }

    #[test]
    fn cuboid_indices_stay_in_range() {
        let geometry = Geometry::cuboid(1.0, 1.0, 1.0);
        assert!(geometry.indices().iter().all(|&i| (i as usize) < 8));
    }

    #[test]
    fn polyline_keeps_point_order() {
        let geometry = Geometry::from_points(&[
            Vec3::new(-3.5, 3.0, 0.0),
            Vec3::new(0.0, 2.8, 0.0),
            Vec3::new(3.5, 3.0, 0.0),
        ]);

        assert_eq!(geometry.vertex_count(), 3);
        assert!(geometry.indices().is_empty());
        assert_eq!(geometry.positions()[1], [0.0, 2.8, 0.0]);
    }

    #[test]
    fn dispose_frees_the_buffers() {
        let mut geometry = Geometry::cuboid(1.0, 1.0, 1.0);
        assert!(!geometry.is_disposed());

        geometry.dispose();

        assert!(geometry.is_disposed());
        assert_eq!(geometry.vertex_count(), 0);
        assert!(geometry.indices().is_empty());
    }
}
