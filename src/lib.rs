pub mod camera;
pub mod cli;
pub mod core;
pub mod geometry;
pub mod material;
pub mod scene;
pub mod traits;
pub mod types;

// Re-export the types most downstream code touches
pub use crate::camera::PerspectiveCamera;
pub use crate::core::{FixedTicks, FrameClock, GpuContext, RenderLoop, SurfaceRenderer};
pub use crate::geometry::{Geometry, SharedGeometry};
pub use crate::material::{Material, SharedMaterial};
pub use crate::scene::{
    create_axes_helper, create_beam_assembly, create_guide_line, BeamScene, NodeKind, SceneGraph,
    SceneNode, ROTATION_STEP,
};
pub use crate::traits::{DrawSurface, FrameSink, SceneLifecycle, SurfaceDimensions};
