use crate::camera::PerspectiveCamera;
use crate::scene::SceneGraph;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Receives built scenes and per-frame submissions.
///
/// The windowed implementation uploads the scene to the GPU and presents
/// frames to a surface; tests inject counting fakes instead.
pub trait FrameSink {
    /// Take ownership of GPU-side resources for every node in the graph
    fn register_scene(&mut self, scene: &SceneGraph);

    /// Draw one frame of the scene through the given camera
    fn submit(&mut self, scene: &SceneGraph, camera: &PerspectiveCamera) -> Result<()>;

    /// Release the rendering context and every resource acquired in
    /// `register_scene`. Terminal.
    fn dispose(&mut self);
}
