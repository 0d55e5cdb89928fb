use glam::Vec3;

use super::{create_axes_helper, create_beam_assembly, create_guide_line, SceneGraph};
use crate::camera::PerspectiveCamera;
use crate::core::render_loop::RenderLoop;
use crate::material::{Material, SharedMaterial};
use crate::traits::sink::FrameSink;
use crate::traits::surface::DrawSurface;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Y-rotation applied to the beam and the guide line on every tick, radians
pub const ROTATION_STEP: f32 = 0.01;

const FOV_Y_DEGREES: f32 = 75.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;
const CAMERA_EYE: Vec3 = Vec3::new(0.0, 2.0, 7.0);
const AXES_SIZE: f32 = 5.0;
const BEAM_COLOR: u32 = 0xAA66AA;

/// A built scene session: graph, camera and an active render loop, bound to
/// one frame sink for one activation.
///
/// `build` is the only way in; `dispose` consumes the session, so a second
/// disposal is unrepresentable and a later activation starts from a brand
/// new value with fresh state.
pub struct BeamScene {
    scene: SceneGraph,
    camera: PerspectiveCamera,
    material: SharedMaterial,
    animation: RenderLoop,
    sink: Box<dyn FrameSink>,
}

impl BeamScene {
    /// Construct the scene for the given surface and start the render loop.
    ///
    /// A missing or degenerate surface (not yet mounted) is benign: nothing
    /// is built, nothing is registered with the sink, and `None` is
    /// returned.
    pub fn build(surface: Option<&dyn DrawSurface>, mut sink: Box<dyn FrameSink>) -> Option<Self> {
        let surface = surface?;
        let dims = surface.dimensions();
        if dims.width == 0 || dims.height == 0 {
            return None;
        }

        let mut camera =
            PerspectiveCamera::new(FOV_Y_DEGREES, dims.aspect(), NEAR_PLANE, FAR_PLANE);
        camera.position = CAMERA_EYE;
        camera.look_at(Vec3::ZERO);

        let material = Material::from_hex(BEAM_COLOR).shared();

        let mut scene = SceneGraph::new();
        scene.add(create_axes_helper(AXES_SIZE));
        for node in create_beam_assembly(&material) {
            scene.add(node);
        }
        scene.add(create_guide_line(&material));

        sink.register_scene(&scene);
        log::debug!("scene built: {} nodes, aspect {}", scene.len(), camera.aspect);

        Some(Self {
            scene,
            camera,
            material,
            animation: RenderLoop::new(),
            sink,
        })
    }

    /// One display-refresh tick: spin the beam and the guide line, then
    /// submit the frame. A stopped loop makes this a no-op.
    pub fn tick(&mut self) -> Result<()> {
        if !self.animation.is_active() {
            return Ok(());
        }

        for node in self.scene.nodes_mut() {
            if node.is_animated() {
                node.rotation_y += ROTATION_STEP;
            }
        }

        self.animation.advance();
        self.sink.submit(&self.scene, &self.camera)
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn material(&self) -> &SharedMaterial {
        &self.material
    }

    /// Frames submitted so far
    pub fn frames(&self) -> u64 {
        self.animation.frames()
    }

    pub fn is_rendering(&self) -> bool {
        self.animation.is_active()
    }

    /// Tear the session down: stop the loop, release the rendering context,
    /// free the beam and line geometry buffers, and release the shared
    /// material once. The axis indicator keeps its geometry; it owns no GPU
    /// resources once the sink is gone.
    pub fn dispose(mut self) {
        self.animation.stop();
        self.sink.dispose();

        for node in self.scene.nodes() {
            if node.is_animated() {
                node.geometry.borrow_mut().dispose();
            }
        }

        self.material.borrow_mut().dispose();
        log::debug!("scene disposed after {} frames", self.animation.frames());
    }
}
