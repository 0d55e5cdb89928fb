pub mod clock;
pub mod gpu_context;
pub mod render_loop;
pub mod surface_renderer;

pub use clock::FrameClock;
pub use gpu_context::GpuContext;
pub use render_loop::{FixedTicks, RenderLoop};
pub use surface_renderer::SurfaceRenderer;
