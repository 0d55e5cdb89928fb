/// Pixel dimensions of a drawable surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceDimensions {
    pub width: u32,
    pub height: u32,
}

impl SurfaceDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// A drawable region. The only capability the scene needs from it is its
/// pixel size; the rendering context itself is acquired by the frame sink.
pub trait DrawSurface {
    fn dimensions(&self) -> SurfaceDimensions;
}

impl DrawSurface for winit::window::Window {
    fn dimensions(&self) -> SurfaceDimensions {
        let size = self.inner_size();
        SurfaceDimensions::new(size.width, size.height)
    }
}
