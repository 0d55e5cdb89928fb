use std::cell::RefCell;
use std::rc::Rc;

/// Material shared by reference between scene nodes; it stays alive as long
/// as any node still holds it, and is released once through the single
/// shared instance.
pub type SharedMaterial = Rc<RefCell<Material>>;

/// Flat, unlit color material
#[derive(Debug, Clone)]
pub struct Material {
    color: [f32; 3],
    disposed: bool,
}

impl Material {
    pub fn new(color: [f32; 3]) -> Self {
        Self {
            color,
            disposed: false,
        }
    }

    /// Build from a packed 0xRRGGBB color
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::new([r, g, b])
    }

    pub fn shared(self) -> SharedMaterial {
        Rc::new(RefCell::new(self))
    }

    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    /// Release the material. Terminal, and the caller is responsible for
    /// invoking it only once.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
