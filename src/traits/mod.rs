pub mod lifecycle;
pub mod sink;
pub mod surface;

pub use lifecycle::*;
pub use sink::*;
pub use surface::*;
