pub mod canvas;
pub mod compositor;
pub mod layout;
pub mod palette;
pub mod planes;

pub use canvas::{Canvas, CanvasError};
pub use compositor::{draw_sprite, Compositor, DrawError};
pub use layout::{LayoutError, LayoutParams, LayoutPreset};
pub use palette::{Rgba, PALETTE};
pub use planes::PlaneQuintet;
