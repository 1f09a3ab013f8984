pub mod handle;
pub mod modifier;
pub mod touch;
pub mod transform;

pub use handle::ViewportHandle;
pub use modifier::ModifierKeyTracker;
pub use touch::pinch_geometry;
