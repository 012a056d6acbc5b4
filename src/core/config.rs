/// Per-component tolerance used by [`Vec2`](crate::util::linalg::Vec2) equality.
pub const EPSILON: f64 = 1e-9;
/// Lower bound applied per axis when zooming, so a transform never collapses or inverts.
pub const MIN_SCALE: f64 = 1e-6;
