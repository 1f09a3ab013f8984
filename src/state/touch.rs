// Two-finger pinch snapshot, taken when the second finger lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchStart {
    pub distance: f64,
    pub scale: f64,
}

/// Midpoint and distance between two touch points.
pub fn pinch_geometry(a: (f64, f64), b: (f64, f64)) -> ((f64, f64), f64) {
    let mid = ((a.0 + b.0) * 0.5, (a.1 + b.1) * 0.5);
    let dist = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
    (mid, dist)
}
