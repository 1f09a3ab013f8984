use super::touch::PinchStart;
use crate::config::ViewerConfig;

// Scale change per unit of trackpad pinch delta
const PINCH_WHEEL_RATE: f64 = 0.01;

/// Scale plus translation in screen pixels, relative to the centred content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub x: f64,
    pub y: f64,
}

impl Transform {
    pub fn centered(scale: f64) -> Self {
        Self {
            scale,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "transform: translate({:.2}px, {:.2}px) scale({:.4});",
            self.x, self.y, self.scale
        )
    }
}

/// Pan/zoom state behind the canvas. Every mutator returns whether the
/// transform actually changed; scale never leaves `[min_scale, max_scale]`.
#[derive(Debug, Clone)]
pub struct TransformViewport {
    config: ViewerConfig,
    transform: Transform,
    drag_from: Option<(f64, f64)>,
    pinch: Option<PinchStart>,
}

impl TransformViewport {
    pub fn new(config: ViewerConfig) -> Self {
        let transform = Transform::centered(config.initial_scale);
        Self {
            config,
            transform,
            drag_from: None,
            pinch: None,
        }
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn is_panning(&self) -> bool {
        self.drag_from.is_some()
    }

    pub fn zoom_in(&mut self, step: f64) -> bool {
        self.zoom_to(self.transform.scale + step, None)
    }

    pub fn zoom_out(&mut self, step: f64) -> bool {
        self.zoom_to(self.transform.scale - step, None)
    }

    /// Zooms keeping the content under `anchor` (offset from the viewport
    /// centre) in place; `None` anchors on the centre.
    pub fn zoom_to(&mut self, scale: f64, anchor: Option<(f64, f64)>) -> bool {
        if !scale.is_finite() {
            return false;
        }
        let old = self.transform;
        let new_scale = scale.clamp(self.config.min_scale, self.config.max_scale);
        if new_scale == old.scale {
            return false;
        }
        let (ax, ay) = anchor.unwrap_or((0.0, 0.0));
        let ratio = new_scale / old.scale;
        self.transform = Transform {
            scale: new_scale,
            x: ax - (ax - old.x) * ratio,
            y: ay - (ay - old.y) * ratio,
        };
        true
    }

    pub fn reset(&mut self) -> bool {
        let home = Transform::centered(self.config.initial_scale);
        self.drag_from = None;
        self.pinch = None;
        if self.transform == home {
            return false;
        }
        self.transform = home;
        true
    }

    /// Scrolling without the modifier must fall through to the page.
    pub fn wheel(&mut self, delta_y: f64, anchor: (f64, f64), modifier_held: bool) -> bool {
        if !modifier_held || delta_y == 0.0 {
            return false;
        }
        let step = self.config.wheel_step;
        let target = if delta_y < 0.0 {
            self.transform.scale + step
        } else {
            self.transform.scale - step
        };
        self.zoom_to(target, Some(anchor))
    }

    /// Trackpad pinch, delivered by browsers as a ctrl-flagged wheel event.
    /// Always live, follows `delta_y` continuously instead of stepping.
    pub fn pinch_wheel(&mut self, delta_y: f64, anchor: (f64, f64)) -> bool {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return false;
        }
        let factor = (-delta_y * PINCH_WHEEL_RATE * self.config.pinch_step).exp();
        self.zoom_to(self.transform.scale * factor, Some(anchor))
    }

    pub fn begin_pan(&mut self, x: f64, y: f64) {
        self.drag_from = Some((x, y));
    }

    pub fn pan_to(&mut self, x: f64, y: f64) -> bool {
        let Some((lx, ly)) = self.drag_from else {
            return false;
        };
        self.drag_from = Some((x, y));
        let (dx, dy) = (x - lx, y - ly);
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        self.transform.x += dx;
        self.transform.y += dy;
        true
    }

    pub fn end_pan(&mut self) {
        self.drag_from = None;
    }

    pub fn begin_pinch(&mut self, distance: f64) {
        self.drag_from = None;
        self.pinch = Some(PinchStart {
            distance,
            scale: self.transform.scale,
        });
    }

    pub fn pinch_to(&mut self, distance: f64, anchor: (f64, f64)) -> bool {
        let Some(start) = self.pinch else {
            return false;
        };
        if start.distance < 1.0 {
            return false;
        }
        let spread = distance / start.distance - 1.0;
        let target = start.scale * (1.0 + spread * self.config.pinch_step);
        self.zoom_to(target, Some(anchor))
    }

    pub fn end_pinch(&mut self) {
        self.pinch = None;
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn viewport() -> TransformViewport {
        TransformViewport::new(ViewerConfig::default())
    }

    fn in_bounds(v: &TransformViewport) -> bool {
        (0.2..=5.0).contains(&v.scale())
    }

    #[test]
    fn starts_centred_at_initial_scale() {
        let v = viewport();
        assert_eq!(v.transform(), Transform::centered(1.0));
    }

    #[test]
    fn button_zoom_round_trip() {
        let mut v = viewport();
        assert!(v.zoom_in(0.15));
        assert!((v.scale() - 1.15).abs() < EPS);
        assert!(v.zoom_out(0.15));
        assert!((v.scale() - 1.0).abs() < EPS);
    }

    #[test]
    fn zoom_at_limits_is_a_noop() {
        let mut v = viewport();
        while v.zoom_in(0.15) {}
        assert_eq!(v.scale(), 5.0);
        assert!(!v.zoom_in(0.15));
        assert_eq!(v.scale(), 5.0);

        while v.zoom_out(0.15) {}
        assert_eq!(v.scale(), 0.2);
        assert!(!v.zoom_out(0.15));
        assert_eq!(v.scale(), 0.2);
    }

    #[test]
    fn mixed_command_sequences_stay_in_range() {
        let mut v = viewport();
        let mut seed: u32 = 12345;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
            match (seed >> 16) % 6 {
                0 => {
                    v.zoom_in(0.15);
                }
                1 => {
                    v.zoom_out(0.7);
                }
                2 => {
                    v.wheel(-120.0, (30.0, -10.0), true);
                }
                3 => {
                    v.begin_pinch(100.0);
                    v.pinch_to(((seed >> 8) % 900) as f64, (0.0, 0.0));
                    v.end_pinch();
                }
                4 => {
                    v.reset();
                }
                _ => {
                    v.zoom_to(((seed >> 4) % 100) as f64 - 50.0, None);
                }
            }
            assert!(in_bounds(&v), "scale {} escaped", v.scale());
        }
    }

    #[test]
    fn reset_restores_home() {
        let mut v = viewport();
        v.zoom_in(1.0);
        v.begin_pan(0.0, 0.0);
        v.pan_to(40.0, -25.0);
        assert!(v.reset());
        assert_eq!(v.transform(), Transform::centered(1.0));
        assert!(!v.is_panning());
        // already home
        assert!(!v.reset());
        assert_eq!(v.scale(), 1.0);
    }

    #[test]
    fn wheel_needs_modifier() {
        let mut v = viewport();
        assert!(!v.wheel(-100.0, (0.0, 0.0), false));
        assert!(!v.wheel(100.0, (0.0, 0.0), false));
        assert_eq!(v.scale(), 1.0);

        assert!(v.wheel(-100.0, (0.0, 0.0), true));
        assert!((v.scale() - 1.1).abs() < EPS);
        assert!(v.wheel(100.0, (0.0, 0.0), true));
        assert!((v.scale() - 1.0).abs() < EPS);
    }

    #[test]
    fn wheel_keeps_anchor_point_fixed() {
        let mut v = viewport();
        let anchor = (120.0, -60.0);
        let content_before = (
            (anchor.0 - v.transform().x) / v.scale(),
            (anchor.1 - v.transform().y) / v.scale(),
        );
        v.wheel(-1.0, anchor, true);
        let t = v.transform();
        let content_after = ((anchor.0 - t.x) / t.scale, (anchor.1 - t.y) / t.scale);
        assert!((content_before.0 - content_after.0).abs() < EPS);
        assert!((content_before.1 - content_after.1).abs() < EPS);
    }

    #[test]
    fn wheel_zoom_clamps_at_max() {
        let mut v = viewport();
        v.zoom_to(4.95, None);
        assert!(v.wheel(-1.0, (0.0, 0.0), true));
        assert_eq!(v.scale(), 5.0);
        assert!(!v.wheel(-1.0, (0.0, 0.0), true));
    }

    #[test]
    fn drag_pans_without_modifier_or_zoom() {
        let mut v = viewport();
        assert!(!v.pan_to(10.0, 10.0));
        v.begin_pan(100.0, 100.0);
        assert!(v.pan_to(130.0, 90.0));
        assert!(v.pan_to(140.0, 95.0));
        v.end_pan();
        assert!(!v.pan_to(500.0, 500.0));
        let t = v.transform();
        assert_eq!((t.x, t.y, t.scale), (40.0, -5.0, 1.0));
    }

    #[test]
    fn pinch_follows_finger_spread() {
        let mut v = viewport();
        v.begin_pinch(100.0);
        assert!(v.is_pinching());
        assert!(v.pinch_to(200.0, (0.0, 0.0)));
        assert!((v.scale() - 2.0).abs() < EPS);
        assert!(v.pinch_to(50.0, (0.0, 0.0)));
        assert!((v.scale() - 0.5).abs() < EPS);
        assert!(v.pinch_to(1.0, (0.0, 0.0)));
        assert_eq!(v.scale(), 0.2);
        v.end_pinch();
        assert!(!v.pinch_to(400.0, (0.0, 0.0)));
    }

    #[test]
    fn pinch_step_damps_spread() {
        let mut v = TransformViewport::new(ViewerConfig {
            pinch_step: 0.5,
            ..Default::default()
        });
        v.begin_pinch(100.0);
        v.pinch_to(200.0, (0.0, 0.0));
        assert!((v.scale() - 1.5).abs() < EPS);
    }

    #[test]
    fn trackpad_pinch_zooms_without_modifier() {
        let mut v = viewport();
        assert!(v.pinch_wheel(-10.0, (0.0, 0.0)));
        assert!((v.scale() - 0.1f64.exp()).abs() < EPS);
        assert!(v.pinch_wheel(10.0, (0.0, 0.0)));
        assert!((v.scale() - 1.0).abs() < EPS);
        assert!(!v.pinch_wheel(0.0, (0.0, 0.0)));
    }

    #[test]
    fn trackpad_pinch_is_proportional_to_delta() {
        let mut small = viewport();
        let mut large = viewport();
        small.pinch_wheel(-2.0, (0.0, 0.0));
        large.pinch_wheel(-20.0, (0.0, 0.0));
        assert!(small.scale() > 1.0);
        assert!(large.scale() > small.scale());
    }

    #[test]
    fn trackpad_pinch_clamps_at_limits() {
        let mut v = viewport();
        assert!(v.pinch_wheel(-1000.0, (40.0, 40.0)));
        assert_eq!(v.scale(), 5.0);
        assert!(!v.pinch_wheel(-5.0, (40.0, 40.0)));
        assert!(v.pinch_wheel(1000.0, (40.0, 40.0)));
        assert_eq!(v.scale(), 0.2);
        assert!(!v.pinch_wheel(5.0, (40.0, 40.0)));
    }

    #[test]
    fn trackpad_pinch_keeps_anchor_point_fixed() {
        let mut v = viewport();
        let anchor = (-80.0, 30.0);
        v.pinch_wheel(-7.0, anchor);
        let t = v.transform();
        assert!(((anchor.0 - t.x) / t.scale - anchor.0).abs() < EPS);
        assert!(((anchor.1 - t.y) / t.scale - anchor.1).abs() < EPS);
    }

    #[test]
    fn non_finite_zoom_is_ignored() {
        let mut v = viewport();
        assert!(!v.zoom_to(f64::NAN, None));
        assert!(!v.zoom_to(f64::INFINITY, None));
        assert_eq!(v.scale(), 1.0);
    }

    #[test]
    fn css_reflects_transform() {
        let mut v = viewport();
        v.begin_pan(0.0, 0.0);
        v.pan_to(12.5, -3.0);
        assert_eq!(
            v.transform().css(),
            "transform: translate(12.50px, -3.00px) scale(1.0000);"
        );
    }
}
