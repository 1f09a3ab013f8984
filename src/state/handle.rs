use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::transform::{Transform, TransformViewport};
use crate::config::ViewerConfig;

type Listener = Rc<dyn Fn(Transform)>;

struct Shared {
    viewport: RefCell<TransformViewport>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

/// Command capability into a [`TransformViewport`]. Holders can drive it and
/// observe it, never reach the state directly. Clones share one viewport.
#[derive(Clone)]
pub struct ViewportHandle {
    shared: Rc<Shared>,
}

impl PartialEq for ViewportHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

/// Drops the listener it was returned for.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    shared: Weak<Shared>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl ViewportHandle {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            shared: Rc::new(Shared {
                viewport: RefCell::new(TransformViewport::new(config)),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn transform(&self) -> Transform {
        self.shared.viewport.borrow().transform()
    }

    pub fn scale(&self) -> f64 {
        self.shared.viewport.borrow().scale()
    }

    pub fn button_step(&self) -> f64 {
        self.shared.viewport.borrow().config().button_step
    }

    pub fn is_panning(&self) -> bool {
        self.shared.viewport.borrow().is_panning()
    }

    pub fn is_pinching(&self) -> bool {
        self.shared.viewport.borrow().is_pinching()
    }

    pub fn subscribe(&self, listener: impl Fn(Transform) + 'static) -> Subscription {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        self.shared
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            shared: Rc::downgrade(&self.shared),
            id,
        }
    }

    pub fn zoom_in(&self, step: f64) {
        self.apply(|v| v.zoom_in(step));
    }

    pub fn zoom_out(&self, step: f64) {
        self.apply(|v| v.zoom_out(step));
    }

    pub fn reset(&self) {
        self.apply(|v| v.reset());
    }

    pub fn wheel(&self, delta_y: f64, anchor: (f64, f64), modifier_held: bool) {
        self.apply(|v| v.wheel(delta_y, anchor, modifier_held));
    }

    pub fn pinch_wheel(&self, delta_y: f64, anchor: (f64, f64)) {
        self.apply(|v| v.pinch_wheel(delta_y, anchor));
    }

    pub fn begin_pan(&self, x: f64, y: f64) {
        self.shared.viewport.borrow_mut().begin_pan(x, y);
    }

    pub fn pan_to(&self, x: f64, y: f64) {
        self.apply(|v| v.pan_to(x, y));
    }

    pub fn end_pan(&self) {
        self.shared.viewport.borrow_mut().end_pan();
    }

    pub fn begin_pinch(&self, distance: f64) {
        self.shared.viewport.borrow_mut().begin_pinch(distance);
    }

    pub fn pinch_to(&self, distance: f64, anchor: (f64, f64)) {
        self.apply(|v| v.pinch_to(distance, anchor));
    }

    pub fn end_pinch(&self) {
        self.shared.viewport.borrow_mut().end_pinch();
    }

    // The viewport borrow is released before listeners run so they may read
    // the handle or issue further commands.
    fn apply(&self, op: impl FnOnce(&mut TransformViewport) -> bool) {
        let changed = op(&mut self.shared.viewport.borrow_mut());
        if !changed {
            return;
        }
        let transform = self.transform();
        log::trace!("transform -> {transform:?}");
        let listeners: Vec<Listener> = self
            .shared
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(transform);
        }
    }
}
