use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;

use crate::state::ModifierKeyTracker;

/// Live held-state of `key` across the whole window. The keydown/keyup pair is
/// registered on mount and removed on unmount (or when `key` changes).
#[hook]
pub fn use_modifier_key(key: String) -> bool {
    let held = use_state_eq(|| false);
    {
        let held = held.clone();
        use_effect_with(key, move |key| {
            held.set(false);
            let tracker = Rc::new(RefCell::new(ModifierKeyTracker::new(key.clone())));
            let on_key = |pressed: bool| {
                let tracker = tracker.clone();
                let held = held.clone();
                move |e: &Event| {
                    let Some(ke) = e.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let mut t = tracker.borrow_mut();
                    let flipped = if pressed {
                        t.key_down(&ke.key())
                    } else {
                        t.key_up(&ke.key())
                    };
                    if flipped {
                        log::debug!("{} held: {}", t.key(), t.is_held());
                        held.set(t.is_held());
                    }
                }
            };
            let listeners = match web_sys::window() {
                Some(win) => vec![
                    EventListener::new(&win, "keydown", on_key(true)),
                    EventListener::new(&win, "keyup", on_key(false)),
                ],
                None => {
                    log::warn!("no window; modifier key tracking disabled");
                    Vec::new()
                }
            };
            move || drop(listeners)
        });
    }
    *held
}
