use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent, TouchEvent, TouchList, WheelEvent};
use yew::prelude::*;

use crate::state::{ViewportHandle, pinch_geometry};

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomViewportProps {
    pub handle: ViewportHandle,
    /// Wheel zoom is only live while this is true.
    pub modifier_held: bool,
    pub on_transformed: Callback<f64>,
    pub children: Html,
}

// Offset of a client point from the wrapper centre, the anchor space the
// viewport zooms in.
fn anchor(el: &HtmlElement, client_x: f64, client_y: f64) -> (f64, f64) {
    let rect = el.get_bounding_client_rect();
    (
        client_x - (rect.left() + rect.width() * 0.5),
        client_y - (rect.top() + rect.height() * 0.5),
    )
}

fn touch_point(list: &TouchList, i: u32) -> Option<(f64, f64)> {
    list.get(i)
        .map(|t| (t.client_x() as f64, t.client_y() as f64))
}

/// Drag always pans, pinch (touch or trackpad) always zooms, wheel zooms only
/// with the modifier.
#[function_component(ZoomViewport)]
pub fn zoom_viewport(props: &ZoomViewportProps) -> Html {
    let wrapper_ref = use_node_ref();
    let transform = use_state_eq(|| props.handle.transform());
    let modifier_flag = use_mut_ref(|| props.modifier_held);
    let on_transformed = use_mut_ref(|| props.on_transformed.clone());

    {
        let modifier_flag = modifier_flag.clone();
        use_effect_with(props.modifier_held, move |held| {
            *modifier_flag.borrow_mut() = *held;
            || ()
        });
    }
    {
        let on_transformed = on_transformed.clone();
        use_effect_with(props.on_transformed.clone(), move |cb| {
            *on_transformed.borrow_mut() = cb.clone();
            || ()
        });
    }

    // Change notifications -> re-render + report scale upward
    {
        let transform = transform.clone();
        let on_transformed = on_transformed.clone();
        use_effect_with(props.handle.clone(), move |handle| {
            transform.set(handle.transform());
            let sub = handle.subscribe(move |t| {
                transform.set(t);
                on_transformed.borrow().emit(t.scale);
            });
            move || drop(sub)
        });
    }

    // DOM input
    {
        let wrapper_ref = wrapper_ref.clone();
        let modifier_flag = modifier_flag.clone();
        use_effect_with(props.handle.clone(), move |handle| {
            let mut listeners: Vec<EventListener> = Vec::new();
            match (wrapper_ref.cast::<HtmlElement>(), web_sys::window()) {
                (Some(el), Some(win)) => {
                    let wheel = {
                        let handle = handle.clone();
                        let el = el.clone();
                        move |e: &Event| {
                            let Some(we) = e.dyn_ref::<WheelEvent>() else {
                                return;
                            };
                            let at = anchor(&el, we.client_x() as f64, we.client_y() as f64);
                            if *modifier_flag.borrow() {
                                e.prevent_default();
                                handle.wheel(we.delta_y(), at, true);
                            } else if we.ctrl_key() {
                                // trackpad pinch: ctrl-flagged wheel with no real keydown
                                e.prevent_default();
                                handle.pinch_wheel(we.delta_y(), at);
                            }
                        }
                    };
                    let mousedown = {
                        let handle = handle.clone();
                        move |e: &Event| {
                            let Some(me) = e.dyn_ref::<MouseEvent>() else {
                                return;
                            };
                            if me.button() != 0 {
                                return;
                            }
                            handle.begin_pan(me.client_x() as f64, me.client_y() as f64);
                        }
                    };
                    let mousemove = {
                        let handle = handle.clone();
                        move |e: &Event| {
                            if !handle.is_panning() {
                                return;
                            }
                            if let Some(me) = e.dyn_ref::<MouseEvent>() {
                                handle.pan_to(me.client_x() as f64, me.client_y() as f64);
                            }
                        }
                    };
                    let mouseup = {
                        let handle = handle.clone();
                        move |_e: &Event| handle.end_pan()
                    };
                    let touchstart = {
                        let handle = handle.clone();
                        move |e: &Event| {
                            let Some(te) = e.dyn_ref::<TouchEvent>() else {
                                return;
                            };
                            let touches = te.touches();
                            match (touch_point(&touches, 0), touch_point(&touches, 1)) {
                                (Some(a), Some(b)) => {
                                    e.prevent_default();
                                    let (_, dist) = pinch_geometry(a, b);
                                    handle.begin_pinch(dist);
                                }
                                (Some((x, y)), None) => handle.begin_pan(x, y),
                                _ => {}
                            }
                        }
                    };
                    let touchmove = {
                        let handle = handle.clone();
                        let el = el.clone();
                        move |e: &Event| {
                            let Some(te) = e.dyn_ref::<TouchEvent>() else {
                                return;
                            };
                            e.prevent_default();
                            let touches = te.touches();
                            match (touch_point(&touches, 0), touch_point(&touches, 1)) {
                                (Some(a), Some(b)) if handle.is_pinching() => {
                                    let (mid, dist) = pinch_geometry(a, b);
                                    handle.pinch_to(dist, anchor(&el, mid.0, mid.1));
                                }
                                (Some((x, y)), None) => handle.pan_to(x, y),
                                _ => {}
                            }
                        }
                    };
                    let touchend = |handle: ViewportHandle| {
                        move |e: &Event| {
                            let Some(te) = e.dyn_ref::<TouchEvent>() else {
                                return;
                            };
                            handle.end_pinch();
                            handle.end_pan();
                            // lifting one finger of a pinch continues as a drag
                            if let Some((x, y)) = touch_point(&te.touches(), 0) {
                                handle.begin_pan(x, y);
                            }
                        }
                    };

                    // wheel and touch must stay cancelable
                    let active = EventListenerOptions::enable_prevent_default;
                    listeners.push(EventListener::new_with_options(&el, "wheel", active(), wheel));
                    listeners.push(EventListener::new(&el, "mousedown", mousedown));
                    listeners.push(EventListener::new_with_options(&el, "touchstart", active(), touchstart));
                    listeners.push(EventListener::new_with_options(&el, "touchmove", active(), touchmove));
                    listeners.push(EventListener::new(&el, "touchend", touchend(handle.clone())));
                    listeners.push(EventListener::new(&el, "touchcancel", touchend(handle.clone())));
                    listeners.push(EventListener::new(&win, "mousemove", mousemove));
                    listeners.push(EventListener::new(&win, "mouseup", mouseup));
                }
                _ => log::warn!("zoom viewport not mounted; pan/zoom input disabled"),
            }
            move || drop(listeners)
        });
    }

    html! {
        <div ref={wrapper_ref}
            style="width:100%; height:100%; overflow:hidden; cursor:move; touch-action:none; user-select:none; display:flex; align-items:center; justify-content:center;">
            <div style={format!("display:flex; align-items:center; justify-content:center; transform-origin:center center; cursor:grab; {}", transform.css())}>
                { props.children.clone() }
            </div>
        </div>
    }
}
