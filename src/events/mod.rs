use crate::core::Effect;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the input handlers share. Cloned into each closure.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub effect: Rc<RefCell<Effect>>,
    pub pointer: Rc<Cell<Vec2>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_touchmove(&w);
    wire_click(&w);
}

#[inline]
fn canvas_px(canvas: &web::HtmlCanvasElement, client_x: f32, client_y: f32) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(client_x - rect.left() as f32, client_y - rect.top() as f32)
}

// Pointer movement is both the position writer and a spawn trigger: every
// move lands a burst at the new position.
fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = canvas_px(&w.canvas, ev.client_x() as f32, ev.client_y() as f32);
        w.pointer.set(pos);
        w.effect.borrow_mut().spawn_burst();
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// Touch parity: first touch drives the pointer the same way a mouse does.
fn wire_touchmove(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            let pos = canvas_px(&w.canvas, touch.client_x() as f32, touch.client_y() as f32);
            w.pointer.set(pos);
            w.effect.borrow_mut().spawn_burst();
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// Clicks burst at the last known pointer position; they do not move it.
fn wire_click(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        w.effect.borrow_mut().spawn_burst();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
