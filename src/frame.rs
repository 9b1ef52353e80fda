use crate::core::{DrawSurface, Effect};
use crate::render::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub effect: Rc<RefCell<Effect>>,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    /// One animation tick: wipe the whole canvas, then advance the effect
    /// (which redraws every live particle).
    pub fn frame(&mut self) {
        let w = self.canvas.width() as f32;
        let h = self.canvas.height() as f32;
        self.surface.clear_region(0.0, 0.0, w, h);
        self.effect.borrow_mut().advance_frame(&mut self.surface);
    }
}

/// Drive `frame()` from requestAnimationFrame, re-arming on every tick.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
