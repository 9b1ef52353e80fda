#![cfg(target_arch = "wasm32")]
use crate::core::Effect;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sparks-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = overlay::install(&document)?;
    wire_canvas_resize(&canvas);
    let ctx = render::context_2d(&canvas)?;

    // Pointer starts at the canvas center until the first move event lands.
    let pointer = Rc::new(Cell::new(Vec2::new(
        canvas.width() as f32 / 2.0,
        canvas.height() as f32 / 2.0,
    )));

    let effect = Rc::new(RefCell::new(Effect::new(
        pointer.clone(),
        js_sys::Date::now() as u64,
    )));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        effect: effect.clone(),
        pointer,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        effect,
        surface: render::CanvasSurface::new(ctx),
        canvas,
    }));
    frame::start_loop(frame_ctx);

    log::info!("overlay installed, frame loop running");
    Ok(())
}
