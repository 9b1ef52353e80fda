use crate::constants::{OVERLAY_CLASS, OVERLAY_STYLE};
use crate::dom;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Create the full-window overlay `<div>` and its `<canvas>`, append both to
/// the document body, and hand back the canvas sized to the window.
pub fn install(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let overlay = document
        .create_element("div")
        .map_err(|e| anyhow!("{:?}", e))?;
    overlay.set_class_name(OVERLAY_CLASS);
    _ = overlay.set_attribute("style", OVERLAY_STYLE);

    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    body.append_child(&overlay).map_err(|e| anyhow!("{:?}", e))?;

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    dom::sync_canvas_size(&canvas);
    overlay
        .append_child(&canvas)
        .map_err(|e| anyhow!("{:?}", e))?;

    Ok(canvas)
}
