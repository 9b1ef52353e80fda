// Web-layer constants for the overlay host element.

pub const OVERLAY_CLASS: &str = "overlay";

// Fixed, full-window, click-through-transparent host sitting above the page.
pub const OVERLAY_STYLE: &str =
    "position:fixed;top:0;left:0;width:100%;height:100%;background-color:transparent;z-index:9999;";
