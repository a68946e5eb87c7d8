// DOM hooks and presentation constants for the overlay canvas.
//
// Kept free of web-sys so host tests can include this file directly.

// Overlay element
pub const CANVAS_ID: &str = "cursor-trail"; // existing canvas is reused, otherwise one is created
pub const CONFIG_ATTRIBUTE: &str = "data-trail-config"; // optional JSON override on the canvas

// Presentation
pub const OVERLAY_Z_INDEX: &str = "9999";
pub const FADE_MS: u32 = 700; // opacity transition when toggling Active/Inactive
pub const OPACITY_ACTIVE: &str = "1";
pub const OPACITY_INACTIVE: &str = "0";

// Events
pub const EVENT_POINTER_MOVE: &str = "pointermove";
pub const EVENT_RESIZE: &str = "resize";

// Capability probing
pub const TOUCH_PROBE_PROPERTY: &str = "ontouchstart";

/// Inline style applied to the overlay so it never intercepts input.
pub fn overlay_style() -> String {
    format!(
        "position:fixed;inset:0;width:100vw;height:100vh;pointer-events:none;z-index:{};opacity:{};transition:opacity {}ms ease",
        OVERLAY_Z_INDEX, OPACITY_INACTIVE, FADE_MS
    )
}
