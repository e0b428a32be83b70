// File: crates/chart-web/src/lib.rs
// Summary: Browser adapter: mounts the chart SVG in a host element and drives hover through the DOM.
// Notes:
// - DOM bindings live behind the `browser` feature; the event and style mapping
//   below is plain Rust so it is tested natively.

use chart_core::geometry::Point;
use chart_core::interaction::TooltipPosition;
use chart_core::PointerEvent;

#[cfg(feature = "browser")]
pub mod dom;

/// Id of the element the chart is mounted into.
pub const HOST_ID: &str = "chart-area";
/// Id given to the tooltip box.
pub const TOOLTIP_ID: &str = "tooltip";
/// `insertAdjacentHTML` position for the chart SVG: after any existing host content.
pub const SVG_INSERT_POSITION: &str = "beforeend";

/// DOM event types a dot listens to.
pub const POINTER_EVENTS: [&str; 3] = ["mouseenter", "mousemove", "mouseleave"];

/// Translate a DOM event type into a hover event at page position `page`.
pub fn pointer_event(kind: &str, page: Point) -> Option<PointerEvent> {
    match kind {
        "mouseenter" => Some(PointerEvent::Enter { page }),
        "mousemove" => Some(PointerEvent::Move { page }),
        "mouseleave" => Some(PointerEvent::Leave),
        _ => None,
    }
}

/// Inline style declarations placing a tooltip box.
pub fn tooltip_style(at: TooltipPosition) -> [(&'static str, String); 4] {
    [
        ("position", "absolute".to_string()),
        ("left", format!("{}px", at.left)),
        ("top", format!("{}px", at.top)),
        ("transform", TooltipPosition::CENTER_TRANSFORM.to_string()),
    ]
}

/// Point index stored in a circle's `data-index` attribute.
pub fn point_index(attr: Option<&str>) -> Option<usize> {
    attr?.trim().parse().ok()
}

#[cfg(not(feature = "browser"))]
pub fn mount_unavailable() -> &'static str {
    "doping-chart-web was built without the `browser` feature"
}
