// File: crates/chart-web/src/dom.rs
// Summary: wasm entry point, `window.fetch` loader and the DOM-backed hover surface.

use std::cell::RefCell;
use std::rc::Rc;

use chart_core::geometry::Point;
use chart_core::interaction::{HoverSurface, TooltipContent, TooltipPosition};
use chart_core::{parse_records, render_svg, Chart, Color, HoverTracker, DATASET_URL};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::{
    point_index, pointer_event, tooltip_style, HOST_ID, POINTER_EVENTS, SVG_INSERT_POSITION, TOOLTIP_ID,
};

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Fetch the dataset, draw the chart into `#chart-area` (or `host_id`) and wire hover.
///
/// Errors are logged to the console and returned to the caller.
#[wasm_bindgen(js_name = mountChart)]
pub async fn mount_chart(host_id: Option<String>, url: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let url = url.unwrap_or_else(|| DATASET_URL.to_string());
    let result = mount(host_id.as_deref().unwrap_or(HOST_ID), &url).await;
    if let Err(e) = &result {
        web_sys::console::error_2(&"doping-chart: failed to mount chart:".into(), e);
    }
    result
}

async fn mount(host_id: &str, url: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let host = document
        .get_element_by_id(host_id)
        .ok_or_else(|| js_err(format!("no element with id '{host_id}'")))?;

    let bytes = fetch_bytes(&window, url).await?;
    let records = parse_records(&bytes).map_err(js_err)?;
    let chart = Chart::new(records).map_err(js_err)?;

    host.insert_adjacent_html(SVG_INSERT_POSITION, &render_svg(&chart.scene()))?;
    let svg = host.last_element_child().ok_or("chart SVG missing after mount")?;
    attach_hover(chart, DomSurface::new(document, host), &svg)
}

async fn fetch_bytes(window: &web_sys::Window, url: &str) -> Result<Vec<u8>, JsValue> {
    let resp: web_sys::Response = JsFuture::from(window.fetch_with_str(url)).await?.dyn_into()?;
    if !resp.ok() {
        return Err(js_err(format!("{url} answered with HTTP {}", resp.status())));
    }
    let buf = JsFuture::from(resp.array_buffer()?).await?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

struct HoverState {
    chart: Chart,
    surface: DomSurface,
    tracker: HoverTracker<HtmlElement>,
}

fn attach_hover(chart: Chart, surface: DomSurface, svg: &Element) -> Result<(), JsValue> {
    let tracker = HoverTracker::new(chart.hover());
    let state = Rc::new(RefCell::new(HoverState { chart, surface, tracker }));

    let dots = svg.query_selector_all("circle.dot")?;
    for i in 0..dots.length() {
        let Some(node) = dots.item(i) else { continue };
        let dot: Element = node.dyn_into()?;
        let Some(point) = point_index(dot.get_attribute("data-index").as_deref()) else { continue };

        for kind in POINTER_EVENTS {
            let state = Rc::clone(&state);
            let callback = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
                let page = Point::new(f64::from(ev.page_x()), f64::from(ev.page_y()));
                let Some(event) = pointer_event(kind, page) else { return };
                let mut guard = state.borrow_mut();
                let HoverState { chart, surface, tracker } = &mut *guard;
                let Some(record) = chart.record(point) else { return };
                if let Err(e) = tracker.handle_event(surface, point, record, event) {
                    web_sys::console::error_1(&e);
                }
            });
            dot.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
            // listeners live as long as the page
            callback.forget();
        }
    }
    Ok(())
}

/// Hover side effects applied under the chart's host element.
pub struct DomSurface {
    document: Document,
    host: Element,
}

impl DomSurface {
    pub fn new(document: Document, host: Element) -> Self {
        Self { document, host }
    }

    fn dot(&self, point: usize) -> Result<Element, JsValue> {
        self.host
            .query_selector(&format!(r#"circle.dot[data-index="{point}"]"#))?
            .ok_or_else(|| js_err(format!("no dot for point {point}")))
    }
}

fn place(tooltip: &HtmlElement, at: TooltipPosition) -> Result<(), JsValue> {
    let style = tooltip.style();
    for (prop, value) in tooltip_style(at) {
        style.set_property(prop, &value)?;
    }
    Ok(())
}

impl HoverSurface for DomSurface {
    type Tooltip = HtmlElement;
    type Error = JsValue;

    fn set_fill(&mut self, point: usize, color: Color) -> Result<(), JsValue> {
        self.dot(point)?.set_attribute("fill", &color.to_css())
    }

    fn show_tooltip(&mut self, content: &TooltipContent, at: TooltipPosition) -> Result<HtmlElement, JsValue> {
        let tooltip: HtmlElement = self.document.create_element("div")?.dyn_into()?;
        tooltip.set_id(TOOLTIP_ID);
        tooltip.set_class_name("tooltip");
        tooltip.set_attribute("data-year", &content.year.to_string())?;
        tooltip.set_inner_html(&content.to_html());
        place(&tooltip, at)?;
        self.host.append_child(&tooltip)?;
        Ok(tooltip)
    }

    fn move_tooltip(&mut self, tooltip: &mut HtmlElement, at: TooltipPosition) -> Result<(), JsValue> {
        place(tooltip, at)
    }

    fn remove_tooltip(&mut self, tooltip: HtmlElement) -> Result<(), JsValue> {
        tooltip.remove();
        Ok(())
    }
}
