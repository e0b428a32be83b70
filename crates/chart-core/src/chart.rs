// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and scene-building pipeline (axes, labels, points, legend).

use crate::axis::{format_minutes_seconds, format_year, Axis, Orientation};
use crate::error::DataLoadError;
use crate::geometry::{Point, Rect, Transform};
use crate::interaction::Hover;
use crate::record::Record;
use crate::scale::{compute_scales, ScaleTransform, Scales};
use crate::scene::{Baseline, Dot, Group, Label, Node, Scene, Swatch, TextAnchor};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Pixel size of 1em for the chart's text.
const EM_PX: f64 = 16.0;
/// Side of a legend swatch; entries are stacked at this pitch.
const LEGEND_ROW: f64 = 20.0;

/// Legend entry ids, in stacking order.
pub const LEGEND_ENTRIES: [&str; 2] = ["withDopingAllegations", "noDopingAllegations"];

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub theme: Theme,
    pub dot_radius: f64,
    pub tick_count: usize,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::classic(),
            dot_radius: 6.0,
            tick_count: 10,
            title: "Doping in Professional Bicycle Racing".to_string(),
            x_label: "Year".to_string(),
            y_label: "Time in Minutes (mm:ss)".to_string(),
        }
    }
}

/// A scatter plot over a fixed, non-empty record set.
pub struct Chart {
    records: Vec<Record>,
    scales: Scales,
    opts: RenderOptions,
}

impl Chart {
    pub fn new(records: Vec<Record>) -> Result<Self, DataLoadError> {
        Self::with_options(records, RenderOptions::default())
    }

    pub fn with_options(records: Vec<Record>, opts: RenderOptions) -> Result<Self, DataLoadError> {
        let scales = compute_scales(&records, &opts)?;
        Ok(Self { records, scales, opts })
    }

    pub fn records(&self) -> &[Record] { &self.records }

    pub fn options(&self) -> &RenderOptions { &self.opts }

    pub fn record(&self, index: usize) -> Option<&Record> { self.records.get(index) }

    pub fn scales(&self) -> &Scales { &self.scales }

    /// Hover rules using this chart's theme.
    pub fn hover(&self) -> Hover { Hover::new(self.opts.theme) }

    /// Bottom year axis and left race-time axis.
    pub fn render_axes(&self, scales: &Scales) -> Vec<Node> {
        let o = &self.opts;
        let color = o.theme.axis;
        let x_axis = Axis::new("x-axis", Orientation::Bottom, scales.x, format_year)
            .with_tick_count(o.tick_count)
            .at(Transform::translate(0.0, f64::from(o.height) - f64::from(o.insets.bottom)));
        let y_axis = Axis::new("y-axis", Orientation::Left, scales.y, format_minutes_seconds)
            .with_tick_count(o.tick_count)
            .at(Transform::translate(f64::from(o.insets.left), 0.0));
        vec![x_axis.to_node(color), y_axis.to_node(color)]
    }

    /// Axis captions and the chart title.
    pub fn render_labels(&self, scales: &Scales) -> Vec<Node> {
        let o = &self.opts;
        let (w, h) = (f64::from(o.width), f64::from(o.height));
        let pad = o.insets;
        let color = o.theme.text;

        let mut x_label = Label::new(o.x_label.clone(), 1.5 * EM_PX, color);
        x_label.anchor = TextAnchor::Middle;
        x_label.transform = Transform::translate(w / 2.0 + f64::from(pad.left), h - f64::from(pad.bottom) + 50.0);
        let mut x_group = Group::new("x-axis-label");
        x_group.push(x_label);

        let mut y_label = Label::new(o.y_label.clone(), 1.5 * EM_PX, color);
        y_label.anchor = TextAnchor::Middle;
        y_label.baseline = Baseline::Central;
        y_label.transform = Transform::RotateTranslate { degrees: -90.0, x: -h / 2.0, y: f64::from(pad.left) - 70.0 };
        let mut y_group = Group::new("y-axis-label");
        y_group.push(y_label);

        // Centered over the plotted span, which ends at the latest year.
        let x_end = scales.x.to_px(scales.x.domain.1);
        let mut title = Label::new(o.title.clone(), 2.0 * EM_PX, color);
        title.id = Some("title".to_string());
        title.anchor = TextAnchor::Middle;
        title.transform = Transform::translate(x_end / 2.0 + f64::from(pad.left), f64::from(pad.top) / 2.0);
        let mut title_group = Group::new("title-wrapper");
        title_group.push(title);

        vec![x_group.into(), y_group.into(), title_group.into()]
    }

    /// One dot per record at `(x(year), y(seconds))`.
    pub fn render_points(&self, scales: &Scales) -> Node {
        let theme = &self.opts.theme;
        let mut g = Group::new("scatter-plot-area");
        for (index, r) in self.records.iter().enumerate() {
            g.push(Dot {
                index,
                center: Point::new(scales.x.to_px(f64::from(r.year)), scales.y.to_px(r.seconds)),
                radius: self.opts.dot_radius,
                fill: theme.point_fill(r.has_allegation()),
                stroke: theme.dot_stroke,
                year: r.year,
                time_of_day: r.time_of_day(),
            });
        }
        g.into()
    }

    /// Color key, right-aligned against the right padding.
    pub fn render_legend(&self) -> Node {
        let o = &self.opts;
        let at = Transform::translate(
            f64::from(o.width) - f64::from(o.insets.right),
            f64::from(o.height) / 2.0 - 30.0,
        );
        let mut legend = Group::new("legend").at(at);
        for (i, id) in LEGEND_ENTRIES.iter().enumerate() {
            let with_allegation = i == 0;
            let row = i as f64 * LEGEND_ROW;
            let mut entry = Group::new(*id);
            entry.push(Swatch {
                rect: Rect::from_xywh(0.0, row, LEGEND_ROW, LEGEND_ROW),
                fill: o.theme.point_fill(with_allegation),
            });
            let text = if with_allegation { "Riders with doping allegations" } else { "No doping allegations" };
            let mut label = Label::new(text, EM_PX, o.theme.text);
            label.anchor = TextAnchor::End;
            label.transform = Transform::translate(-5.0, row + LEGEND_ROW - 2.0);
            entry.push(label);
            legend.push(entry);
        }
        legend.into()
    }

    /// Build the full scene. Pure: equal inputs give equal scenes.
    pub fn scene(&self) -> Scene {
        let o = &self.opts;
        let mut scene = Scene::new(o.width, o.height, o.theme.background);
        scene.nodes.extend(self.render_axes(&self.scales));
        scene.nodes.extend(self.render_labels(&self.scales));
        scene.nodes.push(self.render_points(&self.scales));
        scene.nodes.push(self.render_legend());
        tracing::debug!(points = self.records.len(), nodes = scene.nodes.len(), "built scene");
        scene
    }
}
