// File: crates/chart-core/src/interaction.rs
// Summary: Hover behavior (highlight + tooltip) with a renderer-agnostic surface trait.
// Notes:
// - Every handler receives the point index and record explicitly.
// - A shown tooltip is an owned `ActiveTooltip`; hiding it consumes the handle,
//   so a tooltip cannot be removed twice or leak past its point.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::geometry::Point;
use crate::record::Record;
use crate::scene::{Scene, TooltipNode};
use crate::svg::escape_xml;
use crate::theme::{Color, Theme};

/// Horizontal gap between the pointer and the tooltip's left edge.
pub const TOOLTIP_OFFSET_X: f64 = 15.0;

/// What a tooltip shows for one record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    /// Exposed as `data-year`.
    pub year: i32,
    pub name: String,
    pub nationality: String,
    pub time: String,
    pub allegation: Option<String>,
}

impl TooltipContent {
    pub fn for_record(record: &Record) -> Self {
        Self {
            year: record.year,
            name: record.name.clone(),
            nationality: record.nationality.clone(),
            time: record.time.clone(),
            allegation: record.allegation().map(str::to_owned),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut out = vec![
            self.name.clone(),
            self.nationality.clone(),
            format!("Year: {} Time: {}", self.year, self.time),
        ];
        if let Some(a) = &self.allegation {
            out.push(a.clone());
        }
        out
    }

    /// Escaped lines joined with `<br>`, ready for `innerHTML`.
    pub fn to_html(&self) -> String {
        self.lines().iter().map(|l| escape_xml(l)).collect::<Vec<_>>().join("<br>")
    }
}

/// Page coordinates of a tooltip box. `top` is the box's vertical center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TooltipPosition {
    pub left: f64,
    pub top: f64,
}

impl TooltipPosition {
    /// CSS transform that anchors the box on its vertical center.
    pub const CENTER_TRANSFORM: &'static str = "translate(0, -50%)";

    pub fn near(pointer: Point) -> Self {
        Self { left: pointer.x + TOOLTIP_OFFSET_X, top: pointer.y }
    }
}

/// Pointer input for a single point, in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Enter { page: Point },
    Move { page: Point },
    Leave,
}

/// Where hover side effects land: an in-memory scene, a DOM tree, ...
pub trait HoverSurface {
    /// Owned reference to one shown tooltip.
    type Tooltip;
    type Error;

    fn set_fill(&mut self, point: usize, color: Color) -> Result<(), Self::Error>;
    fn show_tooltip(&mut self, content: &TooltipContent, at: TooltipPosition) -> Result<Self::Tooltip, Self::Error>;
    fn move_tooltip(&mut self, tooltip: &mut Self::Tooltip, at: TooltipPosition) -> Result<(), Self::Error>;
    fn remove_tooltip(&mut self, tooltip: Self::Tooltip) -> Result<(), Self::Error>;
}

/// A tooltip that is currently shown for `point`.
#[must_use = "an open tooltip must be passed to `Hover::leave`"]
#[derive(Debug)]
pub struct ActiveTooltip<T> {
    point: usize,
    resting_fill: Color,
    handle: T,
}

impl<T> ActiveTooltip<T> {
    pub fn point(&self) -> usize { self.point }
    pub fn resting_fill(&self) -> Color { self.resting_fill }
}

/// Hover rules for the scatter plot.
#[derive(Clone, Copy, Debug)]
pub struct Hover {
    theme: Theme,
}

impl Hover {
    pub fn new(theme: Theme) -> Self { Self { theme } }

    /// Highlight `point` and open a tooltip for `record` next to the pointer.
    pub fn enter<S: HoverSurface>(
        &self,
        surface: &mut S,
        point: usize,
        record: &Record,
        pointer: Point,
    ) -> Result<ActiveTooltip<S::Tooltip>, S::Error> {
        surface.set_fill(point, self.theme.highlight)?;
        let handle = surface.show_tooltip(&TooltipContent::for_record(record), TooltipPosition::near(pointer))?;
        Ok(ActiveTooltip { point, resting_fill: self.theme.point_fill(record.has_allegation()), handle })
    }

    /// Keep the tooltip next to the pointer.
    pub fn follow<S: HoverSurface>(
        &self,
        surface: &mut S,
        active: &mut ActiveTooltip<S::Tooltip>,
        pointer: Point,
    ) -> Result<(), S::Error> {
        surface.move_tooltip(&mut active.handle, TooltipPosition::near(pointer))
    }

    /// Restore the point's allegation color and remove its tooltip.
    pub fn leave<S: HoverSurface>(&self, surface: &mut S, active: ActiveTooltip<S::Tooltip>) -> Result<(), S::Error> {
        surface.set_fill(active.point, active.resting_fill)?;
        surface.remove_tooltip(active.handle)
    }
}

/// Routes pointer events for all points of one chart, keeping at most one
/// tooltip open.
pub struct HoverTracker<T> {
    hover: Hover,
    active: Option<ActiveTooltip<T>>,
}

impl<T> HoverTracker<T> {
    pub fn new(hover: Hover) -> Self { Self { hover, active: None } }

    /// Index of the point whose tooltip is open.
    pub fn active_point(&self) -> Option<usize> {
        self.active.as_ref().map(ActiveTooltip::point)
    }

    pub fn handle_event<S>(&mut self, surface: &mut S, point: usize, record: &Record, event: PointerEvent) -> Result<(), S::Error>
    where
        S: HoverSurface<Tooltip = T>,
    {
        match event {
            PointerEvent::Enter { page } => {
                if let Some(prev) = self.active.take() {
                    self.hover.leave(surface, prev)?;
                }
                self.active = Some(self.hover.enter(surface, point, record, page)?);
            }
            PointerEvent::Move { page } => {
                if let Some(active) = self.active.as_mut().filter(|a| a.point == point) {
                    self.hover.follow(surface, active, page)?;
                }
            }
            PointerEvent::Leave => {
                if self.active_point() == Some(point) {
                    if let Some(active) = self.active.take() {
                        self.hover.leave(surface, active)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Handle to a tooltip stored in a [`Scene`].
#[derive(Debug, PartialEq, Eq)]
pub struct SceneTooltip(u64);

impl HoverSurface for Scene {
    type Tooltip = SceneTooltip;
    type Error = ChartError;

    fn set_fill(&mut self, point: usize, color: Color) -> Result<(), ChartError> {
        let dot = self.dot_mut(point).ok_or(ChartError::UnknownPoint(point))?;
        dot.fill = color;
        Ok(())
    }

    fn show_tooltip(&mut self, content: &TooltipContent, at: TooltipPosition) -> Result<SceneTooltip, ChartError> {
        let id = self.next_tooltip;
        self.next_tooltip += 1;
        self.tooltips.push(TooltipNode { id, content: content.clone(), position: at });
        Ok(SceneTooltip(id))
    }

    fn move_tooltip(&mut self, tooltip: &mut SceneTooltip, at: TooltipPosition) -> Result<(), ChartError> {
        let node = self.tooltips.iter_mut().find(|t| t.id == tooltip.0).ok_or(ChartError::UnknownTooltip)?;
        node.position = at;
        Ok(())
    }

    fn remove_tooltip(&mut self, tooltip: SceneTooltip) -> Result<(), ChartError> {
        let idx = self.tooltips.iter().position(|t| t.id == tooltip.0).ok_or(ChartError::UnknownTooltip)?;
        self.tooltips.remove(idx);
        Ok(())
    }
}
