//! Pointer tracking and tooltip state for an interactive chart.
//!
//! Two phases: `Idle` (no tooltip) and `Tracking` (tooltip follows the
//! nearest point). Mouse and pen track on plain movement. Touch tracks only
//! between `pointer_down` and `pointer_up`, so scrolling past the chart does
//! not pop the tooltip.

use super::geometry::ChartSurface;
use super::ChartSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}

/// Horizontal extent of the rendered chart, in the pointer's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub width: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    fn is_usable(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }
}

/// Nearest series index under `pointer_x`, clamped to `[0, count - 1]`.
///
/// `None` for an empty series or a zero-width rect.
pub fn index_at(pointer_x: f64, rect: SurfaceRect, count: usize) -> Option<usize> {
    if count == 0 || !rect.is_usable() || !pointer_x.is_finite() {
        return None;
    }
    let ratio = (pointer_x - rect.left) / rect.width;
    let last = (count - 1) as f64;
    let index = (ratio * last).round().clamp(0.0, last);
    Some(index as usize)
}

// ─── Tooltip ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TooltipState {
    pub visible: bool,
    /// Pointer offset from the left edge of the surface, clamped to its width.
    pub x: f64,
    pub index: usize,
    pub price: f64,
    pub timestamp_ms: i64,
}

/// Horizontal anchoring of the tooltip box relative to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipPlacement {
    /// Near the left edge: the box's left edge sits on the pointer.
    AnchorLeft,
    Centered,
    /// Near the right edge: the box's right edge sits on the pointer.
    AnchorRight,
}

impl TooltipPlacement {
    pub const LOW_THRESHOLD: f64 = 15.0;
    pub const HIGH_THRESHOLD: f64 = 85.0;

    /// Placement for a pointer at `left_percent` (0–100) of the surface width.
    pub fn for_offset(left_percent: f64) -> Self {
        if left_percent < Self::LOW_THRESHOLD {
            Self::AnchorLeft
        } else if left_percent > Self::HIGH_THRESHOLD {
            Self::AnchorRight
        } else {
            Self::Centered
        }
    }
}

// ─── State machine ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Tracking,
}

#[derive(Debug, Clone, Default)]
pub struct ChartInteraction {
    tooltip: TooltipState,
    touch_active: bool,
}

impl ChartInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    pub fn phase(&self) -> Phase {
        if self.tooltip.visible {
            Phase::Tracking
        } else {
            Phase::Idle
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.phase() == Phase::Tracking
    }

    /// Touch starts tracking here; mouse and pen select the point under the pointer.
    pub fn pointer_down(
        &mut self,
        kind: PointerKind,
        pointer_x: f64,
        rect: SurfaceRect,
        series: &ChartSeries,
    ) {
        if kind == PointerKind::Touch {
            self.touch_active = true;
        }
        self.track(pointer_x, rect, series);
    }

    pub fn pointer_move(
        &mut self,
        kind: PointerKind,
        pointer_x: f64,
        rect: SurfaceRect,
        series: &ChartSeries,
    ) {
        match kind {
            PointerKind::Mouse | PointerKind::Pen => self.track(pointer_x, rect, series),
            PointerKind::Touch if self.touch_active => self.track(pointer_x, rect, series),
            PointerKind::Touch => {}
        }
    }

    /// Releasing a touch hides the tooltip. Mouse and pen keep hovering.
    pub fn pointer_up(&mut self, kind: PointerKind) {
        if kind == PointerKind::Touch {
            self.reset();
        }
    }

    pub fn pointer_leave(&mut self) {
        self.reset();
    }

    pub fn reset(&mut self) {
        self.tooltip = TooltipState::default();
        self.touch_active = false;
    }

    /// `x` of the vertical guideline on `surface`, at the selected point.
    pub fn guideline_x(&self, surface: &ChartSurface, count: usize) -> Option<f64> {
        if !self.tooltip.visible || self.tooltip.index >= count {
            return None;
        }
        Some(surface.x_for_index(self.tooltip.index, count))
    }

    /// Pointer offset as a percentage of the rect width.
    pub fn left_percent(&self, rect: SurfaceRect) -> Option<f64> {
        if !self.tooltip.visible || !rect.is_usable() {
            return None;
        }
        Some(self.tooltip.x / rect.width * 100.0)
    }

    pub fn placement(&self, rect: SurfaceRect) -> Option<TooltipPlacement> {
        self.left_percent(rect).map(TooltipPlacement::for_offset)
    }

    fn track(&mut self, pointer_x: f64, rect: SurfaceRect, series: &ChartSeries) {
        let Some(index) = index_at(pointer_x, rect, series.len()) else {
            self.tooltip = TooltipState::default();
            return;
        };
        let Some(point) = series.get(index) else {
            return;
        };
        self.tooltip = TooltipState {
            visible: true,
            x: (pointer_x - rect.left).clamp(0.0, rect.width),
            index,
            price: point.price,
            timestamp_ms: point.timestamp_ms,
        };
    }
}
