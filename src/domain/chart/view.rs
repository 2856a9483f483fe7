//! `PriceChart`: one rendered chart, layout plus pointer state.

use super::geometry::{ChartLayout, ChartSurface};
use super::interaction::{ChartInteraction, PointerKind, SurfaceRect, TooltipPlacement, TooltipState};
use super::ChartSeries;
use crate::shared::fmt::{format_timestamp_ms, format_usd};

pub const DEFAULT_TITLE: &str = "Price Chart (1 Year)";
pub const PLACEHOLDER_TEXT: &str = "No chart data available";

/// A price series laid out for display, with its tooltip state.
///
/// An empty series has no layout; callers render [`PLACEHOLDER_TEXT`] and
/// pointer events are ignored.
#[derive(Debug, Clone)]
pub struct PriceChart {
    title: String,
    series: ChartSeries,
    layout: Option<ChartLayout>,
    interaction: ChartInteraction,
}

impl PriceChart {
    pub fn new(series: ChartSeries, surface: ChartSurface) -> Self {
        let layout = ChartLayout::compute(&series, surface);
        Self {
            title: DEFAULT_TITLE.to_string(),
            series,
            layout,
            interaction: ChartInteraction::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    pub fn layout(&self) -> Option<&ChartLayout> {
        self.layout.as_ref()
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        self.layout.is_none().then_some(PLACEHOLDER_TEXT)
    }

    // ── Pointer events ───────────────────────────────────────────────────

    pub fn pointer_down(&mut self, kind: PointerKind, pointer_x: f64, rect: SurfaceRect) {
        if self.layout.is_some() {
            self.interaction.pointer_down(kind, pointer_x, rect, &self.series);
        }
    }

    pub fn pointer_move(&mut self, kind: PointerKind, pointer_x: f64, rect: SurfaceRect) {
        if self.layout.is_some() {
            self.interaction.pointer_move(kind, pointer_x, rect, &self.series);
        }
    }

    pub fn pointer_up(&mut self, kind: PointerKind) {
        self.interaction.pointer_up(kind);
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.pointer_leave();
    }

    // ── Tooltip ──────────────────────────────────────────────────────────

    pub fn tooltip(&self) -> &TooltipState {
        self.interaction.tooltip()
    }

    pub fn guideline_x(&self) -> Option<f64> {
        let layout = self.layout.as_ref()?;
        self.interaction
            .guideline_x(&layout.surface(), self.series.len())
    }

    pub fn tooltip_placement(&self, rect: SurfaceRect) -> Option<TooltipPlacement> {
        self.interaction.placement(rect)
    }

    /// Selected price, never coarser than cents.
    pub fn tooltip_price_label(&self) -> Option<String> {
        let layout = self.layout.as_ref()?;
        let tooltip = self.tooltip();
        tooltip
            .visible
            .then(|| format_usd(tooltip.price, layout.decimals().max(2)))
    }

    pub fn tooltip_date_label(&self) -> Option<String> {
        let tooltip = self.tooltip();
        tooltip
            .visible
            .then(|| format_timestamp_ms(tooltip.timestamp_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2021-11-10T00:00:00Z, 2021-11-11T00:00:00Z
    const DAY_1: i64 = 1_636_502_400_000;
    const DAY_2: i64 = 1_636_588_800_000;

    #[test]
    fn test_empty_series_renders_placeholder() {
        let mut chart = PriceChart::new(ChartSeries::default(), ChartSurface::default());
        assert_eq!(chart.placeholder(), Some(PLACEHOLDER_TEXT));
        chart.pointer_move(PointerKind::Mouse, 10.0, SurfaceRect::new(0.0, 100.0));
        assert!(!chart.tooltip().visible);
        assert_eq!(chart.guideline_x(), None);
    }

    #[test]
    fn test_tooltip_labels() {
        let series = ChartSeries::from_pairs(&[(DAY_1, 64_000.0), (DAY_2, 68_789.63)]);
        let mut chart = PriceChart::new(series, ChartSurface::default()).with_title("BTC");
        let rect = SurfaceRect::new(0.0, 500.0);

        assert_eq!(chart.title(), "BTC");
        assert_eq!(chart.placeholder(), None);
        assert_eq!(chart.tooltip_price_label(), None);

        chart.pointer_move(PointerKind::Mouse, 480.0, rect);
        assert_eq!(chart.tooltip_price_label().as_deref(), Some("$68,789.63"));
        assert_eq!(chart.tooltip_date_label().as_deref(), Some("Nov 11, 2021"));
        assert_eq!(chart.guideline_x(), Some(1000.0));
        assert_eq!(chart.tooltip_placement(rect), Some(TooltipPlacement::AnchorRight));
    }
}
