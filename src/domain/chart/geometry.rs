//! Coordinate mapping from a price series onto a drawing surface.
//!
//! Prices are first normalized onto a 0–100 scale, then laid out on a
//! `width × height` surface whose y axis grows downward.

use super::ChartSeries;
use crate::shared::fmt::format_usd;

/// Normalized value used for every point of a flat series.
pub const MIDPOINT: f64 = 50.0;

/// Horizontal grid lines, in percent of the surface height.
pub const GRID_PERCENTS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

// ─── Bounds & normalization ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl PriceBounds {
    /// Min, max and range over the finite prices. `None` if there are none.
    pub fn from_prices(prices: &[f64]) -> Option<Self> {
        let mut finite = prices.iter().copied().filter(|p| p.is_finite());
        let first = finite.next()?;
        let (min, max) = finite.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self {
            min,
            max,
            range: max - min,
        })
    }

    pub fn is_flat(&self) -> bool {
        self.range == 0.0
    }

    /// Position of `price` on the 0–100 scale. A flat range maps to [`MIDPOINT`].
    pub fn normalize(&self, price: f64) -> f64 {
        if self.is_flat() {
            MIDPOINT
        } else {
            (price - self.min) / self.range * 100.0
        }
    }

    /// Inverse of [`normalize`](Self::normalize).
    pub fn value_at_percent(&self, percent: f64) -> f64 {
        self.min + self.range * percent / 100.0
    }
}

/// Normalize a price list onto 0–100. Empty input gives an empty output.
pub fn normalize(prices: &[f64]) -> Vec<f64> {
    match PriceBounds::from_prices(prices) {
        Some(bounds) => prices.iter().map(|&p| bounds.normalize(p)).collect(),
        None => Vec::new(),
    }
}

/// Decimal places for price labels, chosen from the magnitude of the range.
///
/// Narrow ranges (stablecoins, sub-cent tokens) need more digits to tell
/// labels apart. A zero or invalid range falls back to cents.
pub fn label_decimals(range: f64) -> usize {
    if !range.is_finite() || range <= 0.0 {
        return 2;
    }
    if range >= 10.0 {
        0
    } else if range >= 1.0 {
        2
    } else if range >= 0.1 {
        3
    } else if range >= 0.01 {
        4
    } else if range >= 0.0001 {
        5
    } else {
        6
    }
}

// ─── Surface ─────────────────────────────────────────────────────────────────

/// Fixed-size drawing surface (SVG viewBox units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSurface {
    pub width: f64,
    pub height: f64,
}

impl Default for ChartSurface {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 200.0,
        }
    }
}

impl ChartSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `x` of point `index` out of `count`, spread evenly over the width.
    /// A single point sits on the left edge.
    pub fn x_for_index(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return 0.0;
        }
        index as f64 / (count - 1) as f64 * self.width
    }

    /// `y` of a normalized (0–100) value. 100 is the top edge.
    pub fn y_for_normalized(&self, normalized: f64) -> f64 {
        self.height - normalized * self.height / 100.0
    }
}

// ─── Layout ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub percent: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub y: f64,
    pub value: f64,
    pub text: String,
}

/// A series laid out on a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    surface: ChartSurface,
    bounds: PriceBounds,
    coords: Vec<Coord>,
    decimals: usize,
}

impl ChartLayout {
    /// Lay out `series`. `None` for an empty series, which renders as a placeholder.
    pub fn compute(series: &ChartSeries, surface: ChartSurface) -> Option<Self> {
        let bounds = series.bounds()?;
        let count = series.len();
        let coords = series
            .points()
            .iter()
            .enumerate()
            .map(|(i, p)| Coord {
                x: surface.x_for_index(i, count),
                y: surface.y_for_normalized(bounds.normalize(p.price)),
            })
            .collect();

        Some(Self {
            surface,
            bounds,
            coords,
            decimals: label_decimals(bounds.range),
        })
    }

    pub fn surface(&self) -> ChartSurface {
        self.surface
    }

    pub fn bounds(&self) -> PriceBounds {
        self.bounds
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }

    /// SVG `points` attribute for the price line: `"x,y x,y ..."`.
    pub fn polyline_points(&self) -> String {
        self.coords
            .iter()
            .map(|c| format!("{},{}", c.x, c.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// SVG `points` attribute for the filled area, closed along the bottom edge.
    pub fn area_points(&self) -> String {
        format!(
            "0,{h} {line} {w},{h}",
            h = self.surface.height,
            w = self.surface.width,
            line = self.polyline_points()
        )
    }

    pub fn grid_lines(&self) -> Vec<GridLine> {
        GRID_PERCENTS
            .iter()
            .map(|&percent| GridLine {
                percent,
                y: percent * self.surface.height / 100.0,
            })
            .collect()
    }

    /// Price labels at each grid line, top (max) to bottom (min).
    pub fn axis_labels(&self) -> Vec<AxisLabel> {
        GRID_PERCENTS
            .iter()
            .rev()
            .map(|&percent| {
                let value = self.bounds.value_at_percent(percent);
                AxisLabel {
                    y: self.surface.y_for_normalized(percent),
                    value,
                    text: self.format_price(value),
                }
            })
            .collect()
    }

    pub fn low_label(&self) -> String {
        self.format_price(self.bounds.min)
    }

    pub fn high_label(&self) -> String {
        self.format_price(self.bounds.max)
    }

    /// Format a price with this layout's label precision.
    pub fn format_price(&self, price: f64) -> String {
        format_usd(price, self.decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_two_points() {
        assert_eq!(normalize(&[10.0, 20.0]), vec![0.0, 100.0]);
    }

    #[test]
    fn test_normalize_flat_series_is_midpoint() {
        assert_eq!(normalize(&[5.0, 5.0, 5.0]), vec![50.0, 50.0, 50.0]);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn test_bounds_skip_non_finite() {
        let b = PriceBounds::from_prices(&[f64::NAN, 3.0, 1.0, f64::INFINITY]).unwrap();
        assert_eq!((b.min, b.max, b.range), (1.0, 3.0, 2.0));
        assert!(PriceBounds::from_prices(&[f64::NAN]).is_none());
    }

    #[test]
    fn test_label_decimals_thresholds() {
        assert_eq!(label_decimals(50.0), 0);
        assert_eq!(label_decimals(10.0), 0);
        assert_eq!(label_decimals(5.0), 2);
        assert_eq!(label_decimals(0.5), 3);
        assert_eq!(label_decimals(0.05), 4);
        assert_eq!(label_decimals(0.0005), 5);
        assert_eq!(label_decimals(0.00005), 6);
        assert_eq!(label_decimals(0.0), 2);
    }

    #[test]
    fn test_x_for_single_point_is_left_edge() {
        let surface = ChartSurface::default();
        assert_eq!(surface.x_for_index(0, 1), 0.0);
        assert_eq!(surface.x_for_index(4, 5), 1000.0);
        assert_eq!(surface.x_for_index(2, 5), 500.0);
    }

    #[test]
    fn test_layout_empty_series_is_placeholder() {
        assert!(ChartLayout::compute(&ChartSeries::default(), ChartSurface::default()).is_none());
    }

    #[test]
    fn test_layout_points() {
        let series = ChartSeries::from_pairs(&[(1, 10.0), (2, 20.0)]);
        let layout = ChartLayout::compute(&series, ChartSurface::default()).unwrap();
        assert_eq!(layout.polyline_points(), "0,200 1000,0");
        assert_eq!(layout.area_points(), "0,200 0,200 1000,0 1000,200");
    }

    #[test]
    fn test_layout_flat_series_is_centered() {
        let series = ChartSeries::from_pairs(&[(1, 5.0), (2, 5.0), (3, 5.0)]);
        let layout = ChartLayout::compute(&series, ChartSurface::default()).unwrap();
        assert_eq!(layout.polyline_points(), "0,100 500,100 1000,100");
        assert_eq!(layout.low_label(), "$5.00");
        assert_eq!(layout.high_label(), "$5.00");
    }

    #[test]
    fn test_layout_single_point() {
        let series = ChartSeries::from_pairs(&[(1, 42.0)]);
        let layout = ChartLayout::compute(&series, ChartSurface::default()).unwrap();
        assert_eq!(layout.coords(), &[Coord { x: 0.0, y: 100.0 }]);
    }

    #[test]
    fn test_grid_and_axis_labels() {
        let series = ChartSeries::from_pairs(&[(1, 100.0), (2, 200.0)]);
        let layout = ChartLayout::compute(&series, ChartSurface::default()).unwrap();

        let ys: Vec<f64> = layout.grid_lines().iter().map(|g| g.y).collect();
        assert_eq!(ys, vec![0.0, 50.0, 100.0, 150.0, 200.0]);

        let labels = layout.axis_labels();
        assert_eq!(labels.first().unwrap().text, "$200");
        assert_eq!(labels.first().unwrap().y, 0.0);
        assert_eq!(labels.last().unwrap().text, "$100");
        assert_eq!(labels.last().unwrap().y, 200.0);
        assert_eq!(labels[2].text, "$150");
    }

    #[test]
    fn test_stablecoin_labels_show_more_digits() {
        let series = ChartSeries::from_pairs(&[(1, 0.9998), (2, 1.0003)]);
        let layout = ChartLayout::compute(&series, ChartSurface::default()).unwrap();
        assert_eq!(layout.decimals(), 5);
        assert_eq!(layout.low_label(), "$0.99980");
        assert_eq!(layout.high_label(), "$1.00030");
    }
}
