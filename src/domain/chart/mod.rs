//! Chart domain: price series, coordinate mapping, pointer interaction.
//!
//! - `geometry` maps a series onto a fixed drawing surface.
//! - `interaction` turns pointer events into a tooltip selection.
//! - `view` bundles both for one rendered chart.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod geometry;
pub mod interaction;
pub mod view;
pub mod wire;

use serde::{Deserialize, Serialize};

/// One sample of a chart: epoch milliseconds and a `usd` value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub timestamp_ms: i64,
    pub price: f64,
}

/// A time-ascending sequence of points. May be empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartSeries {
    points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Build a series, sorting points by timestamp. Equal timestamps keep input order.
    pub fn new(mut points: Vec<ChartPoint>) -> Self {
        points.sort_by_key(|p| p.timestamp_ms);
        Self { points }
    }

    pub fn from_pairs(pairs: &[(i64, f64)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|&(timestamp_ms, price)| ChartPoint {
                    timestamp_ms,
                    price,
                })
                .collect(),
        )
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    pub fn get(&self, index: usize) -> Option<&ChartPoint> {
        self.points.get(index)
    }

    pub fn first(&self) -> Option<&ChartPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&ChartPoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> Option<geometry::PriceBounds> {
        geometry::PriceBounds::from_prices(&self.prices())
    }

    /// Absolute change from first to last point.
    pub fn change(&self) -> Option<f64> {
        Some(self.last()?.price - self.first()?.price)
    }

    /// Percentage change from first to last point. `None` when the first price is zero.
    pub fn change_percentage(&self) -> Option<f64> {
        let first = self.first()?.price;
        if first == 0.0 {
            return None;
        }
        Some(self.change()? / first * 100.0)
    }
}

/// Historical prices, market caps and volumes for one coin and range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarketChart {
    pub prices: ChartSeries,
    pub market_caps: ChartSeries,
    pub total_volumes: ChartSeries,
}
