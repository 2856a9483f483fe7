//! Conversion: `MarketChartResponse` → `MarketChart`.

use super::wire::{MarketChartResponse, RawPoint};
use super::{ChartPoint, ChartSeries, MarketChart};

/// Drop points with a missing or non-finite value, then order by time.
fn series(raw: Vec<RawPoint>) -> ChartSeries {
    let points = raw
        .into_iter()
        .filter_map(|(ts, value)| {
            let price = value.filter(|v| v.is_finite())?;
            if !ts.is_finite() {
                return None;
            }
            Some(ChartPoint {
                timestamp_ms: ts as i64,
                price,
            })
        })
        .collect();
    ChartSeries::new(points)
}

impl From<MarketChartResponse> for MarketChart {
    fn from(source: MarketChartResponse) -> Self {
        MarketChart {
            prices: series(source.prices),
            market_caps: series(source.market_caps),
            total_volumes: series(source.total_volumes),
        }
    }
}
