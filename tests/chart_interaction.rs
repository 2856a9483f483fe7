//! Price chart: layout plus pointer-driven tooltip, end to end.

use coinboard::prelude::*;

const DAY_MS: i64 = 86_400_000;
// 2024-01-01T00:00:00Z
const START: i64 = 1_704_067_200_000;

fn daily(prices: &[f64]) -> ChartSeries {
    let pairs: Vec<(i64, f64)> = prices
        .iter()
        .enumerate()
        .map(|(i, &p)| (START + i as i64 * DAY_MS, p))
        .collect();
    ChartSeries::from_pairs(&pairs)
}

#[test]
fn five_point_series_pointer_at_right_edge() {
    let mut chart = PriceChart::new(
        daily(&[42_000.0, 43_500.0, 41_800.0, 44_100.0, 45_000.0]),
        ChartSurface::default(),
    );
    let rect = SurfaceRect::new(0.0, 1000.0);

    chart.pointer_move(PointerKind::Mouse, 999.0, rect);

    let tooltip = *chart.tooltip();
    assert!(tooltip.visible);
    assert_eq!(tooltip.index, 4);
    assert_eq!(tooltip.price, 45_000.0);
    assert_eq!(tooltip.timestamp_ms, START + 4 * DAY_MS);
    assert_eq!(chart.guideline_x(), Some(1000.0));
    assert_eq!(chart.tooltip_placement(rect), Some(TooltipPlacement::AnchorRight));
    assert_eq!(chart.tooltip_date_label().as_deref(), Some("Jan 5, 2024"));

    chart.pointer_leave();
    assert!(!chart.tooltip().visible);
    assert_eq!(chart.guideline_x(), None);
}

#[test]
fn layout_matches_normalized_prices() {
    let series = daily(&[10.0, 20.0]);
    let layout = ChartLayout::compute(&series, ChartSurface::default()).unwrap();

    assert_eq!(coinboard::domain::chart::geometry::normalize(&series.prices()), vec![0.0, 100.0]);
    assert_eq!(layout.polyline_points(), "0,200 1000,0");
    assert_eq!(layout.low_label(), "$10");
    assert_eq!(layout.high_label(), "$20");
}

#[test]
fn stablecoin_range_gets_extra_precision() {
    assert_eq!(label_decimals(0.0005), 5);
    assert_eq!(label_decimals(50.0), 0);

    let layout = ChartLayout::compute(&daily(&[0.9995, 1.0, 0.9998]), ChartSurface::default()).unwrap();
    assert_eq!(layout.decimals(), 5);
}

#[test]
fn single_point_sits_on_left_edge() {
    let layout = ChartLayout::compute(&daily(&[1.0]), ChartSurface::default()).unwrap();
    assert_eq!(layout.polyline_points(), "0,100");
}

#[test]
fn touch_requires_press() {
    let mut chart = PriceChart::new(daily(&[1.0, 2.0, 3.0]), ChartSurface::new(300.0, 100.0));
    let rect = SurfaceRect::new(50.0, 300.0);

    chart.pointer_move(PointerKind::Touch, 200.0, rect);
    assert!(!chart.tooltip().visible);

    chart.pointer_down(PointerKind::Touch, 60.0, rect);
    assert_eq!(chart.tooltip().index, 0);
    assert_eq!(chart.tooltip_placement(rect), Some(TooltipPlacement::AnchorLeft));

    chart.pointer_move(PointerKind::Touch, 200.0, rect);
    assert_eq!(chart.tooltip().index, 1);
    assert_eq!(chart.guideline_x(), Some(150.0));

    chart.pointer_up(PointerKind::Touch);
    assert!(!chart.tooltip().visible);
}

#[test]
fn empty_series_is_placeholder() {
    let chart = PriceChart::new(ChartSeries::default(), ChartSurface::default());
    assert!(chart.layout().is_none());
    assert_eq!(chart.placeholder(), Some("No chart data available"));
}
