// src/view/page.rs
use askama::Template;

use super::{ViewSnapshot, EMPTY_MESSAGE};
use crate::dtos::product::ProductCard;
use crate::dtos::stats::{ChartSeries, CHART_FILL, CHART_LABEL, CHART_STROKE};

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 260.0;
const CHART_PAD_TOP: f64 = 16.0;
const CHART_PAD_BOTTOM: f64 = 36.0;
const CHART_PAD_X: f64 = 12.0;

/// One bar of the profit chart, in SVG user units.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: String,
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,
    pub label_x: String,
}

#[derive(Template)]
#[template(path = "inventory.html")]
pub struct InventoryPage<'a> {
    pub cards: &'a [ProductCard],
    pub empty_message: &'a str,
    pub total_stock: String,
    pub total_profit: String,
    pub currency: &'a str,
    pub search: &'a str,
    pub chart_label: &'a str,
    pub chart_fill: &'a str,
    pub chart_stroke: &'a str,
    pub chart_width: String,
    pub chart_height: String,
    pub baseline_y: String,
    pub label_y: String,
    pub bars: Vec<ChartBar>,
}

impl<'a> InventoryPage<'a> {
    pub fn new(snapshot: &'a ViewSnapshot, currency: &'a str, search: &'a str) -> Self {
        let (bars, baseline) = layout_bars(&snapshot.chart);
        Self {
            cards: snapshot.cards(),
            empty_message: EMPTY_MESSAGE,
            total_stock: snapshot.stats.stock_display(),
            total_profit: snapshot.stats.profit_display(),
            currency,
            search,
            chart_label: CHART_LABEL,
            chart_fill: CHART_FILL,
            chart_stroke: CHART_STROKE,
            chart_width: svg(CHART_WIDTH),
            chart_height: svg(CHART_HEIGHT),
            baseline_y: svg(baseline),
            label_y: svg(CHART_HEIGHT - CHART_PAD_BOTTOM / 3.0),
            bars,
        }
    }
}

pub fn render_page(snapshot: &ViewSnapshot, currency: &str, search: &str) -> Result<String, askama::Error> {
    InventoryPage::new(snapshot, currency, search).render()
}

/// Lays out one bar per series entry with the value axis starting at
/// zero. Values that are not finite get a zero-height bar on the
/// baseline. Returns the bars and the y of the zero line.
pub fn layout_bars(series: &ChartSeries) -> (Vec<ChartBar>, f64) {
    let values = series.plot_values();
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (low, high) = finite.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let span = if high - low > 0.0 { high - low } else { 1.0 };

    let plot_height = CHART_HEIGHT - CHART_PAD_TOP - CHART_PAD_BOTTOM;
    let scale = plot_height / span;
    let baseline = CHART_PAD_TOP + high * scale;

    let slot = if values.is_empty() {
        0.0
    } else {
        (CHART_WIDTH - 2.0 * CHART_PAD_X) / values.len() as f64
    };
    let bar_width = slot * 0.7;

    let bars = series
        .labels
        .iter()
        .zip(series.data.iter())
        .zip(values.iter())
        .enumerate()
        .map(|(i, ((label, value), &v))| {
            let v = if v.is_finite() { v } else { 0.0 };
            let height = v.abs() * scale;
            let top = if v >= 0.0 { baseline - height } else { baseline };
            let slot_x = CHART_PAD_X + slot * i as f64;
            ChartBar {
                label: label.clone(),
                value: value.clone(),
                x: svg(slot_x + (slot - bar_width) / 2.0),
                y: svg(top),
                width: svg(bar_width),
                height: svg(height),
                label_x: svg(slot_x + slot / 2.0),
            }
        })
        .collect();

    (bars, baseline)
}

fn svg(v: f64) -> String {
    format!("{v:.1}")
}
