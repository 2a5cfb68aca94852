// src/dtos/stats.rs
use serde::Serialize;

use crate::pricing::{fixed2, parse_price, plain_number};

pub const CHART_LABEL: &str = "Profit percentage (%)";
pub const CHART_FILL: &str = "#4285f4";
pub const CHART_STROKE: &str = "#3367d6";

/// Inventory totals at full precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventoryStats {
    pub total_stock: f64,
    pub total_profit: f64,
}

impl InventoryStats {
    pub fn stock_display(&self) -> String {
        plain_number(self.total_stock)
    }

    pub fn profit_display(&self) -> String {
        fixed2(self.total_profit)
    }
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_stock: Option<f64>,
    pub total_profit: Option<f64>,
    pub total_stock_display: String,
    pub total_profit_display: String,
}

impl StatsResponse {
    pub fn new(stats: InventoryStats, currency: &str) -> Self {
        Self {
            total_stock: Some(stats.total_stock).filter(|v| v.is_finite()),
            total_profit: Some(stats.total_profit).filter(|v| v.is_finite()),
            total_stock_display: stats.stock_display(),
            total_profit_display: format!("{currency} {}", stats.profit_display()),
        }
    }
}

/// Profit percentage per product, one bar per name in collection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<String>,
}

impl ChartSeries {
    /// Bar heights; entries that are not numbers come back as NaN.
    pub fn plot_values(&self) -> Vec<f64> {
        self.data.iter().map(|v| parse_price(v)).collect()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: &'static str,
    pub data: Vec<String>,
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub border_width: u32,
}

/// Bar chart payload in the shape chart widgets consume.
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl From<ChartSeries> for ChartResponse {
    fn from(series: ChartSeries) -> Self {
        Self {
            labels: series.labels,
            datasets: vec![ChartDataset {
                label: CHART_LABEL,
                data: series.data,
                background_color: CHART_FILL,
                border_color: CHART_STROKE,
                border_width: 1,
            }],
        }
    }
}
