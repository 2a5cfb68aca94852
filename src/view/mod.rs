// src/view/mod.rs
pub mod page;

use crate::dtos::product::ProductCard;
use crate::dtos::stats::{ChartSeries, InventoryStats};

pub const EMPTY_MESSAGE: &str = "No products registered.";

/// Where the inventory manager draws. Each call replaces whatever the
/// matching region showed before.
pub trait InventoryView {
    fn show_products(&mut self, cards: &[ProductCard]);
    fn show_empty(&mut self);
    fn show_stats(&mut self, stats: &InventoryStats);
    fn show_chart(&mut self, series: &ChartSeries);
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Cards(Vec<ProductCard>),
    Empty,
}

/// Keeps the last thing drawn in each region.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    pub list: ListState,
    pub stats: InventoryStats,
    pub chart: ChartSeries,
}

impl Default for ViewSnapshot {
    fn default() -> Self {
        Self {
            list: ListState::Empty,
            stats: InventoryStats { total_stock: 0.0, total_profit: 0.0 },
            chart: ChartSeries::default(),
        }
    }
}

impl ViewSnapshot {
    pub fn cards(&self) -> &[ProductCard] {
        match &self.list {
            ListState::Cards(cards) => cards,
            ListState::Empty => &[],
        }
    }

    pub fn shown_names(&self) -> Vec<&str> {
        self.cards().iter().map(|c| c.name.as_str()).collect()
    }
}

impl InventoryView for ViewSnapshot {
    fn show_products(&mut self, cards: &[ProductCard]) {
        self.list = ListState::Cards(cards.to_vec());
    }

    fn show_empty(&mut self) {
        self.list = ListState::Empty;
    }

    fn show_stats(&mut self, stats: &InventoryStats) {
        self.stats = *stats;
    }

    fn show_chart(&mut self, series: &ChartSeries) {
        self.chart = series.clone();
    }
}
