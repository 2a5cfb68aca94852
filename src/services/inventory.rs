// src/services/inventory.rs
use tracing::{debug, info, instrument};

use crate::dtos::product::{CreateProductRequest, ProductCard};
use crate::dtos::stats::{ChartSeries, InventoryStats};
use crate::error::StoreError;
use crate::models::product::Product;
use crate::pricing::fixed2;
use crate::services::ids::IdGenerator;
use crate::store::{KeyValueStore, ProductStore};
use crate::view::InventoryView;

/// Owns the product collection for the session.
///
/// Every mutation is written through to the store before anything is
/// redrawn; if the write fails the collection is left as it was, so the
/// store and memory never disagree.
#[derive(Debug)]
pub struct InventoryManager<S, V> {
    products: Vec<Product>,
    store: ProductStore<S>,
    view: V,
    ids: IdGenerator,
}

impl<S: KeyValueStore, V: InventoryView> InventoryManager<S, V> {
    /// Loads the stored collection (empty if there is nothing usable) and
    /// draws the list, totals and chart.
    pub fn initialize(store: ProductStore<S>, view: V) -> Self {
        Self::with_ids(store, view, IdGenerator::new())
    }

    pub fn with_ids(store: ProductStore<S>, view: V, ids: IdGenerator) -> Self {
        let products = store.load();
        info!(count = products.len(), key = store.key(), "Inventory loaded");
        let mut manager = Self { products, store, view, ids };
        manager.refresh();
        manager
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn store(&self) -> &ProductStore<S> {
        &self.store
    }

    /// Appends a product built from the form fields. Nothing is
    /// validated: unparseable numbers are stored as typed.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub fn add_product(&mut self, request: CreateProductRequest) -> Result<&Product, StoreError> {
        let id = self.ids.next_id(&self.products);
        let mut next = self.products.clone();
        next.push(request.into_product(id));

        self.store.save(&next)?;
        self.products = next;
        self.refresh();

        let added = &self.products[self.products.len() - 1];
        info!(id = %added.id, "Product added");
        Ok(added)
    }

    /// Removes the product with `id`. An unknown id changes nothing but is
    /// still persisted and redrawn. Returns whether a product was removed.
    #[instrument(skip(self))]
    pub fn delete_product(&mut self, id: &str) -> Result<bool, StoreError> {
        let next: Vec<Product> = self.products.iter().filter(|p| p.id != id).cloned().collect();
        let removed = next.len() != self.products.len();

        self.store.save(&next)?;
        self.products = next;
        self.refresh();

        if removed {
            info!("Product removed");
        } else {
            debug!("No product with that id");
        }
        Ok(removed)
    }

    /// Products whose name contains `term`, ignoring case, in collection
    /// order. An empty term matches everything.
    pub fn matching(&self, term: &str) -> Vec<&Product> {
        let needle = term.to_lowercase();
        self.products.iter().filter(|p| p.name_matches(&needle)).collect()
    }

    /// Shows only the products matching `term`. Totals and chart are left
    /// alone. Returns how many products are shown.
    pub fn filter(&mut self, term: &str) -> usize {
        let cards: Vec<ProductCard> = self.matching(term).into_iter().map(ProductCard::from).collect();
        self.show_cards(&cards);
        cards.len()
    }

    /// Draws `list`, or the whole collection when `None`.
    pub fn render(&mut self, list: Option<&[Product]>) {
        let cards: Vec<ProductCard> = list
            .unwrap_or(self.products.as_slice())
            .iter()
            .map(ProductCard::from)
            .collect();
        self.show_cards(&cards);
    }

    pub fn compute_aggregates(&self) -> InventoryStats {
        let total_stock: f64 = self.products.iter().map(Product::units).sum();
        let total_profit: f64 = self.products.iter().map(Product::line_profit).sum();
        InventoryStats { total_stock, total_profit }
    }

    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            labels: self.products.iter().map(|p| p.name.clone()).collect(),
            data: self.products.iter().map(|p| fixed2(p.profit_percentage())).collect(),
        }
    }

    pub fn update_stats(&mut self) {
        let stats = self.compute_aggregates();
        self.view.show_stats(&stats);
    }

    pub fn update_chart(&mut self) {
        let series = self.chart_series();
        self.view.show_chart(&series);
    }

    fn show_cards(&mut self, cards: &[ProductCard]) {
        if cards.is_empty() {
            self.view.show_empty();
        } else {
            self.view.show_products(cards);
        }
    }

    fn refresh(&mut self) {
        self.render(None);
        self.update_stats();
        self.update_chart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::product::ProfitTone;
    use crate::store::products::DEFAULT_KEY;
    use crate::store::MemoryStore;
    use crate::view::{ListState, ViewSnapshot};
    use std::io;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    type Manager = InventoryManager<MemoryStore, ViewSnapshot>;

    fn manager() -> Manager {
        let store = ProductStore::new(MemoryStore::new(), DEFAULT_KEY);
        // frozen clock: ids still come out distinct
        let ids = IdGenerator::with_clock(Box::new(|| 1_000));
        InventoryManager::with_ids(store, ViewSnapshot::default(), ids)
    }

    fn fields(name: &str, cost: &str, sale: &str, qty: &str) -> CreateProductRequest {
        CreateProductRequest {
            name: name.into(),
            image: None,
            cost_price: cost.into(),
            sale_price: sale.into(),
            quantity: qty.into(),
        }
    }

    fn persisted(m: &Manager) -> Vec<Product> {
        m.store().load()
    }

    #[test]
    fn starts_empty_with_empty_state() {
        let m = manager();
        assert!(m.products().is_empty());
        assert_eq!(m.view().list, ListState::Empty);
        assert_eq!(m.view().stats, InventoryStats { total_stock: 0.0, total_profit: 0.0 });
        assert!(m.view().chart.labels.is_empty());
    }

    #[test]
    fn add_appends_and_writes_through() {
        let mut m = manager();
        let id = m.add_product(fields("Widget", "10", "15", "4")).unwrap().id.clone();
        m.add_product(fields("Gadget", "20", "18", "2")).unwrap();

        assert_eq!(m.products()[0].id, id);
        assert_eq!(m.products()[1].name, "Gadget");
        assert_ne!(m.products()[0].id, m.products()[1].id);
        assert_eq!(persisted(&m), m.products());
        assert_eq!(m.view().shown_names(), vec!["Widget", "Gadget"]);
    }

    #[test]
    fn delete_keeps_order_and_ignores_unknown_ids() {
        let mut m = manager();
        m.add_product(fields("A", "1", "2", "1")).unwrap();
        let b = m.add_product(fields("B", "1", "2", "1")).unwrap().id.clone();
        m.add_product(fields("C", "1", "2", "1")).unwrap();

        assert!(m.delete_product(&b).unwrap());
        assert_eq!(m.view().shown_names(), vec!["A", "C"]);
        assert!(!m.delete_product("missing").unwrap());
        assert_eq!(m.products().len(), 2);
        assert_eq!(persisted(&m), m.products());
    }

    #[test]
    fn filter_shows_subset_only() {
        let mut m = manager();
        m.add_product(fields("Widget", "10", "15", "4")).unwrap();
        m.add_product(fields("Gadget", "20", "18", "2")).unwrap();

        assert_eq!(m.filter("WID"), 1);
        assert_eq!(m.view().shown_names(), vec!["Widget"]);
        assert_eq!(m.view().chart.labels, vec!["Widget", "Gadget"]);
        assert_eq!(m.view().stats.total_stock, 6.0);

        assert_eq!(m.filter(""), 2);
        assert_eq!(m.filter("nothing"), 0);
        assert_eq!(m.view().list, ListState::Empty);
        assert_eq!(m.products().len(), 2);
    }

    #[test]
    fn render_defaults_to_full_list() {
        let mut m = manager();
        m.add_product(fields("Widget", "10", "15", "4")).unwrap();
        m.add_product(fields("Gadget", "20", "18", "2")).unwrap();

        let only_gadget = vec![m.products()[1].clone()];
        m.render(Some(&only_gadget));
        assert_eq!(m.view().shown_names(), vec!["Gadget"]);
        m.render(None);
        assert_eq!(m.view().shown_names(), vec!["Widget", "Gadget"]);
    }

    #[test]
    fn invalid_numbers_flow_into_totals() {
        let mut m = manager();
        m.add_product(fields("Odd", "abc", "15", "x")).unwrap();
        let stats = m.compute_aggregates();
        assert!(stats.total_stock.is_nan());
        assert!(stats.total_profit.is_nan());
        assert_eq!(stats.profit_display(), "NaN");
        assert_eq!(m.view().cards()[0].tone, ProfitTone::Negative);
        assert_eq!(m.view().chart.data, vec!["NaN"]);
    }

    #[test]
    fn reloads_what_was_saved() {
        let mut m = manager();
        m.add_product(fields("Widget", "10", "15", "4")).unwrap();
        let raw = m.store().raw().unwrap().unwrap();

        let store = ProductStore::new(MemoryStore::new().with_item(DEFAULT_KEY, &raw), DEFAULT_KEY);
        let reloaded = InventoryManager::initialize(store, ViewSnapshot::default());
        assert_eq!(reloaded.products(), m.products());
        assert_eq!(reloaded.view().shown_names(), vec!["Widget"]);
        assert_eq!(reloaded.view().stats.total_profit, 20.0);
    }

    /// Memory store whose writes start failing once `broken` is set.
    struct FlakyStore {
        inner: MemoryStore,
        broken: Arc<AtomicBool>,
    }

    impl KeyValueStore for FlakyStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get_item(key)
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.broken.load(Ordering::SeqCst) {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full").into());
            }
            self.inner.set_item(key, value)
        }
    }

    #[test]
    fn failed_writes_leave_memory_and_store_unchanged() {
        let broken = Arc::new(AtomicBool::new(false));
        let store = FlakyStore { inner: MemoryStore::new(), broken: broken.clone() };
        let ids = IdGenerator::with_clock(Box::new(|| 1_000));
        let mut m = InventoryManager::with_ids(ProductStore::new(store, DEFAULT_KEY), ViewSnapshot::default(), ids);

        let widget = m.add_product(fields("Widget", "10", "15", "4")).unwrap().id.clone();
        m.add_product(fields("Gadget", "20", "18", "2")).unwrap();
        let before = m.products().to_vec();
        broken.store(true, Ordering::SeqCst);

        assert!(m.add_product(fields("Gizmo", "1", "2", "3")).is_err());
        assert_eq!(m.products(), before.as_slice());
        assert_eq!(m.view().shown_names(), vec!["Widget", "Gadget"]);
        assert_eq!(m.store().load(), before);

        assert!(m.delete_product(&widget).is_err());
        assert_eq!(m.products(), before.as_slice());
        assert_eq!(m.view().shown_names(), vec!["Widget", "Gadget"]);
        assert_eq!(m.view().stats.total_stock, 6.0);
        assert_eq!(m.store().load(), before);

        broken.store(false, Ordering::SeqCst);
        assert!(m.delete_product(&widget).unwrap());
        assert_eq!(m.view().shown_names(), vec!["Gadget"]);
    }
}
