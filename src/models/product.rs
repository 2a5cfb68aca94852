use serde::{Deserialize, Serialize};

use crate::pricing::{parse_price, parse_quantity};

/// A stored product record. Numeric fields keep the text they were
/// entered with and are parsed on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub cost_price: String,
    pub sale_price: String,
    pub quantity: String,
}

impl Product {
    pub fn cost(&self) -> f64 {
        parse_price(&self.cost_price)
    }

    pub fn sale(&self) -> f64 {
        parse_price(&self.sale_price)
    }

    pub fn units(&self) -> f64 {
        parse_quantity(&self.quantity)
    }

    pub fn unit_profit(&self) -> f64 {
        self.sale() - self.cost()
    }

    /// Unit profit relative to cost, in percent. Zero cost gives an
    /// infinite or NaN percentage.
    pub fn profit_percentage(&self) -> f64 {
        self.unit_profit() / self.cost() * 100.0
    }

    /// Profit contributed to the inventory total: unit profit times stock.
    pub fn line_profit(&self) -> f64 {
        self.unit_profit() * self.units()
    }

    pub fn name_matches(&self, needle_lowercase: &str) -> bool {
        self.name.to_lowercase().contains(needle_lowercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(cost: &str, sale: &str, qty: &str) -> Product {
        Product {
            id: "1".into(),
            name: "Widget".into(),
            image: String::new(),
            cost_price: cost.into(),
            sale_price: sale.into(),
            quantity: qty.into(),
        }
    }

    #[test]
    fn derives_profit_figures() {
        let p = product("10", "15", "4");
        assert_eq!(p.unit_profit(), 5.0);
        assert_eq!(p.profit_percentage(), 50.0);
        assert_eq!(p.line_profit(), 20.0);
    }

    #[test]
    fn bad_numbers_propagate_as_nan() {
        let p = product("ten", "15", "4");
        assert!(p.unit_profit().is_nan());
        assert!(p.line_profit().is_nan());
        assert!(product("10", "15", "").line_profit().is_nan());
    }

    #[test]
    fn serializes_with_camel_case_string_fields() {
        let json = serde_json::to_value(product("10", "15", "4")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "name": "Widget",
                "image": "",
                "costPrice": "10",
                "salePrice": "15",
                "quantity": "4",
            })
        );
    }

    #[test]
    fn missing_image_defaults_to_empty() {
        let p: Product = serde_json::from_str(
            r#"{"id":"7","name":"A","costPrice":"1","salePrice":"2","quantity":"3"}"#,
        )
        .unwrap();
        assert_eq!(p.image, "");
    }
}
