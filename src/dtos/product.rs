// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::models::product::Product;
use crate::pricing::fixed2;

/// Registration form fields, all as typed. Used for both the HTML form
/// and the JSON API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub cost_price: String,
    #[serde(default)]
    pub sale_price: String,
    #[serde(default)]
    pub quantity: String,
}

impl CreateProductRequest {
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            image: self.image.unwrap_or_default(),
            cost_price: self.cost_price,
            sale_price: self.sale_price,
            quantity: self.quantity,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitTone {
    Positive,
    Negative,
}

impl ProfitTone {
    /// Zero counts as positive; NaN fails the comparison and is negative.
    pub fn of(unit_profit: f64) -> Self {
        if unit_profit >= 0.0 {
            ProfitTone::Positive
        } else {
            ProfitTone::Negative
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ProfitTone::Positive => "profit-positive",
            ProfitTone::Negative => "profit-negative",
        }
    }
}

/// One rendered product: the record plus its derived figures, already
/// formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub cost_price: String,
    pub sale_price: String,
    pub unit_profit: String,
    pub quantity: String,
    pub profit_percentage: String,
    pub tone: ProfitTone,
}

impl ProductCard {
    /// Percentage with a leading `+` on positive cards, e.g. `+50.00%`.
    pub fn profit_label(&self) -> String {
        match self.tone {
            ProfitTone::Positive => format!("+{}%", self.profit_percentage),
            ProfitTone::Negative => format!("{}%", self.profit_percentage),
        }
    }

    pub fn tone_class(&self) -> &'static str {
        self.tone.css_class()
    }

    /// Image source, empty when the placeholder should be drawn.
    pub fn image_url(&self) -> &str {
        self.image.as_deref().unwrap_or("")
    }
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let unit_profit = product.unit_profit();
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            image: Some(product.image.clone()).filter(|i| !i.is_empty()),
            cost_price: fixed2(product.cost()),
            sale_price: fixed2(product.sale()),
            unit_profit: fixed2(unit_profit),
            quantity: product.quantity.clone(),
            profit_percentage: fixed2(product.profit_percentage()),
            tone: ProfitTone::of(unit_profit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(cost: &str, sale: &str) -> CreateProductRequest {
        CreateProductRequest {
            name: "Gadget".into(),
            image: None,
            cost_price: cost.into(),
            sale_price: sale.into(),
            quantity: "2".into(),
        }
    }

    #[test]
    fn card_formats_negative_profit() {
        let product = request("20", "18").into_product("1".into());
        let card = ProductCard::from(&product);
        assert_eq!(card.unit_profit, "-2.00");
        assert_eq!(card.profit_percentage, "-10.00");
        assert_eq!(card.tone, ProfitTone::Negative);
        assert_eq!(card.profit_label(), "-10.00%");
        assert_eq!(card.image, None);
    }

    #[test]
    fn zero_profit_is_positive() {
        let card = ProductCard::from(&request("5", "5").into_product("1".into()));
        assert_eq!(card.tone, ProfitTone::Positive);
        assert_eq!(card.profit_label(), "+0.00%");
    }

    #[test]
    fn nan_profit_is_negative() {
        let card = ProductCard::from(&request("abc", "5").into_product("1".into()));
        assert_eq!(card.cost_price, "NaN");
        assert_eq!(card.tone, ProfitTone::Negative);
    }

    #[test]
    fn request_accepts_camel_case_json() {
        let req: CreateProductRequest = serde_json::from_str(
            r#"{"name":"Widget","costPrice":"10","salePrice":"15","quantity":"4"}"#,
        )
        .unwrap();
        let product = req.into_product("42".into());
        assert_eq!(product.cost_price, "10");
        assert_eq!(product.image, "");
    }
}
