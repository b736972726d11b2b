use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Lesson;

/// One lesson held in the cart.
///
/// Serialized with the same field names the browser client stored, so an
/// existing saved cart can be read back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub subject: String,
    pub location: String,
    pub price: f64,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub quantity: u32,
    /// Capacity of the lesson when it was last added. `None` for carts saved
    /// by the browser client, which did not record it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spaces: Option<u32>,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn from_lesson(lesson: &Lesson, quantity: u32) -> Self {
        Self {
            id: lesson.id.clone(),
            subject: lesson.subject.clone(),
            location: lesson.location.clone(),
            price: lesson.price,
            image: lesson.image.clone(),
            icon: lesson.icon.clone(),
            quantity,
            spaces: Some(lesson.spaces),
            added_at: Utc::now(),
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A cart item paired with its subtotal, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: CartItem,
    pub subtotal: f64,
}

impl From<&CartItem> for CartLine {
    fn from(item: &CartItem) -> Self {
        Self {
            subtotal: item.subtotal(),
            item: item.clone(),
        }
    }
}

/// Aggregate view of the cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub item_count: u32,
    pub total: f64,
    pub is_empty: bool,
    pub items: Vec<CartLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_item_wire_names() {
        let lesson = Lesson::new("l1", "Art", "Barnet", 12.5, 4).with_icon("fa-palette");
        let item = CartItem::from_lesson(&lesson, 2);
        assert_eq!(item.subtotal(), 25.0);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["_id"], "l1");
        assert_eq!(json["icon"], "fa-palette");
        assert!(json.get("addedAt").is_some());

        let line = CartLine::from(&item);
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["subtotal"], 25.0);
        assert_eq!(json["quantity"], 2);
    }

    #[test]
    fn test_cart_item_without_spaces_still_parses() {
        let json = r#"{"_id":"l1","subject":"Art","location":"Barnet","price":10,"image":"a.png","quantity":1,"addedAt":"2024-03-01T10:00:00Z"}"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.spaces, None);
        assert_eq!(item.icon, None);

        let back = serde_json::to_value(&item).unwrap();
        assert!(back.get("spaces").is_none());
    }
}
