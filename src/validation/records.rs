//! Validators for whole records: lessons, carts, customers and orders.
//!
//! Lesson and cart validators take raw JSON because their job is to check the
//! shape of data that came from the network or from storage.

use serde_json::Value;

use super::{validate_name, validate_phone, validate_quantity_within, ValidationResult};
use crate::config::{messages, CartConfig};
use crate::model::{CustomerInfo, OrderRequest};

const LESSON_REQUIRED_FIELDS: [&str; 6] = ["_id", "subject", "location", "price", "spaces", "image"];
// Older saved carts carry no `spaces`.
const CART_ITEM_REQUIRED_FIELDS: [&str; 5] = ["_id", "subject", "location", "price", "image"];

/// Absent, `null`, `false`, `""` and `0` all count as missing.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

fn non_negative_number(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| n >= 0.0)
}

/// Checks a single lesson record has every required field and sane numbers.
pub fn validate_lesson(lesson: &Value) -> ValidationResult {
    validate_record(lesson, &LESSON_REQUIRED_FIELDS)
}

fn validate_record(record: &Value, required: &[&str]) -> ValidationResult {
    let Some(fields) = record.as_object() else {
        return ValidationResult::fail("Invalid lesson data.");
    };

    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|field| is_missing(fields.get(*field)))
        .collect();
    if !missing.is_empty() {
        return ValidationResult::fail(format!("Missing required fields: {}", missing.join(", ")));
    }

    if !non_negative_number(&record["price"]) {
        return ValidationResult::fail("Price must be a positive number.");
    }
    if let Some(spaces) = fields.get("spaces") {
        if !non_negative_number(spaces) {
            return ValidationResult::fail("Spaces must be a positive number.");
        }
    }
    ValidationResult::ok()
}

/// Checks the serialized cart: a non-empty array of valid lessons, each with
/// a quantity within the default bounds and within its spaces. Items that
/// carry no `spaces` skip the capacity check.
pub fn validate_cart(cart: &Value) -> ValidationResult {
    validate_cart_within(cart, CartConfig::default())
}

/// [`validate_cart`] with caller-supplied quantity bounds.
pub fn validate_cart_within(cart: &Value, bounds: CartConfig) -> ValidationResult {
    let Some(items) = cart.as_array() else {
        return ValidationResult::fail("Invalid cart data.");
    };
    if items.is_empty() {
        return ValidationResult::fail(messages::CART_EMPTY);
    }

    for (index, item) in items.iter().enumerate() {
        let lesson = validate_record(item, &CART_ITEM_REQUIRED_FIELDS);
        if !lesson.is_valid {
            return ValidationResult::fail(format!(
                "Invalid item in cart ({}): {}",
                index + 1,
                lesson.message
            ));
        }

        let subject = item["subject"].as_str().unwrap_or_default();
        let quantity = match item["quantity"].as_i64() {
            Some(q) => validate_quantity_within(
                q,
                item["spaces"].as_u64().and_then(|s| u32::try_from(s).ok()),
                bounds,
            ),
            None => ValidationResult::fail("Quantity must be a valid number."),
        };
        if !quantity.is_valid {
            return ValidationResult::fail(format!(
                "Invalid quantity for {subject}: {}",
                quantity.message
            ));
        }
    }
    ValidationResult::ok()
}

/// Name then phone.
pub fn validate_customer_info(customer: &CustomerInfo) -> ValidationResult {
    let name = validate_name(&customer.name);
    if !name.is_valid {
        return name;
    }
    let phone = validate_phone(&customer.phone);
    if !phone.is_valid {
        return phone;
    }
    ValidationResult::ok()
}

/// Customer fields, then the parallel id/quantity arrays.
pub fn validate_order(order: &OrderRequest) -> ValidationResult {
    let customer = CustomerInfo::new(order.name.as_str(), order.phone.as_str());
    let customer = validate_customer_info(&customer);
    if !customer.is_valid {
        return customer;
    }
    if order.lesson_ids.len() != order.num_spaces.len() {
        return ValidationResult::fail("Lesson IDs and quantities must match.");
    }
    if order.lesson_ids.is_empty() {
        return ValidationResult::fail(messages::CART_EMPTY);
    }
    ValidationResult::ok()
}
