//! Validators for single form fields.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationResult;
use crate::config::{messages, CartConfig};

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").unwrap());
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 50;
const PHONE_MIN_LEN: usize = 10;
const PHONE_MAX_LEN: usize = 15;
const SEARCH_MAX_LEN: usize = 100;

/// Customer name: 2 to 50 letters, spaces, hyphens or apostrophes.
pub fn validate_name(name: &str) -> ValidationResult {
    let name = name.trim();
    let len = name.chars().count();

    if len == 0 {
        return ValidationResult::fail(messages::NAME_REQUIRED);
    }
    if len < NAME_MIN_LEN {
        return ValidationResult::fail("Name must be at least 2 characters long.");
    }
    if len > NAME_MAX_LEN {
        return ValidationResult::fail("Name must be less than 50 characters long.");
    }
    if !NAME_PATTERN.is_match(name) {
        return ValidationResult::fail(messages::NAME_INVALID);
    }
    ValidationResult::ok()
}

/// Phone number: 10 to 15 ASCII digits.
pub fn validate_phone(phone: &str) -> ValidationResult {
    let phone = phone.trim();

    if phone.is_empty() {
        return ValidationResult::fail(messages::PHONE_REQUIRED);
    }
    if !PHONE_PATTERN.is_match(phone) {
        return ValidationResult::fail(messages::PHONE_INVALID);
    }
    // Digits only from here, so byte length is digit count.
    if phone.len() < PHONE_MIN_LEN {
        return ValidationResult::fail("Phone number must be at least 10 digits long.");
    }
    if phone.len() > PHONE_MAX_LEN {
        return ValidationResult::fail("Phone number must be less than 15 digits long.");
    }
    ValidationResult::ok()
}

pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();

    if email.is_empty() {
        return ValidationResult::fail("Email is required.");
    }
    if !EMAIL_PATTERN.is_match(email) {
        return ValidationResult::fail("Please enter a valid email address.");
    }
    ValidationResult::ok()
}

/// An empty query is valid and means "everything".
pub fn validate_search_query(query: &str) -> ValidationResult {
    if query.trim().chars().count() > SEARCH_MAX_LEN {
        return ValidationResult::fail("Search query must be less than 100 characters.");
    }
    ValidationResult::ok()
}

/// Requested quantity against the default per-lesson bounds and, if known,
/// the lesson's available spaces.
pub fn validate_quantity(quantity: i64, available_spaces: Option<u32>) -> ValidationResult {
    validate_quantity_within(quantity, available_spaces, CartConfig::default())
}

/// [`validate_quantity`] with caller-supplied bounds.
pub fn validate_quantity_within(
    quantity: i64,
    available_spaces: Option<u32>,
    bounds: CartConfig,
) -> ValidationResult {
    if quantity < i64::from(bounds.min_quantity) {
        return ValidationResult::fail(format!("Quantity must be at least {}.", bounds.min_quantity));
    }
    if quantity > i64::from(bounds.max_quantity) {
        return ValidationResult::fail(format!(
            "Maximum quantity per lesson is {}.",
            bounds.max_quantity
        ));
    }
    if let Some(spaces) = available_spaces {
        if quantity > i64::from(spaces) {
            return ValidationResult::fail(format!("Only {spaces} spaces available."));
        }
    }
    ValidationResult::ok()
}

/// Like [`validate_quantity`], for raw text input.
pub fn validate_quantity_input(raw: &str, available_spaces: Option<u32>) -> ValidationResult {
    match raw.trim().parse::<i64>() {
        Ok(quantity) => validate_quantity(quantity, available_spaces),
        Err(_) => ValidationResult::fail("Quantity must be a valid number."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        assert!(validate_name("Ann Lee").is_valid);
        assert!(validate_name("  Mary-Jane O'Neil ").is_valid);

        assert_eq!(validate_name("").message, "Name is required");
        assert_eq!(validate_name("   ").message, "Name is required");
        assert_eq!(
            validate_name("A").message,
            "Name must be at least 2 characters long."
        );
        assert_eq!(
            validate_name(&"a".repeat(51)).message,
            "Name must be less than 50 characters long."
        );
        assert!(validate_name(&"a".repeat(50)).is_valid);
        assert_eq!(
            validate_name("R2D2").message,
            "Name can only contain letters, spaces, hyphens, and apostrophes"
        );
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("07123456789").is_valid);
        assert!(validate_phone(" 0712345678 ").is_valid);

        assert_eq!(validate_phone("").message, "Phone number is required");
        assert_eq!(
            validate_phone("12345").message,
            "Phone number must be at least 10 digits long."
        );
        assert_eq!(
            validate_phone("0712-345-678").message,
            "Phone number can only contain numbers"
        );
        assert_eq!(
            validate_phone("1234567890123456").message,
            "Phone number must be less than 15 digits long."
        );
        // Non-ASCII digits are rejected.
        assert!(!validate_phone("٠١٢٣٤٥٦٧٨٩").is_valid);
    }

    #[test]
    fn test_email() {
        assert!(validate_email("ann@example.com").is_valid);
        assert_eq!(validate_email(" ").message, "Email is required.");
        assert_eq!(
            validate_email("ann@example").message,
            "Please enter a valid email address."
        );
        assert!(!validate_email("ann lee@example.com").is_valid);
    }

    #[test]
    fn test_search_query() {
        assert!(validate_search_query("").is_valid);
        assert!(validate_search_query("maths").is_valid);
        assert!(validate_search_query(&"x".repeat(100)).is_valid);
        assert_eq!(
            validate_search_query(&"x".repeat(101)).message,
            "Search query must be less than 100 characters."
        );
    }

    #[test]
    fn test_quantity() {
        assert!(validate_quantity(3, None).is_valid);
        assert!(validate_quantity(3, Some(3)).is_valid);
        assert_eq!(validate_quantity(0, None).message, "Quantity must be at least 1.");
        assert_eq!(
            validate_quantity(11, None).message,
            "Maximum quantity per lesson is 10."
        );
        assert_eq!(
            validate_quantity(4, Some(3)).message,
            "Only 3 spaces available."
        );
        assert_eq!(
            validate_quantity_input("two", None).message,
            "Quantity must be a valid number."
        );
        assert!(validate_quantity_input(" 2 ", Some(5)).is_valid);
    }

    #[test]
    fn test_quantity_with_custom_bounds() {
        let bounds = CartConfig { min_quantity: 2, max_quantity: 3 };

        assert!(validate_quantity_within(3, None, bounds).is_valid);
        assert_eq!(
            validate_quantity_within(1, None, bounds).message,
            "Quantity must be at least 2."
        );
        assert_eq!(
            validate_quantity_within(4, Some(9), bounds).message,
            "Maximum quantity per lesson is 3."
        );
        assert_eq!(
            validate_quantity_within(3, Some(2), bounds).message,
            "Only 2 spaces available."
        );
    }
}
