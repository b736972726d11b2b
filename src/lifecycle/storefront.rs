use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cart::{Cart, CartError, KeyValueStore};
use crate::clients::{ApiError, LessonApi};
use crate::config::{messages, AppConfig};
use crate::model::{CustomerInfo, Lesson, OrderRequest};
use crate::validation::{
    validate_cart_within, validate_customer_info, validate_order, validate_quantity_within,
    validate_search_query, ValidationResult,
};

/// Errors from the storefront flows.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    /// User input failed validation. Holds the validator's message.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl StorefrontError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            StorefrontError::Api(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

fn check(result: ValidationResult) -> Result<(), StorefrontError> {
    result.into_result().map_err(StorefrontError::Validation)
}

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutReceipt {
    /// The order as submitted.
    pub request: OrderRequest,
    /// The server's response to `POST /orders`.
    pub order: Value,
    pub message: String,
}

/// Ties the lessons API, the cart and the configuration together.
///
/// # Example
///
/// ```ignore
/// let config = AppConfig::from_env();
/// let api = ApiClient::new(&config.api)?;
/// let mut shop = Storefront::new(config, api, FileStore::open("data")?);
///
/// let lessons = shop.search("music").await?;
/// shop.add_to_cart(&lessons[0], 2)?;
/// let receipt = shop.checkout(&CustomerInfo::new("Ann Lee", "07123456789")).await?;
/// ```
pub struct Storefront<A: LessonApi, S: KeyValueStore> {
    pub api: A,
    pub cart: Cart<S>,
    config: AppConfig,
}

impl<A: LessonApi, S: KeyValueStore> Storefront<A, S> {
    /// Builds the storefront and rehydrates the cart from `store`.
    pub fn new(config: AppConfig, api: A, store: S) -> Self {
        let cart = Cart::load(store, config.cart, config.storage.cart.clone());
        info!(items = cart.items().len(), "Storefront ready");
        Self { api, cart, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub async fn lessons(&self) -> Result<Vec<Lesson>, StorefrontError> {
        Ok(self.api.get_lessons().await?)
    }

    pub async fn lesson(&self, id: &str) -> Result<Lesson, StorefrontError> {
        Ok(self.api.get_lesson(id).await?)
    }

    /// Validates the query, then searches. A blank query lists everything.
    pub async fn search(&self, query: &str) -> Result<Vec<Lesson>, StorefrontError> {
        check(validate_search_query(query))?;
        Ok(self.api.search_lessons(query).await?)
    }

    /// Adds `quantity` of `lesson`, refusing more than the lesson has left
    /// after what is already in the cart.
    pub fn add_to_cart(&mut self, lesson: &Lesson, quantity: u32) -> Result<(), StorefrontError> {
        let remaining = lesson.spaces.saturating_sub(self.cart.quantity_of(&lesson.id));
        debug!(id = %lesson.id, quantity, remaining, "add_to_cart called");
        check(validate_quantity_within(
            i64::from(quantity),
            Some(remaining),
            self.config.cart,
        ))?;
        self.cart.add(lesson, Some(quantity))?;
        Ok(())
    }

    /// Places an order for the whole cart.
    ///
    /// Steps: validate the customer and the cart, build and validate the
    /// payload, `POST /orders`, lower each lesson's spaces, clear the cart.
    /// Each lesson's current spaces are fetched from the server before the
    /// lowered value is written back. A fetch or update that fails after the
    /// order is accepted is logged and skipped. The cart is left untouched if
    /// anything before the order post fails.
    pub async fn checkout(&mut self, customer: &CustomerInfo) -> Result<CheckoutReceipt, StorefrontError> {
        let customer = CustomerInfo::new(customer.name.trim(), customer.phone.trim());
        check(validate_customer_info(&customer))?;
        check(validate_cart_within(&self.cart.to_json(), self.config.cart))?;

        let request = self.cart.prepare_order(&customer)?;
        check(validate_order(&request))?;

        let order = self.api.create_order(&request).await?;
        info!(order_id = ?order.get("_id"), lessons = request.lesson_ids.len(), "Order placed");

        for (id, quantity) in request.lesson_ids.iter().zip(&request.num_spaces) {
            self.release_spaces(id, *quantity).await;
        }

        self.cart.clear();
        Ok(CheckoutReceipt {
            request,
            order,
            message: messages::ORDER_PLACED.to_string(),
        })
    }

    /// Lowers the server's current capacity for `id` by `quantity`.
    async fn release_spaces(&self, id: &str, quantity: u32) {
        let current = match self.api.get_lesson(id).await {
            Ok(lesson) => lesson.spaces,
            Err(e) => {
                warn!(%id, error = %e, "Failed to fetch lesson spaces");
                return;
            }
        };
        let spaces = current.saturating_sub(quantity);
        match self.api.update_lesson_spaces(id, spaces).await {
            Ok(_) => debug!(%id, spaces, "Lesson spaces updated"),
            Err(e) => warn!(%id, spaces, error = %e, "Failed to update lesson spaces"),
        }
    }
}
