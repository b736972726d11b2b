//! Wiring and orchestration.
//!
//! - [`Storefront`] - owns the configuration, the API client and the cart, and
//!   runs the browse / add / checkout flows across them
//! - [`setup_tracing`] - initializes logging

pub mod storefront;
pub mod tracing;

pub use self::storefront::*;
pub use self::tracing::*;
