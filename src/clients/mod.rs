//! HTTP access to the lessons API.
//!
//! [`ApiClient`] is the only type that touches the network. The named calls
//! (`get_lessons`, `create_order`, ...) are provided methods on the
//! [`LessonApi`] trait, so any implementation of its single `request` method
//! gets them for free. [`mock::MockApi`] uses that to stand in for the server
//! in tests.

pub mod api_client;
pub mod error;
pub mod lesson_api;
pub mod mock;

pub use api_client::*;
pub use error::*;
pub use lesson_api::*;
