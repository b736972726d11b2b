//! # Course Cart
//!
//! > **Client-side cart, validation and API access for a course-enrollment app.**
//!
//! The crate holds everything a front end needs between "show the lessons" and
//! "place the order": a shopping cart that survives restarts, the validators
//! for every form field and payload, and a small HTTP client for the lessons
//! API.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The State ([`cart`])
//! - **Role**: An ordered list of lessons with quantities, written through to a
//!   key-value store after every change.
//! - **Key items**: [`Cart`](cart::Cart), [`KeyValueStore`](cart::KeyValueStore),
//!   [`FileStore`](cart::FileStore).
//!
//! ### 2. The Rules ([`validation`])
//! - **Role**: Pure functions that return a [`ValidationResult`](validation::ValidationResult)
//!   with a message ready to show the user.
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: [`ApiClient`](clients::ApiClient) sends requests with a fixed
//!   timeout and translates failures into [`ApiError`](clients::ApiError). The
//!   named calls live on the [`LessonApi`](clients::LessonApi) trait.
//! - **Testing**: [`MockApi`](clients::mock::MockApi) replaces the server.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: [`Storefront`](lifecycle::Storefront) wires config, API and cart
//!   and runs checkout end to end.
//!
//! ### 5. Supporting modules
//! [`config`] for read-only settings and messages, [`model`] for the DTOs.
//!
//! ## 🚀 Running Tests
//!
//! ```bash
//! cargo test
//! RUST_LOG=debug cargo test -- --nocapture
//! ```

pub mod cart;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod validation;
