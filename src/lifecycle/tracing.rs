//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber filtered by
//! `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Cart**: every add, remove, quantity change and clear, plus storage
//!   load/save failures (`warn`)
//! - **API**: one span per named call with its arguments, the outgoing URL at
//!   `debug`, the status at `info`, and translated failures at `warn`
//! - **Checkout**: the order id returned by the server and any capacity
//!   update that failed after the order was placed
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo test -- --nocapture
//! RUST_LOG=course_cart::clients=debug cargo test
//! ```
//!
//! With `RUST_LOG=debug` the order payload is logged once when
//! `create_order` is called:
//!
//! ```text
//! DEBUG create_order:create_order called order=OrderRequest { name: "Ann Lee", ... }
//! INFO  create_order:send: Request ok url="http://localhost:3000/orders" status=201
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
