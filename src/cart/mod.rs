//! Shopping-cart state with write-through local persistence.
//!
//! [`Cart`] owns an ordered list of [`CartItem`](crate::model::CartItem)s and a
//! [`KeyValueStore`]. Every mutating call ends with a flush of the whole list
//! to the store; reads never touch the store.

pub mod error;
pub mod manager;
pub mod storage;

pub use error::*;
pub use manager::*;
pub use storage::*;
