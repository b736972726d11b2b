//! Pure data structures (DTOs) shared by the cart, validators and API client.

pub mod cart_item;
pub mod lesson;
pub mod order;

pub use cart_item::*;
pub use lesson::*;
pub use order::*;
