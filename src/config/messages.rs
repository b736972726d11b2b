//! User-facing message strings.

pub const NETWORK: &str = "Unable to connect to the server. Please check your internet connection.";
pub const TIMEOUT: &str = "Request took too long. Please try again.";
pub const NOT_FOUND: &str = "The requested resource was not found.";
pub const SERVER_ERROR: &str = "Server error. Please try again later.";
pub const UNEXPECTED: &str = "An unexpected error occurred.";

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_INVALID: &str = "Name can only contain letters, spaces, hyphens, and apostrophes";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Phone number can only contain numbers";
pub const CART_EMPTY: &str = "Your cart is empty. Please add lessons before checkout.";

pub const ORDER_PLACED: &str = "Order placed successfully! You will receive a confirmation email.";
