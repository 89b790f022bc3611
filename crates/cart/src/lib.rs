//! Kumawat Traders Cart - Client-side shopping logic.
//!
//! Everything in this crate runs on the client and operates purely on
//! product data fetched from the storefront API; nothing here talks to the
//! server. Placing an order is a one-way hand-off: the cart renders a
//! human-readable summary and opens it as a WhatsApp deep link. No order
//! record is created anywhere.
//!
//! # Modules
//!
//! - [`cart`] - Quantity-aggregated product selection
//! - [`message`] - Order summary text and the WhatsApp checkout link
//! - [`catalog`] - Catalog filtering and sorting for display

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod message;

pub use cart::{Cart, CartItem};
pub use catalog::{SortKey, filter_and_sort};
pub use message::{STORE_PHONE, checkout_url, compose_order_message};
