//! Kumawat Traders Core - Shared types library.
//!
//! This crate provides common types used across all Kumawat Traders
//! components:
//! - `storefront` - The HTTP API server (catalog + admin CRUD + auth)
//! - `cart` - Client-side cart and catalog view logic
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no storage. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and session
//!   tokens, plus the `Product` domain types shared by server and client

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
