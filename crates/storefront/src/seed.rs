//! Initial store contents.
//!
//! The store is transient, so every process start reseeds the same demo
//! catalog: 4 cement products and 8 kirana products, plus the one admin
//! account from configuration.

use secrecy::ExposeSecret;

use kumawat_traders_core::{Price, ProductDraft, UserId};

use crate::config::StorefrontConfig;
use crate::models::User;
use crate::services::auth::password;
use crate::store::{ProductStore, UserStore};

/// (name, description, price in paise, category, image URL)
const SAMPLE_PRODUCTS: &[(&str, &str, i64, &str, &str)] = &[
    (
        "Premium Cement Blocks",
        "High-quality cement blocks for construction. Durable and weather-resistant.",
        4500,
        "cement",
        "https://images.unsplash.com/photo-1621905251189-08b45d6a269e?w=400&h=400&fit=crop",
    ),
    (
        "Hollow Blocks",
        "Lightweight hollow cement blocks, perfect for walls and partitions.",
        3800,
        "cement",
        "https://images.unsplash.com/photo-1504307651254-35680f356dfd?w=400&h=400&fit=crop",
    ),
    (
        "Decorative Jali Blocks",
        "Beautiful decorative cement jali blocks for aesthetic appeal.",
        12000,
        "cement",
        "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=400&h=400&fit=crop",
    ),
    (
        "Standard Bricks",
        "Traditional red clay bricks for all construction needs.",
        1200,
        "cement",
        "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400&h=400&fit=crop",
    ),
    (
        "Atta (Wheat Flour) 5kg",
        "Premium quality whole wheat flour for fresh rotis and parathas.",
        22000,
        "kirana",
        "https://images.unsplash.com/photo-1586201375761-83865001e31c?w=400&h=400&fit=crop",
    ),
    (
        "Basmati Rice 5kg",
        "Long grain aromatic basmati rice, perfect for biryani and pulao.",
        45000,
        "kirana",
        "https://images.unsplash.com/photo-1516684732162-798a0062be99?w=400&h=400&fit=crop",
    ),
    (
        "Toor Dal 1kg",
        "Fresh toor dal (pigeon peas) for nutritious dal preparations.",
        14000,
        "kirana",
        "https://images.unsplash.com/photo-1596040033229-a0b52c8f7862?w=400&h=400&fit=crop",
    ),
    (
        "Cooking Oil 1L",
        "Refined cooking oil for healthy everyday cooking.",
        18500,
        "kirana",
        "https://images.unsplash.com/photo-1474979266404-7eaacbcd87c5?w=400&h=400&fit=crop",
    ),
    (
        "Sugar 1kg",
        "Pure white sugar for sweetening and cooking.",
        4500,
        "kirana",
        "https://images.unsplash.com/photo-1558961363-fa8fdf82db35?w=400&h=400&fit=crop",
    ),
    (
        "Tea Powder 500g",
        "Premium quality tea powder for authentic Indian chai.",
        32000,
        "kirana",
        "https://images.unsplash.com/photo-1597318996386-e59e5f90e5be?w=400&h=400&fit=crop",
    ),
    (
        "Masala Pack",
        "Complete spice pack with turmeric, chili, coriander powder.",
        9500,
        "kirana",
        "https://images.unsplash.com/photo-1596040033229-a0b52c8f7862?w=400&h=400&fit=crop",
    ),
    (
        "Biscuits Variety Pack",
        "Assorted biscuits pack with multiple flavors for family.",
        15000,
        "kirana",
        "https://images.unsplash.com/photo-1558961363-fa8fdf82db35?w=400&h=400&fit=crop",
    ),
];

/// Fill an empty product store with the demo catalog.
pub fn seed_products(products: &ProductStore) {
    for (name, description, paise, category, image_url) in SAMPLE_PRODUCTS {
        products.create(ProductDraft {
            name: (*name).to_string(),
            description: (*description).to_string(),
            price: Price::from_minor_units(*paise),
            category: (*category).to_string(),
            image_url: (*image_url).to_string(),
        });
    }
}

/// Create the configured admin account, password stored hashed.
pub fn seed_admin_user(users: &UserStore, config: &StorefrontConfig) {
    users.insert(User {
        id: UserId::generate(),
        username: config.admin_username.clone(),
        password_hash: password::hash_password(config.admin_password.expose_secret()),
        is_admin: true,
    });
}
