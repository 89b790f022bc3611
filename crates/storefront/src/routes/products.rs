//! Product route handlers.
//!
//! Reads are public; writes require an admin session. Write bodies are
//! validated against the product shape before the store is touched, and a
//! failure short-circuits with the violated fields.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use kumawat_traders_core::{Price, Product, ProductDraft, ProductId};

use crate::error::{AppError, FieldError, Result};
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// Product fields as sent by the client, before validation.
///
/// Everything is optional here so that missing and empty fields both
/// surface as field errors rather than a deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl ProductPayload {
    /// Validate the payload into a draft, or report every violated field.
    fn validate(self) -> std::result::Result<ProductDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = require_text(self.name, "name", &mut errors);
        let description = require_text(self.description, "description", &mut errors);
        let category = require_text(self.category, "category", &mut errors);
        let image_url = require_text(self.image_url, "imageUrl", &mut errors);

        let price = match self.price.as_deref() {
            None | Some("") => {
                errors.push(FieldError::new("price", "price is required"));
                None
            }
            Some(raw) => match Price::parse(raw) {
                Ok(price) => Some(price),
                Err(err) => {
                    errors.push(FieldError::new("price", err.to_string()));
                    None
                }
            },
        };

        match (name, description, price, category, image_url) {
            (Some(name), Some(description), Some(price), Some(category), Some(image_url))
                if errors.is_empty() =>
            {
                Ok(ProductDraft {
                    name,
                    description,
                    price,
                    category,
                    image_url,
                })
            }
            _ => Err(errors),
        }
    }
}

fn require_text(
    value: Option<String>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Some(s),
        _ => {
            errors.push(FieldError::new(field, format!("{field} is required")));
            None
        }
    }
}

/// An id is opaque to clients; anything that doesn't resolve to a stored
/// product is simply "not found", including strings that were never ids.
fn parse_id(id: &str) -> Result<ProductId> {
    id.parse()
        .map_err(|_| AppError::NotFound("Product".to_string()))
}

/// List all products, optionally narrowed to one category (exact match).
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Json<Vec<Product>> {
    let products = match query.category.as_deref() {
        Some(category) => state.products().list_by_category(category),
        None => state.products().list(),
    };
    Json(products)
}

/// Fetch a single product.
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>> {
    let id = parse_id(&id)?;
    state
        .products()
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product".to_string()))
}

/// Create a product (admin only).
#[instrument(skip_all)]
pub async fn create(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Product>)> {
    let draft = payload.validate().map_err(AppError::Validation)?;
    let product = state.products().create(draft);

    tracing::info!(
        admin = %session.username,
        product_id = %product.id,
        "product created"
    );
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace all fields of a product (admin only). Partial patch is not
/// supported; the client resends the full field set.
#[instrument(skip_all)]
pub async fn update(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>> {
    let draft = payload.validate().map_err(AppError::Validation)?;
    let id = parse_id(&id)?;

    let product = state
        .products()
        .update(id, draft)
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

    tracing::info!(admin = %session.username, product_id = %product.id, "product updated");
    Ok(Json(product))
}

/// Delete a product (admin only).
#[instrument(skip_all)]
pub async fn remove(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;

    if !state.products().delete(id) {
        return Err(AppError::NotFound("Product".to_string()));
    }

    tracing::info!(admin = %session.username, product_id = %id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn full_payload() -> ProductPayload {
        ProductPayload {
            name: Some("Sugar 1kg".to_string()),
            description: Some("Pure white sugar.".to_string()),
            price: Some("45.00".to_string()),
            category: Some("kirana".to_string()),
            image_url: Some("https://example.com/sugar.jpg".to_string()),
        }
    }

    #[test]
    fn test_validate_accepts_full_payload() {
        let draft = full_payload().validate().unwrap();
        assert_eq!(draft.name, "Sugar 1kg");
        assert_eq!(draft.price, Price::parse("45.00").unwrap());
    }

    #[test]
    fn test_validate_reports_every_missing_field() {
        let payload = ProductPayload {
            name: None,
            description: Some(String::new()),
            price: None,
            category: Some("  ".to_string()),
            image_url: None,
        };

        let errors = payload.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            ["name", "description", "category", "imageUrl", "price"]
        );
    }

    #[test]
    fn test_validate_rejects_bad_prices() {
        for bad in ["-1", "abc", "1.234"] {
            let mut payload = full_payload();
            payload.price = Some(bad.to_string());
            let errors = payload.validate().unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "price");
        }
    }
}
