//! The cart engine.
//!
//! A cart holds at most one [`CartItem`] per distinct product id; adding an
//! already-carted product bumps its quantity instead of appending. Items
//! keep the order in which they were first added.

use rust_decimal::Decimal;

use kumawat_traders_core::{Product, ProductId};

/// A product snapshot paired with a positive quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price times quantity, as an exact decimal.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.amount() * Decimal::from(self.quantity)
    }
}

/// A quantity-aggregated selection of products.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// If the product is already in the cart its quantity is incremented;
    /// otherwise a new item with quantity 1 is appended.
    pub fn add_item(&mut self, product: Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                product,
                quantity: 1,
            });
        }
    }

    /// Set an item's quantity exactly.
    ///
    /// A quantity of zero is ignored; removal is a distinct action, never a
    /// side effect of a quantity change. Unknown ids are a no-op.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Remove an item if present; no-op otherwise.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Sum of `price * quantity` over all items.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities, not the count of distinct products.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// The items in first-added order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use kumawat_traders_core::Price;

    fn product(name: &str, price: &str) -> Product {
        Product {
            id: ProductId::generate(),
            name: name.to_string(),
            description: String::new(),
            price: Price::parse(price).unwrap(),
            category: "kirana".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_add_same_product_twice_aggregates() {
        let mut cart = Cart::new();
        let sugar = product("Sugar 1kg", "45.00");

        cart.add_item(sugar.clone());
        cart.add_item(sugar);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_add_distinct_products_appends() {
        let mut cart = Cart::new();
        cart.add_item(product("Sugar 1kg", "45.00"));
        cart.add_item(product("Toor Dal 1kg", "140.00"));

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_update_quantity_sets_exactly() {
        let mut cart = Cart::new();
        let rice = product("Basmati Rice 5kg", "450.00");
        let id = rice.id;
        cart.add_item(rice);

        cart.update_quantity(id, 5);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn test_update_quantity_zero_is_a_no_op() {
        let mut cart = Cart::new();
        let oil = product("Cooking Oil 1L", "185.00");
        let id = oil.id;
        cart.add_item(oil);

        cart.update_quantity(id, 0);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add_item(product("Sugar 1kg", "45.00"));

        cart.update_quantity(ProductId::generate(), 3);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        let tea = product("Tea Powder 500g", "320.00");
        let id = tea.id;
        cart.add_item(tea);

        cart.remove_item(id);
        assert!(cart.is_empty());

        // removing again is a no-op
        cart.remove_item(id);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_and_item_count() {
        let mut cart = Cart::new();
        let bricks = product("Standard Bricks", "12.00");
        let id = bricks.id;
        cart.add_item(bricks);
        cart.update_quantity(id, 3);
        cart.add_item(product("Sugar 1kg", "45.00"));

        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.total().to_string(), "81.00");
    }
}
