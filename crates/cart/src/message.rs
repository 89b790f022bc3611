//! Order message derivation and the WhatsApp checkout link.
//!
//! Checkout is a one-way hand-off: the rendered text is the entire order
//! payload, opened as a `wa.me` deep link in a new browsing context. The
//! server never sees it.

use std::fmt::Write as _;

use rust_decimal::Decimal;

use crate::cart::CartItem;

/// The store's WhatsApp number, in international format.
pub const STORE_PHONE: &str = "+916376751010";

/// Render the human-readable order summary.
///
/// One numbered block per item in cart order, with unit price and line
/// subtotal to two decimal places, followed by the grand total.
#[must_use]
pub fn compose_order_message(items: &[CartItem]) -> String {
    let mut message = String::from("*New Order from Kumawat Traders*\n\n");
    message.push_str("*Items:*\n");

    for (index, item) in items.iter().enumerate() {
        let _ = write!(
            message,
            "{num}. {name}\n   Quantity: {qty}\n   Price: Rs.{unit:.2} each\n   Subtotal: Rs.{line:.2}\n\n",
            num = index + 1,
            name = item.product.name,
            qty = item.quantity,
            unit = item.product.price.amount(),
            line = item.line_total(),
        );
    }

    let total: Decimal = items.iter().map(CartItem::line_total).sum();
    let _ = write!(message, "*Total Amount: Rs.{total:.2}*\n\n");
    message.push_str("Please confirm this order. Thank you!");

    message
}

/// Build the checkout deep link for a phone number.
///
/// The message text is URL-encoded into the `text` query parameter.
#[must_use]
pub fn checkout_url(phone: &str, items: &[CartItem]) -> String {
    let message = compose_order_message(items);
    format!("https://wa.me/{phone}?text={}", urlencoding::encode(&message))
}
