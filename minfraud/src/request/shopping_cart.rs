//! Shopping cart line items.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::ValidationError;

/// A single item in the shopping cart.
///
/// Items are aggregated under the request's `shopping_cart` JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingCartItem {
    /// Category of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Your internal identifier for the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,

    /// Quantity of the item ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    /// Per-unit price of the item, serialized as a JSON number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

impl ShoppingCartItem {
    /// Returns a builder with no fields set.
    #[must_use]
    pub fn builder() -> ShoppingCartItemBuilder {
        ShoppingCartItemBuilder::default()
    }
}

/// Builder for [`ShoppingCartItem`].
#[derive(Debug, Clone, Default)]
pub struct ShoppingCartItemBuilder {
    category: Option<String>,
    item_id: Option<String>,
    quantity: Option<u32>,
    price: Option<Decimal>,
}

impl ShoppingCartItemBuilder {
    /// Sets the item category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the item identifier.
    #[must_use]
    pub fn item_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    /// Sets the quantity ordered.
    #[must_use]
    pub const fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the per-unit price.
    #[must_use]
    pub const fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Builds the [`ShoppingCartItem`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the quantity is zero or the price is
    /// negative.
    pub fn build(self) -> Result<ShoppingCartItem, ValidationError> {
        if self.quantity == Some(0) {
            return Err(ValidationError::new("quantity", "0 is not a positive count"));
        }
        if let Some(price) = self.price {
            if price < Decimal::ZERO {
                return Err(ValidationError::new(
                    "price",
                    format!("{price} is negative"),
                ));
            }
        }

        Ok(ShoppingCartItem {
            category: self.category,
            item_id: self.item_id,
            quantity: self.quantity,
            price: self.price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_round_trip() {
        let price: Decimal = "10.3".parse().expect("valid decimal");
        let item = ShoppingCartItem::builder()
            .category("cat1")
            .item_id("id5")
            .quantity(100)
            .price(price)
            .build()
            .expect("valid item");

        assert_eq!(item.category.as_deref(), Some("cat1"));
        assert_eq!(item.item_id.as_deref(), Some("id5"));
        assert_eq!(item.quantity, Some(100));
        assert_eq!(item.price, Some(price));
    }

    #[test]
    fn quantity_must_be_positive() {
        let err = ShoppingCartItem::builder()
            .quantity(0)
            .build()
            .expect_err("zero quantity must be rejected");
        assert_eq!(err.field, "quantity");
    }

    #[test]
    fn price_must_be_non_negative() {
        let err = ShoppingCartItem::builder()
            .price("-0.01".parse().expect("valid decimal"))
            .build()
            .expect_err("negative price must be rejected");
        assert_eq!(err.field, "price");
    }
}
