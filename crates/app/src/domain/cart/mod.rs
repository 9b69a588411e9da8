//! Client-side cart.
//!
//! The cart is an in-memory basket that lives with the client. Checking it
//! out produces a [`NewOrder`] for the orders service, which owns the stored
//! order from then on.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::{
    catalog::records::MenuItemRecord,
    orders::{
        data::{NewOrder, NewOrderItem},
        pricing::order_total,
    },
};

/// Most units of one menu item a single line can hold.
pub const MAX_LINE_QUANTITY: i32 = 99;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("cannot check out an empty cart")]
    EmptyCart,

    #[error("quantity must be between 1 and {MAX_LINE_QUANTITY}, got {0}")]
    InvalidQuantity(i32),

    #[error("at most {MAX_LINE_QUANTITY} of {0} can be ordered")]
    QuantityLimit(String),
}

/// A single cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
}

/// Lines keyed by menu item id, in the order they were first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, item_id: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.item_id == item_id)
    }

    /// Add one unit of `item`, creating its line if needed. Returns the new
    /// quantity of the line, which stops at [`MAX_LINE_QUANTITY`].
    pub fn add(&mut self, item: &MenuItemRecord) -> i32 {
        self.add_quantity(item, 1).unwrap_or(MAX_LINE_QUANTITY)
    }

    /// Add `quantity` units of `item` at once. Returns the new quantity of
    /// the line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] unless `quantity` is in
    /// `1..=MAX_LINE_QUANTITY`, and [`CartError::QuantityLimit`] when the line
    /// would exceed [`MAX_LINE_QUANTITY`]. The cart is unchanged on error.
    pub fn add_quantity(&mut self, item: &MenuItemRecord, quantity: i32) -> Result<i32, CartError> {
        if !(1..=MAX_LINE_QUANTITY).contains(&quantity) {
            return Err(CartError::InvalidQuantity(quantity));
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.item_id == item.id) {
            let total = line.quantity + quantity;

            if total > MAX_LINE_QUANTITY {
                return Err(CartError::QuantityLimit(item.id.clone()));
            }

            line.quantity = total;

            return Ok(total);
        }

        self.lines.push(CartLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity,
        });

        Ok(quantity)
    }

    /// Returns `false` if no line exists for `item_id`. A full line stays at
    /// [`MAX_LINE_QUANTITY`].
    pub fn increment(&mut self, item_id: &str) -> bool {
        match self.lines.iter_mut().find(|line| line.item_id == item_id) {
            Some(line) => {
                line.quantity = (line.quantity + 1).min(MAX_LINE_QUANTITY);
                true
            }
            None => false,
        }
    }

    /// Lines reaching zero are removed. Returns `false` if no line exists for
    /// `item_id`.
    pub fn decrement(&mut self, item_id: &str) -> bool {
        let Some(index) = self.position(item_id) else {
            return false;
        };

        if let Some(line) = self.lines.get_mut(index) {
            line.quantity -= 1;

            if line.quantity <= 0 {
                self.lines.remove(index);
            }
        }

        true
    }

    /// Returns the removed line, if any.
    pub fn remove(&mut self, item_id: &str) -> Option<CartLine> {
        self.position(item_id).map(|index| self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|line| i64::from(line.quantity)).sum()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn total(&self) -> Decimal {
        order_total(self.lines.iter().map(|line| (line.price, line.quantity)))
    }

    /// Build the order request for the current contents. The cart itself is
    /// left untouched so the caller can clear it once the order is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyCart`] when there is nothing to order.
    pub fn checkout(
        &self,
        user_id: Option<String>,
        payment_reference: Option<String>,
    ) -> Result<NewOrder, CartError> {
        if self.is_empty() {
            return Err(CartError::EmptyCart);
        }

        Ok(NewOrder {
            items: self
                .lines
                .iter()
                .map(|line| NewOrderItem {
                    item_id: line.item_id.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            total: self.total(),
            user_id,
            payment_reference,
        })
    }
}
