// src/domain/cart/aggregate.rs
use crate::domain::cart::line::{CartLine, CartProduct};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::{Price, ProductId};

/// The set of distinct products a shopper intends to buy.
///
/// Holds at most one line per product and never a line with quantity 0.
/// Lines keep the order in which products were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from persisted lines, merging duplicates and dropping
    /// empty lines so the invariants hold whatever the storage returned.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            match cart.position(line.product_id) {
                Some(idx) => {
                    let existing = &mut cart.lines[idx];
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Merge `qty` units of `product` into the cart.
    ///
    /// An existing line keeps its original price and snapshot and only grows
    /// in quantity.
    pub fn add_item(&mut self, product: CartProduct, qty: u32) -> DomainResult<()> {
        if qty == 0 {
            return Err(DomainError::Validation(
                "quantity to add must be at least 1".into(),
            ));
        }

        match self.position(product.id) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(qty);
            }
            None => self.lines.push(CartLine {
                product_id: product.id,
                quantity: qty,
                unit_price: product.unit_price,
                snapshot: product.snapshot,
            }),
        }
        Ok(())
    }

    /// Take one unit away; the line disappears when it reaches zero.
    pub fn remove_one(&mut self, id: ProductId) {
        if let Some(idx) = self.position(id) {
            if self.lines[idx].quantity <= 1 {
                self.lines.remove(idx);
            } else {
                self.lines[idx].quantity -= 1;
            }
        }
    }

    pub fn remove_item(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product_id != id);
    }

    /// Set an exact quantity on an existing line; 0 removes it. Absent
    /// products are left alone.
    pub fn set_item_quantity(&mut self, id: ProductId, qty: u32) {
        if qty == 0 {
            self.remove_item(id);
            return;
        }
        if let Some(idx) = self.position(id) {
            self.lines[idx].quantity = qty;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Unit count across all lines.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Number of distinct products.
    pub fn unique_items(&self) -> usize {
        self.lines.len()
    }

    pub fn item_quantity(&self, id: ProductId) -> u32 {
        self.position(id).map_or(0, |idx| self.lines[idx].quantity)
    }

    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.product_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::line::ProductSnapshot;
    use rust_decimal::Decimal;

    fn product(id: i64, price: i64) -> CartProduct {
        CartProduct {
            id: ProductId(id),
            unit_price: Price::new(Decimal::from(price)).unwrap(),
            snapshot: ProductSnapshot {
                title: format!("Producto {id}"),
                slug: format!("producto-{id}"),
                image: None,
                categories: vec!["Living".into()],
            },
        }
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let mut cart = Cart::new();
        for qty in [1, 3, 2] {
            cart.add_item(product(1, 10), qty).unwrap();
        }
        assert_eq!(cart.item_quantity(ProductId(1)), 6);
        assert_eq!(cart.unique_items(), 1);
        assert_eq!(cart.total_items(), 6);
    }

    #[test]
    fn adding_zero_is_rejected_and_leaves_cart_untouched() {
        let mut cart = Cart::new();
        let err = cart.add_item(product(1, 10), 0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn existing_line_keeps_first_price_snapshot() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 10), 1).unwrap();
        cart.add_item(product(1, 99), 1).unwrap();
        assert_eq!(cart.lines()[0].unit_price.amount(), Decimal::from(10));
    }

    #[test]
    fn remove_one_until_gone_then_noop() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 10), 3).unwrap();
        for _ in 0..3 {
            cart.remove_one(ProductId(1));
        }
        assert_eq!(cart.item_quantity(ProductId(1)), 0);
        assert!(cart.is_empty());

        cart.remove_one(ProductId(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_zero_matches_remove_item() {
        let mut a = Cart::new();
        a.add_item(product(1, 10), 2).unwrap();
        a.add_item(product(2, 5), 1).unwrap();
        let mut b = a.clone();

        a.set_item_quantity(ProductId(1), 0);
        b.remove_item(ProductId(1));

        assert_eq!(a, b);
        assert_eq!(a.item_quantity(ProductId(1)), 0);
    }

    #[test]
    fn set_quantity_on_absent_line_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 10), 1).unwrap();
        cart.set_item_quantity(ProductId(9), 4);
        assert_eq!(cart.unique_items(), 1);
        assert_eq!(cart.item_quantity(ProductId(9)), 0);

        cart.set_item_quantity(ProductId(1), 7);
        assert_eq!(cart.item_quantity(ProductId(1)), 7);
    }

    #[test]
    fn remove_item_ignores_unknown_ids() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 10), 2).unwrap();
        cart.remove_item(ProductId(5));
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn shopper_scenario() {
        let mut cart = Cart::new();

        cart.add_item(product(1, 10), 2).unwrap();
        assert_eq!((cart.total_items(), cart.unique_items()), (2, 1));

        cart.add_item(product(2, 10), 1).unwrap();
        assert_eq!((cart.total_items(), cart.unique_items()), (3, 2));

        cart.remove_one(ProductId(1));
        assert_eq!((cart.total_items(), cart.unique_items()), (2, 2));

        cart.remove_one(ProductId(1));
        assert_eq!((cart.total_items(), cart.unique_items()), (1, 1));
        assert_eq!(cart.item_quantity(ProductId(1)), 0);
    }

    #[test]
    fn totals_follow_lines() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 10), 2).unwrap();
        cart.add_item(product(2, 25), 3).unwrap();
        cart.add_item(product(3, 4), 1).unwrap();

        let sum: u64 = cart.lines().iter().map(|l| u64::from(l.quantity)).sum();
        assert_eq!(cart.total_items(), sum);
        assert_eq!(cart.unique_items(), 3);
        assert_eq!(cart.subtotal().amount(), Decimal::from(99));
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 10), 2).unwrap();
        cart.add_item(product(2, 10), 2).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn from_lines_restores_invariants() {
        let mut a = Cart::new();
        a.add_item(product(1, 10), 2).unwrap();
        let mut lines = a.lines().to_vec();
        lines.extend_from_slice(a.lines());
        let mut zero = a.lines()[0].clone();
        zero.product_id = ProductId(2);
        zero.quantity = 0;
        lines.push(zero);

        let cart = Cart::from_lines(lines);
        assert_eq!(cart.unique_items(), 1);
        assert_eq!(cart.item_quantity(ProductId(1)), 4);
    }
}
