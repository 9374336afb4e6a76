//! # Cart Ledger
//!
//! The cart state machine: ordered line items plus two cached aggregates.
//!
//! ## Line Item Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Line Item Lifecycle                                  │
//! │                                                                         │
//! │              add                                  remove                │
//! │   ┌────────┐ ───────► ┌─────────────────────┐ ───────► ┌────────┐      │
//! │   │ absent │          │ present (qty ≥ 1)   │          │ absent │      │
//! │   └────────┘          └─────────────────────┘          └────────┘      │
//! │                         │      ▲      │                                 │
//! │                increment│      │      │decrement                        │
//! │                (qty + 1)└──────┘      └ (qty - 1, floor 1)             │
//! │                                                                         │
//! │  Aggregates (cached, updated by delta on every transition):            │
//! │    total      = Σ price × quantity                                     │
//! │    totalItems = Σ quantity                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Duplicate Add Divergence
//! Under [`DuplicateAddPolicy::AggregateOnly`] (the default) adding a product
//! that is already in the cart grows `total` by the payload price and
//! `totalItems` by one while the line quantity stays put. From then on the
//! cached aggregates differ from their recomputation by a fixed
//! [`AggregateDrift`]. Increment, decrement and remove apply exact deltas, so
//! they neither introduce nor repair drift; only [`CartLedger::reset`] clears
//! it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use ts_rs::TS;

use crate::error::{LedgerError, LedgerResult, ValidationError};
use crate::money::Money;
use crate::types::{DuplicateAddPolicy, LineItem, Product, ProductId};
use crate::validation::{validate_line_item, validate_product};

// =============================================================================
// Transition
// =============================================================================

/// What a successful ledger operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A new line item was appended.
    Inserted,
    /// Duplicate add under `AggregateOnly`: aggregates grew, quantity did not.
    Accumulated,
    /// A line quantity went up by one.
    Incremented,
    /// A line quantity went down by one.
    Decremented,
    /// Decrement at quantity 1. Nothing changed.
    AtFloor,
    /// A line item was deleted.
    Removed,
    /// The ledger was emptied.
    Reset,
}

impl Transition {
    /// True when the ledger is exactly as it was before the operation.
    pub fn is_noop(&self) -> bool {
        matches!(self, Transition::AtFloor)
    }
}

// =============================================================================
// Aggregate Drift
// =============================================================================

/// Cached aggregates minus their recomputation from the line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregateDrift {
    pub total: Money,
    pub total_items: i64,
}

impl AggregateDrift {
    pub fn is_zero(&self) -> bool {
        self.total.is_zero() && self.total_items == 0
    }
}

// =============================================================================
// Cart Ledger
// =============================================================================

/// The aggregate cart state.
///
/// ## Invariants
/// - Items are unique by `id` and kept in insertion order
/// - Every item has `quantity >= 1`
/// - A failed operation leaves the ledger untouched
/// - `revision` moves on every state change and never on a no-op
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLedger {
    items: Vec<LineItem>,
    total: Money,
    total_items: i64,
    revision: u64,
    policy: DuplicateAddPolicy,
}

impl CartLedger {
    /// Creates an empty ledger with the default duplicate add policy.
    pub fn new() -> Self {
        CartLedger::with_policy(DuplicateAddPolicy::default())
    }

    /// Creates an empty ledger with an explicit duplicate add policy.
    pub fn with_policy(policy: DuplicateAddPolicy) -> Self {
        CartLedger {
            items: Vec::new(),
            total: Money::zero(),
            total_items: 0,
            revision: 0,
            policy,
        }
    }

    /// Rebuilds a ledger from line items, recomputing both aggregates.
    ///
    /// The result is always consistent: any drift carried by the source of
    /// `items` is not restored.
    pub fn from_items(items: Vec<LineItem>, policy: DuplicateAddPolicy) -> LedgerResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            validate_line_item(item)?;
            if !seen.insert(item.id.clone()) {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: item.id.to_string(),
                }
                .into());
            }
        }

        let mut total = Money::zero();
        let mut total_items: i64 = 0;
        for item in &items {
            total = item
                .price
                .checked_mul(item.quantity)
                .and_then(|line| total.checked_add(line))
                .ok_or_else(|| overflow("total"))?;
            total_items = total_items
                .checked_add(item.quantity)
                .ok_or_else(|| overflow("totalItems"))?;
        }

        let mut ledger = CartLedger::with_policy(policy);
        ledger.total = total;
        ledger.total_items = total_items;
        ledger.items = items;
        Ok(ledger)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product not in cart: appends a line with quantity 1
    /// - Product already in cart: see [`DuplicateAddPolicy`]
    ///
    /// Either way `total` grows by one unit price and `totalItems` by one.
    /// Under `AggregateOnly` the unit price is the payload's; under
    /// `Increment` it is the line's frozen price.
    pub fn add(&mut self, product: &Product) -> LedgerResult<Transition> {
        validate_product(product)?;

        let existing = self.position(&product.id);
        let price = match (existing, self.policy) {
            (Some(idx), DuplicateAddPolicy::Increment) => self.items[idx].price,
            _ => product.price,
        };
        let (total, total_items) = self.grown_by(price)?;

        let transition = match existing {
            None => {
                self.items.push(LineItem::from_product(product));
                Transition::Inserted
            }
            Some(idx) => match self.policy {
                DuplicateAddPolicy::AggregateOnly => Transition::Accumulated,
                DuplicateAddPolicy::Increment => {
                    self.items[idx].quantity += 1;
                    Transition::Incremented
                }
            },
        };

        self.total = total;
        self.total_items = total_items;
        self.revision += 1;
        Ok(transition)
    }

    /// Adds one unit to an existing line.
    pub fn increment(&mut self, id: &ProductId) -> LedgerResult<Transition> {
        let idx = self.require(id)?;
        let (total, total_items) = self.grown_by(self.items[idx].price)?;

        self.items[idx].quantity += 1;
        self.total = total;
        self.total_items = total_items;
        self.revision += 1;
        Ok(Transition::Incremented)
    }

    /// Removes one unit from an existing line, never going below 1.
    ///
    /// At quantity 1 this is a no-op; deleting the line is `remove`'s job.
    pub fn decrement(&mut self, id: &ProductId) -> LedgerResult<Transition> {
        let idx = self.require(id)?;
        let item = &mut self.items[idx];

        if item.quantity <= 1 {
            return Ok(Transition::AtFloor);
        }

        item.quantity -= 1;
        self.total -= item.price;
        self.total_items -= 1;
        self.revision += 1;
        Ok(Transition::Decremented)
    }

    /// Deletes a line and takes its whole contribution off the aggregates.
    pub fn remove(&mut self, id: &ProductId) -> LedgerResult<Transition> {
        let idx = self.require(id)?;
        // Vec::remove shifts the tail down, keeping the remaining order.
        let item = self.items.remove(idx);

        self.total -= item.line_total();
        self.total_items -= item.quantity;
        self.revision += 1;
        Ok(Transition::Removed)
    }

    /// Empties the ledger, clearing any drift. The policy is kept.
    ///
    /// Cannot fail, so unlike the other operations it returns a bare
    /// [`Transition`].
    pub fn reset(&mut self) -> Transition {
        self.items.clear();
        self.total = Money::zero();
        self.total_items = 0;
        self.revision += 1;
        Transition::Reset
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.position(id).is_some()
    }

    /// Cached running total.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Cached running unit count.
    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn policy(&self) -> DuplicateAddPolicy {
        self.policy
    }

    /// Cached aggregates minus their recomputation.
    pub fn drift(&self) -> AggregateDrift {
        let total: Money = self.items.iter().map(LineItem::line_total).sum();
        let total_items: i64 = self.items.iter().map(|i| i.quantity).sum();

        AggregateDrift {
            total: self.total - total,
            total_items: self.total_items - total_items,
        }
    }

    /// True when both aggregates equal their recomputation.
    pub fn is_consistent(&self) -> bool {
        self.drift().is_zero()
    }

    /// Owned, read-only view of the current state.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::from(self)
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|i| &i.id == id)
    }

    fn require(&self, id: &ProductId) -> LedgerResult<usize> {
        self.position(id)
            .ok_or_else(|| LedgerError::ItemNotFound(id.clone()))
    }

    /// Aggregates after one more unit at `price`, computed before any write.
    ///
    /// Every line quantity is bounded by `total_items`, so checking the
    /// aggregates also rules out quantity overflow.
    fn grown_by(&self, price: Money) -> LedgerResult<(Money, i64)> {
        let total = self
            .total
            .checked_add(price)
            .ok_or_else(|| overflow("total"))?;
        let total_items = self
            .total_items
            .checked_add(1)
            .ok_or_else(|| overflow("totalItems"))?;
        Ok((total, total_items))
    }
}

fn overflow(field: &str) -> LedgerError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: i64::MAX,
    }
    .into()
}

impl Default for CartLedger {
    fn default() -> Self {
        CartLedger::new()
    }
}

// =============================================================================
// Cart Snapshot
// =============================================================================

/// Immutable view of the ledger handed to displays.
///
/// ## Serialization
/// ```json
/// {
///   "items": [{ "id": "1", "name": "Monstera", "price": 1500, "image": "...", "quantity": 1 }],
///   "total": 1500,
///   "totalItems": 1,
///   "revision": 1
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    pub total: Money,
    pub total_items: i64,
    pub revision: u64,
}

impl CartSnapshot {
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&CartLedger> for CartSnapshot {
    fn from(ledger: &CartLedger) -> Self {
        CartSnapshot {
            items: ledger.items.clone(),
            total: ledger.total,
            total_items: ledger.total_items,
            revision: ledger.revision,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(id: u32, dollars: i64) -> Product {
        Product::new(id, format!("Plant {}", id), Money::from_dollars(dollars), "img")
    }

    fn ledger_with(id: u32, dollars: i64, quantity: i64) -> CartLedger {
        let mut item = LineItem::from_product(&plant(id, dollars));
        item.quantity = quantity;
        CartLedger::from_items(vec![item], DuplicateAddPolicy::AggregateOnly).unwrap()
    }

    #[test]
    fn test_add_to_empty_ledger() {
        let mut ledger = CartLedger::new();

        let transition = ledger.add(&plant(1, 15)).unwrap();

        assert_eq!(transition, Transition::Inserted);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(&ProductId::from(1)).unwrap().quantity, 1);
        assert_eq!(ledger.total(), Money::from_dollars(15));
        assert_eq!(ledger.total_items(), 1);
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_duplicate_add_diverges_aggregates() {
        let mut ledger = CartLedger::new();
        ledger.add(&plant(1, 15)).unwrap();

        let transition = ledger.add(&plant(1, 15)).unwrap();

        assert_eq!(transition, Transition::Accumulated);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(&ProductId::from(1)).unwrap().quantity, 1);
        assert_eq!(ledger.total(), Money::from_dollars(30));
        assert_eq!(ledger.total_items(), 2);
        assert_eq!(
            ledger.drift(),
            AggregateDrift {
                total: Money::from_dollars(15),
                total_items: 1,
            }
        );
    }

    #[test]
    fn test_duplicate_add_uses_payload_price() {
        let mut ledger = CartLedger::new();
        ledger.add(&plant(1, 15)).unwrap();
        ledger.add(&plant(1, 40)).unwrap();

        // The frozen line price is untouched, the aggregate takes the payload.
        assert_eq!(ledger.get(&ProductId::from(1)).unwrap().price, Money::from_dollars(15));
        assert_eq!(ledger.total(), Money::from_dollars(55));
    }

    #[test]
    fn test_duplicate_add_with_increment_policy() {
        let mut ledger = CartLedger::with_policy(DuplicateAddPolicy::Increment);
        ledger.add(&plant(1, 15)).unwrap();

        let transition = ledger.add(&plant(1, 40)).unwrap();

        assert_eq!(transition, Transition::Incremented);
        assert_eq!(ledger.get(&ProductId::from(1)).unwrap().quantity, 2);
        assert_eq!(ledger.total(), Money::from_dollars(30));
        assert_eq!(ledger.total_items(), 2);
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_increment() {
        let mut ledger = ledger_with(2, 10, 1);

        assert_eq!(ledger.increment(&ProductId::from(2)).unwrap(), Transition::Incremented);

        assert_eq!(ledger.get(&ProductId::from(2)).unwrap().quantity, 2);
        assert_eq!(ledger.total(), Money::from_dollars(20));
        assert_eq!(ledger.total_items(), 2);
    }

    #[test]
    fn test_decrement_at_floor_is_noop() {
        let mut ledger = ledger_with(3, 8, 1);
        let before = ledger.clone();

        assert_eq!(ledger.decrement(&ProductId::from(3)).unwrap(), Transition::AtFloor);

        assert_eq!(ledger, before);
        assert_eq!(ledger.snapshot(), before.snapshot());
    }

    #[test]
    fn test_decrement_above_floor() {
        let mut ledger = ledger_with(3, 8, 3);

        assert_eq!(ledger.decrement(&ProductId::from(3)).unwrap(), Transition::Decremented);
        assert_eq!(ledger.decrement(&ProductId::from(3)).unwrap(), Transition::Decremented);
        assert_eq!(ledger.decrement(&ProductId::from(3)).unwrap(), Transition::AtFloor);

        assert_eq!(ledger.get(&ProductId::from(3)).unwrap().quantity, 1);
        assert_eq!(ledger.total(), Money::from_dollars(8));
        assert_eq!(ledger.total_items(), 1);
    }

    #[test]
    fn test_remove() {
        let mut ledger = ledger_with(4, 20, 3);
        assert_eq!(ledger.total(), Money::from_dollars(60));

        assert_eq!(ledger.remove(&ProductId::from(4)).unwrap(), Transition::Removed);

        assert!(!ledger.contains(&ProductId::from(4)));
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), Money::zero());
        assert_eq!(ledger.total_items(), 0);
    }

    #[test]
    fn test_missing_item_operations_fail() {
        let mut ledger = ledger_with(1, 15, 2);
        let before = ledger.clone();
        let missing = ProductId::from("nonexistent");

        let expected = Err(LedgerError::ItemNotFound(missing.clone()));
        assert_eq!(ledger.increment(&missing), expected);
        assert_eq!(ledger.decrement(&missing), expected);
        assert_eq!(ledger.remove(&missing), expected);

        assert_eq!(ledger, before);
    }

    #[test]
    fn test_remove_twice_fails() {
        let mut ledger = ledger_with(4, 20, 1);
        ledger.remove(&ProductId::from(4)).unwrap();
        assert!(matches!(
            ledger.remove(&ProductId::from(4)),
            Err(LedgerError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut ledger = CartLedger::new();

        let negative = Product::new(1, "Monstera", Money::from_cents(-1), "");
        assert!(matches!(ledger.add(&negative), Err(LedgerError::InvalidInput(_))));

        let unnamed = Product::new(1, "  ", Money::from_dollars(1), "");
        assert!(matches!(ledger.add(&unnamed), Err(LedgerError::InvalidInput(_))));

        let blank_id = Product::new("", "Monstera", Money::from_dollars(1), "");
        assert!(matches!(ledger.add(&blank_id), Err(LedgerError::InvalidInput(_))));

        assert!(ledger.is_empty());
        assert_eq!(ledger.revision(), 0);
    }

    #[test]
    fn test_add_rejects_price_above_cap() {
        let mut ledger = CartLedger::new();
        let big = Product::new(1, "Big", Money::from_cents(i64::MAX / 2 + 1), "");

        assert!(matches!(ledger.add(&big), Err(LedgerError::InvalidInput(_))));
        assert!(ledger.is_empty());

        let capped = Product::new(1, "Big", crate::MAX_UNIT_PRICE, "");
        ledger.add(&capped).unwrap();
        ledger.add(&capped).unwrap();
        assert_eq!(ledger.total(), crate::MAX_UNIT_PRICE * 2);
    }

    #[test]
    fn test_total_overflow_leaves_ledger_unchanged() {
        let price = crate::MAX_UNIT_PRICE;
        let quantity = i64::MAX / price.cents();
        let mut item = LineItem::from_product(&Product::new(1, "Big", price, ""));
        item.quantity = quantity;
        let mut ledger =
            CartLedger::from_items(vec![item.clone()], DuplicateAddPolicy::AggregateOnly).unwrap();
        let before = ledger.clone();

        let total_overflow = LedgerError::InvalidInput(ValidationError::OutOfRange {
            field: "total".to_string(),
            min: 0,
            max: i64::MAX,
        });
        let rejected = Err(total_overflow.clone());
        assert_eq!(ledger.increment(&ProductId::from(1)), rejected);
        assert_eq!(ledger.add(&Product::new(1, "Big", price, "")), rejected);
        assert_eq!(ledger.add(&Product::new(2, "Other", price, "")), rejected);
        assert_eq!(ledger, before);

        // Still usable afterwards.
        ledger.decrement(&ProductId::from(1)).unwrap();
        ledger.increment(&ProductId::from(1)).unwrap();
        assert_eq!(ledger.get(&ProductId::from(1)).unwrap().quantity, quantity);

        item.quantity = quantity + 1;
        assert_eq!(
            CartLedger::from_items(vec![item], DuplicateAddPolicy::AggregateOnly).unwrap_err(),
            total_overflow
        );
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut ledger = CartLedger::new();
        for id in [5, 1, 3, 2] {
            ledger.add(&plant(id, 10)).unwrap();
        }

        ledger.remove(&ProductId::from(1)).unwrap();
        ledger.increment(&ProductId::from(2)).unwrap();
        ledger.add(&plant(1, 10)).unwrap();

        let order: Vec<_> = ledger.items().iter().map(|i| i.id.to_string()).collect();
        assert_eq!(order, ["5", "3", "2", "1"]);
    }

    #[test]
    fn test_revision_tracks_state_changes() {
        let mut ledger = CartLedger::new();
        assert_eq!(ledger.revision(), 0);

        ledger.add(&plant(1, 15)).unwrap();
        ledger.increment(&ProductId::from(1)).unwrap();
        assert_eq!(ledger.revision(), 2);

        ledger.decrement(&ProductId::from(1)).unwrap();
        ledger.decrement(&ProductId::from(1)).unwrap(); // floor
        let _ = ledger.increment(&ProductId::from(9)); // missing
        assert_eq!(ledger.revision(), 3);
    }

    #[test]
    fn test_drift_survives_other_operations() {
        let mut ledger = CartLedger::new();
        ledger.add(&plant(1, 15)).unwrap();
        ledger.add(&plant(1, 15)).unwrap();
        let drift = ledger.drift();

        ledger.increment(&ProductId::from(1)).unwrap();
        assert_eq!(ledger.drift(), drift);
        ledger.decrement(&ProductId::from(1)).unwrap();
        assert_eq!(ledger.drift(), drift);
        ledger.remove(&ProductId::from(1)).unwrap();
        assert_eq!(ledger.drift(), drift);

        // Empty cart, but the aggregates still carry the duplicate unit.
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), Money::from_dollars(15));
        assert_eq!(ledger.total_items(), 1);

        ledger.reset();
        assert!(ledger.is_consistent());
        assert_eq!(ledger.total(), Money::zero());
    }

    #[test]
    fn test_reset_keeps_policy() {
        let mut ledger = CartLedger::with_policy(DuplicateAddPolicy::Increment);
        ledger.add(&plant(1, 15)).unwrap();

        assert_eq!(ledger.reset(), Transition::Reset);
        assert!(ledger.is_empty());
        assert_eq!(ledger.policy(), DuplicateAddPolicy::Increment);
        assert_eq!(ledger.revision(), 2);
    }

    #[test]
    fn test_from_items_rejects_bad_lines() {
        let mut zero = LineItem::from_product(&plant(1, 15));
        zero.quantity = 0;
        assert!(CartLedger::from_items(vec![zero], DuplicateAddPolicy::default()).is_err());

        let item = LineItem::from_product(&plant(1, 15));
        let result = CartLedger::from_items(vec![item.clone(), item], DuplicateAddPolicy::default());
        assert!(matches!(
            result,
            Err(LedgerError::InvalidInput(ValidationError::Duplicate { .. }))
        ));
    }

    /// Drives a long deterministic mix of operations over a few products and
    /// checks the invariants after every step: quantities stay >= 1, and the
    /// drift equals exactly what the duplicate adds so far account for.
    #[test]
    fn test_invariants_over_operation_sequence() {
        let products: Vec<Product> = [(1, 15), (2, 10), (3, 12), (4, 8)]
            .into_iter()
            .map(|(id, dollars)| plant(id, dollars))
            .collect();

        let mut ledger = CartLedger::new();
        let mut expected_drift = AggregateDrift::default();
        let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;

        for _ in 0..2000 {
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let product = &products[((seed >> 33) % products.len() as u64) as usize];
            let present = ledger.contains(&product.id);

            match (seed >> 40) % 4 {
                0 => {
                    if present {
                        expected_drift.total += product.price;
                        expected_drift.total_items += 1;
                    }
                    ledger.add(product).unwrap();
                }
                1 => assert_eq!(ledger.increment(&product.id).is_ok(), present),
                2 => {
                    let before = ledger.clone();
                    match ledger.decrement(&product.id) {
                        Ok(Transition::AtFloor) => assert_eq!(ledger, before),
                        Ok(_) => assert!(present),
                        Err(_) => assert!(!present),
                    }
                }
                _ => assert_eq!(ledger.remove(&product.id).is_ok(), present),
            }

            assert!(ledger.items().iter().all(|i| i.quantity >= 1));
            assert_eq!(ledger.drift(), expected_drift);
        }
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut ledger = CartLedger::new();
        ledger.add(&plant(1, 15)).unwrap();

        let json = serde_json::to_value(ledger.snapshot()).unwrap();
        assert_eq!(json["total"], 1500);
        assert_eq!(json["totalItems"], 1);
        assert_eq!(json["revision"], 1);
        assert_eq!(json["items"][0]["quantity"], 1);

        let back: CartSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, ledger.snapshot());
    }
}
