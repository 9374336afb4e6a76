//! # Cart Commands
//!
//! The inbound command interface of the ledger. Commands are plain data so
//! they can be queued, logged and sent across a UI boundary as JSON:
//!
//! ```json
//! { "type": "add", "product_id": "1", "price": 1500, "name": "Monstera", "image": "..." }
//! { "type": "increment", "product_id": "1" }
//! { "type": "decrement", "product_id": "1" }
//! { "type": "remove", "product_id": "1" }
//! { "type": "reset" }
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::LedgerResult;
use crate::ledger::{CartLedger, Transition};
use crate::money::Money;
use crate::types::{Product, ProductId};

/// One cart mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartCommand {
    Add {
        product_id: ProductId,
        price: Money,
        name: String,
        image: String,
    },
    Increment {
        product_id: ProductId,
    },
    Decrement {
        product_id: ProductId,
    },
    Remove {
        product_id: ProductId,
    },
    Reset,
}

impl CartCommand {
    /// Builds an add command from a catalog product.
    pub fn add(product: &Product) -> Self {
        CartCommand::Add {
            product_id: product.id.clone(),
            price: product.price,
            name: product.name.clone(),
            image: product.image.clone(),
        }
    }

    pub fn increment(product_id: impl Into<ProductId>) -> Self {
        CartCommand::Increment {
            product_id: product_id.into(),
        }
    }

    pub fn decrement(product_id: impl Into<ProductId>) -> Self {
        CartCommand::Decrement {
            product_id: product_id.into(),
        }
    }

    pub fn remove(product_id: impl Into<ProductId>) -> Self {
        CartCommand::Remove {
            product_id: product_id.into(),
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CartCommand::Add { .. } => "add",
            CartCommand::Increment { .. } => "increment",
            CartCommand::Decrement { .. } => "decrement",
            CartCommand::Remove { .. } => "remove",
            CartCommand::Reset => "reset",
        }
    }

    /// The targeted product, if the command has one.
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            CartCommand::Add { product_id, .. }
            | CartCommand::Increment { product_id }
            | CartCommand::Decrement { product_id }
            | CartCommand::Remove { product_id } => Some(product_id),
            CartCommand::Reset => None,
        }
    }

    /// Runs the command against a ledger.
    pub fn apply(&self, ledger: &mut CartLedger) -> LedgerResult<Transition> {
        match self {
            CartCommand::Add {
                product_id,
                price,
                name,
                image,
            } => {
                let product = Product::new(product_id.clone(), name.clone(), *price, image.clone());
                ledger.add(&product)
            }
            CartCommand::Increment { product_id } => ledger.increment(product_id),
            CartCommand::Decrement { product_id } => ledger.decrement(product_id),
            CartCommand::Remove { product_id } => ledger.remove(product_id),
            CartCommand::Reset => Ok(ledger.reset()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::LedgerError;

    #[test]
    fn test_commands_apply_in_order() {
        let catalog = Catalog::plants();
        let monstera = catalog.get(&ProductId::from(1)).unwrap();
        let cactus = catalog.get(&ProductId::from(2)).unwrap();

        let commands = [
            CartCommand::add(monstera),
            CartCommand::add(cactus),
            CartCommand::increment(2),
            CartCommand::decrement(1),
            CartCommand::remove(1),
        ];

        let mut ledger = CartLedger::new();
        let transitions: Vec<_> = commands
            .iter()
            .map(|c| c.apply(&mut ledger).unwrap())
            .collect();

        assert_eq!(
            transitions,
            [
                Transition::Inserted,
                Transition::Inserted,
                Transition::Incremented,
                Transition::AtFloor,
                Transition::Removed,
            ]
        );
        assert_eq!(ledger.total(), Money::from_dollars(20));
        assert_eq!(ledger.total_items(), 2);
    }

    #[test]
    fn test_increment_unknown_product() {
        let mut ledger = CartLedger::new();
        let result = CartCommand::increment("nonexistent").apply(&mut ledger);
        assert_eq!(
            result,
            Err(LedgerError::ItemNotFound(ProductId::from("nonexistent")))
        );
    }

    #[test]
    fn test_command_json_shape() {
        let json = serde_json::to_value(CartCommand::increment(3)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "increment", "product_id": "3" }));

        let parsed: CartCommand = serde_json::from_str(
            r#"{ "type": "add", "product_id": "6", "price": 2500, "name": "Orquídea", "image": "" }"#,
        )
        .unwrap();
        assert_eq!(parsed.kind(), "add");
        assert_eq!(parsed.product_id(), Some(&ProductId::from(6)));

        let reset: CartCommand = serde_json::from_str(r#"{ "type": "reset" }"#).unwrap();
        assert_eq!(reset, CartCommand::Reset);
        assert!(reset.product_id().is_none());
    }
}
