//! # Cart State
//!
//! Owns the session's cart ledger inside a single dispatcher task.
//!
//! ## Ownership Model
//! Nothing outside the dispatcher can touch the ledger. Writers send
//! commands over a bounded queue and await the reply; readers hold a
//! [`CartSubscription`] that only ever sees whole snapshots published
//! after a mutation completed.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Dispatch                                        │
//! │                                                                         │
//! │  CartHandle (clone per caller)        CartDispatcher (one task)         │
//! │  ─────────────────────────────        ─────────────────────────         │
//! │                                                                         │
//! │  add / increment / ... ──► mpsc ───► recv ──► command.apply(&mut ledger)│
//! │          ▲                                        │                     │
//! │          └────────── oneshot reply ◄──────────────┤                     │
//! │                                                   ▼                     │
//! │  CartSubscription ◄────────── watch ◄──── publish snapshot              │
//! │  (current / changed)                      (skipped on no-op/failure)    │
//! │                                                                         │
//! │  Commands are applied strictly in queue order, one at a time.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use greenlife_core::{CartCommand, CartLedger, CartSnapshot, Product, ProductId};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use crate::error::DispatchError;

type Reply = oneshot::Sender<Result<CartSnapshot, DispatchError>>;

/// Messages accepted by the dispatcher loop.
#[derive(Debug)]
enum DispatcherMessage {
    /// Apply a command and reply with the resulting snapshot.
    Command { command: CartCommand, reply: Reply },
    /// Stop after the commands already queued.
    Shutdown,
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Single owner of a [`CartLedger`].
pub struct CartDispatcher {
    ledger: CartLedger,
    snapshot_tx: watch::Sender<CartSnapshot>,
}

impl CartDispatcher {
    pub fn new(ledger: CartLedger) -> Self {
        let (snapshot_tx, _) = watch::channel(ledger.snapshot());
        CartDispatcher {
            ledger,
            snapshot_tx,
        }
    }

    /// Spawns the dispatcher task and returns a handle to it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(self, queue_capacity: usize) -> CartHandle {
        let (cmd_tx, cmd_rx) = mpsc::channel(queue_capacity.max(1));
        let snapshot_rx = self.snapshot_tx.subscribe();

        tokio::spawn(self.run(cmd_rx));

        CartHandle {
            cmd_tx,
            snapshot_rx,
        }
    }

    /// Main dispatcher loop. Ends on `Shutdown` or when every handle is gone.
    async fn run(mut self, mut cmd_rx: mpsc::Receiver<DispatcherMessage>) {
        info!(policy = %self.ledger.policy(), "Cart dispatcher started");

        while let Some(message) = cmd_rx.recv().await {
            match message {
                DispatcherMessage::Command { command, reply } => {
                    let result = self.handle(&command);
                    // The caller may have given up waiting; the command still applied.
                    let _ = reply.send(result);
                }
                DispatcherMessage::Shutdown => break,
            }
        }

        info!(
            revision = self.ledger.revision(),
            lines = self.ledger.len(),
            "Cart dispatcher stopped"
        );
    }

    fn handle(&mut self, command: &CartCommand) -> Result<CartSnapshot, DispatchError> {
        let product_id = command.product_id().map(ProductId::as_str).unwrap_or("-");

        match command.apply(&mut self.ledger) {
            Ok(transition) => {
                debug!(
                    command = command.kind(),
                    product_id,
                    ?transition,
                    revision = self.ledger.revision(),
                    "Cart command applied"
                );

                if transition.is_noop() {
                    return Ok(self.snapshot_tx.borrow().clone());
                }

                let snapshot = self.ledger.snapshot();
                self.snapshot_tx.send_replace(snapshot.clone());
                Ok(snapshot)
            }
            Err(e) => {
                warn!(command = command.kind(), product_id, error = %e, "Cart command rejected");
                Err(e.into())
            }
        }
    }
}

// =============================================================================
// Handle
// =============================================================================

/// Cloneable sender side of a running dispatcher.
#[derive(Debug, Clone)]
pub struct CartHandle {
    cmd_tx: mpsc::Sender<DispatcherMessage>,
    snapshot_rx: watch::Receiver<CartSnapshot>,
}

impl CartHandle {
    /// Queues a command and waits for the resulting snapshot.
    pub async fn dispatch(&self, command: CartCommand) -> Result<CartSnapshot, DispatchError> {
        let (reply, response) = oneshot::channel();

        self.cmd_tx
            .send(DispatcherMessage::Command { command, reply })
            .await
            .map_err(|_| DispatchError::Stopped)?;

        response.await.map_err(|_| DispatchError::Stopped)?
    }

    pub async fn add(&self, product: &Product) -> Result<CartSnapshot, DispatchError> {
        self.dispatch(CartCommand::add(product)).await
    }

    pub async fn increment(&self, id: &ProductId) -> Result<CartSnapshot, DispatchError> {
        self.dispatch(CartCommand::increment(id.clone())).await
    }

    pub async fn decrement(&self, id: &ProductId) -> Result<CartSnapshot, DispatchError> {
        self.dispatch(CartCommand::decrement(id.clone())).await
    }

    pub async fn remove(&self, id: &ProductId) -> Result<CartSnapshot, DispatchError> {
        self.dispatch(CartCommand::remove(id.clone())).await
    }

    pub async fn reset(&self) -> Result<CartSnapshot, DispatchError> {
        self.dispatch(CartCommand::Reset).await
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> CartSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Subscribes to future snapshots. The current one counts as seen.
    pub fn subscribe(&self) -> CartSubscription {
        let mut rx = self.snapshot_rx.clone();
        let _ = rx.borrow_and_update();
        CartSubscription { rx }
    }

    /// Asks the dispatcher to stop after the commands already queued.
    pub async fn shutdown(&self) -> Result<(), DispatchError> {
        self.cmd_tx
            .send(DispatcherMessage::Shutdown)
            .await
            .map_err(|_| DispatchError::Stopped)
    }

    /// True once the dispatcher task has exited.
    pub fn is_stopped(&self) -> bool {
        self.cmd_tx.is_closed()
    }
}

// =============================================================================
// Subscription
// =============================================================================

/// Read-only observer of cart snapshots.
#[derive(Debug, Clone)]
pub struct CartSubscription {
    rx: watch::Receiver<CartSnapshot>,
}

impl CartSubscription {
    /// Latest snapshot, without marking it seen.
    pub fn current(&self) -> CartSnapshot {
        self.rx.borrow().clone()
    }

    /// Waits for a snapshot newer than the last one seen.
    ///
    /// Intermediate snapshots may be skipped; the newest always arrives.
    /// Returns `None` once the dispatcher has stopped.
    pub async fn changed(&mut self) -> Option<CartSnapshot> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenlife_core::{Catalog, DuplicateAddPolicy, LedgerError, Money};

    fn start() -> CartHandle {
        CartDispatcher::new(CartLedger::new()).start(8)
    }

    fn plant(id: u32) -> Product {
        Catalog::plants().get(&ProductId::from(id)).cloned().unwrap()
    }

    #[tokio::test]
    async fn test_dispatch_add_and_increment() {
        let cart = start();

        let snapshot = cart.add(&plant(1)).await.unwrap();
        assert_eq!(snapshot.total, Money::from_dollars(15));
        assert_eq!(snapshot.total_items, 1);

        let snapshot = cart.increment(&ProductId::from(1)).await.unwrap();
        assert_eq!(snapshot.items[0].quantity, 2);
        assert_eq!(snapshot.total, Money::from_dollars(30));
        assert_eq!(cart.snapshot(), snapshot);
    }

    #[tokio::test]
    async fn test_duplicate_add_through_dispatcher() {
        let cart = start();
        cart.add(&plant(1)).await.unwrap();

        let snapshot = cart.add(&plant(1)).await.unwrap();
        assert_eq!(snapshot.items[0].quantity, 1);
        assert_eq!(snapshot.total, Money::from_dollars(30));
        assert_eq!(snapshot.total_items, 2);
    }

    #[tokio::test]
    async fn test_policy_is_carried_by_ledger() {
        let cart = CartDispatcher::new(CartLedger::with_policy(DuplicateAddPolicy::Increment)).start(8);
        cart.add(&plant(1)).await.unwrap();

        let snapshot = cart.add(&plant(1)).await.unwrap();
        assert_eq!(snapshot.items[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_missing_item_is_reported() {
        let cart = start();
        let err = cart.increment(&ProductId::from("nonexistent")).await.unwrap_err();
        assert_eq!(
            err,
            DispatchError::Ledger(LedgerError::ItemNotFound(ProductId::from("nonexistent")))
        );
        assert_eq!(cart.snapshot().revision, 0);
    }

    #[tokio::test]
    async fn test_rejected_price_keeps_dispatcher_running() {
        let cart = start();
        let oversized = CartCommand::Add {
            product_id: ProductId::from(7),
            price: Money::from_cents(i64::MAX / 2 + 1),
            name: "Baobab".to_string(),
            image: String::new(),
        };

        for _ in 0..2 {
            let err = cart.dispatch(oversized.clone()).await.unwrap_err();
            assert!(matches!(err, DispatchError::Ledger(LedgerError::InvalidInput(_))));
        }

        let snapshot = cart.add(&plant(1)).await.unwrap();
        assert_eq!(snapshot.revision, 1);
        assert!(!cart.is_stopped());
    }

    #[tokio::test]
    async fn test_subscription_sees_mutations_not_noops() {
        let cart = start();
        let mut subscription = cart.subscribe();

        cart.add(&plant(3)).await.unwrap();
        let seen = subscription.changed().await.unwrap();
        assert_eq!(seen.revision, 1);

        // Decrement at quantity 1 publishes nothing.
        let unchanged = cart.decrement(&ProductId::from(3)).await.unwrap();
        assert_eq!(unchanged, seen);

        cart.remove(&ProductId::from(3)).await.unwrap();
        let seen = subscription.changed().await.unwrap();
        assert_eq!(seen.revision, 2);
        assert!(seen.is_empty());
    }

    #[tokio::test]
    async fn test_commands_apply_in_delivery_order() {
        let cart = start();
        let catalog = Catalog::plants();

        let mut tasks = Vec::new();
        for product in catalog.iter().cloned() {
            let cart = cart.clone();
            tasks.push(tokio::spawn(async move { cart.add(&product).await }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let snapshot = cart.snapshot();
        assert_eq!(snapshot.line_count(), catalog.len());
        assert_eq!(snapshot.total_items, catalog.len() as i64);
        assert_eq!(snapshot.revision, catalog.len() as u64);
        let expected: Money = catalog.iter().map(|p| p.price).sum();
        assert_eq!(snapshot.total, expected);
    }

    #[tokio::test]
    async fn test_shutdown_stops_dispatcher() {
        let cart = start();
        let mut subscription = cart.subscribe();
        cart.add(&plant(2)).await.unwrap();

        cart.shutdown().await.unwrap();

        assert_eq!(cart.reset().await, Err(DispatchError::Stopped));
        // The last published snapshot stays readable.
        assert_eq!(cart.snapshot().total_items, 1);
        assert_eq!(subscription.changed().await.map(|s| s.revision), Some(1));
        assert!(subscription.changed().await.is_none());
        assert!(cart.is_stopped());
    }
}
