use std::sync::Arc;

use medboard_engine::{Effect, Msg};
use tokio::sync::mpsc::UnboundedSender;

use crate::Backend;

/// Executes controller effects in the background.
///
/// Every request effect becomes one spawned task; its completion comes back
/// as `Msg::Completed` on the channel. Nothing is cancelled or reordered, so
/// completions arrive in network order, not issue order.
#[derive(Clone)]
pub struct Dispatcher {
    backend: Arc<dyn Backend>,
    tx: UnboundedSender<Msg>,
}

impl Dispatcher {
    pub fn new(backend: Arc<dyn Backend>, tx: UnboundedSender<Msg>) -> Self {
        Self { backend, tx }
    }

    /// Must be called from within a tokio runtime
    pub fn dispatch(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Request { id, spec } => {
                    let backend = Arc::clone(&self.backend);
                    let tx = self.tx.clone();
                    tokio::spawn(async move {
                        let outcome = backend.execute(&spec).await.map_err(|e| e.to_string());
                        // Receiver gone means the UI has quit
                        let _ = tx.send(Msg::Completed {
                            id,
                            operation: spec.operation,
                            outcome,
                        });
                    });
                }
                Effect::ScheduleDebounce { generation, delay } => {
                    let tx = self.tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        let _ = tx.send(Msg::DebounceElapsed(generation));
                    });
                }
            }
        }
    }
}
