use crate::clients::BookClient;
use crate::config::InventoryConfig;
use crate::framework::{FrameworkError, SharedStore};
use crate::model::Book;
use crate::store::HttpStore;
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the book inventory.
///
/// `InventorySystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the book synchronizer
/// - **Dependency Wiring**: Injecting the backing store into the actor at `run()`
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::new(&InventoryConfig::from_env()?)?;
///
/// let rows = system.book_client.refresh().await?;
/// let rows = system.book_client.add_book(book).await?;
///
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Client for the book grid and the add-book form
    pub book_client: BookClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    /// Starts the book synchronizer against the HTTP store at `config.store_url`.
    ///
    /// Nothing is fetched yet; call `refresh` for the first snapshot.
    pub fn new(config: &InventoryConfig) -> Result<Self, FrameworkError> {
        let store = HttpStore::<Book>::new(config)?;
        info!(url = %config.store_url, "Using HTTP store");
        Ok(Self::with_store(Arc::new(store), config.mailbox_capacity))
    }

    /// Starts the book synchronizer against any backing store.
    pub fn with_store(store: SharedStore<Book>, mailbox_capacity: usize) -> Self {
        let (book_actor, book_client) = crate::book_actor::new(mailbox_capacity);
        let book_handle = tokio::spawn(book_actor.run(store));

        Self {
            book_client,
            handles: vec![book_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the mailbox; the actor finishes the requests already
    /// queued and exits. Clones of the client held elsewhere keep it alive until they
    /// are dropped too.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.book_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
