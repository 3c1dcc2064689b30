use crate::clients::ProductClient;
use crate::use_case::ProductUseCase;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Runtime orchestrator for the inventory service.
///
/// `InventorySystem` owns the running product actor:
/// - **Lifecycle Management**: spawns the actor and joins it on shutdown
/// - **Wiring**: hands out [`ProductClient`]s and the use case the HTTP layer needs
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::new(32);
/// let app = handler::product_routes(system.use_case());
///
/// // ... serve `app` ...
///
/// drop(app);
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    handles: Vec<JoinHandle<()>>,
}

impl InventorySystem {
    /// Spawns the product actor with a request channel of `buffer_size` slots.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(buffer_size: usize) -> Self {
        let (product_actor, product_client) = crate::product_actor::new(buffer_size);

        // Products need no injected dependencies (Context = ())
        let product_handle = tokio::spawn(product_actor.run(()));
        info!(buffer_size, "Inventory system started");

        Self {
            product_client: ProductClient::new(product_client),
            handles: vec![product_handle],
        }
    }

    /// The product use case backed by this system's actor.
    pub fn use_case(&self) -> Arc<dyn ProductUseCase> {
        Arc::new(self.product_client.clone())
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops this system's client and waits for the actor task to finish. The
    /// actor only stops once *every* client clone is gone, so routers and use
    /// cases obtained from [`use_case`](Self::use_case) must be dropped first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Closing the last sender makes the actor's receiver return None.
        drop(self.product_client);

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
