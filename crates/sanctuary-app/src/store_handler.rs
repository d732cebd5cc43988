use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use sanctuary_core::error::CoreError;
use sanctuary_service::store::EventStore;

pub struct StoreHandler<T: EventStore + Clone> {
    pub store: T,
}

#[async_trait]
impl<T: EventStore + Clone + 'static> salvo::Handler for StoreHandler<T> {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        // Clones share the underlying store
        let store: Arc<dyn EventStore> = Arc::new(self.store.clone());
        depot.inject(store);
    }
}

/// ## Summary
/// Retrieves the event store from the depot.
///
/// ## Errors
/// Returns an error if the event store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn EventStore>> {
    depot
        .obtain::<Arc<dyn EventStore>>()
        .cloned()
        .map_err(|_err| CoreError::MissingFromDepot("Event store").into())
}
