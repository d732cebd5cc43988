use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use sanctuary_core::clock::Clock;
use sanctuary_core::error::CoreError;

/// Injects the time source used for default windows and event timestamps.
pub struct ClockHandler {
    pub clock: Arc<dyn Clock>,
}

#[async_trait]
impl salvo::Handler for ClockHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.clock));
    }
}

/// ## Summary
/// Retrieves the clock from the depot.
///
/// ## Errors
/// Returns an error if no clock was injected.
pub fn get_clock_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn Clock>> {
    depot
        .obtain::<Arc<dyn Clock>>()
        .cloned()
        .map_err(|_err| CoreError::MissingFromDepot("Clock").into())
}
