use salvo::async_trait;

use crate::error::AppResult;
use kunai_core::error::CoreError;
use kunai_store::DavStore;

pub struct StoreHandler {
    pub store: DavStore,
}

#[async_trait]
impl salvo::Handler for StoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        // Insert a handle to the store into the depot
        depot.inject(self.store.clone());
    }
}

/// ## Summary
/// Retrieves the resource store from the depot.
///
/// ## Errors
/// Returns an error if the store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<DavStore> {
    depot
        .obtain::<DavStore>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Resource store not found in depot").into())
}
