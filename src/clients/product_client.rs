use crate::model::{Product, ProductCreate, ProductId, ProductQuantityUpdate, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use crate::repositories::ProductsRepository;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Adds a product to the catalog. Names are unique.
    ///
    /// # Errors
    ///
    /// - [`ProductError::NameTaken`] if the name is already in the catalog
    /// - [`ProductError::InvalidPrice`] for a negative price
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        if self.find_by_name(&params.name).await?.is_some() {
            return Err(ProductError::NameTaken(params.name));
        }
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Changes price and/or stock.
    ///
    /// With `expected_version` set the update fails with
    /// [`ProductError::StockConflict`] if the product moved on since.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Looks the product up by exact name.
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Product>, ProductError> {
        let products = self.list().await?;
        Ok(products.into_iter().find(|product| product.name == name))
    }

    /// Current stock level, read through the `CheckStock` action.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(quantity) => Ok(quantity),
            other => Err(ProductError::ActorCommunicationError(format!(
                "unexpected result for CheckStock: {other:?}"
            ))),
        }
    }

    /// Adds `units` to the stock and returns the new level.
    #[instrument(skip(self))]
    pub async fn restock(&self, id: ProductId, units: u32) -> Result<u32, ProductError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::Restock(units))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::Restock(quantity) => Ok(quantity),
            other => Err(ProductError::ActorCommunicationError(format!(
                "unexpected result for Restock: {other:?}"
            ))),
        }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<ProductError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => ProductError::NotFound(id),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl ProductsRepository for ProductClient {
    #[instrument(skip(self))]
    async fn find_all_by_id(&self, ids: Vec<ProductId>) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner.get_many(ids).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn update_quantity(
        &self,
        updates: Vec<ProductQuantityUpdate>,
    ) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        let updates = updates.into_iter().map(Into::into).collect();
        self.inner.update_many(updates).await.map_err(Self::map_error)
    }
}
