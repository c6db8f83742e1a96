use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use crate::repositories::CustomersRepository;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    /// Registers a customer. Email addresses are unique.
    ///
    /// # Errors
    ///
    /// - [`CustomerError::EmailTaken`] if another customer uses the address
    /// - [`CustomerError::ValidationError`] for an empty name or malformed email
    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<CustomerId, CustomerError> {
        if self.find_by_email(&params.email).await?.is_some() {
            return Err(CustomerError::EmailTaken(params.email));
        }
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Changes name and/or email. Nothing changes unless every given field is
    /// valid.
    ///
    /// # Returns
    ///
    /// The customer as stored after the update.
    #[instrument(skip(self))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Looks the customer up by exact email address.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CustomerError> {
        let customers = self.list().await?;
        Ok(customers.into_iter().find(|customer| customer.email == email))
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<CustomerError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => CustomerError::NotFound(id),
            Err(other) => CustomerError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl CustomersRepository for CustomerClient {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError> {
        self.get(id).await
    }
}
