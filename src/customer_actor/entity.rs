//! [`ActorEntity`] implementation for [`Customer`].

use super::error::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn validate_name(name: &str) -> Result<(), CustomerError> {
    if name.trim().is_empty() {
        return Err(CustomerError::ValidationError("name must not be empty".into()));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), CustomerError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(CustomerError::ValidationError(format!(
            "invalid email address: {email}"
        ))),
    }
}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        validate_name(&params.name)?;
        validate_email(&params.email)?;
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
        })
    }

    /// Validates every field before touching any of them.
    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(email) = &update.email {
            validate_email(email)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, email: &str) -> Result<Customer, CustomerError> {
        Customer::from_create_params(
            CustomerId(1),
            CustomerCreate {
                name: name.to_string(),
                email: email.to_string(),
            },
        )
    }

    #[test]
    fn test_create_validates_fields() {
        assert!(create("Alice", "alice@example.com").is_ok());
        assert!(matches!(
            create(" ", "alice@example.com"),
            Err(CustomerError::ValidationError(_))
        ));
        assert!(matches!(
            create("Alice", "alice.example.com"),
            Err(CustomerError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_rejected_update_leaves_customer_untouched() {
        let mut customer = create("Alice", "alice@example.com").unwrap();
        let update = CustomerUpdate {
            name: Some("Alicia".into()),
            email: Some("broken".into()),
        };
        assert!(customer.on_update(update, &()).await.is_err());
        assert_eq!(customer.name, "Alice");
    }
}
