//! Place Order Use Case
//!
//! Creates a finalized order record. The seller is denormalized from the
//! product's current owner and the buyer's contact details are captured
//! as an immutable snapshot.

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use catalog::domain::repository::ProductRepository;
use kernel::id::{ProductId, UserId};

use crate::domain::entities::{BuyerContact, Order};
use crate::domain::repository::OrderRepository;
use crate::domain::value_objects::PaymentMethod;
use crate::error::{TradeError, TradeResult};

/// Place order input
pub struct PlaceOrderInput {
    pub product_id: ProductId,
    pub payment_method: PaymentMethod,
    pub transaction_id: Option<String>,
}

/// Place order use case
pub struct PlaceOrderUseCase<P, U, O>
where
    P: ProductRepository,
    U: UserRepository,
    O: OrderRepository,
{
    products: Arc<P>,
    users: Arc<U>,
    orders: Arc<O>,
}

impl<P, U, O> PlaceOrderUseCase<P, U, O>
where
    P: ProductRepository,
    U: UserRepository,
    O: OrderRepository,
{
    pub fn new(products: Arc<P>, users: Arc<U>, orders: Arc<O>) -> Self {
        Self {
            products,
            users,
            orders,
        }
    }

    pub async fn execute(&self, buyer_id: UserId, input: PlaceOrderInput) -> TradeResult<Order> {
        let product = self
            .products
            .find_by_id(&input.product_id)
            .await?
            .ok_or(TradeError::ProductNotFound)?;

        if product.owner_id == buyer_id {
            return Err(TradeError::SelfDealing);
        }

        // Blank counts as missing
        let transaction_id = input
            .transaction_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        if input.payment_method.requires_transaction_id() && transaction_id.is_none() {
            return Err(TradeError::MissingTransactionId);
        }

        // Snapshot the buyer's contact details as they are right now
        let buyer = self
            .users
            .find_by_id(&buyer_id)
            .await?
            .ok_or(TradeError::BuyerNotFound)?;

        let buyer_contact = BuyerContact {
            name: buyer.name,
            email: buyer.email.as_str().to_string(),
            phone: buyer.phone.as_str().to_string(),
        };

        let order = Order::new(
            product.product_id,
            buyer_id,
            product.owner_id,
            input.payment_method,
            transaction_id,
            buyer_contact,
        );

        self.orders.create(&order).await?;

        tracing::info!(
            order_id = %order.order_id,
            product_id = %order.product_id,
            buyer_id = %buyer_id,
            seller_id = %order.seller_id,
            payment_method = %order.payment_method,
            "Order placed"
        );

        Ok(order)
    }
}
