use tracing::{info, warn};

use crate::api::orders::UpdateRiderInfoRequest;
use crate::api::ApiClient;
use crate::error::AdminError;
use crate::models::order::{Order, OrderStatus};
use crate::observability::metrics::Metrics;
use crate::sync::optimistic::OptimisticMirror;

/// Delivery-status mutations over an order mirror. The new status is shown
/// immediately; the PATCH runs afterwards. A failed request reverts the
/// exact staged record, then pulls the authoritative order detail so the
/// mirror cannot drift.
pub struct DeliveryFlow {
    api: ApiClient,
    metrics: Metrics,
    pub orders: OptimisticMirror<Order>,
}

impl DeliveryFlow {
    pub fn new(api: ApiClient, metrics: Metrics) -> Self {
        Self {
            api,
            metrics,
            orders: OptimisticMirror::default(),
        }
    }

    pub fn load(&mut self, orders: Vec<Order>) {
        self.orders.reconcile(orders);
    }

    /// "Start Delivery" / "Mark Delivered": one step forward on the linear
    /// path.
    pub async fn advance(&mut self, token: &str, order_id: &str) -> Result<OrderStatus, AdminError> {
        let current = self.current_status(order_id)?;
        let target = current.next().ok_or_else(|| AdminError::InvalidTransition {
            from: current.as_str().to_string(),
            to: current.as_str().to_string(),
        })?;

        self.transition(token, order_id, current, target).await
    }

    /// Cancellation is legal from any non-terminal state.
    pub async fn cancel(&mut self, token: &str, order_id: &str) -> Result<OrderStatus, AdminError> {
        let current = self.current_status(order_id)?;
        self.transition(token, order_id, current, OrderStatus::Cancelled)
            .await
    }

    fn current_status(&self, order_id: &str) -> Result<OrderStatus, AdminError> {
        self.orders
            .get(order_id)
            .map(|order| order.rider_delivery_status)
            .ok_or_else(|| AdminError::NotFound(format!("order {order_id}")))
    }

    async fn transition(
        &mut self,
        token: &str,
        order_id: &str,
        current: OrderStatus,
        target: OrderStatus,
    ) -> Result<OrderStatus, AdminError> {
        // illegal transitions are rejected before any network call
        current.validate_transition(target)?;

        let ticket = self
            .orders
            .stage(order_id, |order| order.rider_delivery_status = target)?;

        let request = UpdateRiderInfoRequest {
            order_id: order_id.to_string(),
            rider_delivery_status: target,
        };

        match self.api.update_rider_info(token, &request).await {
            Ok(confirmed) => {
                self.orders.commit(ticket, Some(confirmed));
                info!(order_id, status = target.as_str(), "delivery status updated");
                Ok(target)
            }
            Err(err) => {
                self.orders.rollback(ticket);
                self.metrics
                    .optimistic_rollbacks_total
                    .with_label_values(&["delivery"])
                    .inc();
                warn!(order_id, error = %err, "delivery update failed, reverted");

                // resync from the source of truth; the original failure is
                // what the caller sees either way
                if let Ok(fresh) = self.api.order_detail(token, order_id).await {
                    self.orders.replace(fresh);
                }

                Err(err)
            }
        }
    }
}
