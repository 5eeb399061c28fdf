use std::sync::Arc;

use tracing::{info, warn};

use crate::api::orders::AssignStaffRequest;
use crate::api::ApiClient;
use crate::error::AdminError;
use crate::models::assignment::DraftAssignment;
use crate::models::order::Order;
use crate::models::rider::Rider;
use crate::observability::metrics::Metrics;
use crate::store::drafts::DraftStore;
use crate::sync::optimistic::OptimisticMirror;

/// Putting a rider on an order happens in two steps: picking a rider writes
/// a persisted draft (it survives reloads), saving commits it server-side.
/// A committed draft is removed; a failed save keeps it for retry.
pub struct RiderAssignmentFlow {
    api: ApiClient,
    drafts: Arc<DraftStore>,
    metrics: Metrics,
}

impl RiderAssignmentFlow {
    pub fn new(api: ApiClient, drafts: Arc<DraftStore>, metrics: Metrics) -> Self {
        Self {
            api,
            drafts,
            metrics,
        }
    }

    /// Riders eligible for an order: active, POI-approved, not deleted and
    /// serving the customer's pincode.
    pub fn candidates<'a>(&self, riders: &'a [Rider], order: &Order) -> Vec<&'a Rider> {
        riders
            .iter()
            .filter(|rider| rider.is_assignable() && rider.serves_pincode(&order.customer.pincode))
            .collect()
    }

    pub fn select_rider(&self, order: &Order, rider: &Rider) -> Result<DraftAssignment, AdminError> {
        if !rider.is_assignable() {
            return Err(AdminError::Api(format!(
                "rider {} cannot take orders",
                rider.name
            )));
        }
        if !rider.serves_pincode(&order.customer.pincode) {
            return Err(AdminError::Api(format!(
                "rider {} does not serve pincode {}",
                rider.name, order.customer.pincode
            )));
        }

        let draft = self.drafts.add(&order.id, rider.snapshot())?;
        self.metrics.draft_assignments.set(self.drafts.len() as i64);
        Ok(draft)
    }

    pub fn draft(&self, order_id: &str) -> Option<DraftAssignment> {
        self.drafts.get(order_id)
    }

    /// Drop the draft without touching the server.
    pub fn discard(&self, order_id: &str) -> Result<(), AdminError> {
        self.drafts.remove(order_id)?;
        self.metrics.draft_assignments.set(self.drafts.len() as i64);
        Ok(())
    }

    /// Commit the draft: attach the rider locally, then POST. Success clears
    /// the draft; failure reverts the order and keeps the draft.
    pub async fn save(
        &self,
        token: &str,
        orders: &mut OptimisticMirror<Order>,
        order_id: &str,
    ) -> Result<(), AdminError> {
        let draft = self
            .drafts
            .get(order_id)
            .ok_or_else(|| AdminError::NotFound(format!("draft assignment for order {order_id}")))?;

        let ticket = orders.stage(order_id, |order| order.rider = Some(draft.rider.clone()))?;

        let request = AssignStaffRequest {
            order_id: order_id.to_string(),
            staff_id: draft.rider.id.clone(),
        };

        match self.api.assign_staff(token, &request).await {
            Ok(()) => {
                orders.commit(ticket, None);
                self.drafts.remove(order_id)?;
                self.metrics.draft_assignments.set(self.drafts.len() as i64);
                info!(order_id, rider_id = %draft.rider.id, "rider assigned");
                Ok(())
            }
            Err(err) => {
                orders.rollback(ticket);
                self.metrics
                    .optimistic_rollbacks_total
                    .with_label_values(&["rider_assignment"])
                    .inc();
                warn!(order_id, error = %err, "rider assignment failed, draft kept");
                Err(err)
            }
        }
    }

    pub async fn unassign(
        &self,
        token: &str,
        orders: &mut OptimisticMirror<Order>,
        order_id: &str,
    ) -> Result<(), AdminError> {
        let rider = orders
            .get(order_id)
            .and_then(|order| order.rider.clone())
            .ok_or_else(|| AdminError::NotFound(format!("rider on order {order_id}")))?;

        let ticket = orders.stage(order_id, |order| order.rider = None)?;

        let request = AssignStaffRequest {
            order_id: order_id.to_string(),
            staff_id: rider.id.clone(),
        };

        match self.api.unassign_staff(token, &request).await {
            Ok(()) => {
                orders.commit(ticket, None);
                info!(order_id, rider_id = %rider.id, "rider unassigned");
                Ok(())
            }
            Err(err) => {
                orders.rollback(ticket);
                self.metrics
                    .optimistic_rollbacks_total
                    .with_label_values(&["rider_assignment"])
                    .inc();
                Err(err)
            }
        }
    }
}
