use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::error::AdminError;
use crate::models::order::{CustomerSnapshot, Order, OrderStatus, PaymentStatus};

#[derive(Debug, Clone, Serialize)]
pub struct SubmitOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub customer: CustomerSnapshot,
    pub service_ids: Vec<String>,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignStaffRequest {
    pub order_id: String,
    pub staff_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateRiderInfoRequest {
    pub order_id: String,
    pub rider_delivery_status: OrderStatus,
}

#[derive(Debug, Deserialize)]
struct OrderResponse {
    order: Order,
}

#[derive(Debug, Deserialize)]
struct AckResponse {
    #[allow(dead_code)]
    success: bool,
}

impl ApiClient {
    /// Create or update a home-care order.
    pub async fn submit_order(
        &self,
        token: &str,
        request: &SubmitOrderRequest,
    ) -> Result<Order, AdminError> {
        if request.service_ids.is_empty() {
            return Err(AdminError::MissingField("service_ids"));
        }

        let response: OrderResponse = self
            .post("orders", "/api/homecare/order", token, request)
            .await?;
        Ok(response.order)
    }

    pub async fn order_detail(&self, token: &str, order_id: &str) -> Result<Order, AdminError> {
        let response: OrderResponse = self
            .get("orders", &format!("/api/homecare/orders/{order_id}"), token)
            .await?;
        Ok(response.order)
    }

    pub async fn assign_staff(
        &self,
        token: &str,
        request: &AssignStaffRequest,
    ) -> Result<(), AdminError> {
        let _: AckResponse = self
            .post("orders", "/api/homecare/order/staff", token, request)
            .await?;
        Ok(())
    }

    pub async fn unassign_staff(
        &self,
        token: &str,
        request: &AssignStaffRequest,
    ) -> Result<(), AdminError> {
        let _: AckResponse = self
            .delete("orders", "/api/homecare/order/staff", token, Some(request))
            .await?;
        Ok(())
    }

    /// Request a delivery-status transition for an order's rider leg.
    pub async fn update_rider_info(
        &self,
        token: &str,
        request: &UpdateRiderInfoRequest,
    ) -> Result<Order, AdminError> {
        let response: OrderResponse = self
            .patch("orders", "/api/order/update-rider-info", token, request)
            .await?;
        Ok(response.order)
    }
}
