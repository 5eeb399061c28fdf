use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::error::AdminError;
use crate::models::catalog::filter_deleted;
use crate::models::rider::{Availability, PoiVerification, Rider, VehicleType};

#[derive(Debug, Clone, Default, Serialize)]
pub struct RiderSearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poi_verification: Option<PoiVerification>,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpsertRiderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub vehicle_type: VehicleType,
    pub service_city: String,
    pub pincodes: Vec<String>,
    pub availability: Availability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RiderSearchResponse {
    riders: Vec<Rider>,
    #[serde(default)]
    total: u64,
}

#[derive(Debug, Deserialize)]
struct RiderResponse {
    rider: Rider,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RiderOverview {
    pub total_riders: u64,
    pub active_riders: u64,
    pub pending_verification: u64,
    pub deliveries_today: u64,
}

#[derive(Debug, Deserialize)]
struct RiderOverviewResponse {
    overview: RiderOverview,
}

impl ApiClient {
    /// Server-side rider search. Soft-deleted records are still filtered
    /// locally: the backend may return them regardless of the query.
    pub async fn search_riders(
        &self,
        token: &str,
        request: &RiderSearchRequest,
    ) -> Result<(Vec<Rider>, u64), AdminError> {
        let response: RiderSearchResponse = self
            .post("riders", "/api/rider/search", token, request)
            .await?;
        Ok((filter_deleted(response.riders), response.total))
    }

    pub async fn upsert_rider(
        &self,
        token: &str,
        request: &UpsertRiderRequest,
    ) -> Result<Rider, AdminError> {
        if request.name.trim().is_empty() {
            return Err(AdminError::MissingField("name"));
        }
        if request.phone.trim().is_empty() {
            return Err(AdminError::MissingField("phone"));
        }

        let response: RiderResponse = self.post("riders", "/api/rider", token, request).await?;
        Ok(response.rider)
    }

    /// Soft delete: flips `is_deleted`, never removes the record.
    pub async fn delete_rider(&self, token: &str, rider: &Rider) -> Result<Rider, AdminError> {
        let request = UpsertRiderRequest {
            id: Some(rider.id.clone()),
            name: rider.name.clone(),
            phone: rider.phone.clone(),
            email: rider.email.clone(),
            vehicle_type: rider.vehicle_type,
            service_city: rider.service_city.clone(),
            pincodes: rider.pincodes.clone(),
            availability: rider.availability,
            is_deleted: Some(true),
        };

        let response: RiderResponse = self.post("riders", "/api/rider", token, &request).await?;
        Ok(response.rider)
    }

    pub async fn rider_overview(&self, token: &str) -> Result<RiderOverview, AdminError> {
        let response: RiderOverviewResponse = self
            .post("riders", "/api/rider/overview", token, &serde_json::json!({}))
            .await?;
        Ok(response.overview)
    }
}
