use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::error::AdminError;
use crate::models::catalog::{
    filter_deleted, HealthPackage, HomecareService, Offering, PathologyTest, Phlebotomist,
};

#[derive(Debug, Clone, Serialize)]
pub struct SubmitServiceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitOfferingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub service_id: String,
    pub title: String,
    pub duration_minutes: u32,
    pub price: f64,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
struct ServicesResponse {
    services: Vec<HomecareService>,
}

#[derive(Debug, Deserialize)]
struct ServiceResponse {
    service: HomecareService,
}

#[derive(Debug, Deserialize)]
struct OfferingsResponse {
    offerings: Vec<Offering>,
}

#[derive(Debug, Deserialize)]
struct OfferingResponse {
    offering: Offering,
}

#[derive(Debug, Deserialize)]
struct PathologyTestsResponse {
    tests: Vec<PathologyTest>,
}

#[derive(Debug, Deserialize)]
struct HealthPackagesResponse {
    packages: Vec<HealthPackage>,
}

#[derive(Debug, Deserialize)]
struct PhlebotomistsResponse {
    phlebotomists: Vec<Phlebotomist>,
}

impl ApiClient {
    pub async fn list_services(&self, token: &str) -> Result<Vec<HomecareService>, AdminError> {
        let response: ServicesResponse = self.get("homecare", "/api/homecare/", token).await?;
        Ok(filter_deleted(response.services))
    }

    pub async fn submit_service(
        &self,
        token: &str,
        request: &SubmitServiceRequest,
    ) -> Result<HomecareService, AdminError> {
        if request.name.trim().is_empty() {
            return Err(AdminError::MissingField("name"));
        }

        let response: ServiceResponse = self
            .post("homecare", "/api/homecare/", token, request)
            .await?;
        Ok(response.service)
    }

    /// Soft delete server-side; the record keeps appearing in list fetches
    /// with `is_deleted` set.
    pub async fn delete_service(&self, token: &str, service_id: &str) -> Result<(), AdminError> {
        #[derive(Deserialize)]
        struct Ack {
            #[allow(dead_code)]
            success: bool,
        }

        let _: Ack = self
            .delete(
                "homecare",
                &format!("/api/homecare/{service_id}"),
                token,
                None::<&()>,
            )
            .await?;
        Ok(())
    }

    pub async fn list_offerings(&self, token: &str) -> Result<Vec<Offering>, AdminError> {
        let response: OfferingsResponse = self
            .get("homecare", "/api/homecare/offerings", token)
            .await?;
        Ok(filter_deleted(response.offerings))
    }

    pub async fn submit_offering(
        &self,
        token: &str,
        request: &SubmitOfferingRequest,
    ) -> Result<Offering, AdminError> {
        if request.title.trim().is_empty() {
            return Err(AdminError::MissingField("title"));
        }

        let response: OfferingResponse = self
            .post("homecare", "/api/homecare/offerings", token, request)
            .await?;
        Ok(response.offering)
    }

    pub async fn list_pathology_tests(
        &self,
        token: &str,
    ) -> Result<Vec<PathologyTest>, AdminError> {
        let response: PathologyTestsResponse = self
            .get("pathology", "/api/pathology/tests", token)
            .await?;
        Ok(filter_deleted(response.tests))
    }

    pub async fn list_health_packages(
        &self,
        token: &str,
    ) -> Result<Vec<HealthPackage>, AdminError> {
        let response: HealthPackagesResponse = self
            .get("pathology", "/api/pathology/packages", token)
            .await?;
        Ok(filter_deleted(response.packages))
    }

    pub async fn list_phlebotomists(&self, token: &str) -> Result<Vec<Phlebotomist>, AdminError> {
        let response: PhlebotomistsResponse = self
            .get("pathology", "/api/pathology/phlebotomists", token)
            .await?;
        Ok(filter_deleted(response.phlebotomists))
    }
}
