use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::error::AdminError;
use crate::models::catalog::{filter_deleted, Coupon};

#[derive(Debug, Clone, Serialize)]
pub struct CouponRequest {
    pub code: String,
    pub discount_percent: f64,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
struct CouponsResponse {
    coupons: Vec<Coupon>,
}

#[derive(Debug, Deserialize)]
struct CouponResponse {
    coupon: Coupon,
}

impl ApiClient {
    pub async fn list_coupons(&self, token: &str) -> Result<Vec<Coupon>, AdminError> {
        let response: CouponsResponse = self.get("coupons", "/app/admin/coupons", token).await?;
        Ok(filter_deleted(response.coupons))
    }

    pub async fn create_coupon(
        &self,
        token: &str,
        request: &CouponRequest,
    ) -> Result<Coupon, AdminError> {
        if request.code.trim().is_empty() {
            return Err(AdminError::MissingField("code"));
        }

        let response: CouponResponse = self
            .post("coupons", "/app/admin/coupons", token, request)
            .await?;
        Ok(response.coupon)
    }

    pub async fn update_coupon(
        &self,
        token: &str,
        coupon_id: &str,
        request: &CouponRequest,
    ) -> Result<Coupon, AdminError> {
        let response: CouponResponse = self
            .put(
                "coupons",
                &format!("/app/admin/coupons/{coupon_id}"),
                token,
                request,
            )
            .await?;
        Ok(response.coupon)
    }

    pub async fn delete_coupon(&self, token: &str, coupon_id: &str) -> Result<(), AdminError> {
        #[derive(Deserialize)]
        struct Ack {
            #[allow(dead_code)]
            success: bool,
        }

        let _: Ack = self
            .delete(
                "coupons",
                &format!("/app/admin/coupons/{coupon_id}"),
                token,
                None::<&()>,
            )
            .await?;
        Ok(())
    }
}
