use serde::Deserialize;

use crate::api::ApiClient;
use crate::error::AdminError;
use crate::models::lookup::{LookupOption, LookupQuery, PincodeArea, PincodeQuery};

#[derive(Debug, Deserialize)]
struct LookupResponse {
    options: Vec<LookupOption>,
}

#[derive(Debug, Deserialize)]
struct PincodeResponse {
    areas: Vec<PincodeArea>,
}

impl ApiClient {
    /// Generic enum/lookup fetch. The response is decoded into typed
    /// options; a malformed entry fails the whole call rather than being
    /// silently dropped.
    pub async fn fetch_enum(
        &self,
        token: &str,
        query: &LookupQuery,
    ) -> Result<Vec<LookupOption>, AdminError> {
        let response: LookupResponse = self
            .post("lookup", "/api/lookup/enums", token, query)
            .await?;
        Ok(response.options)
    }

    pub async fn pincode_search(
        &self,
        token: &str,
        pincode: &str,
    ) -> Result<Vec<PincodeArea>, AdminError> {
        if pincode.trim().is_empty() {
            return Err(AdminError::MissingField("pincode"));
        }

        let query = PincodeQuery {
            pincode: pincode.to_string(),
        };
        let response: PincodeResponse = self
            .post("lookup", "/api/lookup/pincode-search", token, &query)
            .await?;
        Ok(response.areas)
    }
}
