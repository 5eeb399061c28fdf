use serde::{Deserialize, Serialize};

use crate::error::AdminError;

/// Body for the generic enum/lookup endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LookupQuery {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub sort_by: String,
    pub sort_order: String,
}

impl LookupQuery {
    pub fn for_code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            id: None,
            value: None,
            sort_by: "value".to_string(),
            sort_order: "asc".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LookupOption {
    pub id: String,
    pub code: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PincodeQuery {
    pub pincode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PincodeArea {
    pub pincode: String,
    pub area: String,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub enum PhlebotomistStatus {
    Available,
    OnVisit,
    OffDuty,
}

impl PhlebotomistStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PhlebotomistStatus::Available => "Available",
            PhlebotomistStatus::OnVisit => "On Visit",
            PhlebotomistStatus::OffDuty => "Off Duty",
        }
    }
}

impl From<PhlebotomistStatus> for String {
    fn from(status: PhlebotomistStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Fails closed: an unrecognized wire value is an error surfaced to the
/// admin, never a silent default.
impl TryFrom<String> for PhlebotomistStatus {
    type Error = AdminError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        match raw.as_str() {
            "Available" => Ok(PhlebotomistStatus::Available),
            "On Visit" => Ok(PhlebotomistStatus::OnVisit),
            "Off Duty" => Ok(PhlebotomistStatus::OffDuty),
            _ => Err(AdminError::UnknownStatus {
                field: "phlebotomist status",
                value: raw,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PhlebotomistStatus;

    #[test]
    fn known_statuses_decode() {
        let status: PhlebotomistStatus = serde_json::from_str("\"On Visit\"").unwrap();
        assert_eq!(status, PhlebotomistStatus::OnVisit);
    }

    #[test]
    fn unknown_status_fails_closed() {
        let result = serde_json::from_str::<PhlebotomistStatus>("\"Idle\"");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown phlebotomist status value: Idle"));
    }

    #[test]
    fn round_trips_to_wire_string() {
        let json = serde_json::to_string(&PhlebotomistStatus::OffDuty).unwrap();
        assert_eq!(json, "\"Off Duty\"");
    }
}
