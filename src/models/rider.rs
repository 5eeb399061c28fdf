use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::catalog::SoftDeletable;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Availability {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PoiVerification {
    Approved,
    Pending,
    Rejected,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VehicleType {
    Bike,
    Scooter,
    Car,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rider {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub vehicle_type: VehicleType,
    pub service_city: String,
    pub pincodes: Vec<String>,
    pub availability: Availability,
    pub poi_verification: PoiVerification,
    #[serde(default)]
    pub is_deleted: bool,
    pub updated_at: DateTime<Utc>,
}

impl Rider {
    /// A rider can take new orders only when active, POI-approved and not
    /// soft-deleted.
    pub fn is_assignable(&self) -> bool {
        self.availability == Availability::Active
            && self.poi_verification == PoiVerification::Approved
            && !self.is_deleted
    }

    pub fn serves_pincode(&self, pincode: &str) -> bool {
        self.pincodes.iter().any(|p| p == pincode)
    }

    pub fn snapshot(&self) -> RiderSnapshot {
        RiderSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            phone: self.phone.clone(),
            vehicle_type: self.vehicle_type,
        }
    }
}

impl SoftDeletable for Rider {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// The rider fields embedded in orders and draft assignments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiderSnapshot {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub vehicle_type: VehicleType,
}
