pub mod delivery;
pub mod rider_assignment;
