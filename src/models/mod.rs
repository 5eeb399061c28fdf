pub mod assignment;
pub mod catalog;
pub mod lookup;
pub mod order;
pub mod rider;
