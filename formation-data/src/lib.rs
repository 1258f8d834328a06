mod loader;

pub use loader::{PriceScheduleError, PriceScheduleLoader, PriceScheduleRecord};
