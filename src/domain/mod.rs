mod heatwave_event;
mod sst_reading;

pub use heatwave_event::HeatwaveEvent;
pub use sst_reading::{PLACEHOLDER_SST, SstReading};
