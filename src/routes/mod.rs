mod fallback;
mod health;
mod heatwave_events;
mod sst;

pub use fallback::not_found;
pub use health::get_health;
pub use heatwave_events::{fetch_heatwave_events, get_heatwave_events};
pub use sst::get_sst_daily;
