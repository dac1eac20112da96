// Per-caller daily word budget guarding the justify endpoint.
// State is owned by AppState; nothing here is global.

pub mod clock;
pub mod quota;

pub use clock::{Clock, SystemClock};
pub use quota::{DailyWordQuota, QuotaGrant};
