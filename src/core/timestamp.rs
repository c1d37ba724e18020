use chrono::{DateTime, SubsecRound, Utc};

/// Fractional-second digits kept by `TIMESTAMP(6)` columns
const STORED_PRECISION: u16 = 6;

/// Current UTC time at the precision the database stores.
///
/// Entities returned from a write compare equal to the same row read back.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(STORED_PRECISION)
}
