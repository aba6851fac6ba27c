use super::*;
use chrono::DateTime;
use uuid::Uuid;

const TID_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";
/// 100ns intervals between the Gregorian epoch (1582-10-15) and the Unix epoch.
const GREGORIAN_OFFSET: u64 = 0x01B2_1DD2_1381_4000;
/// Clock sequence (variant bits included) and node of every derived tid.
const TID_CLOCK_AND_NODE: [u8; 8] = [0x92, 0x34, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab];

/// Time-based (version 1) UUID for a date such as `2014-11-18 15:03:00 -0800`.
///
/// Clock sequence and node are fixed, so the same instant always yields the same
/// tid. Useful to seed version columns with known values.
pub fn tid_from_date(date: &str) -> SchemaResult<Uuid> {
    let date_time = DateTime::parse_from_str(date, TID_DATE_FORMAT)
        .map_err(|e| SchemaError::validation(format!("Invalid tid date \"{}\": {}", date, e)))?;

    let seconds = u64::try_from(date_time.timestamp())
        .map_err(|_| SchemaError::validation(format!("Tid date before 1970: \"{}\"", date)))?;
    let ticks = seconds
        .checked_mul(10_000_000)
        .and_then(|ticks| ticks.checked_add(GREGORIAN_OFFSET))
        .and_then(|ticks| ticks.checked_add(u64::from(date_time.timestamp_subsec_nanos() / 100)))
        // v1 timestamps have 60 bits.
        .filter(|ticks| ticks >> 60 == 0)
        .ok_or_else(|| SchemaError::validation(format!("Tid date out of range: \"{}\"", date)))?;

    let time_low = (ticks & 0xFFFF_FFFF) as u32;
    let time_mid = ((ticks >> 32) & 0xFFFF) as u16;
    let time_hi_and_version = ((ticks >> 48) & 0x0FFF) as u16 | (1 << 12);

    Ok(Uuid::from_fields(
        time_low,
        time_mid,
        time_hi_and_version,
        &TID_CLOCK_AND_NODE,
    ))
}
