//! # engine::clock
//!
//! Wall-clock source for batch timestamps. The producer loop reads time only
//! through [`Clock`] so tests can drive it from tokio's paused clock.

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Indian Standard Time, UTC+05:30 (no DST).
pub const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// The fixed IST offset.
pub fn ist() -> FixedOffset {
    // 19_800 is always within ±86_400, the fallback is unreachable
    FixedOffset::east_opt(IST_OFFSET_SECS).unwrap_or(Utc.fix())
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ist_is_five_thirty_ahead() {
        let utc = Utc.with_ymd_and_hms(2024, 5, 1, 9, 2, 10).unwrap();
        let local = utc.with_timezone(&ist());
        assert_eq!(local.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-05-01 14:32:10");
    }

    #[test]
    fn test_ist_rolls_the_date() {
        let utc = Utc.with_ymd_and_hms(2024, 12, 31, 20, 0, 0).unwrap();
        let local = utc.with_timezone(&ist());
        assert_eq!(local.format("%Y-%m-%d %H:%M:%S").to_string(), "2025-01-01 01:30:00");
    }
}
