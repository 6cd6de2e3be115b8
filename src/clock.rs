//! Wall clock access and day boundary arithmetic.

use chrono::{DateTime, Days, FixedOffset, Local, NaiveTime, TimeZone};

pub trait Clock {
  /// Zone whose calendar days the daily usage follows.
  type Tz: TimeZone;

  fn now(&self) -> DateTime<Self::Tz>;
}

/// The local system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
  type Tz = Local;

  fn now(&self) -> DateTime<Local> {
    Local::now()
  }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone)]
pub struct FixedClock<Tz: TimeZone = FixedOffset>(pub DateTime<Tz>);

impl<Tz: TimeZone> Clock for FixedClock<Tz> {
  type Tz = Tz;

  fn now(&self) -> DateTime<Tz> {
    self.0.clone()
  }
}

/// Midnight at the start of `now`'s calendar day, with the offset the time
/// zone had at midnight rather than the one it has now.
pub fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
  let midnight = now.date_naive().and_time(NaiveTime::MIN);
  now.timezone().from_local_datetime(&midnight).earliest().unwrap_or_else(|| now.clone())
}

/// The first midnight strictly after `now` in the local time zone.
pub fn next_local_midnight(now: DateTime<Local>) -> DateTime<Local> {
  let mut date = now.date_naive();

  loop {
    date = match date.checked_add_days(Days::new(1)) {
      Some(date) => date,
      None => return now,
    };

    // Days whose midnight is skipped by a DST change are passed over.
    if let Some(midnight) = Local.from_local_datetime(&date.and_time(NaiveTime::MIN)).earliest() {
      return midnight
    }
  }
}


/// A zone that switches from UTC+0 to UTC+1 at 01:00 UTC on 2025-03-30,
/// skipping local 01:00 to 02:00.
#[cfg(test)]
pub(crate) mod test_zone {
  use chrono::{FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

  #[derive(Debug, Clone, Copy)]
  pub struct SpringForward;

  pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(hour, minute, 0).unwrap()
  }

  fn switch() -> NaiveDateTime {
    utc(2025, 3, 30, 1, 0)
  }

  fn winter() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
  }

  fn summer() -> FixedOffset {
    FixedOffset::east_opt(3600).unwrap()
  }

  impl TimeZone for SpringForward {
    type Offset = FixedOffset;

    fn from_offset(_: &FixedOffset) -> Self {
      SpringForward
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
      self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
      if *local < switch() {
        LocalResult::Single(winter())
      } else if *local < utc(2025, 3, 30, 2, 0) {
        LocalResult::None
      } else {
        LocalResult::Single(summer())
      }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
      self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
      if *utc < switch() {
        winter()
      } else {
        summer()
      }
    }
  }
}
