use chrono::{DateTime, Local};

const UNITS: [char; 4] = ['B', 'K', 'M', 'G'];

/// Human readable size, always five columns wide for sizes below a petabyte.
pub fn format_size(bytes: u64) -> String {
  let mut size = bytes as f64;
  for unit in UNITS {
    if size < 1024.0 {
      return format!("{size:4.0}{unit}");
    }
    size /= 1024.0;
  }
  format!("{size:4.1}T")
}

pub fn format_time(time: Option<&DateTime<Local>>) -> String {
  match time {
    Some(time) => time.format("%d.%m.%y %H:%M").to_string(),
    None => " ".repeat(12),
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn sizes_pick_the_largest_fitting_unit() {
    assert_eq!(format_size(0), "   0B");
    assert_eq!(format_size(1023), "1023B");
    assert_eq!(format_size(1024), "   1K");
    assert_eq!(format_size(1536), "   2K");
    assert_eq!(format_size(5 * 1024 * 1024), "   5M");
    assert_eq!(format_size(3 * 1024 * 1024 * 1024), "   3G");
  }

  #[test]
  fn terabytes_keep_one_decimal() {
    assert_eq!(format_size(1024_u64.pow(4)), " 1.0T");
    assert_eq!(format_size(1024_u64.pow(4) * 3 / 2), " 1.5T");
  }

  #[test]
  fn missing_time_is_blank() {
    assert_eq!(format_time(None), "            ");
  }

  #[test]
  fn time_uses_day_first_short_year() {
    let time = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 0).single().unwrap();
    assert_eq!(format_time(Some(&time)), "09.03.24 07:05");
  }
}
