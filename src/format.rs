//! Pure display formatting for the waybill preview and export surfaces.
//!
//! Stored values are never touched here: a trip keeps its full `Y-M-D` date
//! and 12-hour time; these functions only produce the strings shown on the
//! rendered document.

use crate::models::trip::Meridiem;

pub const CURRENCY_GLYPH: &str = "₹";
pub const ZONE_LABEL: &str = "IST";
pub const DEFAULT_PASSENGER: &str = "Gunavathy B";
pub const DEFAULT_FROM_LOCATION: &str = "Saidapet, Chennai TN 600015, IN";

/// `2025-03-07` becomes `03/07/25`. Anything that is not `Y-M-D` renders
/// empty, matching the empty-if-empty rule for the rest of the preview.
pub fn display_date(date: &str) -> String {
    let mut parts = date.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) if !month.is_empty() && !day.is_empty() => {
            let short_year = year.get(2..).unwrap_or(year);
            format!("{month}/{day}/{short_year}")
        }
        _ => String::new(),
    }
}

/// `("3:15", PM)` becomes `15:15:00 IST`. The zone label is a fixed display
/// choice, not derived from the host clock.
pub fn display_time(time: &str, meridiem: Meridiem) -> String {
    let Some((hour, minute)) = parse_wall_clock(time) else {
        return String::new();
    };
    format!("{:02}:{:02}:00 {ZONE_LABEL}", to_24_hour(hour, meridiem), minute)
}

/// Combined stamp shown on the waybill, `MM/DD/YY HH:MM:00 IST`. Empty when
/// either half is missing or unparseable.
pub fn display_date_time(date: &str, time: &str, meridiem: Meridiem) -> String {
    let date_part = display_date(date);
    let time_part = display_time(time, meridiem);
    if date_part.is_empty() || time_part.is_empty() {
        return String::new();
    }
    format!("{date_part} {time_part}")
}

/// Empty or unparseable amounts render as the zero value; everything else is
/// shown with exactly two decimal places.
pub fn display_amount(amount: &str) -> String {
    match amount.trim().parse::<f64>() {
        Ok(value) => format!("{CURRENCY_GLYPH} {value:.2}"),
        Err(_) => format!("{CURRENCY_GLYPH} 0.00"),
    }
}

pub fn passenger_or_default(passenger: &str) -> &str {
    if passenger.is_empty() {
        DEFAULT_PASSENGER
    } else {
        passenger
    }
}

pub fn from_location_or_default(from_location: &str) -> &str {
    if from_location.is_empty() {
        DEFAULT_FROM_LOCATION
    } else {
        from_location
    }
}

fn to_24_hour(hour: u32, meridiem: Meridiem) -> u32 {
    match meridiem {
        Meridiem::Pm if hour < 12 => hour + 12,
        Meridiem::Am if hour == 12 => 0,
        _ => hour,
    }
}

fn parse_wall_clock(time: &str) -> Option<(u32, u32)> {
    let (hour, minute) = time.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if minute > 59 {
        return None;
    }
    Some((hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_is_truncated_to_two_digit_year() {
        assert_eq!(display_date("2025-03-07"), "03/07/25");
    }

    #[test]
    fn invalid_date_renders_empty() {
        assert_eq!(display_date(""), "");
        assert_eq!(display_date("March 7"), "");
    }

    #[test]
    fn afternoon_times_shift_by_twelve_hours() {
        assert_eq!(display_time("3:15", Meridiem::Pm), "15:15:00 IST");
        assert_eq!(display_time("03:15", Meridiem::Pm), "15:15:00 IST");
    }

    #[test]
    fn midnight_is_hour_zero() {
        assert_eq!(display_time("12:00", Meridiem::Am), "00:00:00 IST");
    }

    #[test]
    fn noon_stays_twelve() {
        assert_eq!(display_time("12:30", Meridiem::Pm), "12:30:00 IST");
    }

    #[test]
    fn date_and_time_combine_or_vanish_together() {
        assert_eq!(
            display_date_time("2025-03-07", "3:15", Meridiem::Pm),
            "03/07/25 15:15:00 IST"
        );
        assert_eq!(display_date_time("", "3:15", Meridiem::Pm), "");
        assert_eq!(display_date_time("2025-03-07", "", Meridiem::Pm), "");
    }

    #[test]
    fn amounts_always_carry_two_decimals() {
        assert_eq!(display_amount(""), "₹ 0.00");
        assert_eq!(display_amount("42.5"), "₹ 42.50");
        assert_eq!(display_amount("not a number"), "₹ 0.00");
    }

    #[test]
    fn only_passenger_and_origin_fall_back() {
        assert_eq!(passenger_or_default(""), DEFAULT_PASSENGER);
        assert_eq!(passenger_or_default("Asha"), "Asha");
        assert_eq!(from_location_or_default(""), DEFAULT_FROM_LOCATION);
        assert_eq!(from_location_or_default("T Nagar"), "T Nagar");
    }
}
