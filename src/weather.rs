//! Weather over the companion channel: inbound report parsing and the
//! periodic outbound refresh request.

use heapless::String;

use crate::msg::{Dict, DictError, MAX_TEXT_LEN};

/// Dictionary key for the temperature entry. An outbound request carries
/// this key alone, with the fixed marker value 0.
pub const KEY_TEMPERATURE: u32 = 0;

/// Dictionary key for the conditions text entry.
pub const KEY_CONDITIONS: u32 = 1;

/// Minutes between outbound refresh requests.
pub const REQUEST_PERIOD_MIN: u8 = 30;

/// One weather report as received from the companion.
///
/// Overwrites whatever was displayed before; no history is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub temperature_f: i32,
    pub conditions: String<MAX_TEXT_LEN>,
}

impl WeatherReport {
    /// Read a report out of an inbound dictionary.
    ///
    /// Returns `None` when either field is missing, so a partial payload
    /// leaves the previous display text in place. Entries under other keys
    /// are ignored.
    pub fn from_dict(dict: &Dict) -> Option<Self> {
        let temperature_f = dict.get_int(KEY_TEMPERATURE)?;
        let conditions = dict.get_text(KEY_CONDITIONS)?;

        let mut buf = String::new();
        // get_text is already bounded by MAX_TEXT_LEN
        buf.push_str(conditions).ok()?;
        Some(Self {
            temperature_f,
            conditions: buf,
        })
    }
}

/// Whether a minute tick should trigger an outbound refresh request.
///
/// Fires on exact half-hour marks only: minutes 0 and 30.
pub fn due_for_request(minute: u8) -> bool {
    minute % REQUEST_PERIOD_MIN == 0
}

/// Assemble the single-entry refresh request.
pub fn request_dict() -> Result<Dict, DictError> {
    let mut dict = Dict::new();
    dict.push_int(KEY_TEMPERATURE, 0)?;
    Ok(dict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_payload_parses() {
        let mut dict = Dict::new();
        dict.push_int(KEY_TEMPERATURE, 72).unwrap();
        dict.push_text(KEY_CONDITIONS, "Cloudy").unwrap();

        let report = WeatherReport::from_dict(&dict).unwrap();
        assert_eq!(report.temperature_f, 72);
        assert_eq!(report.conditions.as_str(), "Cloudy");
    }

    #[test]
    fn extra_keys_are_ignored() {
        let mut dict = Dict::new();
        dict.push_int(KEY_TEMPERATURE, -4).unwrap();
        dict.push_text(KEY_CONDITIONS, "Snow").unwrap();
        dict.push_int(7, 999).unwrap();
        dict.push_text(8, "unrelated").unwrap();

        let report = WeatherReport::from_dict(&dict).unwrap();
        assert_eq!(report.temperature_f, -4);
        assert_eq!(report.conditions.as_str(), "Snow");
    }

    #[test]
    fn missing_conditions_skips_the_report() {
        let mut dict = Dict::new();
        dict.push_int(KEY_TEMPERATURE, 72).unwrap();
        assert_eq!(WeatherReport::from_dict(&dict), None);
    }

    #[test]
    fn missing_temperature_skips_the_report() {
        let mut dict = Dict::new();
        dict.push_text(KEY_CONDITIONS, "Cloudy").unwrap();
        assert_eq!(WeatherReport::from_dict(&dict), None);
    }

    #[test]
    fn requests_fire_on_half_hours_only() {
        for minute in 0..60u8 {
            assert_eq!(due_for_request(minute), minute == 0 || minute == 30);
        }
    }

    #[test]
    fn request_is_a_single_marker_entry() {
        let dict = request_dict().unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get_int(KEY_TEMPERATURE), Some(0));
    }
}
