// Event module
// A time-stamped, colored note attached to a calendar day

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color used when an event has none (records written before colors existed)
pub const DEFAULT_EVENT_COLOR: &str = "#4a90e2";

/// Which rule a rejected `HH:MM` string broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRule {
    /// Not two digits, a colon, and two digits
    Format,
    /// Hour outside 00-23
    Hour,
    /// Minute outside 00-59
    Minute,
}

impl fmt::Display for TimeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            TimeRule::Format => "use HH:MM format (e.g., 14:30)",
            TimeRule::Hour => "hour must be between 00 and 23",
            TimeRule::Minute => "minute must be between 00 and 59",
        };
        f.write_str(message)
    }
}

/// Wall-clock time of day, 24-hour, minute precision.
///
/// Ordering is by hour then minute, which matches the lexicographic order
/// of the zero-padded `HH:MM` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventTime {
    hour: u8,
    minute: u8,
}

impl EventTime {
    /// Parse strict `HH:MM` text.
    ///
    /// # Examples
    /// ```
    /// use month_calendar::models::event::{EventTime, TimeRule};
    ///
    /// let time = EventTime::parse("09:05").unwrap();
    /// assert_eq!(time.to_string(), "09:05");
    /// assert_eq!(EventTime::parse("9:05"), Err(TimeRule::Format));
    /// assert_eq!(EventTime::parse("24:00"), Err(TimeRule::Hour));
    /// ```
    pub fn parse(input: &str) -> Result<Self, TimeRule> {
        let bytes = input.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(TimeRule::Format);
        }
        let digit = |b: u8| {
            if b.is_ascii_digit() {
                Ok(b - b'0')
            } else {
                Err(TimeRule::Format)
            }
        };
        let hour = digit(bytes[0])? * 10 + digit(bytes[1])?;
        let minute = digit(bytes[3])? * 10 + digit(bytes[4])?;

        Self::new(hour, minute)
    }

    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeRule> {
        if hour > 23 {
            return Err(TimeRule::Hour);
        }
        if minute > 59 {
            return Err(TimeRule::Minute);
        }
        Ok(Self { hour, minute })
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for EventTime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).map_err(|rule| format!("invalid event time '{}': {}", value, rule))
    }
}

impl From<EventTime> for String {
    fn from(time: EventTime) -> Self {
        time.to_string()
    }
}

/// Display color in `#RRGGBB` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse `#RRGGBB`, or the `#RGB` shorthand which is expanded.
    ///
    /// Hex digits may be either case; six-digit input is kept as written.
    pub fn parse(input: &str) -> Result<Self, String> {
        let trimmed = input.trim();
        let hex = trimmed
            .strip_prefix('#')
            .ok_or_else(|| "Color must be in hex format (#RRGGBB or #RGB)".to_string())?;

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
        }

        match hex.len() {
            6 => Ok(Self(trimmed.to_string())),
            3 => {
                let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
                Ok(Self(format!("#{}", expanded)))
            }
            _ => Err("Color must be in hex format (#RRGGBB or #RGB)".to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).unwrap_or(0)
        };
        (channel(1..3), channel(3..5), channel(5..7))
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", r, g, b))
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self(DEFAULT_EVENT_COLOR.to_string())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

/// One scheduled item on a calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub time: EventTime,
    pub description: String,
    pub color: HexColor,
}

impl Event {
    pub fn new(time: EventTime, description: impl Into<String>, color: HexColor) -> Self {
        Self {
            time,
            description: description.into(),
            color,
        }
    }

    /// Label used by the day's event list: `HH:MM - description`
    pub fn list_label(&self) -> String {
        format!("{} - {}", self.time, self.description)
    }
}
