use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype for time-slot identifiers. Invariant (§3): slots are globally
/// ordered by id; ids `k` and `k+1` are consecutive within the same day iff
/// they belong to that day. The domain builder relies on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(pub u32);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(rename = "ID")]
    pub id: SlotId,
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(rename = "StartTime")]
    pub start: NaiveTimeOfDay,
    #[serde(rename = "EndTime")]
    pub end: NaiveTimeOfDay,
}

impl TimeSlot {
    pub fn is_bad_time(&self) -> bool {
        self.start.hour < 9 || self.end.hour >= 16
    }
}

/// A minimal `H:MM` wall-clock time, parsed from the tabular contract
/// without pulling in a full calendar/timezone type for a field that is
/// always "hour and minute within one day". Serialized as the `H:MM`
/// string itself, not a `{hour, minute}` object, to match the catalog's
/// tabular contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NaiveTimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TryFrom<String> for NaiveTimeOfDay {
    type Error = crate::error::SolverError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<NaiveTimeOfDay> for String {
    fn from(t: NaiveTimeOfDay) -> Self {
        t.to_string()
    }
}

impl fmt::Display for NaiveTimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

impl std::str::FromStr for NaiveTimeOfDay {
    type Err = crate::error::SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s.split_once(':').ok_or_else(|| {
            crate::error::SolverError::CatalogValidation {
                message: format!("time slot `{s}` is not in H:MM format"),
            }
        })?;
        let hour: u32 = h
            .parse()
            .map_err(|_| crate::error::SolverError::CatalogValidation {
                message: format!("time slot `{s}` has a non-numeric hour"),
            })?;
        let minute: u32 = m
            .parse()
            .map_err(|_| crate::error::SolverError::CatalogValidation {
                message: format!("time slot `{s}` has a non-numeric minute"),
            })?;
        Ok(NaiveTimeOfDay { hour, minute })
    }
}

/// Canonical weekday ordering used to sort report rows (§6): Sun .. Thu.
pub fn day_rank(day: &str) -> i32 {
    const ORDER: [&str; 5] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"];
    ORDER
        .iter()
        .position(|d| d.eq_ignore_ascii_case(day))
        .map(|p| p as i32)
        .unwrap_or(i32::MAX)
}
