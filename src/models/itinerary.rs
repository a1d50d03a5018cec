//! Five-day sample itinerary attached to every destination

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DestinationsError;

/// Key of one itinerary day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayKey {
    Day1,
    Day2,
    Day3,
    Day4,
    Day5,
}

impl DayKey {
    /// All day keys in itinerary order
    pub const ALL: [DayKey; 5] = [
        DayKey::Day1,
        DayKey::Day2,
        DayKey::Day3,
        DayKey::Day4,
        DayKey::Day5,
    ];

    /// 1-based day number
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            DayKey::Day1 => 1,
            DayKey::Day2 => 2,
            DayKey::Day3 => 3,
            DayKey::Day4 => 4,
            DayKey::Day5 => 5,
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day{}", self.number())
    }
}

impl FromStr for DayKey {
    type Err = DestinationsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayKey::ALL
            .into_iter()
            .find(|day| day.to_string() == s)
            .ok_or_else(|| DestinationsError::validation(format!("unknown itinerary day '{s}'")))
    }
}

/// Sample itinerary keyed by `day1`..`day5`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub day1: String,
    pub day2: String,
    pub day3: String,
    pub day4: String,
    pub day5: String,
}

impl Itinerary {
    #[must_use]
    pub fn new(days: [&str; 5]) -> Self {
        let [day1, day2, day3, day4, day5] = days.map(str::to_string);
        Self {
            day1,
            day2,
            day3,
            day4,
            day5,
        }
    }

    /// Plan for a single day
    #[must_use]
    pub fn day(&self, key: DayKey) -> &str {
        match key {
            DayKey::Day1 => &self.day1,
            DayKey::Day2 => &self.day2,
            DayKey::Day3 => &self.day3,
            DayKey::Day4 => &self.day4,
            DayKey::Day5 => &self.day5,
        }
    }

    /// Days in order, paired with their key
    pub fn days(&self) -> impl Iterator<Item = (DayKey, &str)> {
        DayKey::ALL.into_iter().map(move |key| (key, self.day(key)))
    }
}
