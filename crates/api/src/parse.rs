// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of the primitive menu inputs.

use atrium_domain::{DATE_TIME_FORMAT, RoomFeature, UserRole};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;
use thiserror::Error;

/// The date-only input format.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Errors produced while parsing menu input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A date-time did not match `dd/MM/yyyy HH:mm`.
    #[error("'{0}' is not a valid date and time (expected dd/MM/yyyy HH:mm)")]
    InvalidDateTime(String),
    /// A date did not match `dd/MM/yyyy`.
    #[error("'{0}' is not a valid date (expected dd/MM/yyyy)")]
    InvalidDate(String),
    /// A number could not be parsed.
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
    /// A feature name did not match any tag.
    #[error("'{0}' is not a known room feature")]
    InvalidFeature(String),
    /// A role name did not match any role.
    #[error("'{0}' is not a known user role")]
    InvalidRole(String),
}

/// Parses a `dd/MM/yyyy HH:mm` date-time.
///
/// # Errors
///
/// Returns `InvalidDateTime` if the input does not match the format.
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(input.trim(), DATE_TIME_FORMAT)
        .map_err(|_| ParseError::InvalidDateTime(input.trim().to_owned()))
}

/// Parses a `dd/MM/yyyy` date.
///
/// # Errors
///
/// Returns `InvalidDate` if the input does not match the format.
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| ParseError::InvalidDate(input.trim().to_owned()))
}

/// Parses an unsigned number.
///
/// # Errors
///
/// Returns `InvalidNumber` if the input is not a non-negative integer.
pub fn parse_number(input: &str) -> Result<u32, ParseError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidNumber(input.trim().to_owned()))
}

/// Parses a comma-separated feature list. An empty input is an empty set.
///
/// # Errors
///
/// Returns `InvalidFeature` on the first name that matches no tag.
pub fn parse_features(input: &str) -> Result<BTreeSet<RoomFeature>, ParseError> {
    let mut features: BTreeSet<RoomFeature> = BTreeSet::new();
    for part in input.split(',') {
        let name: &str = part.trim();
        if name.is_empty() {
            continue;
        }
        let feature: RoomFeature = RoomFeature::parse(name)
            .map_err(|_| ParseError::InvalidFeature(name.to_owned()))?;
        features.insert(feature);
    }
    Ok(features)
}

/// Parses a user role name.
///
/// # Errors
///
/// Returns `InvalidRole` if the name matches no role.
pub fn parse_role(input: &str) -> Result<UserRole, ParseError> {
    UserRole::parse(input.trim()).map_err(|_| ParseError::InvalidRole(input.trim().to_owned()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_time_round_trip() {
        let parsed: NaiveDateTime = parse_date_time("31/12/2020 09:00").unwrap();
        assert_eq!(parsed.format(DATE_TIME_FORMAT).to_string(), "31/12/2020 09:00");
        assert!(parse_date_time("2020-12-31 09:00").is_err());
        assert!(parse_date_time("31/12/2020").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("31/12/2020").unwrap(),
            NaiveDate::from_ymd_opt(2020, 12, 31).unwrap()
        );
        assert!(parse_date("31/13/2020").is_err());
    }

    #[test]
    fn test_parse_features_handles_empty_and_lists() {
        assert!(parse_features("").unwrap().is_empty());
        assert!(parse_features("  ").unwrap().is_empty());
        let features = parse_features("projector, stage").unwrap();
        assert_eq!(features.len(), 2);
        assert!(features.contains(&RoomFeature::Projector));
        assert!(parse_features("projector, jacuzzi").is_err());
    }

    #[test]
    fn test_parse_role() {
        assert_eq!(parse_role("vip").unwrap(), UserRole::Vip);
        assert!(parse_role("janitor").is_err());
    }
}
