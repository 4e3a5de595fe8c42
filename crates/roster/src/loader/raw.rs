//! Wire format of the randomuser.me API.
//!
//! Only the fields the directory displays are modelled; anything else in the
//! payload is ignored.

// Field names mirror the API payload.
#![allow(missing_docs)]

use std::fmt::{self, Write as _};

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::person::{PersonRecord, Street};

/// Top-level response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawResponse {
    /// The batch of people, in API order.
    pub results: Vec<RawPerson>,
    /// Request metadata echoed back by the API.
    #[serde(default)]
    pub info: Option<RawInfo>,
}

/// Request metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInfo {
    /// Seed that reproduces this batch.
    #[serde(default)]
    pub seed: Option<String>,
    /// Number of results served.
    #[serde(default)]
    pub results: Option<usize>,
    /// Page number.
    #[serde(default)]
    pub page: Option<usize>,
    /// API version.
    #[serde(default)]
    pub version: Option<String>,
}

/// A JSON value that may be sent as either a string or a number.
///
/// The API sends US postcodes as numbers and most others as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Textual form.
    Text(String),
    /// Numeric form.
    Number(serde_json::Number),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One person as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPerson {
    pub name: RawName,
    pub email: String,
    pub picture: RawPicture,
    pub location: RawLocation,
    pub cell: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub dob: RawDob,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawName {
    #[serde(default)]
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPicture {
    pub large: String,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLocation {
    pub street: RawStreet,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: Scalar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStreet {
    pub number: Scalar,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDob {
    /// RFC 3339 timestamp, e.g. `1984-07-04T09:44:18.674Z`.
    pub date: String,
    #[serde(default)]
    pub age: Option<u32>,
}

impl RawPerson {
    /// Map this raw entry into a [`PersonRecord`] at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] if the birth date is not a valid
    /// RFC 3339 timestamp or cannot be rendered with `birthday_format`.
    pub fn into_record(self, index: usize, birthday_format: &str) -> Result<PersonRecord> {
        let birth_date = format_birthday(&self.dob.date, birthday_format)
            .map_err(|message| Error::invalid_record(index, message))?;

        Ok(PersonRecord {
            index,
            photo_url: self.picture.large,
            first_name: self.name.first,
            last_name: self.name.last,
            email: self.email,
            street: Street {
                number: self.location.street.number.to_string(),
                name: self.location.street.name,
            },
            city: self.location.city,
            region: self.location.state,
            country: self.location.country,
            postal_code: self.location.postcode.to_string(),
            phone: self.cell,
            birth_date,
        })
    }
}

/// Render an RFC 3339 timestamp as a calendar date in UTC.
fn format_birthday(raw: &str, format: &str) -> std::result::Result<String, String> {
    let parsed =
        DateTime::parse_from_rfc3339(raw).map_err(|e| format!("invalid birth date {raw:?}: {e}"))?;
    let mut out = String::new();
    write!(out, "{}", parsed.naive_utc().date().format(format))
        .map_err(|_| format!("cannot render birth date with format {format:?}"))?;
    Ok(out)
}

/// Check that `format` can render a birth date.
///
/// Birth dates are calendar dates, so time and zone specifiers are rejected
/// here rather than failing every record at load time.
pub(crate) fn check_birthday_format(format: &str) -> std::result::Result<(), String> {
    format_birthday("1984-07-04T00:00:00Z", format).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "results": [
            {
                "gender": "female",
                "name": {"title": "Ms", "first": "Brenda", "last": "Adams"},
                "location": {
                    "street": {"number": 4821, "name": "Lakeview St"},
                    "city": "Fresno",
                    "state": "California",
                    "country": "United States",
                    "postcode": 93650,
                    "coordinates": {"latitude": "-1.0", "longitude": "2.0"}
                },
                "email": "brenda.adams@example.com",
                "dob": {"date": "1984-07-04T09:44:18.674Z", "age": 42},
                "phone": "(559) 555-0100",
                "cell": "(559) 555-0142",
                "picture": {
                    "large": "https://randomuser.me/api/portraits/women/1.jpg",
                    "medium": "https://randomuser.me/api/portraits/med/women/1.jpg",
                    "thumbnail": "https://randomuser.me/api/portraits/thumb/women/1.jpg"
                },
                "nat": "US"
            },
            {
                "name": {"title": "Mr", "first": "Carl", "last": "Jensen"},
                "location": {
                    "street": {"number": 12, "name": "Elm Rd"},
                    "city": "Reno",
                    "state": "Nevada",
                    "country": "United States",
                    "postcode": "K1A-0B1"
                },
                "email": "carl.jensen@example.com",
                "dob": {"date": "1990-12-31T23:59:59Z"},
                "cell": "(775) 555-0199",
                "picture": {"large": "https://randomuser.me/api/portraits/men/2.jpg"}
            }
        ],
        "info": {"seed": "abc", "results": 2, "page": 1, "version": "1.4"}
    }"#;

    #[test]
    fn test_parse_response() {
        let response: RawResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.results.len(), 2);
        let info = response.info.unwrap();
        assert_eq!(info.seed.as_deref(), Some("abc"));
        assert_eq!(info.results, Some(2));
    }

    #[test]
    fn test_postcode_number_and_string() {
        let response: RawResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.results[0].location.postcode.to_string(), "93650");
        assert_eq!(response.results[1].location.postcode.to_string(), "K1A-0B1");
    }

    #[test]
    fn test_into_record_maps_fields() {
        let response: RawResponse = serde_json::from_str(SAMPLE).unwrap();
        let person = response.results.into_iter().next().unwrap();
        let record = person.into_record(0, "%-m/%-d/%Y").unwrap();

        assert_eq!(record.index, 0);
        assert_eq!(record.first_name, "Brenda");
        assert_eq!(record.last_name, "Adams");
        assert_eq!(
            record.photo_url,
            "https://randomuser.me/api/portraits/women/1.jpg"
        );
        assert_eq!(record.street.number, "4821");
        assert_eq!(record.street.name, "Lakeview St");
        assert_eq!(record.region, "California");
        assert_eq!(record.postal_code, "93650");
        assert_eq!(record.phone, "(559) 555-0142");
        assert_eq!(record.birth_date, "7/4/1984");
    }

    #[test]
    fn test_birthday_is_rendered_in_utc() {
        assert_eq!(
            format_birthday("1990-12-31T23:59:59-05:00", "%Y-%m-%d").unwrap(),
            "1991-01-01"
        );
    }

    #[test]
    fn test_check_birthday_format() {
        assert!(check_birthday_format("%-m/%-d/%Y").is_ok());
        assert!(check_birthday_format("%A, %B %e").is_ok());
        assert!(check_birthday_format("%-m/%-d/%Y %H:%M").is_err());
        assert!(check_birthday_format("%Z").is_err());
        assert!(check_birthday_format("%Q").is_err());
    }

    #[test]
    fn test_invalid_birth_date() {
        let mut response: RawResponse = serde_json::from_str(SAMPLE).unwrap();
        let mut person = response.results.remove(0);
        person.dob.date = "yesterday".to_string();

        let err = person.into_record(5, "%-m/%-d/%Y").unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { index: 5, .. }));
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_missing_results_is_an_error() {
        let result: std::result::Result<RawResponse, _> = serde_json::from_str(r#"{"info": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_api_error_body_is_an_error() {
        let result: std::result::Result<RawResponse, _> =
            serde_json::from_str(r#"{"error": "Uh oh, something has gone wrong."}"#);
        assert!(result.is_err());
    }
}
