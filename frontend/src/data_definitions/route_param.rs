//! Route segment helpers for structured values.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};


// Structured values ride in route segments as url-safe base64 over cbor, so
// free text (spaces, slashes, empty strings) never fights the path syntax.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RouteParam<T>(pub T);

impl<T> From<T> for RouteParam<T> {
    fn from(value: T) -> Self {
        RouteParam(value)
    }
}

// Display the value in a way that can be parsed back by FromStr
impl<T: Serialize> Display for RouteParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(self, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum RouteParamParseError {
    DecodeError(base64::DecodeError),
    CiboriumError(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for RouteParamParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeError(err) => write!(f, "Failed to decode base64: {}", err),
            Self::CiboriumError(err) => write!(f, "Failed to deserialize: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for RouteParam<T> {
    type Err = RouteParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = URL_SAFE
            .decode(s.as_bytes())
            .map_err(RouteParamParseError::DecodeError)?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(decoded))
            .map_err(RouteParamParseError::CiboriumError)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_text_roundtrips_through_a_segment() {
        let param = RouteParam("attack on titan / s2".to_string());
        let segment = param.to_string();
        assert!(!segment.contains(' '));
        assert!(!segment.contains('/'));
        let parsed: RouteParam<String> = segment.parse().unwrap();
        assert_eq!(parsed, param);
    }

    #[test]
    fn empty_string_produces_a_nonempty_segment() {
        let segment = RouteParam(String::new()).to_string();
        assert!(!segment.is_empty());
        let parsed: RouteParam<String> = segment.parse().unwrap();
        assert_eq!(parsed.0, "");
    }
}
