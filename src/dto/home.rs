use serde::{Deserialize, Deserializer, Serialize};
use serde_with::skip_serializing_none;
use utoipa::{IntoParams, ToSchema};

/// Query string accepted by the welcome route.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HomeQuery {
    /// Include the version and the server time in the response.
    ///
    /// Accepts `true`/`false`, `on`/`off`, `yes`/`no` and `1`/`0` in any case.
    /// A bare or empty flag, or any other value, reads as `false`.
    #[serde(default, deserialize_with = "lenient_flag")]
    #[param(value_type = Option<bool>)]
    pub detailed: bool,
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(parse_flag(&raw))
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "on" | "yes" | "1"
    )
}

/// Welcome payload returned by `/`.
#[skip_serializing_none]
#[derive(Debug, Serialize, ToSchema)]
pub struct HomeResponse {
    pub message: String,
    pub status: String,
    /// Only present for detailed requests.
    pub version: Option<String>,
    /// Milliseconds since the Unix epoch, only present for detailed requests.
    pub timestamp: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_flags_in_any_case() {
        for raw in ["true", "TRUE", "True", "on", "ON", "yes", "Yes", "1", " true "] {
            assert!(parse_flag(raw), "{raw:?} should be true");
        }
    }

    #[test]
    fn falsy_blank_and_unknown_flags() {
        for raw in ["", "false", "FALSE", "off", "no", "0", "maybe", "2"] {
            assert!(!parse_flag(raw), "{raw:?} should be false");
        }
    }
}
