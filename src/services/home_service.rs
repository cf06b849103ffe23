use time::OffsetDateTime;

use crate::dto::home::HomeResponse;

/// Build the welcome payload, adding the version and server time when `detailed` is set.
pub fn welcome(detailed: bool) -> HomeResponse {
    let (version, timestamp) = if detailed {
        (
            Some(env!("CARGO_PKG_VERSION").to_string()),
            Some(now_millis()),
        )
    } else {
        (None, None)
    };

    HomeResponse {
        message: "Welcome to PongShots!".into(),
        status: "running".into(),
        version,
        timestamp,
    }
}

fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_welcome_has_no_details() {
        let response = welcome(false);
        assert_eq!(response.message, "Welcome to PongShots!");
        assert_eq!(response.status, "running");
        assert!(response.version.is_none());
        assert!(response.timestamp.is_none());
    }

    #[test]
    fn detailed_welcome_includes_version_and_time() {
        let before = now_millis();
        let response = welcome(true);
        let after = now_millis();

        assert_eq!(response.version.as_deref(), Some("1.0.0"));
        let timestamp = response.timestamp.unwrap();
        assert!((before..=after).contains(&timestamp));
    }
}
