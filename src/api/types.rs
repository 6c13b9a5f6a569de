//! Request and result types for the imagery service.

use serde::{Deserialize, Serialize};

/// Base URL of the imagery service.
pub const API_BASE_URL: &str = "http://localhost:8080";

/// User-facing message for imagery failures with no usable response body.
pub const GENERIC_FETCH_ERROR: &str = "An error occurred while fetching data.";

/// The two imagery endpoints queried on every fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageryEndpoint {
    /// Rendered Landsat image
    Image,
    /// Acquisition metadata
    Data,
}

impl ImageryEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            ImageryEndpoint::Image => "/api/landsatImage",
            ImageryEndpoint::Data => "/api/landsatData",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImageryEndpoint::Image => "image",
            ImageryEndpoint::Data => "data",
        }
    }

    pub fn all() -> &'static [ImageryEndpoint] {
        &[ImageryEndpoint::Image, ImageryEndpoint::Data]
    }
}

/// Query parameters shared by both imagery endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageryQuery {
    /// Comma-joined band identifiers in catalog order
    pub bands: String,
    /// Acquisition window start (YYYY-MM-DD)
    pub start_date: String,
    /// Acquisition window end (YYYY-MM-DD)
    pub end_date: String,
}

impl ImageryQuery {
    /// Renders the query string expected by the service.
    pub fn query_string(&self) -> String {
        format!(
            "bands={}&startDate={}&endDate={}",
            self.bands, self.start_date, self.end_date
        )
    }

    /// Full request URL for one of the imagery endpoints.
    pub fn url(&self, endpoint: ImageryEndpoint) -> String {
        format!("{}{}?{}", API_BASE_URL, endpoint.path(), self.query_string())
    }
}

/// Corner coordinates attached to a notification request.
///
/// Field names match the JSON contract of the notification endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    #[serde(rename = "LON_UL")]
    pub lon_ul: f64,
    #[serde(rename = "LAT_UR")]
    pub lat_ur: f64,
    #[serde(rename = "LON_UR")]
    pub lon_ur: f64,
    #[serde(rename = "LAT_UL")]
    pub lat_ul: f64,
}

/// Fixed bounding box the service expects with every notification request.
pub const NOTIFICATION_BOUNDING_BOX: BoundingBox = BoundingBox {
    lon_ul: 12.44693,
    lat_ur: 10.12345,
    lon_ur: 15.6789,
    lat_ul: 14.56789,
};

/// Body of a POST to the email notification endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    pub email: String,
    /// Hours of advance notice before the acquisition pass
    pub lead_time: u32,
    pub bounding_box: BoundingBox,
    /// Maximum acceptable cloud coverage percentage
    pub cloud_coverage: u8,
}

impl NotificationRequest {
    pub const PATH: &'static str = "/api/addEmailNotification";

    pub fn url() -> String {
        format!("{}{}", API_BASE_URL, Self::PATH)
    }
}

/// Result of an asynchronous service request.
#[derive(Debug, Clone)]
pub enum ApiResult {
    /// An imagery endpoint responded successfully
    ImageryLoaded {
        endpoint: ImageryEndpoint,
        bytes: usize,
        latency_ms: f64,
    },
    /// An imagery endpoint failed; `body` holds the response body when
    /// the service sent one
    ImageryFailed {
        endpoint: ImageryEndpoint,
        body: Option<String>,
        detail: String,
    },
    /// The notification endpoint accepted the request
    NotificationAccepted { body: String },
    /// The notification request failed
    NotificationFailed { detail: String },
    /// The liveness probe responded
    ProbeCompleted { body: String },
    /// The liveness probe failed
    ProbeFailed { detail: String },
}

impl ApiResult {
    /// Message displayed for a failed imagery request: the response body
    /// when present, otherwise the generic error text.
    pub fn imagery_error_message(body: &Option<String>) -> String {
        match body {
            Some(body) if !body.trim().is_empty() => body.trim().to_string(),
            _ => GENERIC_FETCH_ERROR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imagery_query_string() {
        let query = ImageryQuery {
            bands: "B0,B4".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-02-01".to_string(),
        };
        assert_eq!(
            query.query_string(),
            "bands=B0,B4&startDate=2024-01-01&endDate=2024-02-01"
        );
    }

    #[test]
    fn test_imagery_urls() {
        let query = ImageryQuery {
            bands: "B1".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-31".to_string(),
        };
        assert_eq!(
            query.url(ImageryEndpoint::Image),
            "http://localhost:8080/api/landsatImage?bands=B1&startDate=2024-01-01&endDate=2024-01-31"
        );
        assert_eq!(
            query.url(ImageryEndpoint::Data),
            "http://localhost:8080/api/landsatData?bands=B1&startDate=2024-01-01&endDate=2024-01-31"
        );
    }

    #[test]
    fn test_notification_request_wire_format() {
        let request = NotificationRequest {
            email: "user@example.com".to_string(),
            lead_time: 6,
            bounding_box: NOTIFICATION_BOUNDING_BOX,
            cloud_coverage: 25,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["email"], "user@example.com");
        assert_eq!(value["leadTime"], 6);
        assert_eq!(value["cloudCoverage"], 25);
        assert_eq!(value["boundingBox"]["LON_UL"], 12.44693);
        assert_eq!(value["boundingBox"]["LAT_UR"], 10.12345);
        assert_eq!(value["boundingBox"]["LON_UR"], 15.6789);
        assert_eq!(value["boundingBox"]["LAT_UL"], 14.56789);
    }

    #[test]
    fn test_notification_round_trip() {
        let request = NotificationRequest {
            email: "user@example.com".to_string(),
            lead_time: 24,
            bounding_box: NOTIFICATION_BOUNDING_BOX,
            cloud_coverage: 0,
        };
        let json = serde_json::to_string(&request).unwrap();
        let parsed: NotificationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }

    #[test]
    fn test_imagery_error_message_prefers_body() {
        assert_eq!(
            ApiResult::imagery_error_message(&Some("no scenes in range".to_string())),
            "no scenes in range"
        );
        assert_eq!(
            ApiResult::imagery_error_message(&Some("  ".to_string())),
            GENERIC_FETCH_ERROR
        );
        assert_eq!(
            ApiResult::imagery_error_message(&None),
            GENERIC_FETCH_ERROR
        );
    }
}
