//! Target location form and notification sign-up state.

use crate::api::{NotificationRequest, NOTIFICATION_BOUNDING_BOX};
use crate::state::filters::clamp_cloud_coverage;
use geo_types::Coord;

/// How far ahead of an acquisition pass to send the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadTime {
    #[default]
    TwoHours,
    SixHours,
    TwelveHours,
    TwentyFourHours,
}

impl LeadTime {
    pub fn label(&self) -> &'static str {
        match self {
            LeadTime::TwoHours => "2 Hours",
            LeadTime::SixHours => "6 Hours",
            LeadTime::TwelveHours => "12 Hours",
            LeadTime::TwentyFourHours => "24 Hours",
        }
    }

    pub fn hours(&self) -> u32 {
        match self {
            LeadTime::TwoHours => 2,
            LeadTime::SixHours => 6,
            LeadTime::TwelveHours => 12,
            LeadTime::TwentyFourHours => 24,
        }
    }

    pub fn all() -> &'static [LeadTime] {
        &[
            LeadTime::TwoHours,
            LeadTime::SixHours,
            LeadTime::TwelveHours,
            LeadTime::TwentyFourHours,
        ]
    }
}

/// Where the last submission attempt landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitOutcome {
    #[default]
    Idle,
    ValidationFailed,
    SubmittedWithoutNotification,
    NotificationPending,
    NotificationSubmitted,
    NotificationFailed,
}

impl SubmitOutcome {
    /// Message shown under the submit button.
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Idle => "",
            SubmitOutcome::ValidationFailed => "Please fill all required fields.",
            SubmitOutcome::SubmittedWithoutNotification => "Form submitted without notifications.",
            SubmitOutcome::NotificationPending => "Submitting notification request...",
            SubmitOutcome::NotificationSubmitted => "Form submitted successfully!",
            SubmitOutcome::NotificationFailed => "Form submission failed. Please try again.",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            SubmitOutcome::ValidationFailed | SubmitOutcome::NotificationFailed
        )
    }
}

/// What a valid submission should do.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPlan {
    /// Required fields are missing or malformed.
    Invalid,
    /// Move the marker to the entered coordinates.
    Reposition(Coord<f64>),
    /// Move the marker and request an email notification.
    RepositionAndNotify(Coord<f64>, NotificationRequest),
}

/// State of the location sidebar form.
#[derive(Default)]
pub struct LocationFormState {
    /// Latitude input, decimal degrees.
    pub lat_input: String,
    /// Longitude input, decimal degrees.
    pub lng_input: String,
    pub notifications_enabled: bool,
    pub email: String,
    pub lead_time: LeadTime,
    /// Maximum acceptable cloud coverage for notifications, percent.
    pub cloud_coverage: u8,
    pub outcome: SubmitOutcome,
}

impl LocationFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a map-picked point into the coordinate inputs.
    ///
    /// Values are rounded to six decimal places, about 0.1 m of
    /// longitude at the equator.
    pub fn set_point(&mut self, point: Coord<f64>) {
        self.lat_input = format!("{:.6}", point.y);
        self.lng_input = format!("{:.6}", point.x);
    }

    /// Parses the coordinate inputs, if both are valid numbers.
    pub fn parsed_point(&self) -> Option<Coord<f64>> {
        let lat = self.lat_input.trim().parse::<f64>().ok()?;
        let lng = self.lng_input.trim().parse::<f64>().ok()?;

        Some(Coord { x: lng, y: lat })
    }

    /// Decides what submitting the form should do.
    ///
    /// Coordinates must parse; an email address is required only when
    /// notifications are enabled.
    pub fn plan_submission(&self) -> SubmitPlan {
        let Some(point) = self.parsed_point() else {
            return SubmitPlan::Invalid;
        };

        if !self.notifications_enabled {
            return SubmitPlan::Reposition(point);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return SubmitPlan::Invalid;
        }

        SubmitPlan::RepositionAndNotify(
            point,
            NotificationRequest {
                email: email.to_string(),
                lead_time: self.lead_time.hours(),
                bounding_box: NOTIFICATION_BOUNDING_BOX,
                cloud_coverage: clamp_cloud_coverage(self.cloud_coverage),
            },
        )
    }
}
