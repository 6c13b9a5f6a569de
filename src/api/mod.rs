//! Imagery service API.
//!
//! Wire types and a dual-target HTTP client for the acquisition
//! service. All requests report back through [`ApiChannel`] so the UI
//! never blocks on the network.

mod client;
mod types;

pub use client::ApiChannel;
pub use types::{
    ApiResult, ImageryEndpoint, ImageryQuery, NotificationRequest, NOTIFICATION_BOUNDING_BOX,
};
