//! HTTP client for the imagery service.
//!
//! Uses channel-based communication to bridge async requests with
//! egui's synchronous update loop. Requests run on background threads
//! natively and as spawned futures on WASM.

use super::types::{ApiResult, ImageryEndpoint, ImageryQuery, NotificationRequest, API_BASE_URL};
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};
use web_time::Instant;

/// Path of the service liveness probe.
const PROBE_PATH: &str = "/api/test";

fn probe_url() -> String {
    format!("{}{}", API_BASE_URL, PROBE_PATH)
}

/// Channel-based client for the imagery service.
pub struct ApiChannel {
    sender: Sender<ApiResult>,
    receiver: Receiver<ApiResult>,
}

impl Default for ApiChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Issues both imagery requests for a query.
    ///
    /// The image and data endpoints are fetched independently; each
    /// completion or failure arrives as its own [`ApiResult`].
    pub fn fetch_imagery(&self, ctx: &egui::Context, query: &ImageryQuery) {
        for endpoint in ImageryEndpoint::all() {
            self.spawn_imagery(ctx.clone(), *endpoint, query.clone());
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn_imagery(&self, ctx: egui::Context, endpoint: ImageryEndpoint, query: ImageryQuery) {
        let sender = self.sender.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = imagery_request(endpoint, &query).await;
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn_imagery(&self, ctx: egui::Context, endpoint: ImageryEndpoint, query: ImageryQuery) {
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let result = imagery_request_blocking(endpoint, &query);
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Submits an email notification request.
    #[cfg(target_arch = "wasm32")]
    pub fn submit_notification(&self, ctx: &egui::Context, request: NotificationRequest) {
        let sender = self.sender.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = notification_request(&request).await;
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Submits an email notification request.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn submit_notification(&self, ctx: &egui::Context, request: NotificationRequest) {
        let sender = self.sender.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let result = notification_request_blocking(&request);
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Issues the service liveness probe.
    #[cfg(target_arch = "wasm32")]
    pub fn probe(&self, ctx: &egui::Context) {
        let sender = self.sender.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = probe_request().await;
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Issues the service liveness probe.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn probe(&self, ctx: &egui::Context) {
        let sender = self.sender.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let result = probe_request_blocking();
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Non-blocking check for a completed request.
    pub fn try_recv(&self) -> Option<ApiResult> {
        self.receiver.try_recv().ok()
    }
}

#[cfg(target_arch = "wasm32")]
async fn imagery_request(endpoint: ImageryEndpoint, query: &ImageryQuery) -> ApiResult {
    let url = query.url(endpoint);
    log::debug!("GET {}", url);
    let started = Instant::now();

    let response = match reqwest::get(&url).await {
        Ok(response) => response,
        Err(e) => {
            return ApiResult::ImageryFailed {
                endpoint,
                body: None,
                detail: format!("Request failed: {}", e),
            }
        }
    };

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.ok().filter(|b| !b.trim().is_empty());
        return ApiResult::ImageryFailed {
            endpoint,
            body,
            detail: format!("HTTP {}", status),
        };
    }

    match response.bytes().await {
        Ok(bytes) => ApiResult::ImageryLoaded {
            endpoint,
            bytes: bytes.len(),
            latency_ms: started.elapsed().as_secs_f64() * 1000.0,
        },
        Err(e) => ApiResult::ImageryFailed {
            endpoint,
            body: None,
            detail: format!("Read failed: {}", e),
        },
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn imagery_request_blocking(endpoint: ImageryEndpoint, query: &ImageryQuery) -> ApiResult {
    let url = query.url(endpoint);
    log::debug!("GET {}", url);
    let started = Instant::now();

    let response = match reqwest::blocking::get(&url) {
        Ok(response) => response,
        Err(e) => {
            return ApiResult::ImageryFailed {
                endpoint,
                body: None,
                detail: format!("Request failed: {}", e),
            }
        }
    };

    let status = response.status();
    if !status.is_success() {
        let body = response.text().ok().filter(|b| !b.trim().is_empty());
        return ApiResult::ImageryFailed {
            endpoint,
            body,
            detail: format!("HTTP {}", status),
        };
    }

    match response.bytes() {
        Ok(bytes) => ApiResult::ImageryLoaded {
            endpoint,
            bytes: bytes.len(),
            latency_ms: started.elapsed().as_secs_f64() * 1000.0,
        },
        Err(e) => ApiResult::ImageryFailed {
            endpoint,
            body: None,
            detail: format!("Read failed: {}", e),
        },
    }
}

#[cfg(target_arch = "wasm32")]
async fn notification_request(request: &NotificationRequest) -> ApiResult {
    let url = NotificationRequest::url();
    log_notification_payload(request);

    let response = match reqwest::Client::new().post(&url).json(request).send().await {
        Ok(response) => response,
        Err(e) => {
            return ApiResult::NotificationFailed {
                detail: format!("Request failed: {}", e),
            }
        }
    };

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status.is_success() {
        ApiResult::NotificationAccepted { body }
    } else {
        ApiResult::NotificationFailed {
            detail: format!("HTTP {}: {}", status, body.trim()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn notification_request_blocking(request: &NotificationRequest) -> ApiResult {
    let url = NotificationRequest::url();
    log_notification_payload(request);

    let response = match reqwest::blocking::Client::new()
        .post(&url)
        .json(request)
        .send()
    {
        Ok(response) => response,
        Err(e) => {
            return ApiResult::NotificationFailed {
                detail: format!("Request failed: {}", e),
            }
        }
    };

    let status = response.status();
    let body = response.text().unwrap_or_default();

    if status.is_success() {
        ApiResult::NotificationAccepted { body }
    } else {
        ApiResult::NotificationFailed {
            detail: format!("HTTP {}: {}", status, body.trim()),
        }
    }
}

fn log_notification_payload(request: &NotificationRequest) {
    if let Ok(body) = serde_json::to_string_pretty(request) {
        log::debug!("Notification payload: {}", body);
    }
}

#[cfg(target_arch = "wasm32")]
async fn probe_request() -> ApiResult {
    let url = probe_url();
    log::debug!("GET {}", url);

    let response = match reqwest::get(&url).await {
        Ok(response) => response,
        Err(e) => {
            return ApiResult::ProbeFailed {
                detail: format!("Request failed: {}", e),
            }
        }
    };

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status.is_success() {
        ApiResult::ProbeCompleted { body }
    } else {
        ApiResult::ProbeFailed {
            detail: format!("HTTP {}", status),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn probe_request_blocking() -> ApiResult {
    let url = probe_url();
    log::debug!("GET {}", url);

    let response = match reqwest::blocking::get(&url) {
        Ok(response) => response,
        Err(e) => {
            return ApiResult::ProbeFailed {
                detail: format!("Request failed: {}", e),
            }
        }
    };

    let status = response.status();
    let body = response.text().unwrap_or_default();

    if status.is_success() {
        ApiResult::ProbeCompleted { body }
    } else {
        ApiResult::ProbeFailed {
            detail: format!("HTTP {}", status),
        }
    }
}
