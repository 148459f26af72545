//! RSVP Commands
//!
//! Delivery of a submitted RSVP to wherever the couple collects them.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use wedding_core::{RsvpPayload, SinkError};

/// Characters left as-is in `application/x-www-form-urlencoded` values.
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsvpSink {
    /// POST the answers as a form to an HTTP endpoint.
    Http { endpoint: String },
    /// Log the answers and acknowledge straight away.
    Console,
}

impl RsvpSink {
    pub fn from_endpoint(endpoint: Option<&str>) -> Self {
        match endpoint {
            Some(endpoint) => Self::Http { endpoint: endpoint.to_string() },
            None => Self::Console,
        }
    }

    pub async fn deliver(&self, payload: &RsvpPayload) -> Result<(), SinkError> {
        match self {
            Self::Http { endpoint } => post_form(endpoint, &encode_form(payload)).await,
            Self::Console => {
                let data = serde_wasm_bindgen::to_value(payload).map_err(|e| SinkError::Encode(e.to_string()))?;
                web_sys::console::log_2(&"RSVP Submitted:".into(), &data);
                log::info!(target: "rsvp", "no endpoint configured, RSVP kept in the console only");
                Ok(())
            }
        }
    }
}

/// `key=value&...` with every value percent-encoded.
pub fn encode_form(payload: &RsvpPayload) -> String {
    payload
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, FORM_ENCODE_SET),
                utf8_percent_encode(value, FORM_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

async fn post_form(endpoint: &str, body: &str) -> Result<(), SinkError> {
    let window = web_sys::window().ok_or_else(|| SinkError::Network("no window".to_string()))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(endpoint, &init).map_err(network_error)?;
    request
        .headers()
        .set("Content-Type", "application/x-www-form-urlencoded")
        .map_err(network_error)?;
    request.headers().set("Accept", "application/json").map_err(network_error)?;

    let response = JsFuture::from(window.fetch_with_request(&request)).await.map_err(network_error)?;
    let response: Response = response.dyn_into().map_err(network_error)?;

    log::info!(target: "rsvp", "endpoint answered {}", response.status());
    if response.ok() {
        Ok(())
    } else {
        Err(SinkError::Rejected(response.status()))
    }
}

fn network_error(e: JsValue) -> SinkError {
    SinkError::Network(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}
