//! # auxchat-providers
//!
//! `reqwest` based implementations of the outbound ports declared in
//! `auxchat-core`: SMS delivery, image hosting and object storage.
//! Every client carries a request timeout and a connect timeout.

mod http;
pub mod image_host;
pub mod object_storage;
pub mod sms;

use std::sync::Arc;

use auxchat_common::SmsConfig;
use auxchat_core::SmsGateway;

pub use image_host::ImgbbImageHost;
pub use object_storage::HttpObjectStorage;
pub use sms::{LogSmsGateway, SmsRuGateway};

/// Pick the SMS gateway for a configuration: the SMS.RU client when an API
/// key is set, otherwise a gateway that only logs messages.
pub fn sms_gateway_from_config(config: &SmsConfig) -> Result<Arc<dyn SmsGateway>, reqwest::Error> {
    Ok(match &config.api_key {
        Some(api_key) => Arc::new(SmsRuGateway::new(
            &config.base_url,
            api_key,
            config.timeout_secs,
        )?),
        None => {
            tracing::warn!("SMSRU_API_KEY is not set, verification codes will only be logged");
            Arc::new(LogSmsGateway)
        }
    })
}
