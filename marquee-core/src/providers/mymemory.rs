use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use marquee_config::TranslatorConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use super::{BackTranslator, ProviderError};

/// MyMemory free-tier translation client.
///
/// Quota exhaustion trips a process-wide breaker that is never reset.
pub struct MyMemoryTranslator {
    http: reqwest::Client,
    base_url: Url,
    contact_email: Option<String>,
    quota_exhausted: AtomicBool,
}

impl fmt::Debug for MyMemoryTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MyMemoryTranslator")
            .field("base_url", &self.base_url.as_str())
            .field("quota_exhausted", &self.is_quota_exhausted())
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct TranslateQuery<'a> {
    q: &'a str,
    langpair: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    de: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StatusField {
    Code(u16),
    Text(String),
}

impl StatusField {
    fn code(&self) -> Option<u16> {
        match self {
            StatusField::Code(code) => Some(*code),
            StatusField::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    #[serde(default)]
    response_data: Option<ResponseData>,
    #[serde(default)]
    response_status: Option<StatusField>,
    #[serde(default)]
    response_details: Option<String>,
    #[serde(default)]
    quota_finished: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    #[serde(default)]
    translated_text: Option<String>,
}

/// MyMemory wants bare ISO 639-1 codes, except for the two Chinese scripts.
fn service_language(tag: &str) -> String {
    let tag = tag.trim().replace('_', "-");
    let mut parts = tag.split('-');
    let base = parts.next().unwrap_or_default().to_ascii_lowercase();
    if base == "zh" {
        let region = parts.next().unwrap_or("CN").to_ascii_uppercase();
        return match region.as_str() {
            "TW" | "HK" | "MO" => "zh-TW".to_string(),
            _ => "zh-CN".to_string(),
        };
    }
    base
}

fn decode_entities(text: &str) -> String {
    text.replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

fn interpret(body: TranslateResponse) -> Result<Option<String>, ProviderError> {
    let status = body.response_status.as_ref().and_then(StatusField::code);
    if body.quota_finished == Some(true) || status == Some(429) {
        return Err(ProviderError::QuotaExhausted);
    }

    if let Some(code) = status.filter(|code| *code != 200) {
        let details = body
            .response_details
            .unwrap_or_else(|| format!("status {code}"));
        return Err(ProviderError::ApiError(details));
    }

    Ok(body
        .response_data
        .and_then(|data| data.translated_text)
        .map(|text| decode_entities(text.trim()))
        .filter(|text| !text.is_empty()))
}

impl MyMemoryTranslator {
    pub fn new(config: &TranslatorConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            contact_email: config.contact_email.clone(),
            quota_exhausted: AtomicBool::new(false),
        })
    }

    fn trip_breaker(&self) {
        if !self.quota_exhausted.swap(true, Ordering::SeqCst) {
            warn!("MyMemory quota exhausted; back-translation disabled");
        }
    }
}

#[async_trait]
impl BackTranslator for MyMemoryTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Option<String>, ProviderError> {
        if self.is_quota_exhausted() {
            return Err(ProviderError::QuotaExhausted);
        }

        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let (from, to) = (service_language(from), service_language(to));
        if from.is_empty() || to.is_empty() {
            return Err(ProviderError::Unsupported(format!("{from}|{to}")));
        }
        if from == to {
            debug!(pair = %from, "same-language pair; nothing to translate");
            return Ok(None);
        }

        let langpair = format!("{from}|{to}");
        let query = TranslateQuery {
            q: text,
            langpair: &langpair,
            de: self.contact_email.as_deref(),
        };
        let url =
            format!("{}/get", self.base_url.as_str().trim_end_matches('/'));

        let response = self.http.get(&url).query(&query).send().await?;
        if response.status().as_u16() == 429 {
            self.trip_breaker();
            return Err(ProviderError::QuotaExhausted);
        }

        let body = response.text().await?;
        let parsed: TranslateResponse = serde_json::from_str(&body)
            .map_err(|err| ProviderError::ParseError(err.to_string()))?;

        let outcome = interpret(parsed);
        if matches!(outcome, Err(ProviderError::QuotaExhausted)) {
            self.trip_breaker();
        }
        outcome
    }

    fn is_quota_exhausted(&self) -> bool {
        self.quota_exhausted.load(Ordering::SeqCst)
    }
}
