//! Finished network request, as delivered by DevTools `onRequestFinished`.
//!
//! The shape is the HAR 1.2 entry shape, so the same type is used for
//! live NDJSON streams and for entries read from a HAR file.

use serde::Deserialize;

use crate::classifier::ClassifyError;
use crate::event::Param;

#[derive(Debug, Clone, Deserialize)]
pub struct FinishedRequest {
    pub request: RequestInfo,
    #[serde(default)]
    pub response: ResponseInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestInfo {
    #[serde(default = "default_method")]
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub post_data: Option<PostData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseInfo {
    #[serde(default)]
    pub status: u16,
}

fn default_method() -> String {
    "GET".to_string()
}

impl FinishedRequest {
    /// Convenience constructor for a GET with the given status.
    pub fn get(url: impl Into<String>, status: u16) -> Self {
        Self {
            request: RequestInfo {
                method: default_method(),
                url: url.into(),
                post_data: None,
            },
            response: ResponseInfo { status },
        }
    }

    /// Convenience constructor for a form-encoded POST with the given status.
    pub fn post_form(url: impl Into<String>, body: impl Into<String>, status: u16) -> Self {
        Self {
            request: RequestInfo {
                method: "POST".to_string(),
                url: url.into(),
                post_data: Some(PostData {
                    mime_type: Some("application/x-www-form-urlencoded".to_string()),
                    text: Some(body.into()),
                }),
            },
            response: ResponseInfo { status },
        }
    }
}

impl RequestInfo {
    /// Ordered query parameters: the URL query for GET, the form body otherwise.
    ///
    /// Only a GET parses the URL, so only a GET can fail here.
    pub fn search_params(&self) -> Result<Vec<Param>, ClassifyError> {
        if self.method.eq_ignore_ascii_case("GET") {
            let parsed = url::Url::parse(&self.url).map_err(|source| ClassifyError::InvalidUrl {
                url: self.url.clone(),
                source,
            })?;
            return Ok(parsed
                .query_pairs()
                .map(|(k, v)| Param::new(k, v))
                .collect());
        }

        let body = self
            .post_data
            .as_ref()
            .and_then(|p| p.text.as_deref())
            .filter(|t| !t.is_empty());
        Ok(match body {
            Some(text) => url::form_urlencoded::parse(text.as_bytes())
                .map(|(k, v)| Param::new(k, v))
                .collect(),
            None => Vec::new(),
        })
    }
}
