use anyhow::Context;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Url;

use crate::core::interfaces::adapters::SearchTransport;
use crate::core::models::{SearchError, SearchRequest, SearchResult, TransportError, UserSettings};
use crate::global_constants;

pub struct HttpSearchTransport {
    client: reqwest::Client,
    backend_url: String,
    search_endpoint: Url,
}

impl HttpSearchTransport {
    pub fn build(settings: &UserSettings) -> anyhow::Result<Self> {
        let search_endpoint = parse_search_endpoint(settings)?;
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout())
            .build()?;

        log::info!("[TRANSPORT] Search endpoint: {}", search_endpoint);

        Ok(Self {
            client,
            backend_url: settings.backend_url.clone(),
            search_endpoint,
        })
    }

    fn build_form(&self, request: &SearchRequest) -> Result<Form, SearchError> {
        let mut form = Form::new();

        if let Some(text) = request.text() {
            form = form.text(global_constants::FORM_FIELD_QUERY, text.to_string());
        }

        if let Some(image) = request.image() {
            let part = Part::bytes(image.bytes().to_vec())
                .file_name(image.file_name.clone())
                .mime_str(&image.media_type)
                .map_err(|error| {
                    SearchError::unexpected(format!(
                        "Invalid media type {:?} for {}: {}",
                        image.media_type, image.file_name, error
                    ))
                })?;
            form = form.part(global_constants::FORM_FIELD_IMAGE, part);
        }

        Ok(form)
    }

    fn classify_send_error(&self, error: reqwest::Error) -> SearchError {
        if error.is_builder() {
            return SearchError::unexpected(error.to_string());
        }

        TransportError::NetworkUnreachable {
            endpoint: self.backend_url.clone(),
            reason: error.to_string(),
        }
        .into()
    }
}

fn parse_search_endpoint(settings: &UserSettings) -> anyhow::Result<Url> {
    let endpoint = settings.search_endpoint();
    let url = Url::parse(&endpoint)
        .with_context(|| format!("Invalid backend URL {:?}", settings.backend_url))?;

    // "localhost:8000" parses with "localhost" as its scheme.
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!(
            "Invalid backend URL {:?}: expected an http:// or https:// address",
            settings.backend_url
        );
    }

    Ok(url)
}

/// The phrase the server sent, which hyper only records when it differs from the canonical one.
fn reason_phrase(response: &reqwest::Response) -> String {
    response
        .extensions()
        .get::<hyper::ext::ReasonPhrase>()
        .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned())
        .or_else(|| response.status().canonical_reason().map(str::to_string))
        .unwrap_or_default()
}

#[async_trait]
impl SearchTransport for HttpSearchTransport {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        let form = self.build_form(request)?;

        log::info!("[TRANSPORT] POST {}", self.search_endpoint);
        log::debug!(
            "[TRANSPORT] query={:?}, image={:?}",
            request.text(),
            request.image()
        );

        let response = self
            .client
            .post(self.search_endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|error| self.classify_send_error(error))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("[TRANSPORT] Search service answered {}", status);
            return Err(TransportError::ServerError {
                status: status.as_u16(),
                status_text: reason_phrase(&response),
            }
            .into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| TransportError::MalformedResponse {
                reason: error.to_string(),
            })?;

        let result: SearchResult =
            serde_json::from_slice(&body).map_err(|error| TransportError::MalformedResponse {
                reason: error.to_string(),
            })?;

        log::info!(
            "[TRANSPORT] Received answer with {} images",
            result.images.len()
        );
        Ok(result)
    }
}
