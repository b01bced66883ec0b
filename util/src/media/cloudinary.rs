use super::{MediaError, MediaKind, MediaStore, MediaUpload, StoredMedia, public_id_from_url};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

const API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Signed uploads to Cloudinary's REST API.
#[derive(Clone)]
pub struct CloudinaryStore {
    client: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    url: String,
    public_id: String,
    duration: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

impl CloudinaryStore {
    pub fn new(cloud_name: String, api_key: String, api_secret: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            cloud_name,
            api_key,
            api_secret,
            api_base: API_BASE.to_string(),
        }
    }

    /// Points the store at a different API host (used against mock servers).
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self, resource_type: &str, action: &str) -> String {
        format!("{}/{}/{}/{}", self.api_base, self.cloud_name, resource_type, action)
    }

    fn timestamp() -> String {
        chrono::Utc::now().timestamp().to_string()
    }
}

/// Request signature: params sorted by key, joined as `k=v&k=v`, secret appended, SHA-256 hex.
pub fn sign_params(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<_> = params.iter().filter(|(_, v)| !v.is_empty()).collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[async_trait]
impl MediaStore for CloudinaryStore {
    async fn upload(&self, file: MediaUpload) -> Result<StoredMedia, MediaError> {
        file.validate()?;

        let timestamp = Self::timestamp();
        let signature = sign_params(&[("timestamp", timestamp.as_str())], &self.api_secret);
        let mime = file.mime();

        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.file_name.clone())
            .mime_str(&mime)?;
        let form = Form::new()
            .part("file", part)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        let resp = self
            .client
            .post(self.endpoint("auto", "upload"))
            .multipart(form)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %body, "Cloudinary upload rejected");
            return Err(MediaError::Upload(format!("{status}: {body}")));
        }

        let body: UploadResponse = resp.json().await?;
        Ok(StoredMedia {
            url: body.secure_url.unwrap_or(body.url),
            public_id: body.public_id,
            duration: body.duration,
        })
    }

    async fn delete(&self, url: &str, kind: MediaKind) -> Result<(), MediaError> {
        let public_id = public_id_from_url(url)
            .ok_or_else(|| MediaError::Delete(format!("no public id in {url}")))?;
        let timestamp = Self::timestamp();
        let signature = sign_params(
            &[("public_id", public_id.as_str()), ("timestamp", timestamp.as_str())],
            &self.api_secret,
        );

        let resp = self
            .client
            .post(self.endpoint(kind.resource_type(), "destroy"))
            .form(&[
                ("public_id", public_id.as_str()),
                ("timestamp", timestamp.as_str()),
                ("api_key", self.api_key.as_str()),
                ("signature", signature.as_str()),
                ("signature_algorithm", "sha256"),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(MediaError::Delete(format!("status {}", resp.status())));
        }

        let body: DestroyResponse = resp.json().await?;
        match body.result.as_str() {
            "ok" | "not found" => Ok(()),
            other => Err(MediaError::Delete(other.to_string())),
        }
    }
}
