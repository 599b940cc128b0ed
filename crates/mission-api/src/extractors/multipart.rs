//! Multipart payload extractor
//!
//! Proof creation/edit and profile-image uploads arrive as multipart forms: a
//! `payload` part carrying the JSON request plus any number of `files` parts.
//! This extractor walks the fields once, validates the JSON, and buffers the
//! files in arrival order (order decides image slots).

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
};
use mission_core::traits::UploadFile;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Field name of the JSON part
const PAYLOAD_FIELD: &str = "payload";
/// Field name of the file parts
const FILES_FIELD: &str = "files";

/// A validated JSON payload plus uploaded files from a multipart form
#[derive(Debug)]
pub struct MultipartPayload<T> {
    pub payload: T,
    pub files: Vec<UploadFile>,
}

#[async_trait]
impl<S, T> FromRequest<S> for MultipartPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_multipart(e.to_string()))?;

        let mut payload: Option<T> = None;
        let mut files = Vec::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::invalid_multipart(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                PAYLOAD_FIELD => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| ApiError::invalid_multipart(e.to_string()))?;
                    let value: T = serde_json::from_str(&text)
                        .map_err(|e| ApiError::invalid_multipart(e.to_string()))?;
                    value.validate()?;
                    payload = Some(value);
                }
                FILES_FIELD => {
                    let file_name = field.file_name().unwrap_or("upload").to_string();
                    let content_type = field.content_type().map(ToString::to_string);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::invalid_multipart(e.to_string()))?;

                    if !bytes.is_empty() {
                        files.push(UploadFile::new(file_name, content_type, bytes.to_vec()));
                    }
                }
                _ => continue,
            }
        }

        let payload =
            payload.ok_or_else(|| ApiError::invalid_multipart("missing 'payload' field"))?;

        Ok(MultipartPayload { payload, files })
    }
}

/// A bare file upload (profile images): the first non-empty `files` part
#[derive(Debug)]
pub struct SingleFile(pub UploadFile);

#[async_trait]
impl<S> FromRequest<S> for SingleFile
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_multipart(e.to_string()))?;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::invalid_multipart(e.to_string()))?
        {
            if field.name() != Some(FILES_FIELD) {
                continue;
            }

            let file_name = field.file_name().unwrap_or("upload").to_string();
            let content_type = field.content_type().map(ToString::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::invalid_multipart(e.to_string()))?;

            if !bytes.is_empty() {
                return Ok(SingleFile(UploadFile::new(
                    file_name,
                    content_type,
                    bytes.to_vec(),
                )));
            }
        }

        Err(ApiError::invalid_multipart("missing 'files' field"))
    }
}
