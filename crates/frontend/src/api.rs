//! Backend calls for the dashboard.

use std::fmt;

use gloo_net::http::Request;
use web_types::{PredictResponse, predict_endpoint};

/// The image chosen in the upload card, plus its preview object URL.
#[derive(Clone, PartialEq)]
pub struct SelectedImage {
    pub file: web_sys::File,
    pub preview_url: String,
}

impl SelectedImage {
    /// Wrap a picked file and create a browser object URL for the preview.
    pub fn from_file(file: web_sys::File) -> Result<Self, PredictError> {
        let preview_url = web_sys::Url::create_object_url_with_blob(&file)
            .map_err(|err| PredictError::Browser(format!("{:?}", err)))?;

        Ok(Self { file, preview_url })
    }

    pub fn file_name(&self) -> String {
        self.file.name()
    }
}

/// Why a prediction request failed.
///
/// All variants surface to the user as the same connectivity message; the
/// detail only goes to the browser console.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// Browser-side failure building the request or the preview.
    Browser(String),
    /// The request never produced a response.
    Network(String),
    /// Backend answered with a non-2xx status.
    Status(u16),
    /// Backend answered 2xx but flagged the run as failed in-band.
    Backend(String),
    /// Response body was not the expected JSON shape.
    Decode(String),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::Browser(detail) => write!(f, "browser error: {}", detail),
            PredictError::Network(detail) => write!(f, "request failed: {}", detail),
            PredictError::Status(code) => write!(f, "backend returned status {}", code),
            PredictError::Backend(message) => write!(f, "backend reported error: {}", message),
            PredictError::Decode(detail) => write!(f, "unexpected response body: {}", detail),
        }
    }
}

/// POST the selected image to `{backend}/predict` and parse the reply.
pub async fn request_prediction(
    backend_url: &str,
    file: &web_sys::File,
) -> Result<PredictResponse, PredictError> {
    let form = web_sys::FormData::new()
        .map_err(|err| PredictError::Browser(format!("{:?}", err)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|err| PredictError::Browser(format!("{:?}", err)))?;

    let response = Request::post(&predict_endpoint(backend_url))
        .body(form)
        .map_err(|err| PredictError::Browser(err.to_string()))?
        .send()
        .await
        .map_err(|err| PredictError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(PredictError::Status(response.status()));
    }

    let data: PredictResponse = response
        .json()
        .await
        .map_err(|err| PredictError::Decode(err.to_string()))?;

    if data.is_error() {
        return Err(PredictError::Backend(data.message));
    }

    Ok(data)
}
