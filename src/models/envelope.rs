// Caller-facing response envelopes. Transport-agnostic: an HTTP layer maps
// ErrorClass onto its status space, the CLI prints these as JSON.

use crate::error::RfpLensError;
use crate::models::{AnalysisResult, ChatReply};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorBody {
    pub fn from_error(error: &RfpLensError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl UploadResponse {
    pub fn ok(result: &AnalysisResult) -> Self {
        Self {
            success: true,
            analysis: Some(result.analysis.clone()),
            filename: Some(result.filename.clone()),
            text_length: Some(result.text_length),
            error: None,
        }
    }

    pub fn err(error: &RfpLensError) -> Self {
        Self {
            success: false,
            analysis: None,
            filename: None,
            text_length: None,
            error: Some(ErrorBody::from_error(error)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl ChatResponse {
    pub fn ok(reply: &ChatReply) -> Self {
        Self {
            success: true,
            response: Some(reply.response.clone()),
            error: None,
        }
    }

    pub fn err(error: &RfpLensError) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(ErrorBody::from_error(error)),
        }
    }
}
