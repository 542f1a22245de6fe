//! Generation types and the upstream dispatch table
//!
//! Maps the caller-supplied `type` tag to a fixed Gemini model and call shape.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Text model used for analysis and copywriting
pub const TEXT_MODEL: &str = "gemini-2.5-flash-preview-05-20";
/// Multimodal model used to composite product shots into ad images
pub const IMAGE_COMPOSITE_MODEL: &str = "gemini-2.5-flash-image-preview";
/// Image generation model
pub const IMAGE_GEN_MODEL: &str = "imagen-3.0-generate-002";

/// Recognized generation type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum GenerationType {
    ProductAnalysis,
    AdCopy,
    CampaignText,
    AdImageComposite,
    CampaignVisual,
}

impl GenerationType {
    pub const ALL: [GenerationType; 5] = [
        GenerationType::ProductAnalysis,
        GenerationType::AdCopy,
        GenerationType::CampaignText,
        GenerationType::AdImageComposite,
        GenerationType::CampaignVisual,
    ];

    /// Wire name of the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationType::ProductAnalysis => "productAnalysis",
            GenerationType::AdCopy => "adCopy",
            GenerationType::CampaignText => "campaignText",
            GenerationType::AdImageComposite => "adImageComposite",
            GenerationType::CampaignVisual => "campaignVisual",
        }
    }

    /// Upstream model and method this tag dispatches to
    pub fn target(&self) -> UpstreamTarget {
        match self {
            GenerationType::ProductAnalysis
            | GenerationType::AdCopy
            | GenerationType::CampaignText => UpstreamTarget {
                model: TEXT_MODEL,
                method: UpstreamMethod::GenerateContent,
            },
            GenerationType::AdImageComposite => UpstreamTarget {
                model: IMAGE_COMPOSITE_MODEL,
                method: UpstreamMethod::GenerateContent,
            },
            GenerationType::CampaignVisual => UpstreamTarget {
                model: IMAGE_GEN_MODEL,
                method: UpstreamMethod::Predict,
            },
        }
    }
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GenerationType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(AppError::InvalidType)
    }
}

/// Call shape on the model resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamMethod {
    GenerateContent,
    Predict,
}

impl UpstreamMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpstreamMethod::GenerateContent => "generateContent",
            UpstreamMethod::Predict => "predict",
        }
    }
}

/// Resolved upstream endpoint for a generation type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTarget {
    pub model: &'static str,
    pub method: UpstreamMethod,
}

impl UpstreamTarget {
    /// Path relative to the API base URL, e.g. `/models/imagen-3.0-generate-002:predict`.
    ///
    /// Carries no credentials, so it is safe to log.
    pub fn path(&self) -> String {
        format!("/models/{}:{}", self.model, self.method.as_str())
    }
}

/// Inbound relay request
///
/// `type` stays a raw string here: an unknown or missing tag is only rejected
/// after the API key check, while a body that does not fit this shape at all is
/// rejected before it.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GenerateRequest {
    /// Generation type tag selecting the upstream model
    #[serde(rename = "type", default)]
    #[schema(example = "adCopy")]
    pub kind: Option<String>,
    /// Opaque payload forwarded verbatim to the upstream
    #[serde(default)]
    #[schema(value_type = Object)]
    pub payload: serde_json::Value,
}

impl GenerateRequest {
    /// Parse a raw request body
    pub fn from_slice(body: &[u8]) -> Result<Self, AppError> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(AppError::MalformedBody)?;

        // Derived struct impls also accept arrays
        if !value.is_object() {
            return Err(AppError::MalformedBody(de::Error::custom(
                "expected a JSON object",
            )));
        }

        serde_json::from_value(value).map_err(AppError::MalformedBody)
    }

    /// Resolve the type tag against the dispatch table
    pub fn generation_type(&self) -> Result<GenerationType, AppError> {
        self.kind
            .as_deref()
            .ok_or(AppError::InvalidType)?
            .parse()
    }
}
