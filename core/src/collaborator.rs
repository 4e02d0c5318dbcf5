//! Wire types shared with the query and report collaborators.
//!
//! The core never sends these. Callers that talk to the text-generation
//! backend use them so both sides agree on field names.

use crate::error::{SynthError, SynthResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub result: String,
}

/// Opaque, human-readable failure reported by a collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollaboratorError(pub String);

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for CollaboratorError {}

/// A generated report as `data:<mime>;base64,<payload>`.
///
/// The payload is kept encoded; decoding belongs to whoever saves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReportDataUri {
    pub mime:    String,
    pub payload: String,
}

fn is_base64_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=')
}

impl ReportDataUri {
    pub fn new(mime: impl Into<String>, payload: impl Into<String>) -> SynthResult<Self> {
        let uri = Self {
            mime:    mime.into(),
            payload: payload.into(),
        };
        uri.validate()?;
        Ok(uri)
    }

    fn validate(&self) -> SynthResult<()> {
        let malformed = |reason: &str| SynthError::MalformedDataUri {
            reason: reason.to_string(),
        };
        if self.mime.is_empty() || !self.mime.contains('/') {
            return Err(malformed("mime type must look like 'type/subtype'"));
        }
        if self.payload.is_empty() {
            return Err(malformed("empty payload"));
        }
        if !self.payload.bytes().all(is_base64_byte) {
            return Err(malformed("payload contains non-base64 characters"));
        }
        Ok(())
    }

    pub fn is_pdf(&self) -> bool {
        self.mime == "application/pdf"
    }
}

impl FromStr for ReportDataUri {
    type Err = SynthError;

    fn from_str(s: &str) -> SynthResult<Self> {
        let malformed = |reason: &str| SynthError::MalformedDataUri {
            reason: reason.to_string(),
        };
        let rest = s
            .strip_prefix("data:")
            .ok_or_else(|| malformed("missing 'data:' prefix"))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| malformed("missing ',' before payload"))?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or_else(|| malformed("only ';base64' payloads are supported"))?;
        Self::new(mime, payload)
    }
}

impl TryFrom<String> for ReportDataUri {
    type Error = SynthError;

    fn try_from(s: String) -> SynthResult<Self> {
        s.parse()
    }
}

impl From<ReportDataUri> for String {
    fn from(uri: ReportDataUri) -> Self {
        uri.to_string()
    }
}

impl fmt::Display for ReportDataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime, self.payload)
    }
}
