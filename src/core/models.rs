use serde::{Deserialize, Serialize};

/// A finalized summary as held by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub id: String,
    pub content: String,
    pub ctas: Vec<String>,
}

impl Summary {
    /// Creates a summary with a freshly generated identifier.
    #[must_use]
    pub fn new(content: String, ctas: Vec<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content,
            ctas,
        }
    }
}

/// Client-facing view of a stored summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub id: String,
    pub summary: String,
    pub ctas: Vec<String>,
}

impl From<&Summary> for SummaryResponse {
    fn from(summary: &Summary) -> Self {
        Self {
            id: summary.id.clone(),
            summary: summary.content.clone(),
            ctas: summary.ctas.clone(),
        }
    }
}

impl From<Summary> for SummaryResponse {
    fn from(summary: Summary) -> Self {
        Self {
            id: summary.id,
            summary: summary.content,
            ctas: summary.ctas,
        }
    }
}

/// Structured output the completion provider must produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionOutput {
    pub content: String,
    pub ctas: Vec<String>,
}

/// One entry of a batch response. Serializes as either
/// `{"summary": {...}}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchItem {
    Summary(SummaryResponse),
    Error(String),
}

impl BatchItem {
    #[must_use]
    pub fn summary(&self) -> Option<&SummaryResponse> {
        match self {
            BatchItem::Summary(s) => Some(s),
            BatchItem::Error(_) => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            BatchItem::Summary(_) => None,
            BatchItem::Error(e) => Some(e),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub items: Vec<BatchItem>,
}

/// Request body carrying one text to summarize.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TextToSummary {
    pub text_to_process: String,
}
