use serde::{Deserialize, Serialize};

/// One degree entry, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    pub degree_type: String,
    pub degree_subject: String,
}

/// A resume record as returned by the backend.
///
/// Ids are server-assigned and never fabricated client-side. `degrees`,
/// `skills` and `pdf_path` default when absent so partial payloads still
/// render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub occupation: String,
    pub city: String,
    pub exp_years: u32,
    pub status: String,
    #[serde(default)]
    pub pdf_path: String,
    #[serde(default)]
    pub degrees: Vec<Degree>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Resume {
    /// A blank `pdf_path` means there is no downloadable artifact; PDF
    /// controls must not render and no retrieval request may be issued.
    pub fn has_pdf(&self) -> bool {
        !self.pdf_path.trim().is_empty()
    }

    /// CSS class for the status badge. The status set is open-ended at the
    /// client; unknown labels get the default style.
    pub fn status_class(&self) -> &'static str {
        match self.status.as_str() {
            "accepted" => "badge-accepted",
            "rejected" => "badge-rejected",
            "pending" => "badge-pending",
            _ => "badge-default",
        }
    }
}
