use serde::{Deserialize, Serialize};

/// Body of `POST /generate_trip`. Date, day, and budget fields carry the raw
/// form text; the backend owns any further coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateTripRequest {
    pub destination: String,
    pub from_date: String,
    pub to_date: String,
    pub days: String,
    pub budget: String,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateTripResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}
