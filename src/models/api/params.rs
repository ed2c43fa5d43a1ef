use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}
