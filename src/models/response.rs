use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavePropertyResponse {
    pub success: bool,
    pub id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePropertyResponse {
    pub success: bool,
}
