use axum::Json;
use serde::{Deserialize, Serialize};

use crate::formatting::{format_business_number, format_phone_number, format_registration_number};

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    Phone,
    BusinessNumber,
    RegistrationNumber,
}

#[derive(Deserialize)]
pub struct FormatRequest {
    pub kind: FormatKind,
    pub value: String,
}

#[derive(Serialize)]
pub struct FormatResponse {
    pub kind: FormatKind,
    pub formatted: String,
}

/// POST /api/v1/format
pub async fn handle_format(Json(req): Json<FormatRequest>) -> Json<FormatResponse> {
    let formatted = match req.kind {
        FormatKind::Phone => format_phone_number(&req.value),
        FormatKind::BusinessNumber => format_business_number(&req.value),
        FormatKind::RegistrationNumber => format_registration_number(&req.value),
    };
    Json(FormatResponse {
        kind: req.kind,
        formatted,
    })
}
