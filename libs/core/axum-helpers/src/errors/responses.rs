//! Reusable OpenAPI response types for consistent API documentation.

use crate::envelope::ApiEnvelope;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Server Error"
    })
)]
pub struct InternalServerErrorResponse(pub ApiEnvelope<serde_json::Value>);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Provide all mandate fields"
    })
)]
pub struct BadRequestValidationResponse(pub ApiEnvelope<serde_json::Value>);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid Identifier",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Invalid product id"
    })
)]
pub struct BadRequestIdResponse(pub ApiEnvelope<serde_json::Value>);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Product not found"
    })
)]
pub struct NotFoundResponse(pub ApiEnvelope<serde_json::Value>);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Service is temporarily unavailable"
    })
)]
pub struct ServiceUnavailableResponse(pub ApiEnvelope<serde_json::Value>);
