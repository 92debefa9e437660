use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// Tag for grouping the endpoint directory in OpenAPI documentation
pub static API_DOCS_TAG: &str = "api-docs";

fn qr_apis() -> Value {
    json!({
        "QR System APIs": [
            {
                "method": "GET",
                "endpoint": "/api/qr/{business_code}/{table_code}",
                "description": "Get business and table information for a scanned QR code",
                "parameters": {
                    "business_code": "Public business code printed on the QR",
                    "table_code": "Table unique code"
                },
                "response": {
                    "business": { "id": 1, "name": "Casa Pepe", "code": "AB12CD34", "logo": null },
                    "table": { "id": 1, "number": 1, "name": "Table 1", "code": "aVnyOv" }
                }
            },
            {
                "method": "GET",
                "endpoint": "/api/table/{id}/status",
                "description": "Get whether a table has a waiter, is silenced or has a pending call"
            },
            {
                "method": "POST",
                "endpoint": "/api/tables/{id}/call-waiter",
                "description": "Call the waiter assigned to a table",
                "body": {
                    "message": "optional, up to 500 characters",
                    "urgency": "low | normal | high"
                }
            }
        ]
    })
}

fn waiter_apis() -> Value {
    json!({
        "message": "Waiter notification APIs documentation",
        "note": "Use the /api/waiter endpoints for table activation, calls, silences and IP blocks"
    })
}

fn endpoints() -> Value {
    json!({
        "auth": ["POST /api/register", "POST /api/login", "POST /api/logout", "GET /api/user"],
        "businesses": [
            "GET /api/businesses",
            "POST /api/businesses",
            "GET /api/businesses/{id}",
            "PUT /api/businesses/{id}",
            "DELETE /api/businesses/{id}",
            "POST /api/businesses/join",
            "POST /api/businesses/switch"
        ],
        "role": ["POST /api/role/select"],
        "tables": [
            "GET /api/tables",
            "POST /api/tables",
            "PUT /api/tables/{id}",
            "DELETE /api/tables/{id}",
            "POST /api/tables/{id}/toggle-notifications"
        ],
        "waiter": [
            "GET /api/waiter/businesses",
            "GET /api/waiter/businesses/{id}/tables",
            "POST /api/waiter/businesses/{id}/leave",
            "POST /api/waiter/tables/{id}/activate",
            "DELETE /api/waiter/tables/{id}/activate",
            "POST /api/waiter/tables/activate/multiple",
            "POST /api/waiter/tables/deactivate/multiple",
            "GET /api/waiter/tables/assigned",
            "GET /api/waiter/tables/available",
            "POST /api/waiter/tables/{id}/silence",
            "DELETE /api/waiter/tables/{id}/silence",
            "GET /api/waiter/tables/silenced",
            "POST /api/waiter/tables/silence/multiple",
            "POST /api/waiter/tables/unsilence/multiple",
            "POST /api/waiter/calls/{id}/acknowledge",
            "POST /api/waiter/calls/{id}/complete",
            "GET /api/waiter/calls/pending",
            "GET /api/waiter/calls/history",
            "POST /api/waiter/ip/block",
            "POST /api/waiter/ip/unblock",
            "GET /api/waiter/ip/blocked"
        ],
        "admin": [
            "POST /api/admin/send-test-notification",
            "POST /api/admin/send-notification-to-user",
            "GET /api/admin/calls/history",
            "GET /api/admin/tables/silenced",
            "DELETE /api/admin/tables/{id}/silence",
            "GET /api/admin/ip/debug",
            "POST /api/admin/ip/force-unblock"
        ],
        "notifications": [
            "POST /api/device-token",
            "DELETE /api/device-token",
            "GET /api/user/notifications",
            "POST /api/user/notifications/{id}/read"
        ],
        "public": [
            "GET /api/firebase/config",
            "GET /api/firebase/table/{id}/config",
            "GET /api/plans",
            "GET /api/plans/pricing",
            "GET /api/plans/{id}",
            "GET /api/qr/{business_code}/{table_code}",
            "GET /api/table/{id}/status",
            "POST /api/tables/{id}/call-waiter"
        ],
        "docs": ["GET /api/api-docs", "GET /api/api-docs/qr", "GET /api/api-docs/waiter", "GET /api/docs"]
    })
}

/// Get the directory of available endpoints.
#[utoipa::path(
    get,
    path = "/api/api-docs",
    tag = API_DOCS_TAG,
    responses(
        (status = 200, description = "Endpoint directory", body = Object)
    ),
)]
pub async fn get_api_docs() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "qr_apis": qr_apis(),
            "waiter_apis": waiter_apis(),
            "endpoints": endpoints(),
        })),
    )
}

/// Get the QR section of the endpoint directory.
#[utoipa::path(
    get,
    path = "/api/api-docs/qr",
    tag = API_DOCS_TAG,
    responses(
        (status = 200, description = "QR endpoints", body = Object)
    ),
)]
pub async fn get_qr_api_docs() -> impl IntoResponse {
    (StatusCode::OK, Json(qr_apis()))
}

#[utoipa::path(
    get,
    path = "/api/api-docs/waiter",
    tag = API_DOCS_TAG,
    responses(
        (status = 200, description = "Waiter endpoint notes", body = Object)
    ),
)]
pub async fn get_waiter_api_docs() -> impl IntoResponse {
    (StatusCode::OK, Json(waiter_apis()))
}
