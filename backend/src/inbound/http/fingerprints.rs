//! Fingerprint lookup-or-register handler.
//!
//! ```text
//! GET /api/v1/fingerprints/authorize?fingerprintID=<id>
//! GET /sensordataupdate.php?fingerprintID=<id>
//! ```
//!
//! The second path serves deployed sensor firmware that still calls the
//! PHP-era endpoint. Both answer in plain text so devices can compare the
//! body directly.

use actix_web::http::header;
use actix_web::{HttpResponse, HttpResponseBuilder, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Error, FingerprintId};
use crate::domain::ports::RegistrationOutcome;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Canonical route for the lookup-or-register endpoint.
pub const FINGERPRINT_PATH: &str = "/api/v1/fingerprints/authorize";
/// Route used by deployed sensor firmware.
pub const LEGACY_SENSOR_PATH: &str = "/sensordataupdate.php";

/// Body returned when the fingerprint is already known.
pub const AUTHORIZED_BODY: &str = "authorized";
/// Body returned when an unseen fingerprint was recorded.
pub const PENDING_BODY: &str = "New fingerprint ID inserted successfully. Authorization pending.";
/// Body returned when no fingerprint was supplied.
pub const NO_DATA_BODY: &str = "No fingerprint data received";
/// Prefix of the body returned when recording a fingerprint failed.
pub const INSERT_FAILED_PREFIX: &str = "Error inserting fingerprint ID: ";

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
const FINGERPRINT_PARAM: &str = "fingerprintID";

/// Query string accepted by [`check_fingerprint`].
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FingerprintQuery {
    /// Identifier reported by the sensor. When repeated, the last value wins.
    #[serde(rename = "fingerprintID")]
    pub fingerprint_id: Option<String>,
}

impl FingerprintQuery {
    /// Collect the query from decoded key/value pairs.
    ///
    /// Sensors occasionally repeat the parameter; the last occurrence is
    /// used. Unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let fingerprint_id = pairs
            .into_iter()
            .filter(|(key, _)| key == FINGERPRINT_PARAM)
            .map(|(_, value)| value)
            .last();
        Self { fingerprint_id }
    }

    /// Domain identifier, or `None` when the parameter was absent.
    ///
    /// A present but blank value is still an identifier.
    pub fn into_fingerprint_id(self) -> Option<FingerprintId> {
        self.fingerprint_id.map(FingerprintId::from)
    }
}

fn text(mut builder: HttpResponseBuilder, body: String) -> HttpResponse {
    builder
        .content_type(TEXT_PLAIN)
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .body(body)
}

fn outcome_response(outcome: RegistrationOutcome) -> HttpResponse {
    match outcome {
        RegistrationOutcome::Authorized => text(HttpResponse::Ok(), AUTHORIZED_BODY.to_owned()),
        RegistrationOutcome::PendingCreated => {
            text(HttpResponse::Created(), PENDING_BODY.to_owned())
        }
        RegistrationOutcome::InsertFailed { detail } => text(
            HttpResponse::InternalServerError(),
            format!("{INSERT_FAILED_PREFIX}{detail}"),
        ),
        RegistrationOutcome::NoData => text(HttpResponse::BadRequest(), NO_DATA_BODY.to_owned()),
    }
}

/// Check a fingerprint, registering it with a placeholder owner when unseen.
#[utoipa::path(
    get,
    path = "/api/v1/fingerprints/authorize",
    description = "Look up a fingerprint ID and register it when unseen. \
        Also served at /sensordataupdate.php for existing sensors.",
    params(FingerprintQuery),
    responses(
        (status = 200, description = "Fingerprint is known", body = String,
            content_type = "text/plain"),
        (status = 201, description = "Fingerprint recorded; authorisation pending",
            body = String, content_type = "text/plain"),
        (status = 400, description = "No fingerprint data received",
            body = String, content_type = "text/plain"),
        (status = 500, description = "Recording the fingerprint failed, including IDs \
            the store rejects", body = String, content_type = "text/plain"),
        (status = 503, description = "Fingerprint store unavailable", body = Error)
    ),
    tags = ["fingerprints"],
    operation_id = "checkFingerprint"
)]
pub async fn check_fingerprint(
    state: web::Data<HttpState>,
    query: web::Query<Vec<(String, String)>>,
) -> ApiResult<HttpResponse> {
    let fingerprint_id = FingerprintQuery::from_pairs(query.into_inner()).into_fingerprint_id();
    let outcome = state.registrar.check_or_register(fingerprint_id).await?;
    Ok(outcome_response(outcome))
}

/// Register the handler on both the canonical and the legacy path.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource([FINGERPRINT_PATH, LEGACY_SENSOR_PATH])
            .route(web::get().to(check_fingerprint)),
    );
}

#[cfg(test)]
#[path = "fingerprints_tests.rs"]
mod tests;
