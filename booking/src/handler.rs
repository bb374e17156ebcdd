use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::web::{self, Data, Json};
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use helper::pool::Pool;
use helper::prom_metrics::PooledMetrics;
use model::view::booking::PutBookingRequest;

use crate::controller::{self, ControllerError};
use crate::service::booking::Booking;

#[derive(Debug)]
pub struct AnyhowErrorWrapper {
    err: anyhow::Error,
}

impl std::fmt::Display for AnyhowErrorWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.err)
    }
}

impl ResponseError for AnyhowErrorWrapper {
    fn error_response(&self) -> HttpResponse {
        error!("{:?}", self.err);
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

impl From<anyhow::Error> for AnyhowErrorWrapper {
    fn from(err: anyhow::Error) -> AnyhowErrorWrapper {
        AnyhowErrorWrapper { err }
    }
}

/// Refused requests are the caller's fault, the body holds the reason.
impl ResponseError for ControllerError {
    fn status_code(&self) -> StatusCode { StatusCode::BAD_REQUEST }
}

/// Any body that cannot be read as a booking request is a bad request too.
fn json_error_handler(
    err: JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    warn!("Unreadable booking request: {}", err);
    let response = HttpResponse::BadRequest()
        .content_type(ContentType::plaintext())
        .body(err.to_string());
    InternalError::from_response(err, response).into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/room-allocation")
                .route("/occupancy", web::post().to(post_occupancy)),
        )
        .route("/metrics", web::get().to(get_metrics))
        .route("/health", web::get().to(health));
}

/// Split the available rooms between the potential guests of the request
pub async fn post_occupancy(
    payload: Json<Option<PutBookingRequest>>,
    booking_service: Data<Booking>,
) -> Result<HttpResponse, ControllerError> {
    let res =
        controller::optimize_occupancy(payload.into_inner(), &booking_service)?;
    Ok(HttpResponse::Ok().json(res))
}

/// Prometheus scraping endpoint
pub async fn get_metrics(
    pool: Data<Pool<PooledMetrics>>,
) -> Result<HttpResponse, AnyhowErrorWrapper> {
    let text = helper::prom_metrics::gather_text(&pool)?;
    Ok(HttpResponse::Ok()
        .content_type(helper::prom_metrics::content_type())
        .body(text))
}

pub async fn health() -> HttpResponse { HttpResponse::Ok().finish() }
