#[macro_use]
extern crate tracing;

use crate::config::Config;
use crate::repository::allocation::Allocator;
use crate::service::booking::Booking;
use crate::service::validator::BookingRequestValidator;
use actix_web::web::Data;
use actix_web::{middleware, App, HttpServer};
use helper::init::init_subscriber;
use helper::pool::Pool;
use helper::prom_metrics::PooledMetrics;
#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
use std::sync::Arc;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod config;
mod controller;
mod handler;
mod prom_metrics;
mod repository;
mod service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _guard = init_subscriber("booking.log", "info")?;

    debug!("Tracing initialized.");

    let config = Config::from_env()?;

    let validator = Arc::new(BookingRequestValidator::new());
    let allocator = Arc::new(Allocator::new());

    // Services
    let booking_service = Arc::new(Booking::new(validator, allocator));
    let metrics_pool = Arc::new(Pool::<PooledMetrics>::new(
        config.metrics_pool_size.into_inner(),
    ));

    let address = config.server_address.into_inner();
    let port = config.server_port.into_inner();
    info!("Starting HTTP server on {}:{}", address, port);

    let booking_service = Data::from(booking_service);
    let metrics_pool = Data::from(metrics_pool);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(Data::clone(&booking_service))
            .app_data(Data::clone(&metrics_pool))
            .configure(handler::configure)
    })
    .bind((address, port))?
    .run()
    .await?;

    Ok(())
}
