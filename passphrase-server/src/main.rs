#[macro_use]
extern crate log;

mod page;
mod params;
mod settings;

use std::io;

use actix_web::error::ErrorBadRequest;
use actix_web::http::header::ContentType;
use actix_web::{web, App, HttpResponse, HttpServer, Responder, Result};
use env_logger::Env;
use thiserror::Error;
use word_sampler::{RngSource, WordSampler};

use crate::params::{PassphraseParams, PassphraseResponse, Status};
use crate::settings::Settings;

/// Error type used when a passphrase request cannot be served.
#[derive(Debug, Error)]
enum RequestError {
    #[error("cannot select {requested} words, the maximum is {max}")]
    TooManyWords { requested: i64, max: i64 },

    #[error(transparent)]
    Sampling(#[from] word_sampler::Error),
}

struct AppState {
    settings: Settings,
}

impl AppState {
    // Each request gets its own sampler and thread-local generator, so nothing is shared mutably.
    fn draw(&self, params: &PassphraseParams) -> Result<Vec<String>, RequestError> {
        let settings = &self.settings;
        let count = params.count.unwrap_or(settings.word_count);
        if count > settings.max_words {
            return Err(RequestError::TooManyWords {
                requested: count,
                max: settings.max_words,
            });
        }

        let mut sampler = WordSampler::with_pool(
            settings.pool.clone(),
            RngSource::new(rand::rng()),
            settings.config.clone(),
        );

        let words = sampler.draw_many(
            count,
            params.allow_duplicates.unwrap_or(settings.allow_duplicates),
        )?;
        Ok(words)
    }
}

async fn home(
    params: web::Query<PassphraseParams>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let words = app_state.draw(&params).map_err(|e| {
        debug!("Rejected passphrase request {:?}: {}", params, e);
        ErrorBadRequest(e)
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page::render_home(&app_state.settings.app_name, &words)))
}

async fn passphrase(
    params: web::Query<PassphraseParams>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let words = app_state.draw(&params).map_err(|e| {
        debug!("Rejected passphrase request {:?}: {}", params, e);
        ErrorBadRequest(e)
    })?;

    Ok(HttpResponse::Ok().json(PassphraseResponse::new(
        &app_state.settings.app_name,
        words,
    )))
}

async fn status(app_state: web::Data<AppState>) -> impl Responder {
    let settings = &app_state.settings;
    web::Json(Status {
        version: word_sampler::version_string().to_string(),
        pool_size: settings.pool.len(),
        word_count: settings.word_count,
        allow_duplicates: settings.allow_duplicates,
        selection: settings.config.selection().to_string(),
    })
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/passphrase", web::get().to(passphrase))
        .route("/status", web::get().to(status));
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::new().default_filter_or("info"));

    let settings =
        Settings::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    info!(
        "Serving {} on {} with {} words in the pool",
        settings.app_name,
        settings.bind_address,
        settings.pool.len()
    );

    let bind_address = settings.bind_address.clone();
    let state = web::Data::new(AppState { settings });

    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes))
        .bind(bind_address)?
        .run()
        .await
}
