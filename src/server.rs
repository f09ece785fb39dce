//! HTTP shell: one route that fetches, translates and encodes the feed.

use std::collections::HashMap;

use actix_web::{
    App, HttpResponse, HttpServer, ResponseError, http::StatusCode, middleware::Logger, web,
};
use tracing::{error, info};

use crate::config::Config;
use crate::feed::{FeedError, generate_feed};
use crate::fetch::HttpClient;
use crate::output::{Encoding, encode};

pub struct AppState<C> {
    pub client: C,
    pub config: Config,
}

#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error("Failed to encode feed: {0:#}")]
    Encode(anyhow::Error),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Feed(FeedError::Fetch(_) | FeedError::Source(_)) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        error!(error = %self, "Feed request failed");
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

/// `GET /`; a `debug` query parameter switches to the JSON rendering.
#[tracing::instrument(skip_all, fields(debug = query.contains_key("debug")))]
async fn feed<C: HttpClient + 'static>(
    state: web::Data<AppState<C>>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ServiceError> {
    let encoding = Encoding::from_debug_flag(query.contains_key("debug"));
    let message = generate_feed(&state.client, &state.config).await?;
    let body = encode(&message, encoding).map_err(ServiceError::Encode)?;

    Ok(HttpResponse::Ok()
        .content_type(encoding.content_type())
        .body(body))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub fn configure<C: HttpClient + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(feed::<C>))
        .route("/health", web::get().to(health));
}

pub async fn serve<C: HttpClient + 'static>(client: C, config: Config) -> std::io::Result<()> {
    let listen_address = (config.host.clone(), config.port);
    info!(host = %listen_address.0, port = listen_address.1, "Starting server");

    let state = web::Data::new(AppState { client, config });

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure::<C>)
    })
    .bind(listen_address)?
    .run()
    .await
}
