use std::{
    future::IntoFuture as _,
    io,
    sync::OnceLock,
    time,
};

use application::{Args, Config};
use axum::extract::MatchedPath;
use axum_client_ip::InsecureClientIp;
use futures::{future, TryFutureExt as _};
use service::{infra::Http, Service};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| log_filter(meta, false))),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| log_filter(meta, true))),
        )
        .init();

    _ = start().await;
}

/// Decides whether an event described by the provided `meta` goes to the
/// stderr (if `stderr` is `true`) or to the stdout.
fn log_filter(meta: &log::Metadata<'_>, stderr: bool) -> bool {
    let level = LOG_LEVEL.get().copied().unwrap_or(log::Level::INFO);
    meta.is_span()
        || STDERR_LEVELS.contains(meta.level()) == stderr
            && level >= *meta.level()
}

/// Builds a [`CorsLayer`] allowing the provided `origins`.
///
/// `*` allows any origin.
fn cors_layer(origins: &[String]) -> Result<CorsLayer, ()> {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .map(|origin| {
                    origin.parse::<http::header::HeaderValue>().map_err(|e| {
                        log::error!("`{origin}` is not correct CORS origin: {e}");
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
        )
    };
    Ok(CorsLayer::new()
        .allow_methods([
            http::Method::GET,
            http::Method::OPTIONS,
            http::Method::POST,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(allow_origin))
}

async fn start() -> Result<(), ()> {
    let Args { config } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let config = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;
    let service_config = config.service();
    let Config {
        server,
        board: _,
        backend,
        tasks: _,
        log,
    } = config;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let backend_config =
        service::infra::http::Config::try_from(backend).map_err(|e| {
            log::error!("invalid deals backend URL: {e}");
        })?;
    let backend = Http::new(&backend_config).map_err(|e| {
        log::error!("failed to initialize `Http` deals backend client: {e}");
    })?;

    let (service, background) = Service::new(service_config, backend);

    let cors = cors_layer(&server.cors.origins)?;

    let app = application::router(service)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|r: &http::Request<_>| {
                    tracing::info_span!(
                        "HTTP request",
                        http.client_ip = InsecureClientIp::from(
                            r.headers(),
                            r.extensions()
                        )
                            .map(|ip| ip.0.to_string())
                            .ok(),
                        http.flavor = ?r.version(),
                        http.host = r.uri().host(),
                        http.method = r.method().as_str(),
                        http.route = r
                            .extensions()
                            .get::<MatchedPath>()
                            .map(MatchedPath::as_str),
                        http.scheme = r
                            .uri()
                            .scheme()
                            .map(http::uri::Scheme::as_str),
                        http.target = r
                            .uri()
                            .path_and_query()
                            .map(http::uri::PathAndQuery::as_str),
                        http.user_agent = r
                            .headers()
                            .get("User-Agent")
                            .and_then(|h| h.to_str().ok()),
                        http.status_code = tracing::field::Empty,
                    )
                })
                .on_response(
                    |r: &http::Response<_>,
                     dur: time::Duration,
                     span: &tracing::Span| {
                        span.record(
                            "http.status_code",
                            tracing::field::display(r.status().as_u16()),
                        );

                        if r.status().is_server_error()
                            || r.status().is_client_error()
                        {
                            tracing::error!(
                                duration = format!("{}ms", dur.as_millis()),
                            );
                        } else {
                            tracing::info!(
                                duration = format!("{}ms", dur.as_millis()),
                            );
                        }
                    },
                ),
        );

    let listener = TcpListener::bind((server.host.clone(), server.port))
        .await
        .map_err(|e| {
            log::error!(
                "failed to listen on `{}:{}`: {e}",
                server.host,
                server.port,
            );
        })?;

    log::info!("listening on `{}:{}`", server.host, server.port);

    let serve = axum::serve(listener, app);

    future::try_join(
        serve
            .into_future()
            .map_err(|e| log::error!("webserver failed: {e}")),
        background.into_future().map_err(|e| {
            log::error!("background task failed: {e}");
        }),
    )
    .await
    .map(drop)
}
