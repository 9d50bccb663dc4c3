use std::net::SocketAddr;

use axum::{
    extract::Extension,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::{trace::TraceLayer, ServiceBuilderExt};

use crate::{
    config::Config,
    error::{ErrorCode, ErrorCodeDetail},
    models::{SignedMessage, StatusResponse},
    server_info::ServerInfo,
    service::ServiceHandler,
};

impl IntoResponse for ErrorCode {
    fn into_response(self) -> Response {
        let details: ErrorCodeDetail = (&self).into();
        (details.status_code(), Json(details)).into_response()
    }
}

#[tracing::instrument]
async fn root() -> Json<ServerInfo> {
    Json(ServerInfo::new())
}

fn parse_body<'a, T: Deserialize<'a>>(body: &'a str) -> Result<T, ErrorCode> {
    serde_json::from_str(body).map_err(ErrorCode::MalformedMessageBody)
}

#[tracing::instrument(skip(services, body))]
async fn verify(
    services: Extension<ServiceHandler>,
    body: String,
) -> Result<Json<StatusResponse>, ErrorCode> {
    let signed_message: SignedMessage = parse_body(&body)?;
    tracing::info!(signed_message = ?signed_message, "Received message");

    let now = services
        .clock()
        .now()
        .map_err(|e| ErrorCode::UnhandledError(e.to_string()))?;

    let result = services.verifier().verify(
        &signed_message.message,
        signed_message.timestamp,
        &signed_message.signature,
        now,
    );

    Ok(Json(result.into()))
}

#[tracing::instrument(skip(services))]
pub async fn start_server(config: Config, services: ServiceHandler) -> color_eyre::Result<()> {
    let addr: SocketAddr = config.bind_ip().parse()?;
    let app = build_http_router(services);
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

pub(crate) fn build_http_router(services: ServiceHandler) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .insert_response_header_if_not_present(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

    Router::new()
        .route("/", get(root).post(verify))
        .layer(middleware.into_inner())
        .layer(Extension(services))
}
