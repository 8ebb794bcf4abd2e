use crate::api::api_certificate::{
    api_service_certificate_reload,
    api_service_certificate_status,
    api_service_certificate_trigger,
    api_service_certificate_trigger_stop,
};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::query_token::QueryToken;
use crate::common::common::token_matches;
use crate::config::structs::server_config::ServerConfig;
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use log::info;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the HTTPS server. Signals are left to the caller.
pub fn https_service(
    addr: SocketAddr,
    data: Arc<ApiServiceData>,
    server_config: &ServerConfig,
    tls_config: rustls::ServerConfig,
) -> std::io::Result<(ServerHandle, Server)> {
    info!("[API] Starting server listener with TLS on {}", addr);
    let mut server = HttpServer::new(move || App::new().configure(api_service_routes(data.clone())))
        .keep_alive(Duration::from_secs(server_config.keep_alive.unwrap_or(60)))
        .client_request_timeout(Duration::from_secs(server_config.request_timeout.unwrap_or(15)))
        .client_disconnect_timeout(Duration::from_secs(server_config.disconnect_timeout.unwrap_or(15)));
    if let Some(workers) = server_config.workers {
        server = server.workers(workers as usize);
    }
    if let Some(max_connections) = server_config.max_connections {
        server = server.max_connections(max_connections as usize);
    }
    if let Some(rate) = server_config.tls_connection_rate {
        server = server.max_connection_rate(rate as usize);
    }
    let server = server
        .bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?
        .disable_signals()
        .run();
    Ok((server.handle(), server))
}

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)> {
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("/ping").route(web::get().to(api_service_ping)));
        cfg.service(web::resource("/api/certificate/reload").route(web::post().to(api_service_certificate_reload)));
        cfg.service(web::resource("/api/certificate/status").route(web::get().to(api_service_certificate_status)));
        cfg.service(
            web::resource("/api/certificate/trigger")
                .route(web::post().to(api_service_certificate_trigger))
                .route(web::delete().to(api_service_certificate_trigger_stop)),
        );
    })
}

pub async fn api_service_ping() -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::plaintext()).body("pong!")
}

/// Reads `?token=` from the request; a malformed query counts as missing.
pub fn api_service_query_token(request: &HttpRequest) -> Option<String> {
    web::Query::<QueryToken>::from_query(request.query_string())
        .ok()
        .and_then(|query| query.into_inner().token)
}

pub fn api_service_token(token: Option<String>, api_key: &str) -> Option<HttpResponse> {
    match token {
        None => Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
            "status": "missing token"
        }))),
        Some(token_code) if !token_matches(&token_code, api_key) => {
            Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                "status": "invalid token"
            })))
        }
        Some(_) => None,
    }
}

pub async fn api_service_not_found() -> HttpResponse {
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}
