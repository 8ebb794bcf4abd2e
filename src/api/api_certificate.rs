use crate::api::api::{api_service_query_token, api_service_token};
use crate::api::structs::api_certificate::{
    CertificateReloadError,
    CertificateReloadRequest,
    CertificateReloadResult,
    CertificateStatusItem,
    ReloadTriggerStatus,
};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::ssl::structs::file_store::FileStore;
use crate::ssl::traits::reloadable::Reloadable;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{info, warn};
use serde_json::json;
use std::sync::Arc;

#[tracing::instrument(level = "debug")]
pub async fn api_service_certificate_reload(
    request: HttpRequest,
    data: Data<Arc<ApiServiceData>>,
    body: Option<web::Json<CertificateReloadRequest>>,
) -> HttpResponse {
    if let Some(response) = api_service_token(api_service_query_token(&request), &data.config.api_key) {
        return response;
    }
    let name_filter = body.and_then(|request| request.into_inner().name);
    let stores_to_reload: Vec<(String, Arc<FileStore>)> = data
        .stores
        .iter()
        .filter(|(name, _)| name_filter.as_ref().is_none_or(|filter| filter == name))
        .map(|(name, store)| (name.clone(), Arc::clone(store)))
        .collect();
    if stores_to_reload.is_empty() {
        return HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
            "status": "no_certificates",
            "message": "No certificates found to reload"
        }));
    }
    let mut reloaded: Vec<CertificateReloadResult> = Vec::with_capacity(stores_to_reload.len());
    let mut errors: Vec<CertificateReloadError> = Vec::new();
    for (name, store) in stores_to_reload {
        let target = Arc::clone(&store);
        let outcome = match web::block(move || target.reload()).await {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        match outcome {
            Ok(()) => {
                info!("[API] Reloaded certificate '{}'", name);
                reloaded.push(CertificateReloadResult {
                    name,
                    loaded_at: store.current().loaded_at.to_rfc3339(),
                });
            }
            Err(error) => {
                warn!("[API] Reload of certificate '{}' failed: {}", name, error);
                errors.push(CertificateReloadError { name, error });
            }
        }
    }
    let status = if errors.is_empty() {
        "ok"
    } else if reloaded.is_empty() {
        "failed"
    } else {
        "partial"
    };
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": status,
        "reloaded": reloaded,
        "errors": errors
    }))
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_certificate_status(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse {
    if let Some(response) = api_service_token(api_service_query_token(&request), &data.config.api_key) {
        return response;
    }
    let status_items: Vec<CertificateStatusItem> = data
        .stores
        .iter()
        .map(|(name, store)| {
            let certificate = store.current();
            CertificateStatusItem {
                name: name.clone(),
                cert_path: certificate.cert_path.clone(),
                key_path: certificate.key_path.clone(),
                names: certificate.names.clone(),
                loaded_at: certificate.loaded_at.to_rfc3339(),
                not_after: certificate.not_after.map(|not_after| not_after.to_rfc3339()),
                expired: certificate.is_expired(),
            }
        })
        .collect();
    let reload_status = data.reload_manager.status(&data.multi_store);
    let trigger = ReloadTriggerStatus {
        registered: reload_status.is_some(),
        trigger: reload_status.as_ref().map(|status| status.trigger.clone()),
        listening: reload_status.as_ref().is_some_and(|status| status.listening),
        reloads: reload_status.as_ref().map_or(0, |status| status.reloads),
        failures: reload_status.as_ref().map_or(0, |status| status.failures),
        last_reload_at: reload_status
            .as_ref()
            .and_then(|status| status.last_reload_at)
            .map(|at| at.to_rfc3339()),
        last_error: reload_status.and_then(|status| status.last_error),
    };
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "ok",
        "certificates": status_items,
        "reload": trigger
    }))
}

/// Queues a reload of every certificate through the trigger listener.
#[tracing::instrument(level = "debug")]
pub async fn api_service_certificate_trigger(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse {
    if let Some(response) = api_service_token(api_service_query_token(&request), &data.config.api_key) {
        return response;
    }
    let queued = data.reload_manager.trigger(&data.multi_store);
    let status = if queued { "ok" } else { "not_registered" };
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": status,
        "queued": queued
    }))
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_certificate_trigger_stop(
    request: HttpRequest,
    data: Data<Arc<ApiServiceData>>,
) -> HttpResponse {
    if let Some(response) = api_service_token(api_service_query_token(&request), &data.config.api_key) {
        return response;
    }
    let stopped = data.reload_manager.stop(&data.multi_store);
    if stopped {
        info!("[API] Triggered certificate reloading stopped");
    }
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "ok",
        "stopped": stopped
    }))
}
