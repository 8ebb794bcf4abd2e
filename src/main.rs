use certs_reloader::api::api::https_service;
use certs_reloader::api::structs::api_service_data::ApiServiceData;
use certs_reloader::common::common::setup_logging;
use certs_reloader::config::structs::configuration::Configuration;
use certs_reloader::reload::enums::trigger_kind::TriggerKind;
use certs_reloader::reload::structs::reload_manager::ReloadManager;
use certs_reloader::ssl::ssl::{create_server_config_with_resolver, generate_self_signed, load_file_stores};
use certs_reloader::ssl::structs::multi_store::MultiStore;
use certs_reloader::ssl::structs::store_resolver::StoreResolver;
use certs_reloader::ssl::traits::store::Store;
use certs_reloader::structs::Cli;
use clap::Parser;
use log::{error, info};
use parking_lot::deadlock;
use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Builder;

fn main() -> std::io::Result<()> {
    let args = Cli::parse();

    if args.create_selfsigned {
        return match generate_self_signed(&args.selfsigned_domain, &args.selfsigned_certfile, &args.selfsigned_keyfile) {
            Ok(()) => {
                println!(
                    "[CERTGEN] The files {} and {} have been generated",
                    args.selfsigned_certfile, args.selfsigned_keyfile
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("[CERTGEN] {}", e);
                exit(1)
            }
        };
    }

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101),
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{}", e);
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let deadlocks = tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    interval.tick().await;
                    let deadlocks = deadlock::check_deadlock();
                    if !deadlocks.is_empty() {
                        info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                        for (i, threads) in deadlocks.iter().enumerate() {
                            info!("[DEADLOCK] #{i}");
                            for t in threads {
                                info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                info!("[DEADLOCK] {:#?}", t.backtrace());
                            }
                        }
                    }
                }
            });

            let stores = match load_file_stores(&config.certificates) {
                Ok(stores) => stores,
                Err(e) => {
                    error!("[BOOT] Unable to load certificates: {}", e);
                    exit(1);
                }
            };
            let multi_store = Arc::new(MultiStore::new(
                stores
                    .iter()
                    .map(|(_, store)| store.clone() as Arc<dyn Store>)
                    .collect(),
            ));

            let reload_manager = Arc::new(ReloadManager::new());
            if config.reload.enabled {
                match reload_manager.notify(multi_store.clone(), TriggerKind::Signal(config.reload.signal)) {
                    Ok(_) => info!("[BOOT] Certificates reload on {}", config.reload.signal),
                    Err(e) => {
                        error!("[BOOT] Unable to register the reload trigger: {}", e);
                        exit(1);
                    }
                }
            }

            let resolver = if config.server.fallback_to_default {
                StoreResolver::new(multi_store.clone())
            } else {
                StoreResolver::strict(multi_store.clone())
            };
            let tls_config = match create_server_config_with_resolver(Arc::new(resolver)) {
                Ok(tls_config) => tls_config,
                Err(e) => {
                    error!("[BOOT] Unable to build the TLS configuration: {}", e);
                    exit(1);
                }
            };

            let addr: SocketAddr = match config.server.bind_address.parse() {
                Ok(addr) => addr,
                Err(e) => {
                    error!("[BOOT] Invalid bind address {}: {}", config.server.bind_address, e);
                    exit(1);
                }
            };
            let data = Arc::new(ApiServiceData {
                config: config.clone(),
                stores,
                multi_store: multi_store.clone(),
                reload_manager: reload_manager.clone(),
            });
            let (handle, server) = https_service(addr, data, &config.server, tls_config)?;
            let server = tokio::spawn(server);

            info!("[BOOT] Server ready, press CTRL+C to stop");
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("[BOOT] Unable to listen for shutdown signal: {}", e);
            }
            info!("Shutdown request received, shutting down...");
            reload_manager.stop_all();
            handle.stop(true).await;
            if let Ok(Err(e)) = server.await {
                error!("[API] Server stopped with an error: {}", e);
            }
            deadlocks.abort();
            info!("Server shutting down completed");
            Ok(())
        })
}
