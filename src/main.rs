use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use credswap::common::common::setup_logging;
use credswap::config::structs::configuration::Configuration;
use credswap::ssl::structs::environment::Environment;
use credswap::ssl::structs::log_reload_listener::LogReloadListener;
use credswap::ssl::structs::ssl_service::SslService;
use credswap::structs::Cli;
use credswap::watcher::structs::file_watch_service::FileWatchService;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("[ERROR] {e}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let environment = match args.config.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) => Environment::new(dir),
        None => Environment::default()
    };

    let service = match SslService::new(&config.tls, &config.profiles, environment) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            error!("[BOOT] Unable to load TLS credentials: {e}");
            exit(101);
        }
    };

    for reloader in service.reloaders() {
        let credentials = reloader.credentials();
        info!(
            "[BOOT] Credential set {:?}: aliases {:?}, {} trusted certificates, fingerprint {}",
            reloader.configuration().key_source,
            credentials.signing_handle().aliases(),
            credentials.verification_handle().len(),
            credentials.fingerprint()
        );
    }

    if args.check {
        info!("[BOOT] Configuration check passed");
        return Ok(());
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let _watch_service = if config.reload.enabled {
                let interval = match config.reload.interval() {
                    Ok(interval) => interval,
                    Err(e) => {
                        error!("[BOOT] {e}");
                        exit(101);
                    }
                };
                let watch_service = match FileWatchService::new(interval) {
                    Ok(watch_service) => Arc::new(watch_service),
                    Err(e) => {
                        error!("[BOOT] Unable to start the file watcher: {e}");
                        exit(1);
                    }
                };
                for name in service.profiles() {
                    if let Some(reloader) = service.profile(&name) {
                        reloader.register_listener(Arc::new(LogReloadListener::new(&name)));
                    }
                }
                if let Some(reloader) = service.global() {
                    reloader.register_listener(Arc::new(LogReloadListener::new("global")));
                }
                if let Err(e) = service.watch(watch_service.clone()) {
                    warn!("[BOOT] Some credential files are not watched: {e}");
                }
                info!("[BOOT] Watching credential files every {:?}", interval);
                Some(watch_service)
            } else {
                info!("[BOOT] Credential reloading is disabled");
                None
            };

            tokio::spawn(async move {
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

            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("[BOOT] Unable to listen for the shutdown signal: {e}");
            }
            info!("Shutdown request received, shutting down...");
            service.unwatch();
            info!("Server shutting down completed");
            Ok(())
        })
}
