use configs::{AppConfig, ConfigSource};
use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

fn main() -> std::process::ExitCode {
    // load .env first so RUST_LOG, CONFIG_PATH and SERVER_* take effect
    dotenv().ok();
    let (config, source) = match AppConfig::load_or_else(server::startup::config_from_env) {
        Ok(loaded) => loaded,
        Err(e) => {
            common::utils::logging::init_logging_default();
            error!(service = "therapist_ms", event = "config_invalid", error = %e, "refusing to start with invalid config");
            return std::process::ExitCode::FAILURE;
        }
    };
    common::utils::logging::init_logging(config.logging.log_format());
    info!(service = "therapist_ms", event = "logger_init", "tracing subscriber initialized");
    if source == ConfigSource::Fallback {
        warn!(service = "therapist_ms", event = "config_fallback", path = %configs::config_path(), "no config file, using environment");
    }

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "therapist_ms",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = config.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "therapist_ms", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "therapist_ms",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "therapist service starting"
    );

    rt.block_on(async move {
        let server_task = tokio::spawn(server::run(config));

        tokio::select! {
            res = server_task => match res {
                Ok(Ok(())) => {
                    info!(service = "therapist_ms", event = "stop", %service_id, pid, "server stopped normally");
                    std::process::ExitCode::SUCCESS
                }
                Ok(Err(e)) => {
                    error!(service = "therapist_ms", event = "run_failed", error = %e, "server::run returned error");
                    std::process::ExitCode::FAILURE
                }
                Err(e) => {
                    error!(service = "therapist_ms", event = "task_join_error", error = %e, "server task join error");
                    std::process::ExitCode::FAILURE
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!(service = "therapist_ms", event = "shutdown_signal", %service_id, pid, "received Ctrl+C, shutting down");
                std::process::ExitCode::SUCCESS
            }
        }
    })
}
