//! Server binary for the app URL API.
use std::{io, net::SocketAddr, process::ExitCode};

use app_url_api::{constants::api::API_BIND_ADDRESS, state::AppState, utils::logging};
use thiserror::Error;

/// Failures which stop the server from starting or keep it from serving.
#[derive(Error, Debug)]
enum ServerError {
    /// `API_BIND_ADDRESS` is not a socket address.
    #[error("API_BIND_ADDRESS {address:?} is not a valid socket address")]
    InvalidBindAddress {
        /// The rejected value.
        address: String,
        /// Why it was rejected.
        #[source]
        source: std::net::AddrParseError,
    },
    /// The listener could not be bound.
    #[error("failed to bind listener on {0}")]
    Bind(SocketAddr, #[source] io::Error),
    /// The server stopped with an I/O error.
    #[error("failed to serve requests")]
    Serve(#[source] io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let address = API_BIND_ADDRESS
        .parse::<SocketAddr>()
        .map_err(|source| ServerError::InvalidBindAddress {
            address: API_BIND_ADDRESS.clone(),
            source,
        })?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|err| ServerError::Bind(address, err))?;
    tracing::info!("App URL service listening on {address}");
    axum::serve(listener, app_url_api::create_app(AppState::from_env()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;
    tracing::info!("App URL service stopped");
    Ok(())
}

/// Resolves once Ctrl-C or, on Unix, SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
