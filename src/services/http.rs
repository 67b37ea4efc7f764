use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::error::Result;

/// Bind `addr` and serve `app` until Ctrl+C or SIGTERM.
pub async fn serve(name: &str, addr: SocketAddr, app: Router) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("{} listening on http://{}", name, listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("{} stopped", name);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = until_signal("Ctrl+C", signal::ctrl_c());

    #[cfg(unix)]
    let terminate = until_signal("SIGTERM", async {
        let mut stream = signal::unix::signal(signal::unix::SignalKind::terminate())?;
        stream.recv().await;
        Ok::<(), std::io::Error>(())
    });

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Resolves when the signal arrives. A handler that failed to install
/// never resolves, so it cannot trigger shutdown on its own.
async fn until_signal<E, F>(name: &str, signal: F)
where
    E: std::fmt::Display,
    F: Future<Output = std::result::Result<(), E>>,
{
    if let Err(e) = signal.await {
        error!("Failed to install {} handler: {}", name, e);
        std::future::pending::<()>().await;
    }
}
