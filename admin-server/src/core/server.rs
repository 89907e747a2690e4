//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::future::Future;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::core::{Config, Result, ServerError, ServerState};
use crate::services::http::build_app;

/// HTTP Server over an initialized [`ServerState`]
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn new(state: ServerState) -> Self {
        Self {
            config: state.config.clone(),
            state,
        }
    }

    /// Bind the configured address and serve until ctrl-c
    pub async fn run(&self) -> Result<()> {
        let addr = self.config.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("🚀 Admin server listening on {}", addr);

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    ///
    /// In-flight requests get `shutdown_timeout_ms` to finish after the
    /// signal; connections still open after that are dropped.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = build_app(self.state.clone());

        let (signalled_tx, signalled_rx) = tokio::sync::oneshot::channel::<()>();
        let graceful = async move {
            shutdown.await;
            let _ = signalled_tx.send(());
        };

        let mut handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(graceful)
                .await
        });

        // Resolves on the signal, or early (sender dropped) if the server stops on its own
        let _ = signalled_rx.await;

        let grace = Duration::from_millis(self.config.shutdown_timeout_ms);
        match tokio::time::timeout(grace, &mut handle).await {
            Ok(Ok(result)) => result.map_err(ServerError::Io),
            Ok(Err(join_err)) => Err(ServerError::Internal(anyhow::anyhow!(join_err))),
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.config.shutdown_timeout_ms,
                    "Graceful shutdown timed out, dropping open connections"
                );
                handle.abort();
                Ok(())
            }
        }
    }
}
