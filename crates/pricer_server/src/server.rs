//! Server startup, binding and graceful shutdown

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::config::ServerConfig;
use crate::routes;

/// Server instance that can be started
pub struct Server {
    /// Server configuration
    config: Arc<ServerConfig>,
    /// The built router
    router: Router,
}

impl Server {
    /// Create a new server instance with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        let config = Arc::new(config);
        let router = routes::build_router(config.clone());

        Self { config, router }
    }

    /// Address string the server will bind to, e.g. `0.0.0.0:8000`
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind the configured address and serve until Ctrl-C or SIGTERM
    pub async fn run(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.socket_addr()).await?;
        self.run_with_listener(listener).await
    }

    /// Serve on an already-bound listener until Ctrl-C or SIGTERM
    ///
    /// Tests bind port 0 and pass the listener here.
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.run_until(listener, shutdown_signal()).await
    }

    /// Serve until `signal` resolves, then drain in-flight requests
    ///
    /// Requests still running after `shutdown_timeout_secs` are abandoned.
    pub async fn run_until<F>(self, listener: TcpListener, signal: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = listener.local_addr()?;
        let drain_timeout = Duration::from_secs(self.config.shutdown_timeout_secs);
        tracing::info!(%addr, "Server listening");

        let (signalled_tx, signalled_rx) = oneshot::channel::<()>();
        let graceful = async move {
            signal.await;
            let _ = signalled_tx.send(());
        };

        let serve = axum::serve(listener, self.router)
            .with_graceful_shutdown(graceful)
            .into_future();
        tokio::pin!(serve);

        tokio::select! {
            result = &mut serve => return result,
            _ = signalled_rx => {
                tracing::info!(
                    timeout_secs = drain_timeout.as_secs(),
                    "Shutdown requested, draining connections"
                );
            }
        }

        match tokio::time::timeout(drain_timeout, serve).await {
            Ok(result) => {
                tracing::info!("Server stopped");
                result
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = drain_timeout.as_secs(),
                    "Drain timeout elapsed, abandoning in-flight requests"
                );
                Ok(())
            }
        }
    }

    /// Create a test server and return the bound address
    ///
    /// Binds port 0, starts the server in a background task, and returns the
    /// actual bound address.
    #[cfg(test)]
    pub async fn spawn_test_server(
        config: ServerConfig,
    ) -> (SocketAddr, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = Self::new(config);
        let handle = tokio::spawn(async move {
            server.run_with_listener(listener).await.ok();
        });

        (addr, handle)
    }
}

/// Resolve on Ctrl-C, or on SIGTERM where the platform has it
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl-C"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }
}
