//! Test utilities for fems-client
//!
//! Provides a local HTTP server for exercising the blocking client over
//! real sockets in integration tests.

use std::io;
use std::net::{SocketAddr, TcpListener as StdTcpListener};
use std::thread::JoinHandle;

use tokio::net::TcpListener;

use crate::{FemsClient, Result};

/// A test server that shuts down when dropped.
///
/// The blocking [`FemsClient`] cannot run inside a tokio runtime, so the
/// axum router is served from a dedicated thread that owns a
/// current-thread runtime; the test itself stays synchronous.
pub struct TestServer {
    addr: SocketAddr,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Start serving an axum Router on an ephemeral local port.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let server = TestServer::start(mock_fems_router())?;
    /// let client = server.client("admin", "secret")?;
    /// assert_eq!(client.fetch_int(Endpoint::BatteryPower)?, 42);
    /// ```
    pub fn start(router: axum::Router) -> io::Result<Self> {
        // Bind synchronously so the port is known before the thread spawns
        let listener = StdTcpListener::bind("127.0.0.1:0")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let handle = std::thread::spawn(move || {
            runtime.block_on(async move {
                let Ok(listener) = TcpListener::from_std(listener) else {
                    return;
                };
                axum::serve(listener, router)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .ok();
            });
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// The address the server is listening on
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Build a client pointed at this server with the given credentials.
    pub fn client(&self, username: &str, password: &str) -> Result<FemsClient> {
        FemsClient::new(&self.addr.ip().to_string(), self.addr.port(), username, password)
    }

    /// Shut the server down and wait for it to finish.
    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        // The serving thread exits once the shutdown signal lands; no join
        // here so a panicking test does not hang on teardown.
    }
}
