//! HTTP server for the port visualizer.
//!
//! Listens on TCP, serves each connection on its own Tokio task with hyper's
//! HTTP/1.1 server, and routes requests through [`routes::handle`].
//!
//! # Shutdown
//!
//! The accept loop stops when the watch channel flips to `true`. Open
//! connections are then asked to finish their in-flight request and close;
//! whatever is still running when the grace period ends is abandoned.
//!
//! ```ignore
//! let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! let server = Server::bind(addr, state, shutdown_rx).await?;
//! tokio::spawn(server.run(Duration::from_secs(10)));
//! shutdown_tx.send(true)?;
//! ```

pub mod error;
pub mod response;
pub mod routes;

pub use error::ApiError;
pub use routes::{AppState, handle};

use crate::error::Result;
use hyper::Request;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};
use hyper_util::server::graceful::GracefulShutdown;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Time allowed for a client to send request headers.
const HEADER_READ_TIMEOUT: Duration = Duration::from_secs(15);

/// The HTTP server.
pub struct Server {
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown_rx: watch::Receiver<bool>,
}

/// How the server stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every open connection finished within the grace period.
    Drained,
    /// The grace period ran out with connections still open.
    GraceElapsed,
}

impl Server {
    /// Bind the listening socket.
    pub async fn bind(
        addr: SocketAddr,
        state: Arc<AppState>,
        shutdown_rx: watch::Receiver<bool>,
    ) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            state,
            shutdown_rx,
        })
    }

    /// Address actually bound, useful when binding to port 0.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until shutdown is signalled, then drain.
    pub async fn run(self, grace: Duration) -> ShutdownOutcome {
        let graceful = GracefulShutdown::new();
        let mut shutdown_rx = self.shutdown_rx.clone();

        if let Ok(addr) = self.listener.local_addr() {
            info!("Server listening on http://{}", addr);
        }

        loop {
            tokio::select! {
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, peer)) => {
                            debug!(%peer, "accepted connection");
                            self.spawn_connection(stream, peer, &graceful);
                        }
                        Err(e) => {
                            warn!("Failed to accept connection: {}", e);
                        }
                    }
                }
                changed = shutdown_rx.changed() => {
                    // A dropped sender also means nobody can keep us running.
                    if changed.is_err() || *shutdown_rx.borrow() {
                        info!("Server shutting down");
                        break;
                    }
                }
            }
        }

        drop(self.listener);

        match tokio::time::timeout(grace, graceful.shutdown()).await {
            Ok(()) => {
                info!("All connections closed");
                ShutdownOutcome::Drained
            }
            Err(_) => {
                warn!(
                    "Grace period of {:?} elapsed with connections still open",
                    grace
                );
                ShutdownOutcome::GraceElapsed
            }
        }
    }

    fn spawn_connection(&self, stream: TcpStream, peer: SocketAddr, graceful: &GracefulShutdown) {
        let io = TokioIo::new(stream);
        let state = self.state.clone();

        let service = service_fn(move |req: Request<Incoming>| {
            let state = state.clone();
            async move { Ok::<_, Infallible>(handle(state, req).await) }
        });

        let conn = http1::Builder::new()
            .timer(TokioTimer::new())
            .header_read_timeout(HEADER_READ_TIMEOUT)
            .serve_connection(io, service);
        let conn = graceful.watch(conn);

        tokio::spawn(async move {
            if let Err(e) = conn.await {
                // Resets and early closes are routine for browsers.
                debug!(%peer, "Connection ended: {}", e);
            }
        });
    }
}
