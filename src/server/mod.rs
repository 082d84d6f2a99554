use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server, StatusCode};

use crate::core::pipeline::RosterPipeline;
use crate::core::DataSource;
use crate::utils::error::Result;

pub const GREETING: &str = "Hello Holberton School!";
pub const LOAD_FAILURE: &str = "Cannot load the database";
pub const NOT_FOUND: &str = "Not Found";

/// Stateless request handler over a roster source.
pub struct RosterService<S: DataSource> {
    pipeline: RosterPipeline<S>,
}

impl<S: DataSource> RosterService<S> {
    pub fn new(source: S) -> Self {
        Self {
            pipeline: RosterPipeline::new(source),
        }
    }

    /// Routes by path only; every route accepts any method.
    pub async fn handle(&self, req: Request<Body>) -> Response<Body> {
        match req.uri().path() {
            "/" => text_response(StatusCode::OK, GREETING),
            "/students" => match self.pipeline.count_students().await {
                Ok(report) => text_response(StatusCode::OK, report),
                Err(e) => {
                    tracing::warn!("Failed to load the student database: {}", e);
                    // Load failures answer 200; the body carries the message.
                    text_response(StatusCode::OK, LOAD_FAILURE)
                }
            },
            _ => text_response(StatusCode::NOT_FOUND, NOT_FOUND),
        }
    }
}

fn text_response(status: StatusCode, body: impl Into<Body>) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .body(body.into())
        .expect("static response parts are valid")
}

/// Handle returned by [`spawn`]; dropping it stops the server.
pub struct RosterServerHandle {
    pub addr: SocketAddr,
    _shutdown_tx: tokio::sync::oneshot::Sender<()>,
}

/// Binds `addr` and serves in the background, returning a handle that
/// exposes the bound address and shuts the server down when dropped.
pub async fn spawn<S: DataSource + 'static>(
    service: RosterService<S>,
    addr: SocketAddr,
) -> Result<RosterServerHandle> {
    let service = Arc::new(service);
    let make_service = make_service_fn(move |_conn| {
        let service = Arc::clone(&service);
        async move {
            Ok::<_, Infallible>(service_fn(move |req| {
                let service = Arc::clone(&service);
                async move { Ok::<_, Infallible>(service.handle(req).await) }
            }))
        }
    });

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    let server = Server::try_bind(&addr)?.serve(make_service);
    let addr = server.local_addr();
    let server = server.with_graceful_shutdown(async {
        let _ = shutdown_rx.await;
    });

    tracing::info!(%addr, "Server is listening");

    tokio::spawn(async move {
        if let Err(e) = server.await {
            tracing::error!("Server error: {}", e);
        }
    });

    Ok(RosterServerHandle {
        addr,
        _shutdown_tx: shutdown_tx,
    })
}

/// Binds `0.0.0.0:<port>` and serves until the process exits.
pub async fn serve<S: DataSource + 'static>(service: RosterService<S>, port: u16) -> Result<()> {
    let service = Arc::new(service);
    let make_service = make_service_fn(move |_conn| {
        let service = Arc::clone(&service);
        async move {
            Ok::<_, Infallible>(service_fn(move |req| {
                let service = Arc::clone(&service);
                async move { Ok::<_, Infallible>(service.handle(req).await) }
            }))
        }
    });

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    let server = Server::try_bind(&addr)?.serve(make_service);

    tracing::info!(port, "Server is listening");

    server.await?;
    Ok(())
}
