mod handlers;

use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};

use crate::api::{DynAPI, API};
use crate::error::{server_error, Error};
use crate::server::handlers::{map, selection, towers};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/towers", get(towers::list).post(towers::create))
        .route("/recent", get(towers::recent))
        .route("/towers/:id", get(towers::find))
        .route(
            "/selection",
            get(selection::panel)
                .put(selection::select)
                .delete(selection::clear),
        )
        .route("/map", get(map::view))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let listener = TcpListener::bind(addr).map_err(server_error)?;

    serve_listener(Arc::new(api), listener).await
}

/// Serves on an already bound listener, which lets callers pick port 0.
pub async fn serve_listener(api: DynAPI, listener: TcpListener) -> Result<(), Error> {
    let app = router(api);

    tracing::info!("listening on {}", listener.local_addr().map_err(server_error)?);

    axum::Server::from_tcp(listener)
        .map_err(server_error)?
        .serve(app.into_make_service())
        .await
        .map_err(server_error)
}
