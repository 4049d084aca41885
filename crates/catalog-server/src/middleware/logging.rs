//! Request logging.
//!
//! Every request runs inside a `request` span carrying method and path, so
//! storage-layer events emitted while handling it inherit both. One record
//! is written when the response is ready.

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::Error;
use futures::future::{ready, LocalBoxFuture, Ready};
use tracing::{info, info_span, warn, Instrument};

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// actix middleware factory; wrap the `App` with it.
pub struct LoggingMiddleware;

impl<S, B> Transform<S, ServiceRequest> for LoggingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestLogger<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLogger {
            inner: Rc::new(service),
        }))
    }
}

pub struct RequestLogger<S> {
    inner: Rc<S>,
}

/// Statuses logged at warn.
fn is_failure(status: StatusCode) -> bool {
    status.is_client_error() || status.is_server_error()
}

impl<S, B> Service<ServiceRequest> for RequestLogger<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(inner);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let inner = Rc::clone(&self.inner);
        let span = info_span!(
            "request",
            id = NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed),
            method = %req.method(),
            path = %req.path(),
        );
        let query = req.query_string().to_owned();
        let started = Instant::now();

        Box::pin(
            async move {
                let result = inner.call(req).await;
                let elapsed_ms = started.elapsed().as_millis() as u64;

                match &result {
                    Ok(res) if is_failure(res.status()) => {
                        warn!(status = res.status().as_u16(), %query, elapsed_ms, "request rejected")
                    }
                    Ok(res) => info!(status = res.status().as_u16(), elapsed_ms, "request served"),
                    Err(e) => warn!(error = %e, elapsed_ms, "request errored"),
                }
                result
            }
            .instrument(span),
        )
    }
}
