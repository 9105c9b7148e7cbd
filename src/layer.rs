use crate::cors::Cors;
use crate::policy::Policy;
use crate::result::ValidationError;
use http::{HeaderMap, Request, Response};
use std::future::{Future, ready};
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service};

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// [`Layer`] that applies a CORS [`Policy`] to `http` services.
#[derive(Debug, Clone)]
pub struct CorsLayer {
    cors: Cors,
}

impl CorsLayer {
    /// Validates `policy` so every configured value can be sent as a header.
    pub fn new(policy: Policy) -> Result<Self, ValidationError> {
        Self::from_cors(Cors::new(policy))
    }

    pub fn from_cors(cors: Cors) -> Result<Self, ValidationError> {
        cors.policy().validate()?;
        Ok(Self { cors })
    }
}

impl<S> Layer<S> for CorsLayer {
    type Service = CorsService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorsService {
            inner,
            cors: self.cors.clone(),
        }
    }
}

/// Answers `OPTIONS` requests with the CORS headers alone and forwards
/// everything else to the inner service.
///
/// On forwarded requests the inner response keeps any header it set itself;
/// the CORS headers only fill in what is missing.
#[derive(Debug, Clone)]
pub struct CorsService<S> {
    inner: S,
    cors: Cors,
}

impl<S> CorsService<S> {
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CorsService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ResBody: Default + Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let mut cors_headers = HeaderMap::new();
        let decision = self.cors.check(&req, &mut cors_headers);

        if decision.is_preflight() {
            let mut response = Response::new(ResBody::default());
            *response.headers_mut() = cors_headers;
            return Box::pin(ready(Ok(response)));
        }

        let future = self.inner.call(req);
        Box::pin(async move {
            let mut response = future.await?;
            let headers = response.headers_mut();
            for (name, value) in &cors_headers {
                if !headers.contains_key(name) {
                    headers.insert(name.clone(), value.clone());
                }
            }
            Ok(response)
        })
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod layer_test;
