use crate::context::CorsRequest;
use crate::cors::Cors;
use crate::headers::HeaderSink;

/// Something that handles a request by writing into a response sink.
///
/// Implemented for every `Fn(&Req, &mut Sink)`, so plain functions and
/// closures can be wrapped directly.
pub trait Handler<Req: ?Sized, Sink: ?Sized> {
    fn handle(&self, request: &Req, sink: &mut Sink);
}

impl<F, Req, Sink> Handler<Req, Sink> for F
where
    F: Fn(&Req, &mut Sink),
    Req: ?Sized,
    Sink: ?Sized,
{
    fn handle(&self, request: &Req, sink: &mut Sink) {
        self(request, sink)
    }
}

/// A delegate handler behind CORS header writing. Produced by [`Cors::wrap`].
#[derive(Debug, Clone)]
pub struct CorsHandler<H> {
    cors: Cors,
    delegate: H,
}

impl<H> CorsHandler<H> {
    pub(crate) fn new(cors: Cors, delegate: H) -> Self {
        Self { cors, delegate }
    }

    pub fn cors(&self) -> &Cors {
        &self.cors
    }

    pub fn delegate(&self) -> &H {
        &self.delegate
    }

    pub fn into_inner(self) -> H {
        self.delegate
    }
}

impl<H, Req, Sink> Handler<Req, Sink> for CorsHandler<H>
where
    H: Handler<Req, Sink>,
    Req: CorsRequest + ?Sized,
    Sink: HeaderSink + ?Sized,
{
    fn handle(&self, request: &Req, sink: &mut Sink) {
        if self.cors.check(request, sink).is_preflight() {
            return;
        }
        self.delegate.handle(request, sink);
    }
}

#[cfg(test)]
#[path = "handler_test.rs"]
mod handler_test;
