//! Allow-list CORS headers for request handlers.
//!
//! A [`Policy`] is built once from [`CorsOption`]s. [`Cors::wrap`] puts it in
//! front of a handler: every request gets the matching
//! `Access-Control-Allow-*` headers, `OPTIONS` preflights end there, and all
//! other requests continue to the wrapped handler.
//!
//! ```
//! use cors_allowlist::{Cors, Handler, Headers, Policy, RequestContext};
//! use cors_allowlist::{allow_credentials, allow_methods, allow_origins};
//!
//! let cors = Cors::new(Policy::new([
//!     allow_origins(["http://a.test"]),
//!     allow_methods(["GET"]),
//!     allow_credentials(true),
//! ]));
//! let handler = cors.wrap(|_: &RequestContext<'_>, headers: &mut Headers| {
//!     headers.insert("X-Handled".into(), "yes".into());
//! });
//!
//! let mut headers = Headers::new();
//! let request = RequestContext::new("GET").with_origin("http://a.test");
//! handler.handle(&request, &mut headers);
//!
//! assert_eq!(headers["Access-Control-Allow-Origin"], "http://a.test");
//! assert_eq!(headers["X-Handled"], "yes");
//! ```

pub mod constants;
mod context;
mod cors;
mod handler;
mod headers;
mod options;
mod policy;
mod result;
mod util;

#[cfg(feature = "serde")]
mod config;
#[cfg(feature = "tower")]
mod layer;

pub use context::{CorsRequest, RequestContext};
pub use cors::Cors;
pub use handler::{CorsHandler, Handler};
pub use headers::{HeaderSink, Headers};
pub use options::{CorsOption, allow_credentials, allow_headers, allow_methods, allow_origins};
pub use policy::Policy;
pub use result::{CorsDecision, ValidationError};

#[cfg(feature = "serde")]
pub use config::CorsConfig;
#[cfg(feature = "tower")]
pub use layer::{CorsLayer, CorsService};
