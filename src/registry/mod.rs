//! # Route Registry Module
//!
//! An enumerated HTTP-method registration surface over an external router.
//!
//! ## Overview
//!
//! The registry maps a closed set of HTTP methods (`get`, `post`, `put`,
//! `delete`, `patch`, `head`, `options`) onto the route-registration
//! capability of whatever router the caller brings, expressed as the
//! [`RouteSink`] trait. Each registration carries a path template, the
//! method, and an arbitrary passthrough option set the registry never
//! inspects.
//!
//! Two registration forms exist per method:
//!
//! - **explicit**: the caller supplies the path template verbatim
//!   (`registry.get("/items/<int:id>", opts)`)
//! - **auto**: the caller supplies a [`FunctionDescriptor`] and the registry
//!   synthesizes, normalizes, and registers every template the synthesizer
//!   produces (`registry.get_auto(&descriptor, opts)`)
//!
//! The registry keeps an ordered ledger of everything it registered, for
//! inspection and diagnostics.
//!
//! ## Example
//!
//! ```rust
//! use autoroute::registry::{RegisteredRoute, RouteOptions, RouteRegistry, RouteSink};
//!
//! #[derive(Default)]
//! struct Recorder(Vec<RegisteredRoute>);
//!
//! impl RouteSink for Recorder {
//!     fn register(&mut self, route: RegisteredRoute) {
//!         self.0.push(route);
//!     }
//! }
//!
//! let mut registry = RouteRegistry::new(Recorder::default());
//! registry.get("/items/<int:id>", RouteOptions::default());
//! assert_eq!(registry.endpoints().len(), 1);
//! ```

mod core;
mod sink;

pub use self::core::*;
pub use self::sink::*;
