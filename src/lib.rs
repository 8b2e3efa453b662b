//! # autoroute
//!
//! **autoroute** deterministically synthesizes router-registrable URL path
//! templates from function-signature descriptors, and registers them with any
//! router through an enumerated HTTP-method surface.
//!
//! ## Overview
//!
//! Given a function's name, source location, and ordered parameter list
//! (type tags and default-value flags included), the synthesizer derives one
//! or more URL templates:
//!
//! - the source file's path relative to a root directory becomes the URL
//!   prefix
//! - required parameters (no default) become typed placeholder segments,
//!   always present
//! - parameters with defaults fork additional templates cumulatively, one
//!   more segment per template
//! - parameters whose name starts with `_` are hidden: never part of the
//!   URL, still carried in the descriptor for body/form binding
//!
//! ## Architecture
//!
//! - **[`descriptor`]** - function/parameter descriptors and the file loader
//! - **[`synth`]** - the endpoint URL synthesizer (pure, no I/O)
//! - **[`template`]** - the [`EndpointTemplate`](template::EndpointTemplate)
//!   value type, with regex compilation for matching routers
//! - **[`registry`]** - enumerated-method route registration over an
//!   external [`RouteSink`](registry::RouteSink)
//! - **[`chain`]** - step-chain builder with enumerated termination
//! - **[`cli`]** - the `autoroute-gen` command line
//!
//! ## Quick Start
//!
//! ```rust
//! use autoroute::descriptor::{FunctionDescriptor, ParameterDescriptor};
//! use autoroute::synth::{synthesize, SynthOptions};
//! use std::path::Path;
//!
//! let lookup = FunctionDescriptor::new("/srv/app/users/handlers.rs", "lookup")
//!     .param(ParameterDescriptor::new("id").typed("int"))
//!     .param(ParameterDescriptor::new("verbose").typed("bool").with_default());
//!
//! let templates = synthesize(&lookup, Some(Path::new("/srv/app")), &SynthOptions::default())
//!     .expect("synthesis failed");
//!
//! assert_eq!(templates[0].as_path(), "/users/handlers/lookup/<int:id>");
//! assert_eq!(templates[1].as_path(), "/users/handlers/lookup/<int:id>/<verbose>");
//! ```
//!
//! ## Design Notes
//!
//! Synthesis is a pure function of its inputs: it never touches a router.
//! Handing templates to a router is the registry's job, and the router itself
//! stays behind the [`RouteSink`](registry::RouteSink) trait. Optional
//! parameters fork cumulatively, never combinatorially, so a function with
//! `k` defaults always yields exactly `k + 1` templates.

pub mod chain;
pub mod cli;
pub mod descriptor;
pub mod registry;
pub mod synth;
pub mod template;

pub use descriptor::{load_descriptors, FunctionDescriptor, ParameterDescriptor};
pub use registry::{RegisteredRoute, RouteOptions, RouteRegistry, RouteSink};
pub use synth::{synthesize, SynthError, SynthOptions};
pub use template::EndpointTemplate;
