use crate::descriptor::FunctionDescriptor;
use crate::synth::{synthesize, SynthError, SynthOptions};
use http::Method;
use std::path::PathBuf;
use tracing::{debug, info};

use super::sink::{RegisteredRoute, RouteOptions, RouteSink};

/// The closed set of HTTP methods the registry exposes.
pub const SUPPORTED_METHODS: [Method; 7] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::PATCH,
    Method::HEAD,
    Method::OPTIONS,
];

/// Enumerated-method route registry over an external [`RouteSink`].
///
/// Explicit registrations pass the caller's path through unchanged. Auto
/// registrations synthesize templates from a function descriptor against the
/// registry's auto-root, apply URL hygiene
/// ([`EndpointTemplate::normalized`](crate::template::EndpointTemplate::normalized)),
/// and register each resulting template under the same method and options.
pub struct RouteRegistry<S: RouteSink> {
    sink: S,
    auto_root: Option<PathBuf>,
    fallback_prefix: Option<String>,
    endpoints: Vec<RegisteredRoute>,
}

impl<S: RouteSink> RouteRegistry<S> {
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            auto_root: None,
            fallback_prefix: None,
            endpoints: Vec::new(),
        }
    }

    /// Set the root directory auto registrations resolve source paths
    /// against.
    #[must_use]
    pub fn with_auto_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.auto_root = Some(root.into());
        self
    }

    /// Set the prefix substituted when a descriptor's source is not under
    /// the auto-root.
    #[must_use]
    pub fn with_fallback_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.fallback_prefix = Some(prefix.into());
        self
    }

    /// Ordered ledger of every route registered so far.
    #[must_use]
    pub fn endpoints(&self) -> &[RegisteredRoute] {
        &self.endpoints
    }

    /// Consume the registry, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Print all registered routes to stdout.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.endpoints.len());
        for route in &self.endpoints {
            println!("[route] {} {}", route.method, route.path);
        }
    }

    pub fn get(&mut self, path: &str, options: RouteOptions) {
        self.register(Method::GET, path, options);
    }

    pub fn post(&mut self, path: &str, options: RouteOptions) {
        self.register(Method::POST, path, options);
    }

    pub fn put(&mut self, path: &str, options: RouteOptions) {
        self.register(Method::PUT, path, options);
    }

    pub fn delete(&mut self, path: &str, options: RouteOptions) {
        self.register(Method::DELETE, path, options);
    }

    pub fn patch(&mut self, path: &str, options: RouteOptions) {
        self.register(Method::PATCH, path, options);
    }

    pub fn head(&mut self, path: &str, options: RouteOptions) {
        self.register(Method::HEAD, path, options);
    }

    pub fn options(&mut self, path: &str, options: RouteOptions) {
        self.register(Method::OPTIONS, path, options);
    }

    pub fn get_auto(
        &mut self,
        descriptor: &FunctionDescriptor,
        options: RouteOptions,
    ) -> Result<(), SynthError> {
        self.register_auto(Method::GET, descriptor, options)
    }

    pub fn post_auto(
        &mut self,
        descriptor: &FunctionDescriptor,
        options: RouteOptions,
    ) -> Result<(), SynthError> {
        self.register_auto(Method::POST, descriptor, options)
    }

    pub fn put_auto(
        &mut self,
        descriptor: &FunctionDescriptor,
        options: RouteOptions,
    ) -> Result<(), SynthError> {
        self.register_auto(Method::PUT, descriptor, options)
    }

    pub fn delete_auto(
        &mut self,
        descriptor: &FunctionDescriptor,
        options: RouteOptions,
    ) -> Result<(), SynthError> {
        self.register_auto(Method::DELETE, descriptor, options)
    }

    pub fn patch_auto(
        &mut self,
        descriptor: &FunctionDescriptor,
        options: RouteOptions,
    ) -> Result<(), SynthError> {
        self.register_auto(Method::PATCH, descriptor, options)
    }

    pub fn head_auto(
        &mut self,
        descriptor: &FunctionDescriptor,
        options: RouteOptions,
    ) -> Result<(), SynthError> {
        self.register_auto(Method::HEAD, descriptor, options)
    }

    pub fn options_auto(
        &mut self,
        descriptor: &FunctionDescriptor,
        options: RouteOptions,
    ) -> Result<(), SynthError> {
        self.register_auto(Method::OPTIONS, descriptor, options)
    }

    fn register(&mut self, method: Method, path: &str, options: RouteOptions) {
        debug!(method = %method, path = %path, "Registering explicit route");
        let route = RegisteredRoute {
            method,
            path: path.to_string(),
            options,
        };
        self.endpoints.push(route.clone());
        self.sink.register(route);
    }

    fn register_auto(
        &mut self,
        method: Method,
        descriptor: &FunctionDescriptor,
        options: RouteOptions,
    ) -> Result<(), SynthError> {
        let synth_options = SynthOptions {
            explicit_name: None,
            fallback_prefix: self.fallback_prefix.clone(),
        };
        let templates = synthesize(descriptor, self.auto_root.as_deref(), &synth_options)?;

        info!(
            method = %method,
            function = %descriptor.name,
            templates = templates.len(),
            "Auto-registering synthesized routes"
        );

        for template in templates {
            let path = template.normalized().as_path();
            self.register(method.clone(), &path, options.clone());
        }
        Ok(())
    }
}
