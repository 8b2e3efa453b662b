use http::Method;
use serde_json::Value;

/// One route handed to the external router, exactly as registered.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredRoute {
    /// HTTP method the route answers to
    pub method: Method,
    /// Rendered path template, e.g. `/users/lookup/<int:id>`
    pub path: String,
    /// Passthrough options, carried verbatim
    pub options: RouteOptions,
}

/// Arbitrary passthrough options attached to a registration.
///
/// The registry never interprets these; they travel to the [`RouteSink`]
/// untouched, like keyword arguments forwarded to a routing call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteOptions {
    entries: serde_json::Map<String, Value>,
}

impl RouteOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach one option, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

/// The external router collaborator.
///
/// The registry hands templates over one at a time and never constructs or
/// drives the router itself. Implementations typically compile the path with
/// [`EndpointTemplate::to_regex`](crate::template::EndpointTemplate::to_regex)
/// or feed their own matcher.
pub trait RouteSink {
    fn register(&mut self, route: RegisteredRoute);
}
