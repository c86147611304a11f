use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use log::{debug, trace};

use crate::encode::encode;
use crate::error::{RenderError, RouteError};
use crate::params::{ParamValue, Params};
use crate::query::{Queries, QueryValue};
use crate::render::render_path;
use crate::template::{ParamKind, Template};

/// The HTTP methods an endpoint can declare.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
            Method::Put => f.write_str("PUT"),
            Method::Delete => f.write_str("DELETE"),
        }
    }
}

/// The parameter/query/hash declaration for one endpoint method.
///
/// The path parameters a schema declares are cross-checked against the
/// endpoint's template when the route table is built; queries and the hash
/// flag are declaration metadata and are never enforced at call time, since
/// optional absence is always legal there.
///
/// ```
/// use urlgen::Schema;
///
/// let schema = Schema::new()
///     .param("id")
///     .query("page")
///     .query_opt("filter")
///     .hash();
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Schema {
    params: BTreeMap<String, ParamKind>,
    queries: BTreeMap<String, bool>,
    hash: bool,
}

impl Schema {
    /// Creates a schema with no declarations.
    pub fn new() -> Self {
        Self::default()
    }

    /// The explicit "no parameters" marker.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Declares a required single path parameter (`[name]`).
    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.insert(name.into(), ParamKind::Single);
        self
    }

    /// Declares a required catch-all path parameter (`[...name]`).
    pub fn param_list(mut self, name: impl Into<String>) -> Self {
        self.params.insert(name.into(), ParamKind::CatchAll);
        self
    }

    /// Declares an optional catch-all path parameter (`[[...name]]`).
    pub fn param_list_opt(mut self, name: impl Into<String>) -> Self {
        self.params.insert(name.into(), ParamKind::OptionalCatchAll);
        self
    }

    /// Declares a required query parameter.
    pub fn query(mut self, name: impl Into<String>) -> Self {
        self.queries.insert(name.into(), true);
        self
    }

    /// Declares an optional query parameter.
    pub fn query_opt(mut self, name: impl Into<String>) -> Self {
        self.queries.insert(name.into(), false);
        self
    }

    /// Declares that the endpoint takes a hash fragment.
    pub fn hash(mut self) -> Self {
        self.hash = true;
        self
    }

    fn validate(&self, template: &Template) -> Result<(), RouteError> {
        for (name, expected) in template.params() {
            match self.params.get(name) {
                None => {
                    return Err(RouteError::MissingParamDecl {
                        template: template.source().to_owned(),
                        name: name.to_owned(),
                    })
                }
                Some(declared) if *declared != expected => {
                    return Err(RouteError::ParamKindMismatch {
                        template: template.source().to_owned(),
                        name: name.to_owned(),
                        declared: declared.describe(),
                        expected: expected.describe(),
                    })
                }
                Some(_) => {}
            }
        }

        for name in self.params.keys() {
            if !template.params().any(|(param, _)| param == name) {
                return Err(RouteError::UnknownParam {
                    template: template.source().to_owned(),
                    name: name.clone(),
                });
            }
        }

        Ok(())
    }
}

/// How an endpoint declares its methods: either a shorthand schema (implying
/// a single GET operation) or an explicit method map.
///
/// This is the discriminated union behind the two declaration forms; there
/// is no shape-sniffing at build time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Declaration {
    /// A single schema, bound to GET.
    Shorthand(Schema),
    /// One schema per declared method.
    Methods(Vec<(Method, Schema)>),
}

impl Declaration {
    /// Declares a single GET operation from a bare schema.
    pub fn shorthand(schema: Schema) -> Self {
        Declaration::Shorthand(schema)
    }

    /// Declares an explicit set of methods.
    pub fn methods(methods: impl IntoIterator<Item = (Method, Schema)>) -> Self {
        Declaration::Methods(methods.into_iter().collect())
    }

    fn into_methods(self) -> Vec<(Method, Schema)> {
        match self {
            Declaration::Shorthand(schema) => vec![(Method::Get, schema)],
            Declaration::Methods(methods) => methods,
        }
    }
}

/// The call-time argument to a URL builder: path parameters, query
/// parameters, and a hash fragment, all optional.
///
/// ```
/// use urlgen::Options;
///
/// let options = Options::new()
///     .param("id", 42)
///     .query("page", 2i64)
///     .hash("section");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    params: Params,
    queries: Queries,
    hash: Option<String>,
}

impl Options {
    /// Creates an empty argument; equivalent to calling a builder with no
    /// argument at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies a value for one path parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name, value);
        self
    }

    /// Supplies a whole parameter bag, replacing any previous one.
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Supplies a value for one query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.queries.insert(key, value);
        self
    }

    /// Supplies a whole query bag, replacing any previous one.
    pub fn queries(mut self, queries: Queries) -> Self {
        self.queries = queries;
        self
    }

    /// Supplies the hash fragment.
    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }
}

/// A URL builder bound to one endpoint template, one method, and the route
/// table's base URL.
///
/// Every call re-renders the template from scratch; nothing is cached and
/// nothing is shared mutably, so builders can be used freely across threads.
#[derive(Clone, Debug)]
pub struct UrlBuilder {
    base_url: Arc<str>,
    template: Arc<Template>,
}

impl UrlBuilder {
    /// Builds the URL with no parameters, queries, or hash.
    ///
    /// Fails if the template declares required parameters.
    pub fn build(&self) -> Result<String, RenderError> {
        self.build_with(&Options::new())
    }

    /// Builds the URL from the given options.
    pub fn build_with(&self, options: &Options) -> Result<String, RenderError> {
        let path = render_path(&self.template, &options.params)?;

        let mut url = String::with_capacity(self.base_url.len() + path.len());
        url.push_str(&self.base_url);
        url.push_str(&path);

        let query = options.queries.to_query_string();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        if let Some(hash) = options.hash.as_deref() {
            if !hash.is_empty() {
                url.push('#');
                url.push_str(&encode(hash));
            }
        }

        Ok(url)
    }
}

/// One declared endpoint: a template plus one [`UrlBuilder`] per declared
/// method.
#[derive(Clone, Debug)]
pub struct Endpoint {
    template: Arc<Template>,
    builders: BTreeMap<Method, UrlBuilder>,
}

impl Endpoint {
    /// The route template this endpoint was declared with.
    pub fn template(&self) -> &str {
        self.template.source()
    }

    /// Returns the builder for the given method, if declared.
    pub fn method(&self, method: Method) -> Option<&UrlBuilder> {
        self.builders.get(&method)
    }

    /// Returns the GET builder, if declared.
    pub fn get(&self) -> Option<&UrlBuilder> {
        self.method(Method::Get)
    }

    /// Returns the POST builder, if declared.
    pub fn post(&self) -> Option<&UrlBuilder> {
        self.method(Method::Post)
    }

    /// Returns the PUT builder, if declared.
    pub fn put(&self) -> Option<&UrlBuilder> {
        self.method(Method::Put)
    }

    /// Returns the DELETE builder, if declared.
    pub fn delete(&self) -> Option<&UrlBuilder> {
        self.method(Method::Delete)
    }

    /// Iterates over the declared methods in a fixed order.
    pub fn methods(&self) -> impl Iterator<Item = Method> + '_ {
        self.builders.keys().copied()
    }
}

/// A route table: one [`Endpoint`] per declared template, each exposing one
/// [`UrlBuilder`] per declared method.
///
/// Building the table validates every declaration up front — templates must
/// parse and each schema's path parameters must match its template — so that
/// a typo in a route map fails at construction, not at the first call.
///
/// ```
/// use urlgen::{Declaration, Method, Options, Routes, Schema};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let routes = Routes::with_base_url(
///     "https://example.com/api",
///     [
///         ("/users", Declaration::methods([
///             (Method::Get, Schema::new().query_opt("page")),
///             (Method::Post, Schema::empty()),
///         ])),
///         ("/users/[id]", Declaration::shorthand(Schema::new().param("id"))),
///     ],
/// )?;
///
/// let url = routes.url(
///     "/users/[id]",
///     Method::Get,
///     &Options::new().param("id", 1u64),
/// )?;
/// assert_eq!(url, "https://example.com/api/users/1");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Routes {
    endpoints: BTreeMap<String, Endpoint>,
}

impl Routes {
    /// Builds a route table with no base URL.
    pub fn new<K>(declarations: impl IntoIterator<Item = (K, Declaration)>) -> Result<Self, RouteError>
    where
        K: Into<String>,
    {
        Self::with_base_url("", declarations)
    }

    /// Builds a route table whose rendered URLs are prefixed with the given
    /// base URL.
    pub fn with_base_url<K>(
        base_url: impl Into<String>,
        declarations: impl IntoIterator<Item = (K, Declaration)>,
    ) -> Result<Self, RouteError>
    where
        K: Into<String>,
    {
        let base_url: Arc<str> = base_url.into().into();
        let mut endpoints = BTreeMap::new();
        let mut methods = 0;

        for (source, declaration) in declarations {
            let source = source.into();
            if endpoints.contains_key(&source) {
                return Err(RouteError::DuplicateEndpoint { template: source });
            }

            let template = Arc::new(Template::parse(&source)?);
            let mut builders = BTreeMap::new();

            for (method, schema) in declaration.into_methods() {
                if builders.contains_key(&method) {
                    return Err(RouteError::DuplicateMethod {
                        template: source,
                        method,
                    });
                }

                schema.validate(&template)?;
                builders.insert(
                    method,
                    UrlBuilder {
                        base_url: base_url.clone(),
                        template: template.clone(),
                    },
                );
            }

            trace!(
                "registered route {} ({} methods)",
                template.source(),
                builders.len()
            );
            methods += builders.len();
            endpoints.insert(source, Endpoint { template, builders });
        }

        debug!(
            "built route table: {} endpoints, {} methods",
            endpoints.len(),
            methods
        );
        Ok(Routes { endpoints })
    }

    /// Returns the endpoint declared under the given template, if any.
    pub fn endpoint(&self, template: &str) -> Option<&Endpoint> {
        self.endpoints.get(template)
    }

    /// Returns `true` if the table declares the given template.
    pub fn contains(&self, template: &str) -> bool {
        self.endpoints.contains_key(template)
    }

    /// Iterates over the declared endpoints, sorted by template.
    pub fn endpoints(&self) -> impl Iterator<Item = &Endpoint> {
        self.endpoints.values()
    }

    /// Builds a URL in one call, looking the endpoint and method up first.
    pub fn url(
        &self,
        template: &str,
        method: Method,
        options: &Options,
    ) -> Result<String, RenderError> {
        let endpoint = self
            .endpoint(template)
            .ok_or_else(|| RenderError::UnknownRoute {
                template: template.to_owned(),
            })?;

        let builder = endpoint
            .method(method)
            .ok_or_else(|| RenderError::UnknownMethod {
                template: template.to_owned(),
                method,
            })?;

        builder.build_with(options)
    }
}
