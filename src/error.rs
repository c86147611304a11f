use crate::routes::Method;

/// Represents errors that can occur when building a route table from a
/// declaration map.
///
/// Every variant names the endpoint (and, where relevant, the parameter or
/// method) so declaration typos surface with enough context to fix them.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, thiserror::Error)]
pub enum RouteError {
    /// A bracket segment was declared without a name (`[]`, `[...]` or
    /// `[[...]]`).
    #[error("empty parameter name in template \"{template}\"")]
    EmptyParamName {
        /// The offending route template.
        template: String,
    },
    /// The same route template was declared twice.
    #[error("route \"{template}\" is declared more than once")]
    DuplicateEndpoint {
        /// The offending route template.
        template: String,
    },
    /// The same HTTP method was declared twice for one endpoint.
    #[error("method {method} is declared more than once for \"{template}\"")]
    DuplicateMethod {
        /// The offending route template.
        template: String,
        /// The method that was declared twice.
        method: Method,
    },
    /// The template declares a parameter segment that the operation schema
    /// does not list.
    #[error("\"{template}\" declares [{name}] but the schema does not")]
    MissingParamDecl {
        /// The offending route template.
        template: String,
        /// The parameter present in the template but absent from the schema.
        name: String,
    },
    /// The operation schema lists a parameter that has no matching segment
    /// in the template.
    #[error("schema for \"{template}\" declares unknown parameter \"{name}\"")]
    UnknownParam {
        /// The offending route template.
        template: String,
        /// The parameter present in the schema but absent from the template.
        name: String,
    },
    /// The operation schema declares a parameter with a different shape than
    /// the template segment (single vs. catch-all vs. optional catch-all).
    #[error(
        "schema for \"{template}\" declares \"{name}\" as {declared}, template expects {expected}"
    )]
    ParamKindMismatch {
        /// The offending route template.
        template: String,
        /// The mismatched parameter.
        name: String,
        /// The kind declared in the schema.
        declared: &'static str,
        /// The kind implied by the template segment.
        expected: &'static str,
    },
}

/// A failed URL render.
///
/// ```
/// use urlgen::{Declaration, Method, Options, RenderError, Routes, Schema};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let routes = Routes::new([(
///     "/users/[id]",
///     Declaration::shorthand(Schema::new().param("id")),
/// )])?;
///
/// // the template requires `id`
/// let err = routes.url("/users/[id]", Method::Get, &Options::new()).unwrap_err();
/// assert_eq!(err, RenderError::MissingParam { name: "id".into() });
/// # Ok(())
/// # }
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, thiserror::Error)]
pub enum RenderError {
    /// A required parameter was absent from the parameter bag (or supplied
    /// as an empty string).
    #[error("\"{name}\" is required")]
    MissingParam {
        /// The missing parameter.
        name: String,
    },
    /// A catch-all segment was supplied with a scalar value.
    #[error("\"{name}\" must be a list")]
    ExpectedList {
        /// The wrongly shaped parameter.
        name: String,
    },
    /// A single-value segment was supplied with a list value.
    #[error("\"{name}\" must not be a list")]
    UnexpectedList {
        /// The wrongly shaped parameter.
        name: String,
    },
    /// The endpoint looked up on the route table was never declared.
    #[error("no route declared for \"{template}\"")]
    UnknownRoute {
        /// The looked-up template.
        template: String,
    },
    /// The method looked up on an endpoint was never declared.
    #[error("no {method} declared for \"{template}\"")]
    UnknownMethod {
        /// The looked-up template.
        template: String,
        /// The undeclared method.
        method: Method,
    },
}
