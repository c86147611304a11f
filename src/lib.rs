//! A type-safe URL builder for declarative route templates.
//!
//! `urlgen` turns a map of route templates into a table of URL builders.
//! Templates use bracket segments for parameters:
//!
//! ```ignore
//! Syntax          Type
//! [name]          required single parameter
//! [...name]       required catch-all parameter
//! [[...name]]     optional catch-all parameter
//! ```
//!
//! Declarations are validated when the table is built, so a schema that
//! disagrees with its template fails up front rather than at the first call.
//! Rendering substitutes percent-encoded parameter values into the path,
//! appends a canonical (key-sorted) query string and an encoded hash
//! fragment, and prefixes the table's base URL:
//!
//! ```
//! use urlgen::{Declaration, Method, Options, Routes, Schema};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let routes = Routes::new([
//!     ("/users", Declaration::methods([
//!         (Method::Get, Schema::new().query_opt("page")),
//!         (Method::Post, Schema::empty()),
//!     ])),
//!     ("/users/[id]", Declaration::shorthand(Schema::new().param("id"))),
//!     ("/docs/[[...path]]", Declaration::shorthand(Schema::new().param_list_opt("path"))),
//! ])?;
//!
//! let url = routes.url("/users/[id]", Method::Get, &Options::new().param("id", "1 2"))?;
//! assert_eq!(url, "/users/1%202");
//!
//! let url = routes.url(
//!     "/users",
//!     Method::Get,
//!     &Options::new().query("page", 2i64).hash("results"),
//! )?;
//! assert_eq!(url, "/users?page=2#results");
//!
//! // omitted optional catch-alls vanish along with their slash
//! let url = routes.url("/docs/[[...path]]", Method::Get, &Options::new())?;
//! assert_eq!(url, "/docs");
//! # Ok(())
//! # }
//! ```
//!
//! Templates may carry a custom scheme instead of a leading slash; the
//! `scheme://` delimiter is never collapsed:
//!
//! ```
//! use urlgen::{Declaration, Method, Options, Routes, Schema};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let routes = Routes::new([(
//!     "app://settings/[section]",
//!     Declaration::shorthand(Schema::new().param("section")),
//! )])?;
//!
//! let url = routes.url(
//!     "app://settings/[section]",
//!     Method::Get,
//!     &Options::new().param("section", "audio"),
//! )?;
//! assert_eq!(url, "app://settings/audio");
//! # Ok(())
//! # }
//! ```
//!
//! Everything is synchronous and stateless: each build call is a pure
//! function of the template and its inputs, and the table can be shared
//! across threads without coordination.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod encode;
mod error;
mod params;
mod query;
mod render;
mod routes;
mod template;

pub use error::{RenderError, RouteError};
pub use params::{ParamValue, Params};
pub use query::{Queries, QueryScalar, QueryValue};
pub use routes::{Declaration, Endpoint, Method, Options, Routes, Schema, UrlBuilder};
