use crate::error::RouteError;

/// The shape of one parameter segment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ParamKind {
    /// `[name]` — exactly one value.
    Single,
    /// `[...name]` — an ordered list of values, required.
    CatchAll,
    /// `[[...name]]` — an ordered list of values, may be omitted.
    OptionalCatchAll,
}

impl ParamKind {
    pub(crate) fn describe(&self) -> &'static str {
        match self {
            ParamKind::Single => "a single value",
            ParamKind::CatchAll => "a list",
            ParamKind::OptionalCatchAll => "an optional list",
        }
    }
}

/// One slash-delimited piece of a route template.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Segment {
    /// Copied into the rendered path as-is.
    Literal(String),
    /// Substituted from the parameter bag.
    Param { name: String, kind: ParamKind },
}

/// A parsed route template: an optional scheme prefix plus the non-empty
/// segments of the remaining path.
///
/// Parsing validates the declaration (empty parameter names are rejected);
/// substitution lives in [`crate::render`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Template {
    source: String,
    scheme: Option<String>,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses a route template string.
    pub(crate) fn parse(source: &str) -> Result<Template, RouteError> {
        let (scheme, rest) = split_scheme(source);

        let mut segments = Vec::new();
        for raw in rest.split('/') {
            if raw.is_empty() {
                continue;
            }
            segments.push(classify(source, raw)?);
        }

        Ok(Template {
            source: source.to_owned(),
            scheme: scheme.map(str::to_owned),
            segments,
        })
    }

    /// The template string this was parsed from.
    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over the parameter segments in declaration order.
    pub(crate) fn params(&self) -> impl Iterator<Item = (&str, ParamKind)> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param { name, kind } => Some((name.as_str(), *kind)),
            Segment::Literal(_) => None,
        })
    }
}

/// Splits a template into an optional scheme prefix and the remaining path,
/// on the first `"://"` occurrence.
///
/// Scheme-bearing templates (custom app schemes included) are exempt from
/// the slash normalization applied to ordinary paths, so the delimiter has
/// to come off before the path is split into segments.
pub(crate) fn split_scheme(template: &str) -> (Option<&str>, &str) {
    match template.find("://") {
        Some(at) => (Some(&template[..at]), &template[at + 3..]),
        None => (None, template),
    }
}

/// Joins a rendered path back onto its scheme, if there is one.
pub(crate) fn join_scheme(scheme: Option<&str>, rendered: &str) -> String {
    match scheme {
        Some(scheme) => format!("{}://{}", scheme, rendered),
        None => rendered.to_owned(),
    }
}

/// Classifies one segment of a route template.
///
/// Precedence mirrors the template grammar: `[[...name]]`, then `[...name]`,
/// then `[name]`, then literal.
fn classify(template: &str, segment: &str) -> Result<Segment, RouteError> {
    let (name, kind) = if let Some(name) = strip(segment, "[[...", "]]") {
        (name, ParamKind::OptionalCatchAll)
    } else if let Some(name) = strip(segment, "[...", "]") {
        (name, ParamKind::CatchAll)
    } else if let Some(name) = strip(segment, "[", "]") {
        (name, ParamKind::Single)
    } else {
        return Ok(Segment::Literal(segment.to_owned()));
    };

    if name.is_empty() {
        return Err(RouteError::EmptyParamName {
            template: template.to_owned(),
        });
    }

    Ok(Segment::Param {
        name: name.to_owned(),
        kind,
    })
}

fn strip<'a>(segment: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    segment.strip_prefix(prefix)?.strip_suffix(suffix)
}
