use crate::encode::encode;
use crate::error::RenderError;
use crate::params::{ParamValue, Params};
use crate::template::{join_scheme, ParamKind, Segment, Template};

/// Substitutes a parameter bag into a parsed template and normalizes the
/// result into a path.
///
/// Substituted values are percent-encoded. Segments that render to nothing
/// (an omitted optional catch-all, an empty list) are dropped along with
/// their slash; runs of `/` collapse to one and a trailing `/` is stripped.
/// Scheme-bearing templates keep their `scheme://` prefix untouched, all
/// others come back with exactly one leading `/`.
pub(crate) fn render_path(template: &Template, params: &Params) -> Result<String, RenderError> {
    let mut rendered = Vec::with_capacity(template.segments().len());

    for segment in template.segments() {
        match segment {
            Segment::Literal(literal) => rendered.push(literal.clone()),
            Segment::Param { name, kind } => rendered.push(substitute(name, *kind, params)?),
        }
    }

    // Joining the kept pieces and re-splitting collapses duplicate slashes
    // from multi-valued substitutions and drops the trailing slash.
    let joined = rendered.join("/");
    let path = joined
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    match template.scheme() {
        Some(_) => Ok(join_scheme(template.scheme(), &path)),
        None => Ok(format!("/{}", path)),
    }
}

fn substitute(name: &str, kind: ParamKind, params: &Params) -> Result<String, RenderError> {
    let value = params.get(name);

    match kind {
        ParamKind::Single => match value {
            None => Err(missing(name)),
            Some(value) if value.is_empty_scalar() => Err(missing(name)),
            Some(ParamValue::List(_)) => Err(RenderError::UnexpectedList {
                name: name.to_owned(),
            }),
            Some(ParamValue::Value(value)) => Ok(encode(value).into_owned()),
        },
        ParamKind::CatchAll => match value {
            None => Err(missing(name)),
            Some(value) if value.is_empty_scalar() => Err(missing(name)),
            Some(ParamValue::Value(_)) => Err(RenderError::ExpectedList {
                name: name.to_owned(),
            }),
            Some(ParamValue::List(values)) => Ok(join_values(values)),
        },
        ParamKind::OptionalCatchAll => match value {
            None => Ok(String::new()),
            Some(value) if value.is_empty_scalar() => Ok(String::new()),
            Some(ParamValue::Value(_)) => Err(RenderError::ExpectedList {
                name: name.to_owned(),
            }),
            Some(ParamValue::List(values)) => Ok(join_values(values)),
        },
    }
}

fn join_values(values: &[String]) -> String {
    values
        .iter()
        .map(|value| encode(value))
        .collect::<Vec<_>>()
        .join("/")
}

fn missing(name: &str) -> RenderError {
    RenderError::MissingParam {
        name: name.to_owned(),
    }
}
