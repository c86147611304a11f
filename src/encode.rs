use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// The URL component encode set: everything except ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )` is percent-encoded. Non-ASCII bytes are always
/// encoded.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a string as a URL component.
pub(crate) fn encode(input: &str) -> Cow<'_, str> {
    utf8_percent_encode(input, COMPONENT).into()
}
