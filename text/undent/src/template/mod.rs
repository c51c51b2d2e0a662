//! Fragment/value templates.
//!
//! A [`Template`] is the interleaved form a template-literal front end
//! produces: literal text fragments with a substitution value between
//! each adjacent pair. The builder only grows in (value, fragment)
//! steps, so a template always holds exactly one more fragment than it
//! holds values and no runtime count check is needed.

use std::borrow::Cow;
use std::fmt;

use crate::engine;

/// A substitution value.
///
/// Only string values are eligible for re-indentation when interpolated;
/// everything else is rendered to its display form up front and inserted
/// verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value<'a> {
    /// A string value. Re-indented on interpolation when it spans
    /// multiple physical lines.
    Text(Cow<'a, str>),
    /// A non-string value, already rendered. Always inserted verbatim.
    Rendered(String),
}

impl Value<'_> {
    /// Renders any displayable value into its verbatim insertion form.
    ///
    /// Numbers, booleans, and other non-string values go through here;
    /// they are never re-indented even when their rendering happens to
    /// contain a line break.
    pub fn display(value: impl fmt::Display) -> Self {
        Value::Rendered(value.to_string())
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(text: &'a str) -> Self {
        Value::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Value<'_> {
    fn from(text: String) -> Self {
        Value::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Value::Text(text)
    }
}

/// Interleaved literal fragments and substitution values.
///
/// Fragment `i` is the literal text before value `i`; the final fragment
/// is the text after the last value. Escape sequences are the front
/// end's business: fragments arrive here with suppressed line breaks
/// already collapsed and escaped delimiters already unescaped, and the
/// engine inserts them as-is.
///
/// # Example
///
/// ```
/// use undent::Template;
///
/// let body = "line one\nline two";
/// let out = Template::new("\n    header:\n      ")
///     .bind(body, "\n    ")
///     .dedent();
/// assert_eq!(out, "header:\n  line one\n  line two");
/// ```
#[derive(Clone, Debug)]
pub struct Template<'a> {
    fragments: Vec<&'a str>,
    values: Vec<Value<'a>>,
}

impl<'a> Template<'a> {
    /// Starts a template from its first literal fragment.
    pub fn new(fragment: &'a str) -> Self {
        Template {
            fragments: vec![fragment],
            values: Vec::new(),
        }
    }

    /// Appends a substitution value and the literal fragment that
    /// follows it.
    #[must_use = "bind returns the extended template"]
    pub fn bind(mut self, value: impl Into<Value<'a>>, fragment: &'a str) -> Self {
        self.values.push(value.into());
        self.fragments.push(fragment);
        self
    }

    /// Strips the common indentation and interpolates the values,
    /// re-indenting multi-line string values to their insertion column.
    pub fn dedent(&self) -> String {
        engine::run(&self.fragments, &self.values)
    }
}

#[cfg(test)]
mod tests;
