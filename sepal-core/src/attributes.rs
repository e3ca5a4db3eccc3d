use std::fmt;

use crate::escape::escape_into;
use crate::options::RenderOptions;

/// An escaped, append-only attribute list for a single HTML tag.
///
/// Each append writes one serialized ` key="value"` token into a growing
/// buffer. Tokens are never removed, rewritten, or reordered: output order is
/// call order, and appending the same key twice emits two occurrences.
///
/// ```
/// use sepal_core::Attributes;
///
/// let attrs = Attributes::new()
///     .attr("id", Some("nav"))
///     .attr_int("tabindex", Some(0))
///     .flag_if("hidden", false);
/// assert_eq!(attrs.as_str(), r#" id="nav" tabindex=0"#);
/// ```
///
/// Cloning copies the serialized buffer verbatim, so a clone starts from the
/// original's exact output and the two share no state afterwards. Escaping
/// happens once, at append time; cloned content is never escaped again.
///
/// An `Attributes` value belongs to one rendering call stack. It carries no
/// synchronization and is not meant to be shared across concurrent writers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    buf: String,
    options: RenderOptions,
}

impl Attributes {
    /// Creates an empty attribute list with default [`RenderOptions`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty attribute list configured for one render pass.
    ///
    /// ```
    /// use sepal_core::{Attributes, RenderOptionsBuilder};
    ///
    /// let options = RenderOptionsBuilder::default()
    ///     .test_attributes(false)
    ///     .build()
    ///     .unwrap();
    /// let attrs = Attributes::with_options(options).data_test(Some("login"));
    /// assert!(attrs.is_empty());
    /// ```
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            buf: String::new(),
            options,
        }
    }

    /// Appends ` key="value"` with the value entity-escaped.
    ///
    /// A `None` value appends nothing. Every caller that may or may not have
    /// a value relies on this: absent values omit the attribute entirely,
    /// they never produce a stray `key=""`.
    ///
    /// An empty key is a contract violation and panics in debug builds.
    pub fn attr<V>(mut self, key: &str, value: Option<V>) -> Self
    where
        V: AsRef<str>,
    {
        if let Some(value) = value {
            self.open(key);
            self.buf.push('"');
            escape_into(&mut self.buf, value.as_ref());
            self.buf.push('"');
        }
        self
    }

    /// Appends ` key="value"` with the value written verbatim.
    ///
    /// No entity escaping is applied. This is the intended path for inline
    /// script and event-handler values, where `<`, `&`, and quotes must reach
    /// the browser untouched; callers own the safety of what they pass here.
    pub fn attr_raw<V>(mut self, key: &str, value: Option<V>) -> Self
    where
        V: AsRef<str>,
    {
        if let Some(value) = value {
            self.open(key);
            self.buf.push('"');
            self.buf.push_str(value.as_ref());
            self.buf.push('"');
        }
        self
    }

    /// Appends ` key=value`, unquoted. Integers never need escaping.
    pub fn attr_int(mut self, key: &str, value: Option<i64>) -> Self {
        if let Some(value) = value {
            self.open(key);
            self.buf.push_str(&value.to_string());
        }
        self
    }

    /// Appends the boolean-style ` key="key"` when `condition` holds.
    ///
    /// ```
    /// use sepal_core::Attributes;
    ///
    /// let attrs = Attributes::new().flag_if("selected", true);
    /// assert_eq!(attrs.as_str(), r#" selected="selected""#);
    /// ```
    pub fn flag_if(self, key: &str, condition: bool) -> Self {
        if condition {
            self.attr(key, Some(key))
        } else {
            self
        }
    }

    /// Appends the `data-test` diagnostic attribute used by UI test tooling.
    ///
    /// Checked against [`RenderOptions::test_attributes`] before anything is
    /// written: with the option disabled this is a complete no-op, whatever
    /// the value.
    pub fn data_test<V>(self, value: Option<V>) -> Self
    where
        V: AsRef<str>,
    {
        if !self.options.test_attributes {
            return self;
        }
        self.attr("data-test", value)
    }

    // ` key=` prefix shared by every append path.
    fn open(&mut self, key: &str) {
        debug_assert!(!key.is_empty(), "attribute key must not be empty");
        self.buf.push(' ');
        self.buf.push_str(key);
        self.buf.push('=');
    }

    /// The accumulated token sequence, exactly as built.
    ///
    /// Reading is side-effect-free and stable: repeated calls return
    /// identical content.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Streams the accumulated content into `sink` without an intermediate
    /// copy. Sink errors propagate unchanged.
    pub fn write_to<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result {
        sink.write_str(&self.buf)
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// The render-pass configuration this list was created with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

impl From<Attributes> for String {
    fn from(attrs: Attributes) -> Self {
        attrs.into_string()
    }
}

/// Write access to an attribute list.
///
/// The per-attribute helper traits in downstream crates are default methods
/// over these four primitives, so they extend anything that implements this.
pub trait HasAttributes: Sized {
    /// Appends ` key="value"` with the value entity-escaped.
    fn push<V: AsRef<str>>(self, key: &str, value: Option<V>) -> Self;

    /// Appends ` key="value"` verbatim, skipping entity escaping.
    fn push_raw<V: AsRef<str>>(self, key: &str, value: Option<V>) -> Self;

    /// Appends ` key=value`, unquoted.
    fn push_int(self, key: &str, value: Option<i64>) -> Self;

    /// Appends ` key="key"` when `condition` holds.
    fn push_flag(self, key: &str, condition: bool) -> Self;
}

impl HasAttributes for Attributes {
    fn push<V: AsRef<str>>(self, key: &str, value: Option<V>) -> Self {
        self.attr(key, value)
    }

    fn push_raw<V: AsRef<str>>(self, key: &str, value: Option<V>) -> Self {
        self.attr_raw(key, value)
    }

    fn push_int(self, key: &str, value: Option<i64>) -> Self {
        self.attr_int(key, value)
    }

    fn push_flag(self, key: &str, condition: bool) -> Self {
        self.flag_if(key, condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RenderOptionsBuilder;
    use std::fmt;

    #[test]
    fn append_escapes_value() {
        let attrs = Attributes::new().attr("class", Some("a\"b"));
        assert_eq!(attrs.as_str(), r#" class="a&quot;b""#);
    }

    #[test]
    fn absent_value_appends_nothing() {
        let attrs = Attributes::new()
            .attr("id", None::<&str>)
            .attr_raw("onclick", None::<&str>)
            .attr_int("min", None);
        assert_eq!(attrs.as_str(), "");
    }

    #[test]
    fn integer_values_are_unquoted() {
        let attrs = Attributes::new().attr_int("min", Some(5));
        assert_eq!(attrs.as_str(), " min=5");
    }

    #[test]
    fn negative_integers_serialize_with_sign() {
        let attrs = Attributes::new().attr_int("tabindex", Some(-1));
        assert_eq!(attrs.as_str(), " tabindex=-1");
    }

    #[test]
    fn raw_values_skip_entity_escaping() {
        let attrs = Attributes::new().attr_raw("onclick", Some("a<b"));
        assert_eq!(attrs.as_str(), r#" onclick="a<b""#);
    }

    #[test]
    fn repeated_keys_append_in_call_order() {
        let attrs = Attributes::new().attr("id", Some("1")).attr("id", Some("2"));
        assert_eq!(attrs.as_str(), r#" id="1" id="2""#);
    }

    #[test]
    fn flag_if_emits_key_valued_attribute() {
        let attrs = Attributes::new()
            .flag_if("selected", true)
            .flag_if("checked", false);
        assert_eq!(attrs.as_str(), r#" selected="selected""#);
    }

    #[test]
    fn data_test_emits_by_default() {
        let attrs = Attributes::new().data_test(Some("login"));
        assert_eq!(attrs.as_str(), r#" data-test="login""#);
    }

    #[test]
    fn data_test_respects_disabled_options() {
        let options = RenderOptionsBuilder::default()
            .test_attributes(false)
            .build()
            .unwrap();
        let attrs = Attributes::with_options(options)
            .data_test(Some("login"))
            .attr("id", Some("x"));
        assert_eq!(attrs.as_str(), r#" id="x""#);
    }

    #[test]
    fn clone_copies_without_re_escaping() {
        let original = Attributes::new().attr("alt", Some("a&b"));
        let copy = original.clone().attr("id", Some("x"));
        assert_eq!(original.as_str(), r#" alt="a&amp;b""#);
        assert_eq!(copy.as_str(), r#" alt="a&amp;b" id="x""#);
    }

    #[test]
    fn serialized_form_is_stable_across_reads() {
        let attrs = Attributes::new().attr("id", Some("nav"));
        assert_eq!(attrs.as_str(), attrs.as_str());
        assert_eq!(attrs.to_string(), attrs.as_str());
    }

    #[test]
    fn write_to_matches_serialized_form() {
        let attrs = Attributes::new()
            .attr("id", Some("nav"))
            .attr_int("tabindex", Some(1));
        let mut sink = String::new();
        attrs.write_to(&mut sink).unwrap();
        assert_eq!(sink, attrs.as_str());
    }

    struct FailingSink;

    impl fmt::Write for FailingSink {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn write_to_propagates_sink_errors() {
        let attrs = Attributes::new().attr("id", Some("nav"));
        assert!(attrs.write_to(&mut FailingSink).is_err());
    }

    #[test]
    fn into_string_returns_the_buffer() {
        let attrs = Attributes::new().attr("id", Some("nav"));
        let serialized = attrs.as_str().to_string();
        assert_eq!(String::from(attrs), serialized);
    }

    #[test]
    fn primitives_are_reachable_through_the_trait() {
        fn generic<T: HasAttributes>(target: T) -> T {
            target
                .push("id", Some("nav"))
                .push_raw("onclick", Some("go()"))
                .push_int("tabindex", Some(2))
                .push_flag("disabled", true)
        }

        let attrs = generic(Attributes::new());
        assert_eq!(
            attrs.as_str(),
            r#" id="nav" onclick="go()" tabindex=2 disabled="disabled""#
        );
    }
}
