use sepal_core::Attributes;

/// How an attribute's value is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    /// ` key="value"` with the value entity-escaped.
    Escaped,
    /// ` key="value"` verbatim. Event-handler attributes use this so inline
    /// script reaches the browser untouched.
    Raw,
    /// ` key=value`, unquoted.
    Int,
    /// ` key="key"`, present or absent as a whole.
    Flag,
}

/// Which attribute set a row comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standard {
    /// The classic HTML element attributes.
    Html,
    /// Added with HTML5 (including the ARIA subset carried here).
    Html5,
    /// The jQuery Mobile `data-*` vocabulary.
    Mobile,
}

/// One row of the attribute tables: the serialized name, how its value is
/// written, and where it comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrDef {
    pub name: &'static str,
    pub kind: AttrKind,
    pub standard: Standard,
}

impl AttrDef {
    /// Appends this attribute to `attrs` from an untyped value, dispatching
    /// on the row's kind. This is the path for callers holding parsed
    /// `(name, value)` pairs rather than calling the generated methods.
    ///
    /// Integer rows fall back to the escaped string form when the value does
    /// not parse. Flag rows follow boolean-attribute conventions: a missing
    /// value, an empty value, or the attribute's own name all mean present.
    ///
    /// ```
    /// use sepal_core::Attributes;
    /// use sepal_html::lookup;
    ///
    /// let row = lookup("colspan").unwrap();
    /// let attrs = row.apply(Attributes::new(), Some("3"));
    /// assert_eq!(attrs.as_str(), " colspan=3");
    /// ```
    pub fn apply(&self, attrs: Attributes, value: Option<&str>) -> Attributes {
        match self.kind {
            AttrKind::Escaped => attrs.attr(self.name, value),
            AttrKind::Raw => attrs.attr_raw(self.name, value),
            AttrKind::Int => match value.map(str::parse::<i64>) {
                Some(Ok(parsed)) => attrs.attr_int(self.name, Some(parsed)),
                Some(Err(_)) => attrs.attr(self.name, value),
                None => attrs,
            },
            AttrKind::Flag => {
                let present =
                    matches!(value, None | Some("")) || value == Some(self.name);
                attrs.flag_if(self.name, present)
            }
        }
    }
}

/// Iterates every known row across all groups.
pub fn all() -> impl Iterator<Item = &'static AttrDef> {
    crate::groups::GLOBAL_ATTRIBUTES
        .iter()
        .chain(crate::groups::HTML5_ATTRIBUTES)
        .chain(crate::groups::EVENT_ATTRIBUTES)
        .chain(crate::groups::MOBILE_ATTRIBUTES)
}

/// Finds the row for a serialized attribute name.
pub fn lookup(name: &str) -> Option<&'static AttrDef> {
    all().find(|def| def.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_classifies_known_attributes() {
        assert_eq!(lookup("class").unwrap().kind, AttrKind::Escaped);
        assert_eq!(lookup("class").unwrap().standard, Standard::Html);
        assert_eq!(lookup("onclick").unwrap().kind, AttrKind::Raw);
        assert_eq!(lookup("colspan").unwrap().kind, AttrKind::Int);
        assert_eq!(lookup("checked").unwrap().kind, AttrKind::Flag);
        assert_eq!(lookup("placeholder").unwrap().standard, Standard::Html5);
        assert_eq!(lookup("data-role").unwrap().standard, Standard::Mobile);
        assert!(lookup("no-such-attribute").is_none());
    }

    #[test]
    fn table_names_are_unique() {
        let mut seen = HashSet::new();
        for def in all() {
            assert!(seen.insert(def.name), "duplicate row for {}", def.name);
        }
    }

    #[test]
    fn apply_matches_the_generated_methods() {
        use sepal_core::HasAttributes;

        let by_row = lookup("title")
            .unwrap()
            .apply(Attributes::new(), Some("a<b"));
        let by_method = Attributes::new().push("title", Some("a<b"));
        assert_eq!(by_row, by_method);

        let by_row = lookup("onclick")
            .unwrap()
            .apply(Attributes::new(), Some("go('x')"));
        let by_method = Attributes::new().push_raw("onclick", Some("go('x')"));
        assert_eq!(by_row, by_method);
    }

    #[test]
    fn apply_parses_integer_rows() {
        let row = lookup("rowspan").unwrap();
        assert_eq!(row.apply(Attributes::new(), Some("4")).as_str(), " rowspan=4");
        // unparsable integers fall back to the escaped string form
        assert_eq!(
            row.apply(Attributes::new(), Some("wide")).as_str(),
            r#" rowspan="wide""#
        );
        assert_eq!(row.apply(Attributes::new(), None).as_str(), "");
    }

    #[test]
    fn apply_follows_boolean_attribute_conventions() {
        let row = lookup("selected").unwrap();
        assert_eq!(
            row.apply(Attributes::new(), None).as_str(),
            r#" selected="selected""#
        );
        assert_eq!(
            row.apply(Attributes::new(), Some("selected")).as_str(),
            r#" selected="selected""#
        );
        assert_eq!(row.apply(Attributes::new(), Some("off")).as_str(), "");
    }
}
