use sepal_core::Attributes;

/// Starts an empty attribute list.
pub fn attributes() -> Attributes {
    Attributes::new()
}

/// Starts an attribute list from its `id`.
///
/// ```
/// use sepal_html::{factory, GlobalAttributes};
///
/// let attrs = factory::id("nav").class("menu");
/// assert_eq!(attrs.as_str(), r#" id="nav" class="menu""#);
/// ```
pub fn id<V: AsRef<str>>(value: V) -> Attributes {
    Attributes::new().attr("id", Some(value))
}

pub fn class<V: AsRef<str>>(value: V) -> Attributes {
    Attributes::new().attr("class", Some(value))
}

pub fn style<V: AsRef<str>>(value: V) -> Attributes {
    Attributes::new().attr("style", Some(value))
}

pub fn title<V: AsRef<str>>(value: V) -> Attributes {
    Attributes::new().attr("title", Some(value))
}

pub fn name<V: AsRef<str>>(value: V) -> Attributes {
    Attributes::new().attr("name", Some(value))
}

pub fn href<V: AsRef<str>>(value: V) -> Attributes {
    Attributes::new().attr("href", Some(value))
}

pub fn src<V: AsRef<str>>(value: V) -> Attributes {
    Attributes::new().attr("src", Some(value))
}

pub fn r#type<V: AsRef<str>>(value: V) -> Attributes {
    Attributes::new().attr("type", Some(value))
}

pub fn action<V: AsRef<str>>(value: V) -> Attributes {
    Attributes::new().attr("action", Some(value))
}

pub fn placeholder<V: AsRef<str>>(value: V) -> Attributes {
    Attributes::new().attr("placeholder", Some(value))
}

pub fn data_role<V: AsRef<str>>(value: V) -> Attributes {
    Attributes::new().attr("data-role", Some(value))
}
