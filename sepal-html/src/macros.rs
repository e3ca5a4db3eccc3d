// The per-attribute helpers are generated, never written by hand: each group
// in groups.rs is one `attribute_group!` invocation whose row list is the
// single source of truth for both the extension trait and the group's static
// table.

/// Emits one generated helper method. The row kind selects the shape:
/// `escaped` and `raw` take an optional string value, `int` takes a plain
/// integer, `flag` takes the condition for a ` key="key"` boolean attribute.
macro_rules! attribute_method {
    ( $(#[$meta:meta])* $method:ident: $name:literal, escaped ) => {
        $(#[$meta])*
        fn $method<'a>(self, value: impl Into<Option<&'a str>>) -> Self {
            self.push($name, value.into())
        }
    };
    ( $(#[$meta:meta])* $method:ident: $name:literal, raw ) => {
        $(#[$meta])*
        fn $method<'a>(self, value: impl Into<Option<&'a str>>) -> Self {
            self.push_raw($name, value.into())
        }
    };
    ( $(#[$meta:meta])* $method:ident: $name:literal, int ) => {
        $(#[$meta])*
        fn $method(self, value: i64) -> Self {
            self.push_int($name, Some(value))
        }
    };
    ( $(#[$meta:meta])* $method:ident: $name:literal, flag ) => {
        $(#[$meta])*
        fn $method(self, condition: bool) -> Self {
            self.push_flag($name, condition)
        }
    };
}

macro_rules! attribute_kind {
    (escaped) => {
        crate::table::AttrKind::Escaped
    };
    (raw) => {
        crate::table::AttrKind::Raw
    };
    (int) => {
        crate::table::AttrKind::Int
    };
    (flag) => {
        crate::table::AttrKind::Flag
    };
}

/// Expands one attribute group into an extension trait of default methods
/// over [`sepal_core::HasAttributes`], a blanket impl, and the group's
/// static [`AttrDef`](crate::table::AttrDef) table.
macro_rules! attribute_group {
    (
        $(#[$trait_attr:meta])*
        $standard:ident trait $trait_name:ident / $table_name:ident {
            $(
                $(#[$method_attr:meta])*
                $method:ident: $name:literal, $kind:ident;
            )*
        }
    ) => {
        $(#[$trait_attr])*
        pub trait $trait_name: sepal_core::HasAttributes {
            $(
                crate::macros::attribute_method! {
                    $(#[$method_attr])*
                    $method: $name, $kind
                }
            )*
        }

        impl<T> $trait_name for T where T: sepal_core::HasAttributes {}

        /// The rows behind the identically named trait, in method order.
        pub static $table_name: &[crate::table::AttrDef] = &[
            $(
                crate::table::AttrDef {
                    name: $name,
                    kind: crate::macros::attribute_kind!($kind),
                    standard: crate::table::Standard::$standard,
                },
            )*
        ];
    };
}

pub(crate) use attribute_group;
pub(crate) use attribute_kind;
pub(crate) use attribute_method;
