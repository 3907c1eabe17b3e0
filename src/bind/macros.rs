//! Declaration macros for entities, enumerations and scalar leaves.

/// Implement [`Bind`](crate::bind::Bind) for [`Scalar`](crate::bind::Scalar) types
macro_rules! scalar_bind {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::bind::Bind for $ty {
                fn to_json(
                    &self,
                    _ctx: &$crate::bind::Context,
                ) -> Result<Option<::serde_json::Value>, $crate::CdxError> {
                    $crate::bind::Scalar::to_json_value(self).map(Some)
                }

                fn from_json(
                    value: &::serde_json::Value,
                    _ctx: &$crate::bind::Context,
                ) -> Result<Option<Self>, $crate::CdxError> {
                    <$ty as $crate::bind::Scalar>::from_json_value(value).map(Some)
                }

                fn to_xml(
                    &self,
                    name: &str,
                    _ctx: &$crate::bind::Context,
                ) -> Result<Vec<$crate::bom::xmltree::XmlElement>, $crate::CdxError> {
                    let text = $crate::bind::Scalar::to_text(self);
                    Ok(vec![$crate::bom::xmltree::XmlElement::new(name).with_text(text)])
                }

                fn from_xml(
                    elements: &[&$crate::bom::xmltree::XmlElement],
                    _ctx: &$crate::bind::Context,
                ) -> Result<Option<Self>, $crate::CdxError> {
                    match elements.first() {
                        Some(element) => {
                            let text = element.text.as_deref().unwrap_or_default();
                            <$ty as $crate::bind::Scalar>::from_text(text).map(Some)
                        }
                        None => Ok(None),
                    }
                }

                fn to_xml_text(
                    &self,
                    _ctx: &$crate::bind::Context,
                ) -> Result<Option<String>, $crate::CdxError> {
                    Ok(Some($crate::bind::Scalar::to_text(self)))
                }

                fn from_xml_text(
                    text: &str,
                    _ctx: &$crate::bind::Context,
                ) -> Result<Option<Self>, $crate::CdxError> {
                    <$ty as $crate::bind::Scalar>::from_text(text).map(Some)
                }
            }
        )*
    };
}
pub(crate) use scalar_bind;

/// Declare a closed enumeration with its wire values
///
/// Unknown values fail with [`CdxError::UnknownVariant`](crate::CdxError::UnknownVariant),
/// which the `Option` / `Vec` wrappers turn into an absent value under the
/// lenient policy.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
        }

        impl $name {
            /// Value as written in documents
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )*
                }
            }

            /// Every known value
            pub const fn all() -> &'static [$name] {
                &[ $( $name::$variant, )* ]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::CdxError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $( $wire => Ok($name::$variant), )*
                    _ => Err($crate::CdxError::UnknownVariant {
                        kind: stringify!($name),
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl $crate::bind::Scalar for $name {
            const KIND: &'static str = stringify!($name);

            fn to_text(&self) -> String {
                self.as_str().to_string()
            }

            fn from_text(text: &str) -> Result<Self, $crate::CdxError> {
                text.trim().parse()
            }
        }

        $crate::bind::macros::scalar_bind!($name);
    };
}
pub(crate) use wire_enum;

/// Declare an entity: the struct, its descriptor table and its accessors
///
/// Each field is written as `ident: Type => ordinal, descriptor`, where the
/// descriptor is a `FieldDescriptor` built with its `const` builders.
macro_rules! entity {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty => $ordinal:literal, $descriptor:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        impl $crate::bind::Entity for $name {
            const NAME: &'static str = stringify!($name);

            fn descriptors() -> &'static [$crate::schema::FieldDescriptor] {
                const FIELDS: &[$crate::schema::FieldDescriptor] = &[
                    $( $descriptor.bind(stringify!($field), $ordinal), )*
                ];
                FIELDS
            }

            fn field(&self, ident: &str) -> Option<&dyn $crate::bind::FieldValue> {
                $(
                    if ident == stringify!($field) {
                        return Some(&self.$field);
                    }
                )*
                None
            }

            fn field_mut(&mut self, ident: &str) -> Option<&mut dyn $crate::bind::FieldValue> {
                $(
                    if ident == stringify!($field) {
                        return Some(&mut self.$field);
                    }
                )*
                None
            }
        }

        impl $crate::bind::Bind for $name {
            fn to_json(
                &self,
                ctx: &$crate::bind::Context,
            ) -> Result<Option<::serde_json::Value>, $crate::CdxError> {
                $crate::bom::json::entity_to_json(self, ctx)
                    .map(|object| Some(::serde_json::Value::Object(object)))
            }

            fn from_json(
                value: &::serde_json::Value,
                ctx: &$crate::bind::Context,
            ) -> Result<Option<Self>, $crate::CdxError> {
                $crate::bom::json::entity_from_json(value, ctx).map(Some)
            }

            fn to_xml(
                &self,
                name: &str,
                ctx: &$crate::bind::Context,
            ) -> Result<Vec<$crate::bom::xmltree::XmlElement>, $crate::CdxError> {
                $crate::bom::xml::entity_to_xml(self, name, ctx).map(|element| vec![element])
            }

            fn from_xml(
                elements: &[&$crate::bom::xmltree::XmlElement],
                ctx: &$crate::bind::Context,
            ) -> Result<Option<Self>, $crate::CdxError> {
                match elements.first() {
                    Some(element) => $crate::bom::xml::entity_from_xml(element, ctx).map(Some),
                    None => Ok(None),
                }
            }
        }
    };
}
pub(crate) use entity;
