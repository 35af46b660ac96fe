//! Declarative builders for enums, models and polymorphic families.
//!
//! Every Graph type follows one of three shapes, so the boilerplate is
//! written once here and each model module only lists wire names.

/// Integer-backed enum with a fixed wire string per constant.
///
/// Codes follow declaration order starting at zero.
macro_rules! graph_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        $vis enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $crate::serialization::GraphEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$(Self::$variant,)+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            fn code(&self) -> i32 {
                *self as i32
            }

            fn parse(value: &str) -> $crate::error::Result<Self> {
                match value {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err($crate::error::Error::UnknownEnumValue {
                        type_name: stringify!($name),
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::serialization::GraphEnum::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(value: &str) -> $crate::error::Result<Self> {
                <Self as $crate::serialization::GraphEnum>::parse(value)
            }
        }

        impl $crate::serialization::FieldValue for $name {
            fn read(
                node: &dyn $crate::serialization::ParseNode,
            ) -> $crate::error::Result<Option<Self>> {
                node.enum_value::<Self>()
            }

            fn write(
                &self,
                key: Option<&str>,
                writer: &mut dyn $crate::serialization::SerializationWriter,
            ) -> $crate::error::Result<()> {
                writer.write_enum_value(key, *self)
            }
        }
    };
}

/// Model struct with optional fields, accessors and (de)serialization.
///
/// A root model owns the additional data and the `@odata.type` value. A
/// derived model (`struct Child: Parent`) embeds its parent as `base` and
/// hands the parent's fields through first. An optional `= "#tag"` sets the
/// default `@odata.type` assigned by `new()`.
///
/// Fields are written `"wireName" => field / set_field: Type`.
macro_rules! graph_model {
    (@field_value $name:ident) => {
        impl $crate::serialization::FieldValue for $name {
            fn read(
                node: &dyn $crate::serialization::ParseNode,
            ) -> $crate::error::Result<Option<Self>> {
                node.object_value(<Self as $crate::serialization::Parsable>::create_from_discriminator_value)
            }

            fn write(
                &self,
                key: Option<&str>,
                writer: &mut dyn $crate::serialization::SerializationWriter,
            ) -> $crate::error::Result<()> {
                writer.write_object_value(key, self)
            }
        }
    };

    (@odata_type) => {
        None
    };

    (@odata_type $odata:literal) => {
        Some($odata.to_string())
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $(= $odata:literal)? {
            $($(#[$fmeta:meta])* $key:literal => $field:ident / $setter:ident : $fty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            additional_data: $crate::serialization::AdditionalData,
            odata_type: Option<String>,
            $($field: Option<$fty>,)*
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    additional_data: $crate::serialization::AdditionalData::new(),
                    odata_type: graph_model!(@odata_type $($odata)?),
                    $($field: None,)*
                }
            }

            pub fn odata_type(&self) -> Option<&String> {
                self.odata_type.as_ref()
            }

            pub fn set_odata_type(&mut self, value: Option<String>) {
                self.odata_type = value;
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> Option<&$fty> {
                    self.$field.as_ref()
                }

                pub fn $setter(&mut self, value: Option<$fty>) {
                    self.$field = value;
                }
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::serialization::AdditionalDataHolder for $name {
            fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                &self.additional_data
            }

            fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                &mut self.additional_data
            }
        }

        impl $crate::serialization::Parsable for $name {
            fn create_from_discriminator_value(
                _node: &dyn $crate::serialization::ParseNode,
            ) -> $crate::error::Result<Self> {
                Ok(Self::new())
            }

            fn field_deserializers(&self) -> $crate::serialization::FieldDeserializers<Self> {
                let mut fields: $crate::serialization::FieldDeserializers<Self> =
                    ::std::collections::HashMap::new();
                fields.insert(
                    $crate::serialization::ODATA_TYPE_KEY,
                    $crate::serialization::field::<Self, String>(|model, value| {
                        model.odata_type = Some(value)
                    }),
                );
                $(
                    fields.insert(
                        $key,
                        $crate::serialization::field::<Self, $fty>(|model, value| {
                            model.$field = Some(value)
                        }),
                    );
                )*
                fields
            }

            fn serialize(
                &self,
                writer: &mut dyn $crate::serialization::SerializationWriter,
            ) -> $crate::error::Result<()> {
                if let Some(value) = &self.odata_type {
                    writer.write_string_value(Some($crate::serialization::ODATA_TYPE_KEY), value)?;
                }
                $(
                    if let Some(value) = &self.$field {
                        $crate::serialization::FieldValue::write(value, Some($key), writer)?;
                    }
                )*
                Ok(())
            }
        }

        graph_model!(@field_value $name);
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $base:ident $(= $odata:literal)? {
            $($(#[$fmeta:meta])* $key:literal => $field:ident / $setter:ident : $fty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            base: $base,
            $($field: Option<$fty>,)*
        }

        impl $name {
            pub fn new() -> Self {
                #[allow(unused_mut)]
                let mut base = $base::new();
                $(base.set_odata_type(Some($odata.to_string()));)?
                Self {
                    base,
                    $($field: None,)*
                }
            }

            pub fn base(&self) -> &$base {
                &self.base
            }

            pub fn base_mut(&mut self) -> &mut $base {
                &mut self.base
            }

            pub fn odata_type(&self) -> Option<&String> {
                self.base.odata_type()
            }

            pub fn set_odata_type(&mut self, value: Option<String>) {
                self.base.set_odata_type(value);
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> Option<&$fty> {
                    self.$field.as_ref()
                }

                pub fn $setter(&mut self, value: Option<$fty>) {
                    self.$field = value;
                }
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::serialization::AdditionalDataHolder for $name {
            fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                $crate::serialization::AdditionalDataHolder::additional_data(&self.base)
            }

            fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                $crate::serialization::AdditionalDataHolder::additional_data_mut(&mut self.base)
            }
        }

        impl $crate::serialization::Parsable for $name {
            fn create_from_discriminator_value(
                _node: &dyn $crate::serialization::ParseNode,
            ) -> $crate::error::Result<Self> {
                Ok(Self::new())
            }

            fn field_deserializers(&self) -> $crate::serialization::FieldDeserializers<Self> {
                fn parent(model: &mut $name) -> &mut $base {
                    &mut model.base
                }

                #[allow(unused_mut)]
                let mut fields = $crate::serialization::embed(
                    $crate::serialization::Parsable::field_deserializers(&self.base),
                    parent,
                );
                $(
                    fields.insert(
                        $key,
                        $crate::serialization::field::<Self, $fty>(|model, value| {
                            model.$field = Some(value)
                        }),
                    );
                )*
                fields
            }

            fn serialize(
                &self,
                writer: &mut dyn $crate::serialization::SerializationWriter,
            ) -> $crate::error::Result<()> {
                $crate::serialization::Parsable::serialize(&self.base, writer)?;
                $(
                    if let Some(value) = &self.$field {
                        $crate::serialization::FieldValue::write(value, Some($key), writer)?;
                    }
                )*
                Ok(())
            }
        }

        graph_model!(@field_value $name);
    };

}

/// Polymorphic family decoded from `@odata.type`.
///
/// `base` names the model used for the family's own tag and as the fallback.
/// `variants` are leaf models; `nested` are families of subtypes, consulted in
/// order after the direct tags. Each variant is named after the type it holds.
macro_rules! graph_family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            base $base:ident = $base_tag:literal;
            variants {
                $($variant:ident = $tag:literal),* $(,)?
            }
            nested {
                $($nested:ident($family:ident)),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $base($base),
            $($variant($variant),)*
            $($nested($family),)*
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$base($base::new())
            }
        }

        impl $crate::serialization::Family for $name {
            fn base() -> Self {
                Self::$base($base::new())
            }

            fn from_odata_type(tag: &str) -> Option<Self> {
                match tag {
                    $base_tag => return Some(Self::$base($base::new())),
                    $($tag => return Some(Self::$variant($variant::new())),)*
                    _ => {}
                }
                $(
                    if let Some(inner) = <$family as $crate::serialization::Family>::from_odata_type(tag) {
                        return Some(Self::$nested(inner));
                    }
                )*
                None
            }

            fn discriminators() -> Vec<&'static str> {
                #[allow(unused_mut)]
                let mut tags = vec![$base_tag $(, $tag)*];
                $(tags.extend(<$family as $crate::serialization::Family>::discriminators());)*
                tags
            }

            fn odata_type_name(&self) -> &'static str {
                match self {
                    Self::$base(_) => $base_tag,
                    $(Self::$variant(_) => $tag,)*
                    $(Self::$nested(inner) => $crate::serialization::Family::odata_type_name(inner),)*
                }
            }
        }

        impl $crate::serialization::AdditionalDataHolder for $name {
            fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                match self {
                    Self::$base(inner) => $crate::serialization::AdditionalDataHolder::additional_data(inner),
                    $(Self::$variant(inner) => $crate::serialization::AdditionalDataHolder::additional_data(inner),)*
                    $(Self::$nested(inner) => $crate::serialization::AdditionalDataHolder::additional_data(inner),)*
                }
            }

            fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                match self {
                    Self::$base(inner) => $crate::serialization::AdditionalDataHolder::additional_data_mut(inner),
                    $(Self::$variant(inner) => $crate::serialization::AdditionalDataHolder::additional_data_mut(inner),)*
                    $(Self::$nested(inner) => $crate::serialization::AdditionalDataHolder::additional_data_mut(inner),)*
                }
            }
        }

        impl $crate::serialization::Parsable for $name {
            fn create_from_discriminator_value(
                node: &dyn $crate::serialization::ParseNode,
            ) -> $crate::error::Result<Self> {
                <Self as $crate::serialization::Family>::resolve(node)
            }

            fn field_deserializers(&self) -> $crate::serialization::FieldDeserializers<Self> {
                match self {
                    Self::$base(inner) => {
                        #[allow(unreachable_patterns)]
                        fn access(kind: &mut $name) -> Option<&mut $base> {
                            match kind {
                                $name::$base(inner) => Some(inner),
                                _ => None,
                            }
                        }
                        $crate::serialization::project(
                            $crate::serialization::Parsable::field_deserializers(inner),
                            access,
                            stringify!($base),
                        )
                    }
                    $(
                        Self::$variant(inner) => {
                            #[allow(unreachable_patterns)]
                            fn access(kind: &mut $name) -> Option<&mut $variant> {
                                match kind {
                                    $name::$variant(inner) => Some(inner),
                                    _ => None,
                                }
                            }
                            $crate::serialization::project(
                                $crate::serialization::Parsable::field_deserializers(inner),
                                access,
                                stringify!($variant),
                            )
                        }
                    )*
                    $(
                        Self::$nested(inner) => {
                            #[allow(unreachable_patterns)]
                            fn access(kind: &mut $name) -> Option<&mut $family> {
                                match kind {
                                    $name::$nested(inner) => Some(inner),
                                    _ => None,
                                }
                            }
                            $crate::serialization::project(
                                $crate::serialization::Parsable::field_deserializers(inner),
                                access,
                                stringify!($nested),
                            )
                        }
                    )*
                }
            }

            fn serialize(
                &self,
                writer: &mut dyn $crate::serialization::SerializationWriter,
            ) -> $crate::error::Result<()> {
                match self {
                    Self::$base(inner) => $crate::serialization::Parsable::serialize(inner, writer),
                    $(Self::$variant(inner) => $crate::serialization::Parsable::serialize(inner, writer),)*
                    $(Self::$nested(inner) => $crate::serialization::Parsable::serialize(inner, writer),)*
                }
            }
        }

        graph_model!(@field_value $name);

        impl From<$base> for $name {
            fn from(value: $base) -> Self {
                Self::$base(value)
            }
        }

        $(
            impl From<$variant> for $name {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*

        $(
            impl From<$family> for $name {
                fn from(value: $family) -> Self {
                    Self::$nested(value)
                }
            }
        )*
    };
}
