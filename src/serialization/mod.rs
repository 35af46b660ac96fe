//! Serialization abstraction the models are written against
//!
//! Models never touch a wire format directly. Reads go through [`ParseNode`],
//! writes through [`SerializationWriter`]; the JSON backend lives in [`json`].

mod field;
pub mod json;

pub use field::{FieldValue, field};
pub use json::{
    JSON_CONTENT_TYPE, JsonParseNode, JsonParseNodeFactory, JsonSerializationWriter,
    JsonSerializationWriterFactory, ParseNodeFactory, SerializationWriterFactory,
    deserialize_from_json, deserialize_from_json_lenient, sanitize_json_bytes, serialize_to_json,
};

use crate::error::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// Key of the polymorphic type discriminator
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Properties found on the wire that no model field claims
pub type AdditionalData = Map<String, Value>;

/// Reads one property from a parse node into a model
pub type FieldDeserializer<T> = Box<dyn Fn(&mut T, &dyn ParseNode) -> Result<()>>;

/// Field deserializers keyed by JSON property name
pub type FieldDeserializers<T> = HashMap<&'static str, FieldDeserializer<T>>;

/// Picks the concrete instance to populate for a node
pub type ParsableFactory<T> = fn(&dyn ParseNode) -> Result<T>;

/// A node of a parsed payload.
///
/// Scalar reads return `Ok(None)` for null and an error when the node holds a
/// different kind of value.
pub trait ParseNode {
    fn child_node(&self, key: &str) -> Result<Option<Box<dyn ParseNode + '_>>>;

    /// Properties of an object node, in payload order (`serde_json` is built with
    /// `preserve_order`)
    fn object_entries(&self) -> Result<Vec<(&str, Box<dyn ParseNode + '_>)>>;

    fn collection_nodes(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>>;

    fn is_null(&self) -> bool;

    fn string_value(&self) -> Result<Option<String>>;

    fn bool_value(&self) -> Result<Option<bool>>;

    fn i32_value(&self) -> Result<Option<i32>>;

    fn i64_value(&self) -> Result<Option<i64>>;

    fn f64_value(&self) -> Result<Option<f64>>;

    fn date_time_value(&self) -> Result<Option<DateTime<FixedOffset>>>;

    fn date_only_value(&self) -> Result<Option<NaiveDate>>;

    fn time_only_value(&self) -> Result<Option<NaiveTime>>;

    /// The untyped value, kept verbatim in additional data
    fn raw_value(&self) -> Value;
}

impl dyn ParseNode + '_ {
    /// Decode an object node into a model picked by `factory`
    pub fn object_value<T: Parsable>(&self, factory: ParsableFactory<T>) -> Result<Option<T>> {
        if self.is_null() {
            return Ok(None);
        }

        let entries = self.object_entries()?;
        let mut value = factory(self)?;
        let fields = value.field_deserializers();

        for (key, node) in entries {
            match fields.get(key) {
                Some(deserialize) => deserialize(&mut value, node.as_ref())?,
                None => {
                    trace!(property = key, "keeping unmodeled property as additional data");
                    value
                        .additional_data_mut()
                        .insert(key.to_string(), node.raw_value());
                }
            }
        }

        Ok(Some(value))
    }

    /// Decode a collection of objects. Null elements are skipped.
    pub fn collection_of_object_values<T: Parsable>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<Vec<T>>> {
        let Some(items) = self.collection_nodes()? else {
            return Ok(None);
        };

        let mut values = Vec::with_capacity(items.len());
        for item in items {
            if let Some(value) = item.object_value(factory)? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    pub fn enum_value<E: GraphEnum>(&self) -> Result<Option<E>> {
        match self.string_value()? {
            Some(raw) => E::parse(&raw).map(Some),
            None => Ok(None),
        }
    }
}

/// Destination of a model's fields.
///
/// A `None` key (or an empty one) writes a collection element or the root
/// value; a keyed write inside a collection is an error.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: Option<&str>, value: &str) -> Result<()>;

    fn write_bool_value(&mut self, key: Option<&str>, value: bool) -> Result<()>;

    fn write_i32_value(&mut self, key: Option<&str>, value: i32) -> Result<()>;

    fn write_i64_value(&mut self, key: Option<&str>, value: i64) -> Result<()>;

    fn write_f64_value(&mut self, key: Option<&str>, value: f64) -> Result<()>;

    fn write_date_time_value(
        &mut self,
        key: Option<&str>,
        value: &DateTime<FixedOffset>,
    ) -> Result<()>;

    fn write_date_only_value(&mut self, key: Option<&str>, value: NaiveDate) -> Result<()>;

    fn write_time_only_value(&mut self, key: Option<&str>, value: NaiveTime) -> Result<()>;

    fn write_null_value(&mut self, key: Option<&str>) -> Result<()>;

    fn write_raw_value(&mut self, key: Option<&str>, value: &Value) -> Result<()>;

    fn start_object(&mut self, key: Option<&str>) -> Result<()>;

    fn end_object(&mut self) -> Result<()>;

    fn start_collection(&mut self, key: Option<&str>) -> Result<()>;

    fn end_collection(&mut self) -> Result<()>;

    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<()> {
        for (key, value) in data {
            self.write_raw_value(Some(key), value)?;
        }
        Ok(())
    }

    /// The encoded payload. Fails while objects or collections are still open.
    fn serialized_content(&mut self) -> Result<Vec<u8>>;
}

impl dyn SerializationWriter + '_ {
    pub fn write_object_value(&mut self, key: Option<&str>, value: &dyn Parsable) -> Result<()> {
        self.start_object(key)?;
        value.serialize(self)?;
        self.write_additional_data(value.additional_data())?;
        self.end_object()
    }

    pub fn write_collection_of_object_values<T: Parsable>(
        &mut self,
        key: Option<&str>,
        values: &[T],
    ) -> Result<()> {
        self.start_collection(key)?;
        for value in values {
            self.write_object_value(None, value)?;
        }
        self.end_collection()
    }

    pub fn write_enum_value<E: GraphEnum>(&mut self, key: Option<&str>, value: E) -> Result<()> {
        self.write_string_value(key, value.as_str())
    }

    pub fn write_collection_of_enum_values<E: GraphEnum>(
        &mut self,
        key: Option<&str>,
        values: &[E],
    ) -> Result<()> {
        self.start_collection(key)?;
        for value in values {
            self.write_string_value(None, value.as_str())?;
        }
        self.end_collection()
    }
}

pub trait AdditionalDataHolder {
    fn additional_data(&self) -> &AdditionalData;

    fn additional_data_mut(&mut self) -> &mut AdditionalData;
}

/// A model that can be read from a [`ParseNode`] and written to a
/// [`SerializationWriter`]
pub trait Parsable: AdditionalDataHolder {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self>
    where
        Self: Sized;

    fn field_deserializers(&self) -> FieldDeserializers<Self>
    where
        Self: Sized;

    /// Write every set field. Additional data is written by the caller.
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()>;
}

/// Integer-backed constant set with a fixed wire string per constant
pub trait GraphEnum: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    const TYPE_NAME: &'static str;

    /// Every constant in declaration order
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn code(&self) -> i32;

    fn parse(value: &str) -> Result<Self>;

    fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.code() == code)
    }
}

/// Wire strings for a list of enum values
pub fn serialize_enum_values<E: GraphEnum>(values: &[E]) -> Vec<String> {
    values.iter().map(|value| value.as_str().to_string()).collect()
}

/// A polymorphic base type decoded through `@odata.type`
pub trait Family: Sized {
    /// The base type, used when the discriminator is absent or unknown
    fn base() -> Self;

    fn from_odata_type(tag: &str) -> Option<Self>;

    /// Every discriminator this family resolves, nested families included
    fn discriminators() -> Vec<&'static str>;

    /// Discriminator of the active variant
    fn odata_type_name(&self) -> &'static str;

    fn resolve(node: &dyn ParseNode) -> Result<Self> {
        match discriminator_value(node)? {
            Some(tag) => Ok(Self::from_odata_type(&tag).unwrap_or_else(|| {
                debug!(odata_type = %tag, base = Self::base().odata_type_name(), "unrecognized discriminator, using base type");
                Self::base()
            })),
            None => Ok(Self::base()),
        }
    }
}

/// The `@odata.type` string of an object node, if present
pub fn discriminator_value(node: &dyn ParseNode) -> Result<Option<String>> {
    match node.child_node(ODATA_TYPE_KEY)? {
        Some(child) => child.string_value(),
        None => Ok(None),
    }
}

/// Expose a parent's deserializers on a child that embeds it
pub fn embed<C: 'static, P: 'static>(
    fields: FieldDeserializers<P>,
    parent: fn(&mut C) -> &mut P,
) -> FieldDeserializers<C> {
    fields
        .into_iter()
        .map(|(key, deserialize)| {
            let projected: FieldDeserializer<C> =
                Box::new(move |child: &mut C, node: &dyn ParseNode| deserialize(parent(child), node));
            (key, projected)
        })
        .collect()
}

/// Expose a variant's deserializers on the family enum holding it
pub fn project<F: 'static, V: 'static>(
    fields: FieldDeserializers<V>,
    variant: fn(&mut F) -> Option<&mut V>,
    expected: &'static str,
) -> FieldDeserializers<F> {
    fields
        .into_iter()
        .map(|(key, deserialize)| {
            let projected: FieldDeserializer<F> =
                Box::new(move |family: &mut F, node: &dyn ParseNode| match variant(family) {
                    Some(inner) => deserialize(inner, node),
                    None => Err(Error::VariantMismatch { expected }),
                });
            (key, projected)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EnrollmentState, Modality};
    use serde_json::json;

    #[test]
    fn test_discriminator_value() {
        let value = json!({"@odata.type": "#microsoft.graph.entity", "id": "1"});
        let node = JsonParseNode::new(&value);
        assert_eq!(
            discriminator_value(&node).unwrap().as_deref(),
            Some("#microsoft.graph.entity")
        );

        let value = json!({"id": "1"});
        let node = JsonParseNode::new(&value);
        assert_eq!(discriminator_value(&node).unwrap(), None);
    }

    #[test]
    fn test_discriminator_must_be_string() {
        let value = json!({"@odata.type": 7});
        let node = JsonParseNode::new(&value);
        assert!(matches!(
            discriminator_value(&node),
            Err(Error::TypeMismatch { expected: "string", .. })
        ));
    }

    #[test]
    fn test_serialize_enum_values() {
        let values = serialize_enum_values(&[EnrollmentState::Enrolled, EnrollmentState::Failed]);
        assert_eq!(values, vec!["enrolled", "failed"]);

        let values: Vec<String> = serialize_enum_values::<Modality>(&[]);
        assert!(values.is_empty());
    }

    #[test]
    fn test_enum_value_from_node() {
        let value = json!("videoBasedScreenSharing");
        let node: &dyn ParseNode = &JsonParseNode::new(&value);
        assert_eq!(
            node.enum_value::<Modality>().unwrap(),
            Some(Modality::VideoBasedScreenSharing)
        );

        let value = json!(null);
        let node: &dyn ParseNode = &JsonParseNode::new(&value);
        assert_eq!(node.enum_value::<Modality>().unwrap(), None);

        let value = json!("hologram");
        let node: &dyn ParseNode = &JsonParseNode::new(&value);
        assert!(matches!(
            node.enum_value::<Modality>(),
            Err(Error::UnknownEnumValue { type_name: "Modality", .. })
        ));
    }

    #[derive(Default)]
    struct Inner {
        name: Option<String>,
    }

    #[derive(Default)]
    struct Outer {
        inner: Inner,
    }

    fn inner_fields() -> FieldDeserializers<Inner> {
        let mut fields: FieldDeserializers<Inner> = HashMap::new();
        fields.insert("name", field::<Inner, String>(|model, value| model.name = Some(value)));
        fields
    }

    #[test]
    fn test_embed_reaches_parent_field() {
        fn parent(outer: &mut Outer) -> &mut Inner {
            &mut outer.inner
        }

        let fields = embed(inner_fields(), parent);
        let value = json!("embedded");
        let node = JsonParseNode::new(&value);
        let mut outer = Outer::default();
        fields["name"](&mut outer, &node).unwrap();
        assert_eq!(outer.inner.name.as_deref(), Some("embedded"));
    }

    #[test]
    fn test_project_rejects_other_variant() {
        enum Either {
            Left(Inner),
            Right,
        }

        fn left(either: &mut Either) -> Option<&mut Inner> {
            match either {
                Either::Left(inner) => Some(inner),
                Either::Right => None,
            }
        }

        let fields = project(inner_fields(), left, "Left");
        let value = json!("x");
        let node = JsonParseNode::new(&value);

        let mut either = Either::Left(Inner::default());
        fields["name"](&mut either, &node).unwrap();
        assert!(matches!(&either, Either::Left(inner) if inner.name.as_deref() == Some("x")));

        let mut either = Either::Right;
        assert!(matches!(
            fields["name"](&mut either, &node),
            Err(Error::VariantMismatch { expected: "Left" })
        ));
    }
}
