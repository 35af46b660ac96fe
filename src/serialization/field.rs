//! Per-type read and write rules for model fields

use super::{FieldDeserializer, ParseNode, SerializationWriter};
use crate::error::Result;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde_json::Value;

/// A type that can be stored in a model field
pub trait FieldValue: Sized {
    /// Read the value; `Ok(None)` means the payload held null
    fn read(node: &dyn ParseNode) -> Result<Option<Self>>;

    fn write(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()>;
}

/// Build a field deserializer from a setter. Null leaves the field untouched.
pub fn field<T: 'static, V: FieldValue + 'static>(set: fn(&mut T, V)) -> FieldDeserializer<T> {
    Box::new(move |model: &mut T, node: &dyn ParseNode| {
        if let Some(value) = V::read(node)? {
            set(model, value);
        }
        Ok(())
    })
}

impl FieldValue for String {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>> {
        node.string_value()
    }

    fn write(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_string_value(key, self)
    }
}

impl FieldValue for bool {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>> {
        node.bool_value()
    }

    fn write(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_bool_value(key, *self)
    }
}

impl FieldValue for i32 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>> {
        node.i32_value()
    }

    fn write(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_i32_value(key, *self)
    }
}

impl FieldValue for i64 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>> {
        node.i64_value()
    }

    fn write(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_i64_value(key, *self)
    }
}

impl FieldValue for f64 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>> {
        node.f64_value()
    }

    fn write(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_f64_value(key, *self)
    }
}

impl FieldValue for DateTime<FixedOffset> {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>> {
        node.date_time_value()
    }

    fn write(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_date_time_value(key, self)
    }
}

impl FieldValue for NaiveDate {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>> {
        node.date_only_value()
    }

    fn write(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_date_only_value(key, *self)
    }
}

impl FieldValue for NaiveTime {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>> {
        node.time_only_value()
    }

    fn write(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_time_only_value(key, *self)
    }
}

// Untyped JSON (`Edm.Untyped`) passes through unchanged
impl FieldValue for Value {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>> {
        if node.is_null() {
            return Ok(None);
        }
        Ok(Some(node.raw_value()))
    }

    fn write(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_raw_value(key, self)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>> {
        let Some(items) = node.collection_nodes()? else {
            return Ok(None);
        };

        let mut values = Vec::with_capacity(items.len());
        for item in items {
            if let Some(value) = T::read(item.as_ref())? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    fn write(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.start_collection(key)?;
        for value in self {
            value.write(None, writer)?;
        }
        writer.end_collection()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::serialization::{JsonParseNode, JsonSerializationWriter};
    use serde_json::json;

    fn read<T: FieldValue>(value: Value) -> Result<Option<T>> {
        T::read(&JsonParseNode::new(&value))
    }

    #[test]
    fn test_read_scalars() {
        assert_eq!(read::<String>(json!("abc")).unwrap().as_deref(), Some("abc"));
        assert_eq!(read::<bool>(json!(true)).unwrap(), Some(true));
        assert_eq!(read::<i32>(json!(-4)).unwrap(), Some(-4));
        assert_eq!(read::<i64>(json!(9_000_000_000_i64)).unwrap(), Some(9_000_000_000));
        assert_eq!(read::<f64>(json!(2.5)).unwrap(), Some(2.5));
        assert_eq!(read::<String>(json!(null)).unwrap(), None);
    }

    #[test]
    fn test_read_rejects_wrong_kind() {
        assert!(matches!(read::<bool>(json!("true")), Err(Error::TypeMismatch { .. })));
        assert!(matches!(read::<i32>(json!(1.5)), Err(Error::TypeMismatch { .. })));
        assert!(matches!(
            read::<i32>(json!(3_000_000_000_i64)),
            Err(Error::OutOfRange { target: "i32", .. })
        ));
    }

    #[test]
    fn test_read_collection_skips_nulls() {
        let values = read::<Vec<String>>(json!(["a", null, "b"])).unwrap();
        assert_eq!(values, Some(vec!["a".to_string(), "b".to_string()]));

        let values = read::<Vec<String>>(json!([])).unwrap();
        assert_eq!(values, Some(vec![]));
    }

    #[test]
    fn test_write_collection() {
        let mut writer = JsonSerializationWriter::new();
        let sink: &mut dyn SerializationWriter = &mut writer;
        sink.start_object(None).unwrap();
        vec![1_i32, 2, 3].write(Some("numbers"), sink).unwrap();
        Vec::<String>::new().write(Some("empty"), sink).unwrap();
        sink.end_object().unwrap();

        assert_eq!(
            writer.into_value().unwrap(),
            json!({"numbers": [1, 2, 3], "empty": []})
        );
    }

    #[test]
    fn test_untyped_value_passes_through() {
        let raw = json!({"nested": [1, {"deep": true}]});
        assert_eq!(read::<Value>(raw.clone()).unwrap(), Some(raw));
        assert_eq!(read::<Value>(json!(null)).unwrap(), None);
    }
}
