//! JSON backend for the serialization abstraction

use super::{
    AdditionalData, Parsable, ParsableFactory, ParseNode, SerializationWriter,
};
use crate::error::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat};
use serde_json::{Map, Number, Value};
use tracing::{debug, warn};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Read-only view over a parsed JSON value
#[derive(Debug, Clone, Copy)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    fn string_or_mismatch(&self, expected: &'static str) -> Result<Option<&'a str>> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.as_str())),
            other => Err(Error::mismatch(expected, other)),
        }
    }
}

impl ParseNode for JsonParseNode<'_> {
    fn child_node(&self, key: &str) -> Result<Option<Box<dyn ParseNode + '_>>> {
        match self.value {
            Value::Object(map) => Ok(map
                .get(key)
                .map(|child| Box::new(JsonParseNode::new(child)) as Box<dyn ParseNode + '_>)),
            Value::Null => Ok(None),
            other => Err(Error::mismatch("object", other)),
        }
    }

    fn object_entries(&self) -> Result<Vec<(&str, Box<dyn ParseNode + '_>)>> {
        match self.value {
            Value::Object(map) => Ok(map
                .iter()
                .map(|(key, child)| {
                    (
                        key.as_str(),
                        Box::new(JsonParseNode::new(child)) as Box<dyn ParseNode + '_>,
                    )
                })
                .collect()),
            other => Err(Error::mismatch("object", other)),
        }
    }

    fn collection_nodes(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(
                items
                    .iter()
                    .map(|item| Box::new(JsonParseNode::new(item)) as Box<dyn ParseNode + '_>)
                    .collect(),
            )),
            other => Err(Error::mismatch("array", other)),
        }
    }

    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn string_value(&self) -> Result<Option<String>> {
        Ok(self.string_or_mismatch("string")?.map(str::to_string))
    }

    fn bool_value(&self) -> Result<Option<bool>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            other => Err(Error::mismatch("boolean", other)),
        }
    }

    fn i32_value(&self) -> Result<Option<i32>> {
        match self.i64_value()? {
            Some(wide) => i32::try_from(wide).map(Some).map_err(|_| Error::OutOfRange {
                value: wide.to_string(),
                target: "i32",
            }),
            None => Ok(None),
        }
    }

    fn i64_value(&self) -> Result<Option<i64>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) if n.is_i64() => Ok(n.as_i64()),
            Value::Number(n) if n.is_u64() => Err(Error::OutOfRange {
                value: n.to_string(),
                target: "i64",
            }),
            other => Err(Error::mismatch("integer", other)),
        }
    }

    fn f64_value(&self) -> Result<Option<f64>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            other => Err(Error::mismatch("number", other)),
        }
    }

    fn date_time_value(&self) -> Result<Option<DateTime<FixedOffset>>> {
        let Some(raw) = self.string_or_mismatch("date-time string")? else {
            return Ok(None);
        };
        DateTime::parse_from_rfc3339(raw)
            .map(Some)
            .map_err(|err| Error::InvalidFormat {
                kind: "date-time",
                value: raw.to_string(),
                reason: err.to_string(),
            })
    }

    fn date_only_value(&self) -> Result<Option<NaiveDate>> {
        let Some(raw) = self.string_or_mismatch("date string")? else {
            return Ok(None);
        };
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|err| Error::InvalidFormat {
                kind: "date",
                value: raw.to_string(),
                reason: err.to_string(),
            })
    }

    fn time_only_value(&self) -> Result<Option<NaiveTime>> {
        let Some(raw) = self.string_or_mismatch("time string")? else {
            return Ok(None);
        };
        NaiveTime::parse_from_str(raw, "%H:%M:%S%.f")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
            .map(Some)
            .map_err(|err| Error::InvalidFormat {
                kind: "time",
                value: raw.to_string(),
                reason: err.to_string(),
            })
    }

    fn raw_value(&self) -> Value {
        self.value.clone()
    }
}

enum Frame {
    Object(Map<String, Value>),
    Collection(Vec<Value>),
}

impl Frame {
    fn describe(&self) -> &'static str {
        match self {
            Frame::Object(_) => "object",
            Frame::Collection(_) => "collection",
        }
    }
}

/// Builds a JSON document from writer calls
#[derive(Default)]
pub struct JsonSerializationWriter {
    // Each open frame with the key it will be stored under in its parent
    stack: Vec<(Option<String>, Frame)>,
    root: Option<Value>,
    pretty: bool,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer whose serialized content is indented
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    /// The finished document
    pub fn into_value(self) -> Result<Value> {
        if !self.stack.is_empty() {
            return Err(Error::Writer(format!(
                "{} unclosed object or collection frame(s)",
                self.stack.len()
            )));
        }
        Ok(self.root.unwrap_or(Value::Null))
    }

    fn check_slot(&self, key: Option<&str>) -> Result<()> {
        match (self.stack.last(), key) {
            (Some((_, Frame::Object(_))), Some(_)) => Ok(()),
            (Some((_, Frame::Collection(_))), None) => Ok(()),
            (Some((_, Frame::Object(_))), None) => {
                Err(Error::Writer("object members need a key".to_string()))
            }
            (Some((_, Frame::Collection(_))), Some(key)) => Err(Error::Writer(format!(
                "cannot write key {:?} inside a collection",
                key
            ))),
            (None, Some(key)) => Err(Error::Writer(format!(
                "key {:?} written outside of an object",
                key
            ))),
            (None, None) if self.root.is_some() => {
                Err(Error::Writer("root value already written".to_string()))
            }
            (None, None) => Ok(()),
        }
    }

    fn put(&mut self, key: Option<&str>, value: Value) -> Result<()> {
        let key = normalize(key);
        self.check_slot(key)?;
        match self.stack.last_mut() {
            Some((_, Frame::Object(map))) => {
                if let Some(key) = key {
                    map.insert(key.to_string(), value);
                }
            }
            Some((_, Frame::Collection(items))) => items.push(value),
            None => self.root = Some(value),
        }
        Ok(())
    }

    fn open(&mut self, key: Option<&str>, frame: Frame) -> Result<()> {
        let key = normalize(key);
        self.check_slot(key)?;
        self.stack.push((key.map(str::to_string), frame));
        Ok(())
    }

    fn close(&mut self, expected: &'static str) -> Result<()> {
        let Some((key, frame)) = self.stack.pop() else {
            return Err(Error::Writer(format!("no open {} to end", expected)));
        };
        let value = match frame {
            Frame::Object(map) if expected == "object" => Value::Object(map),
            Frame::Collection(items) if expected == "collection" => Value::Array(items),
            other => {
                return Err(Error::Writer(format!(
                    "cannot end {} while a {} is open",
                    expected,
                    other.describe()
                )));
            }
        };
        self.put(key.as_deref(), value)
    }
}

// An empty key means "no key", matching how callers address the root object
fn normalize(key: Option<&str>) -> Option<&str> {
    key.filter(|key| !key.is_empty())
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(&mut self, key: Option<&str>, value: &str) -> Result<()> {
        self.put(key, Value::String(value.to_string()))
    }

    fn write_bool_value(&mut self, key: Option<&str>, value: bool) -> Result<()> {
        self.put(key, Value::Bool(value))
    }

    fn write_i32_value(&mut self, key: Option<&str>, value: i32) -> Result<()> {
        self.put(key, Value::from(value))
    }

    fn write_i64_value(&mut self, key: Option<&str>, value: i64) -> Result<()> {
        self.put(key, Value::from(value))
    }

    fn write_f64_value(&mut self, key: Option<&str>, value: f64) -> Result<()> {
        let number = Number::from_f64(value)
            .ok_or_else(|| Error::Writer(format!("{} is not representable in JSON", value)))?;
        self.put(key, Value::Number(number))
    }

    fn write_date_time_value(
        &mut self,
        key: Option<&str>,
        value: &DateTime<FixedOffset>,
    ) -> Result<()> {
        self.put(
            key,
            Value::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        )
    }

    fn write_date_only_value(&mut self, key: Option<&str>, value: NaiveDate) -> Result<()> {
        self.put(key, Value::String(value.format("%Y-%m-%d").to_string()))
    }

    fn write_time_only_value(&mut self, key: Option<&str>, value: NaiveTime) -> Result<()> {
        self.put(key, Value::String(value.format("%H:%M:%S%.f").to_string()))
    }

    fn write_null_value(&mut self, key: Option<&str>) -> Result<()> {
        self.put(key, Value::Null)
    }

    fn write_raw_value(&mut self, key: Option<&str>, value: &Value) -> Result<()> {
        self.put(key, value.clone())
    }

    fn start_object(&mut self, key: Option<&str>) -> Result<()> {
        self.open(key, Frame::Object(Map::new()))
    }

    fn end_object(&mut self) -> Result<()> {
        self.close("object")
    }

    fn start_collection(&mut self, key: Option<&str>) -> Result<()> {
        self.open(key, Frame::Collection(Vec::new()))
    }

    fn end_collection(&mut self) -> Result<()> {
        self.close("collection")
    }

    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<()> {
        match self.stack.last_mut() {
            Some((_, Frame::Object(map))) => {
                // declared fields are already written and take precedence
                for (key, value) in data {
                    map.entry(key.clone()).or_insert_with(|| value.clone());
                }
                Ok(())
            }
            _ if data.is_empty() => Ok(()),
            _ => Err(Error::Writer(
                "additional data can only be written into an object".to_string(),
            )),
        }
    }

    fn serialized_content(&mut self) -> Result<Vec<u8>> {
        if !self.stack.is_empty() {
            return Err(Error::Writer(format!(
                "{} unclosed object or collection frame(s)",
                self.stack.len()
            )));
        }
        let Some(root) = &self.root else {
            return Ok(Vec::new());
        };
        let content = if self.pretty {
            serde_json::to_vec_pretty(root)?
        } else {
            serde_json::to_vec(root)?
        };
        Ok(content)
    }
}

/// Produces parse nodes for one content type
pub trait ParseNodeFactory {
    fn valid_content_type(&self) -> &'static str;

    /// Decode `content` and hand its root node to `visit`
    fn with_root_node(
        &self,
        content_type: &str,
        content: &[u8],
        visit: &mut dyn FnMut(&dyn ParseNode) -> Result<()>,
    ) -> Result<()>;
}

/// Produces serialization writers for one content type
pub trait SerializationWriterFactory {
    fn valid_content_type(&self) -> &'static str;

    fn serialization_writer(&self, content_type: &str) -> Result<Box<dyn SerializationWriter>>;
}

fn check_content_type(expected: &'static str, content_type: &str) -> Result<()> {
    // Parameters such as `; charset=utf-8` do not change the format
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    if essence.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(Error::UnsupportedContentType(content_type.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParseNodeFactory;

impl ParseNodeFactory for JsonParseNodeFactory {
    fn valid_content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }

    fn with_root_node(
        &self,
        content_type: &str,
        content: &[u8],
        visit: &mut dyn FnMut(&dyn ParseNode) -> Result<()>,
    ) -> Result<()> {
        check_content_type(JSON_CONTENT_TYPE, content_type)?;
        let value: Value = serde_json::from_slice(content)?;
        visit(&JsonParseNode::new(&value))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializationWriterFactory {
    pub pretty: bool,
}

impl SerializationWriterFactory for JsonSerializationWriterFactory {
    fn valid_content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }

    fn serialization_writer(&self, content_type: &str) -> Result<Box<dyn SerializationWriter>> {
        check_content_type(JSON_CONTENT_TYPE, content_type)?;
        let writer = if self.pretty {
            JsonSerializationWriter::pretty()
        } else {
            JsonSerializationWriter::new()
        };
        Ok(Box::new(writer))
    }
}

/// Encode a model as a JSON object
pub fn serialize_to_json(value: &dyn Parsable) -> Result<Vec<u8>> {
    let mut writer = JsonSerializationWriterFactory::default().serialization_writer(JSON_CONTENT_TYPE)?;
    writer.write_object_value(None, value)?;
    writer.serialized_content()
}

/// Decode a JSON payload into the model picked by `factory`
pub fn deserialize_from_json<T: Parsable>(
    content: &[u8],
    factory: ParsableFactory<T>,
) -> Result<Option<T>> {
    let mut decoded = None;
    JsonParseNodeFactory.with_root_node(JSON_CONTENT_TYPE, content, &mut |node: &dyn ParseNode| {
        decoded = node.object_value(factory)?;
        Ok(())
    })?;
    Ok(decoded)
}

/// Like [`deserialize_from_json`], but retries once after escaping raw
/// control characters inside string literals when the payload is not valid
/// JSON. The sanitized payload may still be rejected.
pub fn deserialize_from_json_lenient<T: Parsable>(
    content: &[u8],
    factory: ParsableFactory<T>,
) -> Result<Option<T>> {
    match deserialize_from_json(content, factory) {
        Err(Error::Json(err)) if err.is_syntax() => {
            warn!(error = %err, "invalid JSON payload, retrying with control characters escaped");
            let sanitized = sanitize_json_bytes(content);
            deserialize_from_json(&sanitized, factory)
        }
        other => other,
    }
}

/// Escape characters below 0x20 that appear unescaped inside JSON strings
pub fn sanitize_json_bytes(content: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut replaced = 0usize;

    for &byte in content {
        if !in_string {
            if byte == b'"' {
                in_string = true;
            }
            out.push(byte);
            continue;
        }

        if escaped {
            escaped = false;
            out.push(byte);
            continue;
        }

        match byte {
            b'\\' => {
                escaped = true;
                out.push(byte);
            }
            b'"' => {
                in_string = false;
                out.push(byte);
            }
            b'\n' => {
                replaced += 1;
                out.extend_from_slice(b"\\n");
            }
            b'\r' => {
                replaced += 1;
                out.extend_from_slice(b"\\r");
            }
            b'\t' => {
                replaced += 1;
                out.extend_from_slice(b"\\t");
            }
            0x08 => {
                replaced += 1;
                out.extend_from_slice(b"\\b");
            }
            0x0c => {
                replaced += 1;
                out.extend_from_slice(b"\\f");
            }
            control if control < 0x20 => {
                replaced += 1;
                out.extend_from_slice(format!("\\u{:04x}", control).as_bytes());
            }
            _ => out.push(byte),
        }
    }

    debug!(replaced, "sanitized JSON control characters");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entity, EntityKind, TextWebPart};
    use crate::serialization::AdditionalDataHolder;
    use serde_json::json;

    fn parse(value: &Value) -> JsonParseNode<'_> {
        JsonParseNode::new(value)
    }

    #[test]
    fn test_date_time_round_trip() {
        let value = json!("2023-01-01T12:00:00Z");
        let parsed = parse(&value).date_time_value().unwrap().unwrap();

        let mut writer = JsonSerializationWriter::new();
        writer.write_date_time_value(None, &parsed).unwrap();
        assert_eq!(writer.into_value().unwrap(), json!("2023-01-01T12:00:00Z"));

        let value = json!("2023-01-01T12:00:00.5+02:00");
        let parsed = parse(&value).date_time_value().unwrap().unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn test_date_and_time_only() {
        let value = json!("2024-02-29");
        let date = parse(&value).date_only_value().unwrap().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let value = json!("23:59:59");
        let time = parse(&value).time_only_value().unwrap().unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(23, 59, 59).unwrap());

        let value = json!("00:30");
        let time = parse(&value).time_only_value().unwrap().unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(0, 30, 0).unwrap());

        let mut writer = JsonSerializationWriter::new();
        writer.write_time_only_value(None, time).unwrap();
        assert_eq!(writer.into_value().unwrap(), json!("00:30:00"));

        let value = json!("not a date");
        assert!(matches!(
            parse(&value).date_only_value(),
            Err(Error::InvalidFormat { kind: "date", .. })
        ));
    }

    #[test]
    fn test_writer_rejects_key_in_collection() {
        let mut writer = JsonSerializationWriter::new();
        writer.start_collection(None).unwrap();
        assert!(matches!(
            writer.write_string_value(Some("name"), "x"),
            Err(Error::Writer(_))
        ));
    }

    #[test]
    fn test_writer_rejects_unbalanced_frames() {
        let mut writer = JsonSerializationWriter::new();
        writer.start_object(None).unwrap();
        assert!(writer.serialized_content().is_err());
        assert!(matches!(writer.end_collection(), Err(Error::Writer(_))));

        let mut writer = JsonSerializationWriter::new();
        assert!(matches!(writer.end_object(), Err(Error::Writer(_))));
    }

    #[test]
    fn test_writer_rejects_second_root() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_bool_value(None, true).unwrap();
        assert!(writer.write_bool_value(None, false).is_err());
    }

    #[test]
    fn test_writer_rejects_non_finite_numbers() {
        let mut writer = JsonSerializationWriter::new();
        assert!(writer.write_f64_value(None, f64::NAN).is_err());
    }

    #[test]
    fn test_empty_key_addresses_root() {
        let mut entity = Entity::new();
        entity.set_id(Some("abc".to_string()));

        let mut writer = JsonSerializationWriter::new();
        let sink: &mut dyn SerializationWriter = &mut writer;
        sink.write_object_value(Some(""), &entity).unwrap();
        assert_eq!(writer.into_value().unwrap(), json!({"id": "abc"}));
    }

    #[test]
    fn test_factories_check_content_type() {
        let factory = JsonSerializationWriterFactory::default();
        assert!(factory.serialization_writer("application/json; charset=utf-8").is_ok());
        assert!(matches!(
            factory.serialization_writer("text/plain"),
            Err(Error::UnsupportedContentType(_))
        ));

        let result = JsonParseNodeFactory.with_root_node("application/xml", b"{}", &mut |_: &dyn ParseNode| Ok(()));
        assert!(matches!(result, Err(Error::UnsupportedContentType(_))));
    }

    #[test]
    fn test_serialize_and_deserialize_bytes() {
        let mut entity = Entity::new();
        entity.set_id(Some("item-1".to_string()));
        entity.set_odata_type(Some("#microsoft.graph.entity".to_string()));
        entity
            .additional_data_mut()
            .insert("@odata.etag".to_string(), json!("W/\"1\""));

        let bytes = serialize_to_json(&entity).unwrap();
        let decoded: Entity =
            deserialize_from_json(&bytes, Entity::create_from_discriminator_value)
                .unwrap()
                .unwrap();
        assert_eq!(decoded, entity);
    }

    #[test]
    fn test_deserialize_null_payload() {
        let decoded = deserialize_from_json(b"null", EntityKind::create_from_discriminator_value)
            .unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn test_sanitize_escapes_controls_inside_strings_only() {
        let raw = b"{\"body\": \"line one\nline\ttwo\x01\"}\n";
        let sanitized = sanitize_json_bytes(raw);
        assert_eq!(
            sanitized,
            b"{\"body\": \"line one\\nline\\ttwo\\u0001\"}\n".to_vec()
        );

        let already_escaped = br#"{"body": "a\"b\\"}"#;
        assert_eq!(sanitize_json_bytes(already_escaped), already_escaped.to_vec());
    }

    #[test]
    fn test_lenient_deserialize_recovers_control_characters() {
        let raw = b"{\"id\": \"first\nsecond\", \"@odata.type\": \"#microsoft.graph.entity\"}";
        assert!(deserialize_from_json(raw, Entity::create_from_discriminator_value).is_err());

        let decoded = deserialize_from_json_lenient(raw, Entity::create_from_discriminator_value)
            .unwrap()
            .unwrap();
        assert_eq!(decoded.id().map(String::as_str), Some("first\nsecond"));
    }

    #[test]
    fn test_additional_data_does_not_shadow_declared_fields() {
        let mut entity = Entity::new();
        entity.set_id(Some("declared".to_string()));
        entity
            .additional_data_mut()
            .insert("id".to_string(), json!("extra"));
        entity
            .additional_data_mut()
            .insert("@odata.etag".to_string(), json!("W/\"2\""));

        let mut writer = JsonSerializationWriter::new();
        let sink: &mut dyn SerializationWriter = &mut writer;
        sink.write_object_value(None, &entity).unwrap();
        let payload = writer.into_value().unwrap();
        assert_eq!(payload, json!({"id": "declared", "@odata.etag": "W/\"2\""}));

        let bytes = serialize_to_json(&entity).unwrap();
        let decoded: Entity =
            deserialize_from_json(&bytes, Entity::create_from_discriminator_value)
                .unwrap()
                .unwrap();
        assert_eq!(decoded.id().map(String::as_str), Some("declared"));
    }

    #[test]
    fn test_object_entries_keep_payload_order() {
        let value: Value = serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let node = parse(&value);
        let keys: Vec<&str> = node
            .object_entries()
            .unwrap()
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_inherited_fields_are_written_first() {
        let mut part = TextWebPart::new();
        part.set_inner_html(Some("<p>hi</p>".to_string()));
        part.base_mut().base_mut().set_id(Some("part-1".to_string()));
        part.additional_data_mut()
            .insert("alpha".to_string(), json!(true));

        let bytes = serialize_to_json(&part).unwrap();
        let payload: Value = serde_json::from_slice(&bytes).unwrap();
        let keys: Vec<&str> = payload
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["@odata.type", "id", "innerHtml", "alpha"]);
    }
}
