//! OData collection response wrapper

use crate::error::Result;
use crate::serialization::{
    AdditionalData, AdditionalDataHolder, FieldDeserializers, FieldValue, Parsable, ParseNode,
    SerializationWriter, field,
};
use std::collections::HashMap;

/// One page of a collection, with the link to the next page if any
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionResponse<T> {
    additional_data: AdditionalData,
    value: Option<Vec<T>>,
    next_link: Option<String>,
    delta_link: Option<String>,
    count: Option<i64>,
}

impl<T> CollectionResponse<T> {
    pub fn new() -> Self {
        Self {
            additional_data: AdditionalData::new(),
            value: None,
            next_link: None,
            delta_link: None,
            count: None,
        }
    }

    pub fn value(&self) -> Option<&Vec<T>> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: Option<Vec<T>>) {
        self.value = value;
    }

    pub fn next_link(&self) -> Option<&String> {
        self.next_link.as_ref()
    }

    pub fn set_next_link(&mut self, value: Option<String>) {
        self.next_link = value;
    }

    /// Present on the last page of a delta query
    pub fn delta_link(&self) -> Option<&String> {
        self.delta_link.as_ref()
    }

    pub fn set_delta_link(&mut self, value: Option<String>) {
        self.delta_link = value;
    }

    pub fn count(&self) -> Option<&i64> {
        self.count.as_ref()
    }

    pub fn set_count(&mut self, value: Option<i64>) {
        self.count = value;
    }

    /// The page's items, empty when the payload had none
    pub fn into_items(self) -> Vec<T> {
        self.value.unwrap_or_default()
    }
}

impl<T> Default for CollectionResponse<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AdditionalDataHolder for CollectionResponse<T> {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl<T: FieldValue + 'static> Parsable for CollectionResponse<T> {
    fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self> {
        Ok(Self::new())
    }

    fn field_deserializers(&self) -> FieldDeserializers<Self> {
        let mut fields: FieldDeserializers<Self> = HashMap::new();
        fields.insert("value", field::<Self, Vec<T>>(|model, value| model.value = Some(value)));
        fields.insert(
            "@odata.nextLink",
            field::<Self, String>(|model, value| model.next_link = Some(value)),
        );
        fields.insert(
            "@odata.deltaLink",
            field::<Self, String>(|model, value| model.delta_link = Some(value)),
        );
        fields.insert(
            "@odata.count",
            field::<Self, i64>(|model, value| model.count = Some(value)),
        );
        fields
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()> {
        if let Some(count) = self.count {
            writer.write_i64_value(Some("@odata.count"), count)?;
        }
        if let Some(value) = &self.value {
            value.write(Some("value"), writer)?;
        }
        if let Some(link) = &self.next_link {
            writer.write_string_value(Some("@odata.nextLink"), link)?;
        }
        if let Some(link) = &self.delta_link {
            writer.write_string_value(Some("@odata.deltaLink"), link)?;
        }
        Ok(())
    }
}
