//! Message schema: which type each field number carries.

use std::collections::HashMap;

/// Declared type of a field, driving how its payload is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Unsigned varint scalar.
    Varint,
    /// 4-byte little-endian scalar.
    Fixed32,
    /// 8-byte little-endian scalar.
    Fixed64,
    /// Length-delimited payload validated as UTF-8.
    String,
    /// Length-delimited payload kept raw (bytes, or a nested message the
    /// caller decodes itself).
    Bytes,
}

/// Lookup from field number to declared type.
///
/// Field numbers absent from the schema are still consumed during decode to
/// keep the cursor synchronized, then discarded.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: HashMap<u32, FieldType>,
}

impl Schema {
    pub fn new() -> Self {
        Schema::default()
    }

    /// Declare a field, replacing any earlier declaration for the same number.
    pub fn field(mut self, number: u32, field_type: FieldType) -> Self {
        self.fields.insert(number, field_type);
        self
    }

    pub fn lookup(&self, number: u32) -> Option<FieldType> {
        self.fields.get(&number).copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(u32, FieldType)> for Schema {
    fn from_iter<I: IntoIterator<Item = (u32, FieldType)>>(iter: I) -> Self {
        Schema { fields: iter.into_iter().collect() }
    }
}
