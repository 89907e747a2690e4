//! Serde helpers for SurrealDB records
//!
//! RecordIds are written to JSON as `"table:key"` strings. Reading accepts
//! either that string form (API payloads) or the native form (query results).

use serde::{Deserialize, Deserializer, Serializer};
use surrealdb::RecordId;

/// Deserialize bool that treats null as true
pub fn bool_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|opt| opt.unwrap_or(true))
}

/// RecordId in either representation
#[derive(Debug, Clone)]
struct AnyRecordId(RecordId);

impl<'de> Deserialize<'de> for AnyRecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        use std::fmt;

        struct AnyVisitor;

        impl<'de> Visitor<'de> for AnyVisitor {
            type Value = AnyRecordId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 'table:key' string or a record id")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value
                    .parse::<RecordId>()
                    .map(AnyRecordId)
                    .map_err(|_| de::Error::custom(format!("invalid record id: {value}")))
            }

            fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
            where
                M: de::MapAccess<'de>,
            {
                RecordId::deserialize(de::value::MapAccessDeserializer::new(map)).map(AnyRecordId)
            }
        }

        deserializer.deserialize_any(AnyVisitor)
    }
}

/// `RecordId` as a `"table:key"` string
pub mod record_id {
    use super::*;

    pub fn serialize<S>(id: &RecordId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&id.to_string())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<RecordId, D::Error>
    where
        D: Deserializer<'de>,
    {
        AnyRecordId::deserialize(d).map(|r| r.0)
    }
}

/// `Option<RecordId>` as an optional `"table:key"` string
pub mod option_record_id {
    use super::*;

    pub fn serialize<S>(id: &Option<RecordId>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match id {
            Some(id) => s.serialize_some(&id.to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<RecordId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<AnyRecordId>::deserialize(d).map(|opt| opt.map(|r| r.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Row {
        #[serde(with = "record_id")]
        branch: RecordId,
        #[serde(default, with = "option_record_id")]
        id: Option<RecordId>,
        #[serde(default, deserialize_with = "bool_true")]
        is_active: bool,
    }

    #[test]
    fn test_string_form_round_trips() {
        let row: Row = serde_json::from_str(r#"{"branch":"branch:main","id":null,"is_active":null}"#).unwrap();
        assert_eq!(row.branch.table(), "branch");
        assert!(row.id.is_none());
        assert!(row.is_active);

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["branch"], "branch:main");
    }

    #[test]
    fn test_invalid_record_id_is_rejected() {
        let result: Result<Row, _> = serde_json::from_str(r#"{"branch":"no-table"}"#);
        assert!(result.is_err());
    }
}
