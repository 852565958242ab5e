//! Intern records as exchanged with the roster API and edited in the form.
//!
//! The same [`InternRecord`] type carries both date encodings: the storage
//! encoding when it crosses the API boundary and the display encoding
//! (`YYYY-MM-DD`) while it sits in a [`FormState`](crate::form::FormState).
//! Conversion between the two lives in [`codec`](crate::codec).

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Opaque record identifier. The API may hand out numbers or strings;
/// whichever it sent is echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InternId {
    Number(i64),
    Text(String),
}

impl fmt::Display for InternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternId::Number(n) => write!(f, "{n}"),
            InternId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for InternId {
    /// Numeric only when the number prints back exactly as typed, so `007`
    /// and `+5` stay text and reach the same path segment.
    fn from(value: &str) -> Self {
        match value.parse::<i64>() {
            Ok(n) if n.to_string() == value => InternId::Number(n),
            _ => InternId::Text(value.to_string()),
        }
    }
}

/// One of the four editable fields of an intern record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    InternshipStart,
    InternshipEnd,
}

impl Field {
    /// All editable fields in form order.
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::InternshipStart,
        Field::InternshipEnd,
    ];

    /// JSON key used by the API.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::InternshipStart => "internshipStart",
            Field::InternshipEnd => "internshipEnd",
        }
    }

    /// Human label shown next to the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full name",
            Field::Email => "Email address",
            Field::InternshipStart => "Internship start",
            Field::InternshipEnd => "Internship end",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Field {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl FromStr for Field {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "internshipStart" | "start" => Ok(Field::InternshipStart),
            "internshipEnd" | "end" => Ok(Field::InternshipEnd),
            other => bail!("unknown field: {other}"),
        }
    }
}

/// An intern as the roster API knows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternRecord {
    pub id: InternId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub internship_start: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub internship_end: String,
    /// Fields this client does not edit; sent back untouched on update.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InternRecord {
    /// A record with the given id and every editable field empty.
    pub fn empty(id: InternId) -> Self {
        Self {
            id,
            name: String::new(),
            email: String::new(),
            internship_start: String::new(),
            internship_end: String::new(),
            extra: Map::new(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::InternshipStart => &self.internship_start,
            Field::InternshipEnd => &self.internship_end,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::InternshipStart => self.internship_start = value,
            Field::InternshipEnd => self.internship_end = value,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
