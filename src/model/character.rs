//! Character record as delivered by the character API.
//!
//! Records are parsed once at the fetch boundary and never mutated.
//! Enumerated fields degrade to `unknown` on unexpected wire values and
//! free-form fields default to the empty string when absent or `null`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ===== Status =====

/// Life status of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Status {
    /// `"Alive"` on the wire.
    Alive,
    /// `"Dead"` on the wire.
    Dead,
    /// `"unknown"` on the wire, and the fallback for anything unexpected.
    #[default]
    Unknown,
}

impl Status {
    /// All variants in display order.
    pub const ALL: [Status; 3] = [Status::Alive, Status::Dead, Status::Unknown];

    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Alive => "Alive",
            Status::Dead => "Dead",
            Status::Unknown => "unknown",
        }
    }
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Alive" => Status::Alive,
            "Dead" => Status::Dead,
            _ => Status::Unknown,
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Gender =====

/// Gender of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Gender {
    /// `"Male"` on the wire.
    Male,
    /// `"Female"` on the wire.
    Female,
    /// `"Genderless"` on the wire.
    Genderless,
    /// `"unknown"` on the wire, and the fallback for anything unexpected.
    #[default]
    Unknown,
}

impl Gender {
    /// All variants in display order.
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::Genderless,
        Gender::Unknown,
    ];

    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Genderless => "Genderless",
            Gender::Unknown => "unknown",
        }
    }
}

impl From<String> for Gender {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            "Genderless" => Gender::Genderless,
            _ => Gender::Unknown,
        }
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Location =====

/// Named reference to an origin or last-known location.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    /// Display name, e.g. `"Earth (C-137)"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Resource URL; empty when the location is unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

// ===== Character =====

/// A single character record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default, deserialize_with = "null_as_default")]
    id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    status: Status,
    #[serde(default, deserialize_with = "null_as_default")]
    species: String,
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    gender: Gender,
    #[serde(default, deserialize_with = "null_as_default")]
    origin: Location,
    #[serde(default, deserialize_with = "null_as_default")]
    location: Location,
    #[serde(default, deserialize_with = "null_as_default")]
    image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    episode: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    url: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    created: Option<DateTime<Utc>>,
}

impl Character {
    /// Build a record from the fields the browser filters and sorts on.
    ///
    /// Detail-only fields start empty; see the `with_*` methods.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        status: Status,
        species: impl Into<String>,
        gender: Gender,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            species: species.into(),
            kind: String::new(),
            gender,
            origin: Location::default(),
            location: Location::default(),
            image: image.into(),
            episode: Vec::new(),
            url: String::new(),
            created: None,
        }
    }

    /// Set the sub-type (the API's `type` field).
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set origin and last-known location.
    pub fn with_places(mut self, origin: Location, location: Location) -> Self {
        self.origin = origin;
        self.location = location;
        self
    }

    /// Set the episode URL list.
    pub fn with_episodes(mut self, episode: Vec<String>) -> Self {
        self.episode = episode;
        self
    }

    /// Set the creation timestamp.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Unique identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Life status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Species (free-form, e.g. `"Human"`).
    pub fn species(&self) -> &str {
        &self.species
    }

    /// Sub-type, often empty.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Gender.
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Origin location.
    pub fn origin(&self) -> &Location {
        &self.origin
    }

    /// Last known location.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Portrait image URL.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Number of episodes the character appears in.
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }

    /// Resource URL of the record itself.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Creation timestamp, when present and well-formed.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }
}

/// Parse an RFC 3339 timestamp, mapping malformed or null values to `None`.
/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }))
}
