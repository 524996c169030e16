//! The four fixed conference operations and their typed response shapes.
//!
//! Each `*Data` struct mirrors exactly the selection set of its document, so
//! a field that is not selected cannot be read by accident.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// A named GraphQL operation with a typed `data` payload.
pub trait Operation {
    /// Operation name sent as `operationName`.
    const NAME: &'static str;
    /// Query document.
    const DOCUMENT: &'static str;
    /// Shape of the `data` field of a successful response.
    type Data: DeserializeOwned;

    /// Variables for this execution. None of the conference queries take any.
    fn variables(&self) -> serde_json::Value {
        serde_json::Value::Object(serde_json::Map::new())
    }
}

/// Accepts a string or a number for scalars such as `ID` and `DateTime`.
fn deserialize_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ScalarVisitor;

    impl<'de> Visitor<'de> for ScalarVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or number")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_none<E>(self) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }

        fn visit_unit<E>(self) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(ScalarVisitor)
}

/// Treats `null` the same as a missing string.
fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Treats `null` the same as a missing list.
fn deserialize_nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

// ============================================================================
// GetSessions
// ============================================================================

/// All sessions with lightweight speaker summaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetSessions;

impl Operation for GetSessions {
    const NAME: &'static str = "GetSessions";
    const DOCUMENT: &'static str = r#"query GetSessions {
  sessions {
    id
    title
    description
    start
    end
    event_type
    event_subtype
    venue
    speakers {
      username
      name
      avatar
    }
  }
}"#;
    type Data = GetSessionsData;
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetSessionsData {
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub sessions: Vec<SessionListNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionListNode {
    #[serde(deserialize_with = "deserialize_scalar")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub start: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub end: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub event_type: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub event_subtype: String,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub speakers: Vec<SpeakerSummaryNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeakerSummaryNode {
    #[serde(deserialize_with = "deserialize_scalar")]
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub avatar: String,
}

// ============================================================================
// GetSessionDetails
// ============================================================================

/// All sessions with richer embedded speaker profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetSessionDetails;

impl Operation for GetSessionDetails {
    const NAME: &'static str = "GetSessionDetails";
    const DOCUMENT: &'static str = r#"query GetSessionDetails {
  sessions {
    id
    title
    description
    start
    end
    event_type
    event_subtype
    venue
    speakers {
      username
      name
      company
      position
      about
      location
      url
      avatar
    }
  }
}"#;
    type Data = GetSessionDetailsData;
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetSessionDetailsData {
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub sessions: Vec<SessionDetailNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionDetailNode {
    #[serde(deserialize_with = "deserialize_scalar")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub start: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub end: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub event_type: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub event_subtype: String,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub speakers: Vec<SpeakerProfileNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeakerProfileNode {
    #[serde(deserialize_with = "deserialize_scalar")]
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub company: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub position: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub about: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub avatar: String,
}

// ============================================================================
// GetSpeakers
// ============================================================================

/// The speaker directory, without about/location/url/years.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetSpeakers;

impl Operation for GetSpeakers {
    const NAME: &'static str = "GetSpeakers";
    const DOCUMENT: &'static str = r#"query GetSpeakers {
  speakers {
    username
    name
    company
    position
    avatar
  }
}"#;
    type Data = GetSpeakersData;
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetSpeakersData {
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub speakers: Vec<SpeakerListingNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeakerListingNode {
    #[serde(deserialize_with = "deserialize_scalar")]
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub company: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub position: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub avatar: String,
}

// ============================================================================
// GetSpeakerDetails
// ============================================================================

/// Every speaker with every profile field, including attendance years.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetSpeakerDetails;

impl Operation for GetSpeakerDetails {
    const NAME: &'static str = "GetSpeakerDetails";
    const DOCUMENT: &'static str = r#"query GetSpeakerDetails {
  speakers {
    username
    name
    company
    position
    about
    location
    url
    avatar
    years
  }
}"#;
    type Data = GetSpeakerDetailsData;
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetSpeakerDetailsData {
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub speakers: Vec<SpeakerDetailNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeakerDetailNode {
    #[serde(deserialize_with = "deserialize_scalar")]
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub company: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub position: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub about: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub avatar: String,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub years: Vec<i32>,
}
