use serde::{Deserialize, Deserializer};

/// Collection record as returned by `GET /blogs`
///
/// Fields are taken as they come: missing or `null` values become `""`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawBlogSummary {
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub image_url: String,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub avatar_url: String,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub author: String,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub topic: String,
}

/// Item record as returned by `GET /blogs/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawBlogDetail {
    pub title: String,
    pub image_url: String,
    pub content: String,
    pub avatar_url: String,
    pub author: String,
}

/// Post as shown in the home list
#[derive(Debug, Clone, PartialEq)]
pub struct BlogSummary {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub avatar_url: String,
    pub author: String,
    pub topic: String,
}

/// Post as shown on its own page
#[derive(Debug, Clone, PartialEq)]
pub struct BlogDetail {
    pub title: String,
    pub image_url: String,
    pub content: String,
    pub avatar_url: String,
    pub author: String,
}

impl From<RawBlogSummary> for BlogSummary {
    fn from(raw: RawBlogSummary) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            image_url: raw.image_url,
            avatar_url: raw.avatar_url,
            author: raw.author,
            topic: raw.topic,
        }
    }
}

impl From<RawBlogDetail> for BlogDetail {
    fn from(raw: RawBlogDetail) -> Self {
        Self {
            title: raw.title,
            image_url: raw.image_url,
            content: raw.content,
            avatar_url: raw.avatar_url,
            author: raw.author,
        }
    }
}

// The live API sends numeric ids; fixtures and mocks send strings.
// Any other scalar is kept as its JSON text, `null` is empty.
fn deserialize_loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}
