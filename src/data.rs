use std::{fmt, str::FromStr};

use derive_builder::Builder;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::config::STATUS_LIST;
use crate::error::{Result, StoreError};

/// Review status, one per entry of [`STATUS_LIST`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Status {
    WantToTry,
    Recommended,
    DoNotRecommend,
}

impl Status {
    /// Same order as [`STATUS_LIST`].
    pub const ALL: [Status; 3] = [Self::WantToTry, Self::Recommended, Self::DoNotRecommend];

    pub fn label(self) -> &'static str {
        STATUS_LIST[self as usize]
    }
}

impl FromStr for Status {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        STATUS_LIST
            .iter()
            .position(|label| *label == s)
            .map(|idx| Self::ALL[idx])
            .ok_or_else(|| StoreError::UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for Status {
    type Error = StoreError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Status> for &'static str {
    fn from(status: Status) -> Self {
        status.label()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diet {
    Vegetarian,
    Pescetarian,
    Keto,
}

impl Diet {
    pub fn label(self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::Pescetarian => "Pescetarian",
            Self::Keto => "Keto",
        }
    }

    /// Parse a diet tag where the empty label means "no tag".
    pub fn parse_tag(s: &str) -> Result<Option<Self>> {
        match s {
            "" => Ok(None),
            "Vegetarian" => Ok(Some(Self::Vegetarian)),
            "Pescetarian" => Ok(Some(Self::Pescetarian)),
            "Keto" => Ok(Some(Self::Keto)),
            other => Err(StoreError::UnknownDiet(other.to_string())),
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn check_id(id: Option<&str>) -> Result<()> {
    match id {
        Some(id) if id.trim().is_empty() => {
            Err(StoreError::InvalidRecord("`id` must not be empty".to_string()))
        }
        _ => Ok(()),
    }
}

fn non_empty_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let id = String::deserialize(deserializer)?;
    check_id(Some(&id)).map_err(de::Error::custom)?;
    Ok(id)
}

fn diet_tag<'de, D>(deserializer: D) -> std::result::Result<Option<Diet>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(tag) => Diet::parse_tag(&tag).map_err(de::Error::custom),
        None => Ok(None),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate", error = "StoreError"))]
pub struct Dish {
    #[builder(setter(into))]
    #[serde(deserialize_with = "non_empty_id")]
    pub(crate) id: String,
    #[builder(setter(into))]
    pub(crate) name: String,
    pub(crate) status: Status,
    #[builder(setter(into, strip_option), default)]
    #[serde(default, deserialize_with = "diet_tag", skip_serializing_if = "Option::is_none")]
    pub(crate) diet: Option<Diet>,
}

impl DishBuilder {
    fn validate(&self) -> Result<()> {
        check_id(self.id.as_deref())
    }
}

impl Dish {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn diet(&self) -> Option<Diet> {
        self.diet
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate", error = "StoreError"))]
pub struct Restaurant {
    #[builder(setter(into))]
    #[serde(deserialize_with = "non_empty_id")]
    id: String,
    #[builder(setter(into))]
    name: String,
    #[builder(setter(into))]
    address: String,
    #[builder(setter(into))]
    website: String,
    status: Status,
}

impl RestaurantBuilder {
    fn validate(&self) -> Result<()> {
        check_id(self.id.as_deref())
    }
}

impl Restaurant {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn status(&self) -> Status {
        self.status
    }
}
