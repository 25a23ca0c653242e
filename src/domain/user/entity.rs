//! Directory user record as returned by the upstream API

use serde::{Deserialize, Serialize};

/// Person name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub title: String,
    pub first: String,
    pub last: String,
}

impl Name {
    /// First and last name separated by a single space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub number: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timezone {
    pub offset: String,
    pub description: String,
}

/// Postal code; the upstream sends numbers for some nationalities and
/// strings for others
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Postcode {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: Postcode,
    pub coordinates: Coordinates,
    pub timezone: Timezone,
}

/// Login credentials block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub uuid: String,
    pub username: String,
    pub password: String,
    pub salt: String,
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInfo {
    pub date: String,
    pub age: u32,
}

/// National identifier; `value` is null for nationalities without one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

/// One directory entry
///
/// Only the name, email and username take part in search; every other
/// field is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub gender: String,
    pub name: Name,
    pub location: Location,
    pub email: String,
    pub login: Login,
    pub dob: DateInfo,
    pub registered: DateInfo,
    pub phone: String,
    pub cell: String,
    pub id: Identifier,
    pub picture: Picture,
    pub nat: String,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        self.name.full_name()
    }

    pub fn username(&self) -> &str {
        &self.login.username
    }
}
