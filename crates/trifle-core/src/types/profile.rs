//! User profile record and partial updates.

use super::record::{Field, Record};
use crate::utils::Truthy;
use rkyv::{Archive, Deserialize, Serialize};
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A user profile
#[derive(
    Debug, Clone, PartialEq, Eq, Archive, Deserialize, Serialize, SerdeDeserialize, SerdeSerialize,
)]
#[archive(check_bytes)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub email: String,
}

/// Partial profile; present fields replace the profile's fields
#[derive(Debug, Clone, Default, PartialEq, Eq, SerdeDeserialize, SerdeSerialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Keys of [`Profile`], for key lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileKey {
    Name,
    Age,
    Email,
}

/// Typed keys of [`Profile`] for [`get_property`](super::get_property)
pub mod fields {
    use super::{Field, Profile};

    /// `Profile::name`
    #[derive(Debug, Clone, Copy)]
    pub struct Name;

    /// `Profile::age`
    #[derive(Debug, Clone, Copy)]
    pub struct Age;

    /// `Profile::email`
    #[derive(Debug, Clone, Copy)]
    pub struct Email;

    impl Field<Profile> for Name {
        type Value = String;

        fn get(self, record: &Profile) -> &String {
            &record.name
        }
    }

    impl Field<Profile> for Age {
        type Value = u32;

        fn get(self, record: &Profile) -> &u32 {
            &record.age
        }
    }

    impl Field<Profile> for Email {
        type Value = String;

        fn get(self, record: &Profile) -> &String {
            &record.email
        }
    }
}

impl Profile {
    /// Create a new profile
    pub fn new(name: impl Into<String>, age: u32, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }
}

impl Record for Profile {
    type Key = ProfileKey;

    fn is_truthy_at(&self, key: ProfileKey) -> bool {
        match key {
            ProfileKey::Name => self.name.is_truthy(),
            ProfileKey::Age => self.age.is_truthy(),
            ProfileKey::Email => self.email.is_truthy(),
        }
    }
}

impl ProfileUpdate {
    /// Set the replacement name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the replacement age
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Set the replacement email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Check if this update changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.email.is_none()
    }
}

/// Build a new profile from `profile` with the fields of `update` layered on top
pub fn update_profile(profile: &Profile, update: &ProfileUpdate) -> Profile {
    Profile {
        name: update.name.clone().unwrap_or_else(|| profile.name.clone()),
        age: update.age.unwrap_or(profile.age),
        email: update.email.clone().unwrap_or_else(|| profile.email.clone()),
    }
}
