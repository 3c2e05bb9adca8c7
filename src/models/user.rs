use crate::schema::{user_profiles, users};
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};

/// Picture shown for developers who never uploaded one.
pub const DEFAULT_PICTURE: &str = "devs/silhouette.png";

// Mirror of the identity provider's user record
#[derive(Queryable, Selectable, Identifiable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = user_profiles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserProfile {
    pub id: i32,
    pub user_id: i32,
    pub notify: bool,
    pub alias: String,
    pub public_email: String,
    pub other_contact: Option<String>,
    pub website: Option<String>,
    pub yob: Option<i32>,
    pub location: Option<String>,
    pub languages: Option<String>,
    pub interests: Option<String>,
    pub occupation: Option<String>,
    pub roles: Option<String>,
    pub favorite_distros: Option<String>,
    pub picture: String,
}

#[derive(Insertable, Deserialize, Debug, Clone)]
#[diesel(table_name = user_profiles)]
pub struct NewUserProfile {
    pub user_id: i32,
    pub notify: bool,
    pub alias: String,
    pub public_email: String,
    pub other_contact: Option<String>,
    pub website: Option<String>,
    pub yob: Option<i32>,
    pub location: Option<String>,
    pub languages: Option<String>,
    pub interests: Option<String>,
    pub occupation: Option<String>,
    pub roles: Option<String>,
    pub favorite_distros: Option<String>,
    pub picture: String,
}

// Nullable columns take Some(None) to clear them
#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = user_profiles)]
pub struct UpdateUserProfile {
    pub notify: Option<bool>,
    pub alias: Option<String>,
    pub public_email: Option<String>,
    pub other_contact: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub yob: Option<Option<i32>>,
    pub location: Option<Option<String>>,
    pub languages: Option<Option<String>>,
    pub interests: Option<Option<String>>,
    pub occupation: Option<Option<String>>,
    pub roles: Option<Option<String>>,
    pub favorite_distros: Option<Option<String>>,
    pub picture: Option<String>,
}

impl NewUser {
    pub fn new(username: &str, first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            username: username.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }
}

impl NewUserProfile {
    pub fn new(user_id: i32, alias: &str, public_email: &str) -> Self {
        Self {
            user_id,
            notify: true,
            alias: alias.to_string(),
            public_email: public_email.to_string(),
            other_contact: None,
            website: None,
            yob: None,
            location: None,
            languages: None,
            interests: None,
            occupation: None,
            roles: None,
            favorite_distros: None,
            picture: DEFAULT_PICTURE.to_string(),
        }
    }

    /// Alias and public email are mandatory; reject before touching the database
    pub fn validate(&self) -> Result<(), String> {
        validate_required("alias", &self.alias)?;
        validate_required("public_email", &self.public_email)
    }
}

impl UpdateUserProfile {
    /// Required fields may be left untouched, but never blanked
    pub fn validate(&self) -> Result<(), String> {
        if let Some(alias) = &self.alias {
            validate_required("alias", alias)?;
        }
        if let Some(public_email) = &self.public_email {
            validate_required("public_email", public_email)?;
        }
        Ok(())
    }
}

fn validate_required(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("Profile field '{field}' is required"));
    }
    Ok(())
}
