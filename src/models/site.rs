use crate::schema::{alt_forums, donors, mirrors, press};
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = mirrors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Mirror {
    pub id: i32,
    pub domain: String,
    pub country: String,
    pub url: String,
    pub protocol_list: Option<String>,
    pub admin_email: Option<String>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = mirrors)]
pub struct NewMirror {
    pub domain: String,
    pub country: String,
    pub url: String,
    pub protocol_list: Option<String>,
    pub admin_email: Option<String>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = press)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Press {
    pub id: i32,
    pub name: String,
    pub url: String,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = press)]
pub struct NewPress {
    pub name: String,
    pub url: String,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = alt_forums)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AltForum {
    pub id: i32,
    pub language: String,
    pub url: String,
    pub name: String,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = alt_forums)]
pub struct NewAltForum {
    pub language: String,
    pub url: String,
    pub name: String,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = donors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Donor {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = donors)]
pub struct NewDonor {
    pub name: String,
}

impl NewMirror {
    pub fn new(domain: &str, country: &str, url: &str) -> Self {
        Self {
            domain: domain.to_string(),
            country: country.to_string(),
            url: url.to_string(),
            protocol_list: None,
            admin_email: None,
        }
    }
}

impl fmt::Display for Mirror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.domain)
    }
}

impl fmt::Display for Press {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for AltForum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Donor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
