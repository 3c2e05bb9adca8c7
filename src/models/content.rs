use crate::schema::{news, wikipages};
use chrono::NaiveDate;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};

// News item - postdate is stamped once by NewNews::new and never updated
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = news)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct News {
    pub id: i32,
    pub author_id: i32,
    pub postdate: NaiveDate,
    pub title: String,
    pub content: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = news)]
pub struct NewNews {
    pub author_id: i32,
    pub postdate: NaiveDate,
    pub title: String,
    pub content: String,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = news)]
pub struct UpdateNews {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = wikipages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Wikipage {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub last_author_id: i32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = wikipages)]
pub struct NewWikipage {
    pub title: String,
    pub content: String,
    pub last_author_id: i32,
}

#[derive(Serialize, Debug)]
pub struct NewsResponse {
    pub news: News,
    pub url: String,
}

impl NewNews {
    pub fn new(author_id: i32, title: &str, content: &str) -> Self {
        Self {
            author_id,
            postdate: chrono::Utc::now().date_naive(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }
}

impl News {
    pub fn absolute_url(&self) -> String {
        format!("/news/{}/", self.id)
    }
}

impl NewWikipage {
    pub fn new(title: &str, content: &str, last_author_id: i32) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            last_author_id,
        }
    }
}

impl Wikipage {
    pub fn edit_url(&self) -> String {
        format!("/wiki/edit/{}/", self.title)
    }
}

impl From<News> for NewsResponse {
    fn from(news: News) -> Self {
        let url = news.absolute_url();
        Self { news, url }
    }
}
