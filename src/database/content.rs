use crate::models::{NewNews, NewWikipage, News, UpdateNews, Wikipage};
use crate::schema::{news, wikipages};
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

impl crate::database::DatabaseService {
    pub fn create_news(&self, item: &NewNews) -> QueryResult<News> {
        let mut conn = self.get_diesel_connection()?;

        diesel::insert_into(news::table)
            .values(item)
            .get_result::<News>(&mut conn)
    }

    pub fn get_news(&self, news_id: i32) -> QueryResult<Option<News>> {
        let mut conn = self.get_diesel_connection()?;

        news::table
            .find(news_id)
            .first::<News>(&mut conn)
            .optional()
    }

    /// Newest first: by post date, then by id within a day
    pub fn list_news(&self, limit: Option<i64>) -> QueryResult<Vec<News>> {
        let mut conn = self.get_diesel_connection()?;

        let mut query: news::BoxedQuery<'_, Sqlite> = news::table
            .order((news::postdate.desc(), news::id.desc()))
            .into_boxed();
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        query.load::<News>(&mut conn)
    }

    pub fn latest_news(&self) -> QueryResult<Option<News>> {
        Ok(self.list_news(Some(1))?.into_iter().next())
    }

    // postdate is not part of UpdateNews, so edits never move an item
    pub fn update_news(&self, news_id: i32, changes: &UpdateNews) -> QueryResult<News> {
        let mut conn = self.get_diesel_connection()?;

        diesel::update(news::table.find(news_id))
            .set(changes)
            .get_result::<News>(&mut conn)
    }

    pub fn create_wikipage(&self, page: &NewWikipage) -> QueryResult<Wikipage> {
        let mut conn = self.get_diesel_connection()?;

        diesel::insert_into(wikipages::table)
            .values(page)
            .get_result::<Wikipage>(&mut conn)
    }

    pub fn get_wikipage_by_title(&self, title: &str) -> QueryResult<Option<Wikipage>> {
        let mut conn = self.get_diesel_connection()?;

        wikipages::table
            .filter(wikipages::title.eq(title))
            .order(wikipages::id.asc())
            .first::<Wikipage>(&mut conn)
            .optional()
    }

    pub fn update_wikipage(
        &self,
        page_id: i32,
        content: &str,
        last_author_id: i32,
    ) -> QueryResult<Wikipage> {
        let mut conn = self.get_diesel_connection()?;

        diesel::update(wikipages::table.find(page_id))
            .set((
                wikipages::content.eq(content),
                wikipages::last_author_id.eq(last_author_id),
            ))
            .get_result::<Wikipage>(&mut conn)
    }
}
