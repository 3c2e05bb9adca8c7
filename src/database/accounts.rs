use crate::models::{NewUser, NewUserProfile, UpdateUserProfile, User, UserProfile};
use crate::schema::{user_profiles, users};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

impl crate::database::DatabaseService {
    pub fn create_user(&self, new_user: &NewUser) -> QueryResult<User> {
        let mut conn = self.get_diesel_connection()?;

        diesel::insert_into(users::table)
            .values(new_user)
            .get_result::<User>(&mut conn)
    }

    pub fn get_user(&self, user_id: i32) -> QueryResult<Option<User>> {
        let mut conn = self.get_diesel_connection()?;

        users::table
            .find(user_id)
            .first::<User>(&mut conn)
            .optional()
    }

    pub fn get_user_by_username(&self, username: &str) -> QueryResult<Option<User>> {
        let mut conn = self.get_diesel_connection()?;

        users::table
            .filter(users::username.eq(username))
            .first::<User>(&mut conn)
            .optional()
    }

    pub fn list_users(&self) -> QueryResult<Vec<User>> {
        let mut conn = self.get_diesel_connection()?;

        users::table
            .order((users::first_name.asc(), users::id.asc()))
            .load::<User>(&mut conn)
    }

    /// Creates the profile for a user. Missing alias or public email is
    /// rejected as a CheckViolation without issuing any SQL; a second
    /// profile for the same user is a UniqueViolation.
    pub fn create_profile(&self, profile: &NewUserProfile) -> QueryResult<UserProfile> {
        if let Err(e) = profile.validate() {
            return Err(DieselError::DatabaseError(
                DatabaseErrorKind::CheckViolation,
                Box::new(e),
            ));
        }

        let mut conn = self.get_diesel_connection()?;

        diesel::insert_into(user_profiles::table)
            .values(profile)
            .get_result::<UserProfile>(&mut conn)
    }

    pub fn get_profile_for_user(&self, user_id: i32) -> QueryResult<Option<UserProfile>> {
        let mut conn = self.get_diesel_connection()?;

        user_profiles::table
            .filter(user_profiles::user_id.eq(user_id))
            .first::<UserProfile>(&mut conn)
            .optional()
    }

    pub fn update_profile(
        &self,
        user_id: i32,
        changes: &UpdateUserProfile,
    ) -> QueryResult<UserProfile> {
        if let Err(e) = changes.validate() {
            return Err(DieselError::DatabaseError(
                DatabaseErrorKind::CheckViolation,
                Box::new(e),
            ));
        }

        let mut conn = self.get_diesel_connection()?;

        diesel::update(user_profiles::table.filter(user_profiles::user_id.eq(user_id)))
            .set(changes)
            .get_result::<UserProfile>(&mut conn)
    }
}
