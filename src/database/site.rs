use crate::models::{
    AltForum, Donor, Mirror, NewAltForum, NewDonor, NewMirror, NewPress, Press,
};
use crate::schema::{alt_forums, donors, mirrors, press};
use diesel::prelude::*;

// Mirrors, press coverage, alternate forums and donors. Plain listings with
// no rules beyond their display order.
impl crate::database::DatabaseService {
    pub fn create_mirror(&self, mirror: &NewMirror) -> QueryResult<Mirror> {
        let mut conn = self.get_diesel_connection()?;

        diesel::insert_into(mirrors::table)
            .values(mirror)
            .get_result::<Mirror>(&mut conn)
    }

    pub fn list_mirrors(&self) -> QueryResult<Vec<Mirror>> {
        let mut conn = self.get_diesel_connection()?;

        mirrors::table
            .order((mirrors::domain.asc(), mirrors::id.asc()))
            .load::<Mirror>(&mut conn)
    }

    pub fn delete_mirror(&self, mirror_id: i32) -> QueryResult<usize> {
        let mut conn = self.get_diesel_connection()?;

        diesel::delete(mirrors::table.find(mirror_id)).execute(&mut conn)
    }

    pub fn create_press(&self, item: &NewPress) -> QueryResult<Press> {
        let mut conn = self.get_diesel_connection()?;

        diesel::insert_into(press::table)
            .values(item)
            .get_result::<Press>(&mut conn)
    }

    pub fn list_press(&self) -> QueryResult<Vec<Press>> {
        let mut conn = self.get_diesel_connection()?;

        press::table
            .order((press::name.asc(), press::id.asc()))
            .load::<Press>(&mut conn)
    }

    pub fn create_alt_forum(&self, forum: &NewAltForum) -> QueryResult<AltForum> {
        let mut conn = self.get_diesel_connection()?;

        diesel::insert_into(alt_forums::table)
            .values(forum)
            .get_result::<AltForum>(&mut conn)
    }

    pub fn list_alt_forums(&self) -> QueryResult<Vec<AltForum>> {
        let mut conn = self.get_diesel_connection()?;

        alt_forums::table
            .order((alt_forums::name.asc(), alt_forums::id.asc()))
            .load::<AltForum>(&mut conn)
    }

    pub fn create_donor(&self, donor: &NewDonor) -> QueryResult<Donor> {
        let mut conn = self.get_diesel_connection()?;

        diesel::insert_into(donors::table)
            .values(donor)
            .get_result::<Donor>(&mut conn)
    }

    pub fn list_donors(&self) -> QueryResult<Vec<Donor>> {
        let mut conn = self.get_diesel_connection()?;

        donors::table
            .order((donors::name.asc(), donors::id.asc()))
            .load::<Donor>(&mut conn)
    }
}
