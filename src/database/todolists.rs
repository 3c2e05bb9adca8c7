use super::connection::{DbPool, checkout};
use crate::models::package::Package;
use crate::models::todolist::*;
use crate::schema::{packages, todolist_pkgs, todolists};
use diesel::prelude::*;
use log::{debug, info};

/// Todolist-related database operations
pub struct TodolistOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> TodolistOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Creates a todolist together with its initial packages. A package
    /// listed twice aborts the whole list.
    pub fn create_todolist(
        &self,
        creator_id: i32,
        name: &str,
        description: &str,
        package_ids: &[i32],
    ) -> QueryResult<Todolist> {
        let mut conn = checkout(self.pool)?;

        let todolist = conn.transaction(|conn| {
            let todolist = diesel::insert_into(todolists::table)
                .values(&NewTodolist::new(creator_id, name, description))
                .get_result::<Todolist>(conn)?;

            let entries: Vec<NewTodolistPkg> = package_ids
                .iter()
                .map(|pkg_id| NewTodolistPkg::new(todolist.id, *pkg_id))
                .collect();

            if !entries.is_empty() {
                diesel::insert_into(todolist_pkgs::table)
                    .values(&entries)
                    .execute(conn)?;
            }

            Ok::<_, diesel::result::Error>(todolist)
        })?;

        info!(
            "Created todolist '{}' (id {}) with {} packages",
            todolist.name,
            todolist.id,
            package_ids.len()
        );
        Ok(todolist)
    }

    pub fn get_todolist(&self, list_id: i32) -> QueryResult<Option<Todolist>> {
        let mut conn = checkout(self.pool)?;

        todolists::table
            .find(list_id)
            .first::<Todolist>(&mut conn)
            .optional()
    }

    /// Adds a package to a list; adding it twice is a UniqueViolation
    pub fn add_package(&self, list_id: i32, pkg_id: i32) -> QueryResult<TodolistPkg> {
        let mut conn = checkout(self.pool)?;

        diesel::insert_into(todolist_pkgs::table)
            .values(&NewTodolistPkg::new(list_id, pkg_id))
            .get_result::<TodolistPkg>(&mut conn)
    }

    /// Marks a list entry complete or incomplete. NotFound when the package
    /// is not on the list.
    pub fn set_complete(
        &self,
        list_id: i32,
        pkg_id: i32,
        complete: bool,
    ) -> QueryResult<TodolistPkg> {
        let mut conn = checkout(self.pool)?;

        diesel::update(
            todolist_pkgs::table
                .filter(todolist_pkgs::list_id.eq(list_id))
                .filter(todolist_pkgs::pkg_id.eq(pkg_id)),
        )
        .set(todolist_pkgs::complete.eq(complete))
        .get_result::<TodolistPkg>(&mut conn)
    }

    pub fn remove_package(&self, list_id: i32, pkg_id: i32) -> QueryResult<usize> {
        let mut conn = checkout(self.pool)?;

        diesel::delete(
            todolist_pkgs::table
                .filter(todolist_pkgs::list_id.eq(list_id))
                .filter(todolist_pkgs::pkg_id.eq(pkg_id)),
        )
        .execute(&mut conn)
    }

    /// List entries with their packages, ordered by package id
    pub fn get_packages(&self, list_id: i32) -> QueryResult<Vec<TodolistEntry>> {
        let mut conn = checkout(self.pool)?;

        let rows = todolist_pkgs::table
            .inner_join(packages::table)
            .filter(todolist_pkgs::list_id.eq(list_id))
            .order((todolist_pkgs::pkg_id.asc(), todolist_pkgs::id.asc()))
            .select((TodolistPkg::as_select(), Package::as_select()))
            .load::<(TodolistPkg, Package)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(entry, package)| TodolistEntry { entry, package })
            .collect())
    }

    pub fn get_package_names(&self, list_id: i32) -> QueryResult<String> {
        let entries = self.get_packages(list_id)?;
        Ok(join_package_names(
            entries.iter().map(|e| e.package.pkgname.as_str()),
        ))
    }

    pub fn get_todolist_with_packages(
        &self,
        list_id: i32,
    ) -> QueryResult<Option<TodolistWithPackages>> {
        let todolist = match self.get_todolist(list_id)? {
            Some(todolist) => todolist,
            None => return Ok(None),
        };
        let packages = self.get_packages(list_id)?;
        Ok(Some(TodolistWithPackages::new(todolist, packages)))
    }

    /// Lists with at least one incomplete entry, newest first
    pub fn get_incomplete(&self) -> QueryResult<Vec<Todolist>> {
        let mut conn = checkout(self.pool)?;

        let pending_list_ids = todolist_pkgs::table
            .filter(todolist_pkgs::complete.eq(false))
            .select(todolist_pkgs::list_id);

        let lists = todolists::table
            .filter(todolists::id.eq_any(pending_list_ids))
            .order((todolists::date_added.desc(), todolists::id.desc()))
            .load::<Todolist>(&mut conn)?;

        debug!("{} todolists have incomplete entries", lists.len());
        Ok(lists)
    }
}
