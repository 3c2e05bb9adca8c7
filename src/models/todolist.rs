use crate::models::package::Package;
use crate::schema::{todolist_pkgs, todolists};
use chrono::NaiveDate;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// Todolist model - date_added is stamped once by NewTodolist::new
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = todolists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Todolist {
    pub id: i32,
    pub creator_id: i32,
    pub name: String,
    pub description: String,
    pub date_added: NaiveDate,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = todolists)]
pub struct NewTodolist {
    pub creator_id: i32,
    pub name: String,
    pub description: String,
    pub date_added: NaiveDate,
}

// A package's membership in a todolist; (list_id, pkg_id) is unique
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = todolist_pkgs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TodolistPkg {
    pub id: i32,
    pub list_id: i32,
    pub pkg_id: i32,
    pub complete: bool,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = todolist_pkgs)]
pub struct NewTodolistPkg {
    pub list_id: i32,
    pub pkg_id: i32,
    pub complete: bool,
}

#[derive(Serialize, Debug, Clone)]
pub struct TodolistEntry {
    pub entry: TodolistPkg,
    pub package: Package,
}

// Combined models for the todolist detail view
#[derive(Serialize, Debug)]
pub struct TodolistWithPackages {
    pub todolist: Todolist,
    pub packages: Vec<TodolistEntry>,
    pub package_names: String,
}

// Request models for API
#[derive(Deserialize, Debug)]
pub struct AddTodolistPackageRequest {
    pub pkg_id: i32,
}

#[derive(Deserialize, Debug)]
pub struct UpdateTodolistPackageRequest {
    pub complete: bool,
}

impl NewTodolist {
    pub fn new(creator_id: i32, name: &str, description: &str) -> Self {
        Self {
            creator_id,
            name: name.to_string(),
            description: description.to_string(),
            date_added: chrono::Utc::now().date_naive(),
        }
    }
}

impl NewTodolistPkg {
    pub fn new(list_id: i32, pkg_id: i32) -> Self {
        Self {
            list_id,
            pkg_id,
            complete: false,
        }
    }
}

impl TodolistWithPackages {
    pub fn new(todolist: Todolist, packages: Vec<TodolistEntry>) -> Self {
        let package_names = join_package_names(packages.iter().map(|e| e.package.pkgname.as_str()));
        Self {
            todolist,
            packages,
            package_names,
        }
    }
}

/// Newline-joined block of distinct package names, for copy and paste.
///
/// The same name appears once even when the list holds it for several
/// architectures.
pub fn join_package_names<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join("\n")
}
