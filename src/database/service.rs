use super::connection::{DbConnection, DbPool, checkout, create_pool, get_connection_with_retry};
use super::packages::PackageOperations;
use super::todolists::TodolistOperations;
use crate::models::package::*;
use crate::models::todolist::*;
use diesel::QueryResult;

const DEFAULT_POOL_SIZE: u32 = 8;

/// Main database service that provides a unified interface to all database operations
#[derive(Debug)]
pub struct DatabaseService {
    pub pool: DbPool,
}

impl DatabaseService {
    /// Creates a new DatabaseService with an initialized connection pool
    pub fn new(database_url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_pool_size(database_url, DEFAULT_POOL_SIZE)
    }

    pub fn with_pool_size(
        database_url: &str,
        pool_size: u32,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = create_pool(database_url, pool_size)?;
        Ok(Self { pool })
    }

    /// Gets a connection from the pool with retry logic
    pub fn get_connection(&self) -> Result<DbConnection, diesel::r2d2::Error> {
        get_connection_with_retry(&self.pool)
    }

    pub(crate) fn get_diesel_connection(&self) -> QueryResult<DbConnection> {
        checkout(&self.pool)
    }

    pub fn packages(&self) -> PackageOperations<'_> {
        PackageOperations::new(&self.pool)
    }

    pub fn todolists(&self) -> TodolistOperations<'_> {
        TodolistOperations::new(&self.pool)
    }

    // Catalog operations
    pub fn create_arch(&self, name: &str) -> QueryResult<Arch> {
        self.packages().create_arch(name)
    }

    pub fn create_repo(&self, name: &str) -> QueryResult<Repo> {
        self.packages().create_repo(name)
    }

    pub fn create_package(&self, new_package: &NewPackage) -> QueryResult<Package> {
        self.packages().create_package(new_package)
    }

    pub fn get_package(&self, package_id: i32) -> QueryResult<Option<Package>> {
        self.packages().get_package(package_id)
    }

    pub fn update_package(&self, package_id: i32, changes: &UpdatePackage) -> QueryResult<Package> {
        self.packages().update_package(package_id, changes)
    }

    pub fn add_package_depend(
        &self,
        package_id: i32,
        depname: &str,
        depvcmp: &str,
    ) -> QueryResult<PackageDepend> {
        self.packages().add_package_depend(package_id, depname, depvcmp)
    }

    pub fn add_package_file(&self, package_id: i32, path: &str) -> QueryResult<PackageFile> {
        self.packages().add_package_file(package_id, path)
    }

    pub fn get_depends(&self, package: &Package) -> QueryResult<Vec<DependRecord>> {
        self.packages().get_depends(package)
    }

    pub fn get_requiredby(&self, package: &Package) -> QueryResult<Vec<Package>> {
        self.packages().get_requiredby(package)
    }

    pub fn get_package_detail(
        &self,
        repo_name: &str,
        arch_name: &str,
        pkgname: &str,
    ) -> QueryResult<Option<PackageDetail>> {
        self.packages()
            .get_package_detail(repo_name, arch_name, pkgname)
    }

    // Sign-off operations
    pub fn add_signoff(&self, package: &Package, packager_id: i32) -> QueryResult<Signoff> {
        self.packages().add_signoff(package, packager_id)
    }

    pub fn get_signoffs(&self, package: &Package) -> QueryResult<Vec<Signoff>> {
        self.packages().get_signoffs(package)
    }

    pub fn approved_for_signoff(&self, package: &Package) -> QueryResult<bool> {
        self.packages().approved_for_signoff(package)
    }

    // Reports
    pub fn get_flag_stats(&self) -> QueryResult<Vec<MaintainerFlagStats>> {
        self.packages().get_flag_stats()
    }

    pub fn get_incomplete_todolists(&self) -> QueryResult<Vec<Todolist>> {
        self.todolists().get_incomplete()
    }

    // Todolist operations
    pub fn create_todolist(
        &self,
        creator_id: i32,
        name: &str,
        description: &str,
        package_ids: &[i32],
    ) -> QueryResult<Todolist> {
        self.todolists()
            .create_todolist(creator_id, name, description, package_ids)
    }

    pub fn add_todolist_package(&self, list_id: i32, pkg_id: i32) -> QueryResult<TodolistPkg> {
        self.todolists().add_package(list_id, pkg_id)
    }

    pub fn set_todolist_package_complete(
        &self,
        list_id: i32,
        pkg_id: i32,
        complete: bool,
    ) -> QueryResult<TodolistPkg> {
        self.todolists().set_complete(list_id, pkg_id, complete)
    }

    pub fn get_todolist_with_packages(
        &self,
        list_id: i32,
    ) -> QueryResult<Option<TodolistWithPackages>> {
        self.todolists().get_todolist_with_packages(list_id)
    }
}
