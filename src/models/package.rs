use crate::models::user::User;
use crate::schema::{arches, package_depends, package_files, packages, repos, signoffs};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};

/// Architecture name for architecture-independent packages
pub const ANY_ARCH: &str = "any";

/// Repository whose flagged packages are left out of the flag report
pub const TESTING_REPO: &str = "testing";

/// Sign-offs on the current version and release needed for approval
pub const SIGNOFF_THRESHOLD: i64 = 2;

/// Display name for the report row aggregating packages without a maintainer
pub const ORPHAN_LABEL: &str = "Orphans";

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = arches)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Arch {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = arches)]
pub struct NewArch {
    pub name: String,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = repos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Repo {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = repos)]
pub struct NewRepo {
    pub name: String,
}

// Package model - maintainer_id of None marks an orphan
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = packages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Package {
    pub id: i32,
    pub repo_id: i32,
    pub arch_id: i32,
    pub maintainer_id: Option<i32>,
    pub needupdate: bool,
    pub pkgname: String,
    pub pkgver: String,
    pub pkgrel: String,
    pub pkgdesc: String,
    pub url: String,
    pub last_update: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = packages)]
pub struct NewPackage {
    pub repo_id: i32,
    pub arch_id: i32,
    pub maintainer_id: Option<i32>,
    pub needupdate: bool,
    pub pkgname: String,
    pub pkgver: String,
    pub pkgrel: String,
    pub pkgdesc: String,
    pub url: String,
    pub last_update: Option<NaiveDateTime>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = packages)]
pub struct UpdatePackage {
    pub repo_id: Option<i32>,
    pub maintainer_id: Option<Option<i32>>,
    pub needupdate: Option<bool>,
    pub pkgver: Option<String>,
    pub pkgrel: Option<String>,
    pub pkgdesc: Option<String>,
    pub url: Option<String>,
    pub last_update: Option<NaiveDateTime>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = package_files)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PackageFile {
    pub id: i32,
    pub pkg_id: i32,
    pub path: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = package_files)]
pub struct NewPackageFile {
    pub pkg_id: i32,
    pub path: String,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = package_depends)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PackageDepend {
    pub id: i32,
    pub pkg_id: i32,
    pub depname: String,
    pub depvcmp: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = package_depends)]
pub struct NewPackageDepend {
    pub pkg_id: i32,
    pub depname: String,
    pub depvcmp: String,
}

// Signoff rows snapshot the version they approve
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = signoffs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Signoff {
    pub id: i32,
    pub pkg_id: i32,
    pub pkgver: String,
    pub pkgrel: String,
    pub packager_id: i32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = signoffs)]
pub struct NewSignoff {
    pub pkg_id: i32,
    pub pkgver: String,
    pub pkgrel: String,
    pub packager_id: i32,
}

/// One resolved dependency declaration.
///
/// `package` is `None` for virtual dependencies: nothing installed carries the
/// declared name for this architecture, so it is presumably satisfied by a
/// provides entry or refers to a removed package.
#[derive(Serialize, Debug, Clone)]
pub struct DependRecord {
    pub depend: PackageDepend,
    pub package: Option<Package>,
}

impl DependRecord {
    pub fn is_virtual(&self) -> bool {
        self.package.is_none()
    }
}

/// Architectures a package can depend on or be required by: its own
/// architecture, or any architecture named `any`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchScope {
    pub arch_id: i32,
    pub any_arch_ids: Vec<i32>,
}

impl ArchScope {
    pub fn new(arch_id: i32, arches: &[Arch]) -> Self {
        let any_arch_ids = arches
            .iter()
            .filter(|arch| arch.name.eq_ignore_ascii_case(ANY_ARCH))
            .map(|arch| arch.id)
            .collect();
        Self {
            arch_id,
            any_arch_ids,
        }
    }

    pub fn admits(&self, arch_id: i32) -> bool {
        arch_id == self.arch_id || self.any_arch_ids.contains(&arch_id)
    }

    /// Ids for an `IN (...)` filter
    pub fn arch_ids(&self) -> Vec<i32> {
        let mut ids = Vec::with_capacity(self.any_arch_ids.len() + 1);
        ids.push(self.arch_id);
        ids.extend(self.any_arch_ids.iter().copied().filter(|id| *id != self.arch_id));
        ids
    }
}

/// One row of the flagged-package report
#[derive(Serialize, Debug, Clone)]
pub struct MaintainerFlagStats {
    pub maintainer: Option<User>,
    pub display_name: String,
    pub total: i64,
    pub flagged: i64,
}

impl MaintainerFlagStats {
    pub fn orphans(total: i64, flagged: i64) -> Self {
        Self {
            maintainer: None,
            display_name: ORPHAN_LABEL.to_string(),
            total,
            flagged,
        }
    }

    pub fn for_user(user: User, total: i64, flagged: i64) -> Self {
        Self {
            display_name: user.first_name.clone(),
            maintainer: Some(user),
            total,
            flagged,
        }
    }

    pub fn is_orphan_row(&self) -> bool {
        self.maintainer.is_none()
    }
}

// Combined view backing the package detail page
#[derive(Serialize, Debug)]
pub struct PackageDetail {
    pub package: Package,
    pub repo: Repo,
    pub arch: Arch,
    pub maintainer: Option<User>,
    pub url: String,
    pub files: Vec<PackageFile>,
    pub depends: Vec<DependRecord>,
    pub required_by: Vec<Package>,
    pub signoffs: Vec<Signoff>,
    pub approved: bool,
}

#[derive(Deserialize, Debug)]
pub struct SignoffRequest {
    pub packager_id: i32,
}

impl NewArch {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl NewRepo {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl NewPackage {
    pub fn new(repo_id: i32, arch_id: i32, pkgname: &str, pkgver: &str, pkgrel: &str) -> Self {
        Self {
            repo_id,
            arch_id,
            maintainer_id: None,
            needupdate: false,
            pkgname: pkgname.to_string(),
            pkgver: pkgver.to_string(),
            pkgrel: pkgrel.to_string(),
            pkgdesc: String::new(),
            url: String::new(),
            last_update: Some(chrono::Utc::now().naive_utc()),
        }
    }

    pub fn with_maintainer(mut self, maintainer_id: i32) -> Self {
        self.maintainer_id = Some(maintainer_id);
        self
    }

    pub fn with_description(mut self, pkgdesc: &str, url: &str) -> Self {
        self.pkgdesc = pkgdesc.to_string();
        self.url = url.to_string();
        self
    }
}

impl NewPackageDepend {
    pub fn new(pkg_id: i32, depname: &str, depvcmp: &str) -> Self {
        Self {
            pkg_id,
            depname: depname.to_string(),
            depvcmp: depvcmp.to_string(),
        }
    }
}

impl NewPackageFile {
    pub fn new(pkg_id: i32, path: &str) -> Self {
        Self {
            pkg_id,
            path: path.to_string(),
        }
    }
}

impl NewSignoff {
    /// Snapshots the package's current version and release
    pub fn for_package(package: &Package, packager_id: i32) -> Self {
        Self {
            pkg_id: package.id,
            pkgver: package.pkgver.clone(),
            pkgrel: package.pkgrel.clone(),
            packager_id,
        }
    }
}

impl Package {
    pub fn is_orphan(&self) -> bool {
        self.maintainer_id.is_none()
    }

    pub fn absolute_url(&self, repo: &Repo, arch: &Arch) -> String {
        package_url(&repo.name, &arch.name, &self.pkgname)
    }
}

pub fn package_url(repo_name: &str, arch_name: &str, pkgname: &str) -> String {
    format!(
        "/packages/{}/{}/{}/",
        repo_name.to_lowercase(),
        arch_name,
        pkgname
    )
}
