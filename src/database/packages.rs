use super::connection::{DbPool, checkout};
use crate::models::package::*;
use crate::models::user::User;
use crate::schema::{arches, package_depends, package_files, packages, repos, signoffs, users};
use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};
use log::debug;

/// Package catalog operations: arches, repos, packages and their
/// files, dependency declarations and sign-offs
pub struct PackageOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> PackageOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Creates an architecture; a duplicate name is a UniqueViolation
    pub fn create_arch(&self, name: &str) -> QueryResult<Arch> {
        let mut conn = checkout(self.pool)?;

        diesel::insert_into(arches::table)
            .values(&NewArch::new(name))
            .get_result::<Arch>(&mut conn)
    }

    pub fn list_arches(&self) -> QueryResult<Vec<Arch>> {
        let mut conn = checkout(self.pool)?;

        arches::table
            .order(arches::name.asc())
            .load::<Arch>(&mut conn)
    }

    pub fn get_arch_by_name(&self, name: &str) -> QueryResult<Option<Arch>> {
        let mut conn = checkout(self.pool)?;

        arches::table
            .filter(arches::name.eq(name))
            .first::<Arch>(&mut conn)
            .optional()
    }

    /// Creates a repository; a duplicate name is a UniqueViolation
    pub fn create_repo(&self, name: &str) -> QueryResult<Repo> {
        let mut conn = checkout(self.pool)?;

        diesel::insert_into(repos::table)
            .values(&NewRepo::new(name))
            .get_result::<Repo>(&mut conn)
    }

    pub fn list_repos(&self) -> QueryResult<Vec<Repo>> {
        let mut conn = checkout(self.pool)?;

        repos::table.order(repos::name.asc()).load::<Repo>(&mut conn)
    }

    pub fn get_repo_by_name(&self, name: &str) -> QueryResult<Option<Repo>> {
        let mut conn = checkout(self.pool)?;

        repos::table
            .filter(repos::name.eq(name))
            .first::<Repo>(&mut conn)
            .optional()
    }

    pub fn create_package(&self, new_package: &NewPackage) -> QueryResult<Package> {
        let mut conn = checkout(self.pool)?;

        let package = diesel::insert_into(packages::table)
            .values(new_package)
            .get_result::<Package>(&mut conn)?;

        debug!(
            "Created package {} {}-{} (id {})",
            package.pkgname, package.pkgver, package.pkgrel, package.id
        );
        Ok(package)
    }

    pub fn get_package(&self, package_id: i32) -> QueryResult<Option<Package>> {
        let mut conn = checkout(self.pool)?;

        packages::table
            .find(package_id)
            .first::<Package>(&mut conn)
            .optional()
    }

    /// Looks a package up by the components of its URL. The repo part is
    /// matched case-insensitively since URLs carry it lowercased.
    pub fn get_package_by_path(
        &self,
        repo_name: &str,
        arch_name: &str,
        pkgname: &str,
    ) -> QueryResult<Option<Package>> {
        let mut conn = checkout(self.pool)?;

        let repo_ids: Vec<i32> = repos::table
            .load::<Repo>(&mut conn)?
            .into_iter()
            .filter(|repo| repo.name.eq_ignore_ascii_case(repo_name))
            .map(|repo| repo.id)
            .collect();

        packages::table
            .inner_join(arches::table)
            .filter(packages::repo_id.eq_any(repo_ids))
            .filter(arches::name.eq(arch_name))
            .filter(packages::pkgname.eq(pkgname))
            .order(packages::id.asc())
            .select(Package::as_select())
            .first::<Package>(&mut conn)
            .optional()
    }

    /// Applies a changeset. Bumping pkgver or pkgrel leaves existing
    /// sign-offs in place but they stop counting toward approval.
    pub fn update_package(&self, package_id: i32, changes: &UpdatePackage) -> QueryResult<Package> {
        let mut conn = checkout(self.pool)?;

        diesel::update(packages::table.find(package_id))
            .set(changes)
            .get_result::<Package>(&mut conn)
    }

    pub fn set_needupdate(&self, package_id: i32, needupdate: bool) -> QueryResult<Package> {
        let mut conn = checkout(self.pool)?;

        diesel::update(packages::table.find(package_id))
            .set(packages::needupdate.eq(needupdate))
            .get_result::<Package>(&mut conn)
    }

    pub fn delete_package(&self, package_id: i32) -> QueryResult<usize> {
        let mut conn = checkout(self.pool)?;

        diesel::delete(packages::table.find(package_id)).execute(&mut conn)
    }

    pub fn add_package_file(&self, package_id: i32, path: &str) -> QueryResult<PackageFile> {
        let mut conn = checkout(self.pool)?;

        diesel::insert_into(package_files::table)
            .values(&NewPackageFile::new(package_id, path))
            .get_result::<PackageFile>(&mut conn)
    }

    pub fn get_package_files(&self, package_id: i32) -> QueryResult<Vec<PackageFile>> {
        let mut conn = checkout(self.pool)?;

        package_files::table
            .filter(package_files::pkg_id.eq(package_id))
            .order((package_files::path.asc(), package_files::id.asc()))
            .load::<PackageFile>(&mut conn)
    }

    pub fn add_package_depend(
        &self,
        package_id: i32,
        depname: &str,
        depvcmp: &str,
    ) -> QueryResult<PackageDepend> {
        let mut conn = checkout(self.pool)?;

        diesel::insert_into(package_depends::table)
            .values(&NewPackageDepend::new(package_id, depname, depvcmp))
            .get_result::<PackageDepend>(&mut conn)
    }

    pub fn get_package_depends(&self, package_id: i32) -> QueryResult<Vec<PackageDepend>> {
        let mut conn = checkout(self.pool)?;
        load_depends(&mut conn, package_id)
    }

    /// Resolves each dependency declaration against installed packages of
    /// the same architecture or `any`.
    ///
    /// Declarations come back in depname order. A declaration matching
    /// several packages yields one record per match; one matching nothing
    /// yields a single record without a package.
    pub fn get_depends(&self, package: &Package) -> QueryResult<Vec<DependRecord>> {
        let mut conn = checkout(self.pool)?;
        let scope = arch_scope(&mut conn, package.arch_id)?;

        let depends = load_depends(&mut conn, package.id)?;
        let mut records = Vec::with_capacity(depends.len());

        for depend in depends {
            let candidates = packages::table
                .filter(packages::pkgname.eq(&depend.depname))
                .filter(packages::arch_id.eq_any(scope.arch_ids()))
                .order(packages::id.asc())
                .load::<Package>(&mut conn)?;

            if candidates.is_empty() {
                debug!(
                    "{}: no installed package provides '{}', treating as virtual",
                    package.pkgname, depend.depname
                );
                records.push(DependRecord {
                    depend,
                    package: None,
                });
                continue;
            }

            for candidate in candidates {
                records.push(DependRecord {
                    depend: depend.clone(),
                    package: Some(candidate),
                });
            }
        }

        Ok(records)
    }

    /// Packages declaring a dependency on this package's name, restricted to
    /// its architecture or `any`, sorted by name. One entry per declaration.
    pub fn get_requiredby(&self, package: &Package) -> QueryResult<Vec<Package>> {
        let mut conn = checkout(self.pool)?;
        let scope = arch_scope(&mut conn, package.arch_id)?;

        let mut dependents = package_depends::table
            .inner_join(packages::table)
            .filter(package_depends::depname.eq(&package.pkgname))
            .filter(packages::arch_id.eq_any(scope.arch_ids()))
            .select(Package::as_select())
            .load::<Package>(&mut conn)?;

        dependents.sort_by(|a, b| a.pkgname.cmp(&b.pkgname).then(a.id.cmp(&b.id)));
        Ok(dependents)
    }

    /// Records a sign-off against the package's current version and release
    pub fn add_signoff(&self, package: &Package, packager_id: i32) -> QueryResult<Signoff> {
        let mut conn = checkout(self.pool)?;

        diesel::insert_into(signoffs::table)
            .values(&NewSignoff::for_package(package, packager_id))
            .get_result::<Signoff>(&mut conn)
    }

    /// Sign-offs for the package's current version and release only
    pub fn get_signoffs(&self, package: &Package) -> QueryResult<Vec<Signoff>> {
        let mut conn = checkout(self.pool)?;

        signoffs::table
            .filter(signoffs::pkg_id.eq(package.id))
            .filter(signoffs::pkgver.eq(&package.pkgver))
            .filter(signoffs::pkgrel.eq(&package.pkgrel))
            .order(signoffs::id.asc())
            .load::<Signoff>(&mut conn)
    }

    // Duplicate sign-offs from one packager are counted, not collapsed
    pub fn approved_for_signoff(&self, package: &Package) -> QueryResult<bool> {
        let mut conn = checkout(self.pool)?;

        let count: i64 = signoffs::table
            .filter(signoffs::pkg_id.eq(package.id))
            .filter(signoffs::pkgver.eq(&package.pkgver))
            .filter(signoffs::pkgrel.eq(&package.pkgrel))
            .count()
            .get_result(&mut conn)?;

        Ok(count >= SIGNOFF_THRESHOLD)
    }

    /// Per-maintainer package counts: orphans first, then every user by
    /// first name. The flagged count skips packages in the testing repo.
    pub fn get_flag_stats(&self) -> QueryResult<Vec<MaintainerFlagStats>> {
        let mut conn = checkout(self.pool)?;

        let testing_repo_ids: Vec<i32> = repos::table
            .load::<Repo>(&mut conn)?
            .into_iter()
            .filter(|repo| repo.name.eq_ignore_ascii_case(TESTING_REPO))
            .map(|repo| repo.id)
            .collect();

        let mut results = Vec::new();

        let (total, flagged) = maintainer_counts(&mut conn, None, &testing_repo_ids)?;
        results.push(MaintainerFlagStats::orphans(total, flagged));

        let maintainers = users::table
            .order((users::first_name.asc(), users::id.asc()))
            .load::<User>(&mut conn)?;

        for maintainer in maintainers {
            let (total, flagged) =
                maintainer_counts(&mut conn, Some(maintainer.id), &testing_repo_ids)?;
            results.push(MaintainerFlagStats::for_user(maintainer, total, flagged));
        }

        Ok(results)
    }

    /// Everything the package detail page shows, or None when no package
    /// lives at that path
    pub fn get_package_detail(
        &self,
        repo_name: &str,
        arch_name: &str,
        pkgname: &str,
    ) -> QueryResult<Option<PackageDetail>> {
        let package = match self.get_package_by_path(repo_name, arch_name, pkgname)? {
            Some(package) => package,
            None => return Ok(None),
        };

        let (repo, arch, maintainer) = {
            let mut conn = checkout(self.pool)?;
            let repo = repos::table.find(package.repo_id).first::<Repo>(&mut conn)?;
            let arch = arches::table.find(package.arch_id).first::<Arch>(&mut conn)?;
            let maintainer = match package.maintainer_id {
                Some(id) => Some(users::table.find(id).first::<User>(&mut conn)?),
                None => None,
            };
            (repo, arch, maintainer)
        };

        let files = self.get_package_files(package.id)?;
        let depends = self.get_depends(&package)?;
        let required_by = self.get_requiredby(&package)?;
        let signoffs = self.get_signoffs(&package)?;
        let approved = signoffs.len() as i64 >= SIGNOFF_THRESHOLD;
        let url = package.absolute_url(&repo, &arch);

        Ok(Some(PackageDetail {
            package,
            repo,
            arch,
            maintainer,
            url,
            files,
            depends,
            required_by,
            signoffs,
            approved,
        }))
    }
}

fn load_depends(conn: &mut SqliteConnection, package_id: i32) -> QueryResult<Vec<PackageDepend>> {
    package_depends::table
        .filter(package_depends::pkg_id.eq(package_id))
        .order((package_depends::depname.asc(), package_depends::id.asc()))
        .load::<PackageDepend>(conn)
}

fn arch_scope(conn: &mut SqliteConnection, arch_id: i32) -> QueryResult<ArchScope> {
    let all_arches = arches::table.load::<Arch>(conn)?;
    Ok(ArchScope::new(arch_id, &all_arches))
}

fn maintainer_counts(
    conn: &mut SqliteConnection,
    maintainer_id: Option<i32>,
    testing_repo_ids: &[i32],
) -> QueryResult<(i64, i64)> {
    let mut total_query: packages::BoxedQuery<'_, Sqlite> = packages::table.into_boxed();
    let mut flagged_query: packages::BoxedQuery<'_, Sqlite> = packages::table
        .filter(packages::needupdate.eq(true))
        .filter(packages::repo_id.ne_all(testing_repo_ids.to_vec()))
        .into_boxed();

    match maintainer_id {
        Some(id) => {
            total_query = total_query.filter(packages::maintainer_id.eq(id));
            flagged_query = flagged_query.filter(packages::maintainer_id.eq(id));
        }
        None => {
            total_query = total_query.filter(packages::maintainer_id.is_null());
            flagged_query = flagged_query.filter(packages::maintainer_id.is_null());
        }
    }

    let total: i64 = total_query.count().get_result(conn)?;
    let flagged: i64 = flagged_query.count().get_result(conn)?;
    Ok((total, flagged))
}
