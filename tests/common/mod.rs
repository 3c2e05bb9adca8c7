#![allow(dead_code)]

use archweb::DatabaseService;
use archweb::models::*;
use std::sync::atomic::{AtomicU32, Ordering};
use tempfile::TempDir;

static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

/// A migrated database in its own temporary directory
pub struct TestDb {
    pub db: DatabaseService,
    pub database_url: String,
    _temp_dir: TempDir, // Keep alive for cleanup
}

impl TestDb {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let database_url = temp_dir
            .path()
            .join(format!("test_{test_id}.db"))
            .to_string_lossy()
            .to_string();
        let db = DatabaseService::with_pool_size(&database_url, 2)
            .expect("Failed to initialize database");

        Self {
            db,
            database_url,
            _temp_dir: temp_dir,
        }
    }

    pub fn user(&self, username: &str, first_name: &str) -> User {
        self.db
            .create_user(&NewUser::new(
                username,
                first_name,
                "",
                &format!("{username}@example.org"),
            ))
            .expect("Failed to create user")
    }

    pub fn arch(&self, name: &str) -> Arch {
        self.db.create_arch(name).expect("Failed to create arch")
    }

    pub fn repo(&self, name: &str) -> Repo {
        self.db.create_repo(name).expect("Failed to create repo")
    }

    pub fn package(&self, repo: &Repo, arch: &Arch, name: &str) -> Package {
        self.db
            .create_package(&NewPackage::new(repo.id, arch.id, name, "1.0", "1"))
            .expect("Failed to create package")
    }

    pub fn maintained_package(
        &self,
        repo: &Repo,
        arch: &Arch,
        name: &str,
        maintainer: &User,
        needupdate: bool,
    ) -> Package {
        let mut new_package =
            NewPackage::new(repo.id, arch.id, name, "1.0", "1").with_maintainer(maintainer.id);
        new_package.needupdate = needupdate;
        self.db
            .create_package(&new_package)
            .expect("Failed to create package")
    }

    pub fn depend(&self, package: &Package, depname: &str) -> PackageDepend {
        self.db
            .add_package_depend(package.id, depname, "")
            .expect("Failed to add dependency")
    }
}
