mod common;

use archweb::models::*;
use common::TestDb;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

fn is_unique_violation(err: &DieselError) -> bool {
    matches!(
        err,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    )
}

mod catalog {
    use super::*;

    #[test]
    fn test_duplicate_arch_and_repo_names_rejected() {
        let t = TestDb::new();
        t.arch("x86_64");
        t.repo("core");

        let err = t.db.create_arch("x86_64").unwrap_err();
        assert!(is_unique_violation(&err));

        let err = t.db.create_repo("core").unwrap_err();
        assert!(is_unique_violation(&err));

        assert_eq!(t.db.packages().list_arches().unwrap().len(), 1);
    }

    #[test]
    fn test_arches_and_repos_listed_by_name() {
        let t = TestDb::new();
        t.arch("x86_64");
        t.arch("any");
        t.arch("i686");
        t.repo("extra");
        t.repo("core");

        let arches: Vec<String> = t
            .db
            .packages()
            .list_arches()
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(arches, vec!["any", "i686", "x86_64"]);

        let repos: Vec<String> = t
            .db
            .packages()
            .list_repos()
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(repos, vec!["core", "extra"]);
    }

    #[test]
    fn test_package_lookup_by_path_ignores_repo_case() {
        let t = TestDb::new();
        let repo = t.repo("Extra");
        let arch = t.arch("x86_64");
        let package = t.package(&repo, &arch, "gimp");
        assert_eq!(t.db.packages().get_repo_by_name("Extra").unwrap(), Some(repo.clone()));
        assert_eq!(t.db.packages().get_arch_by_name("x86_64").unwrap(), Some(arch.clone()));

        let found = t
            .db
            .packages()
            .get_package_by_path("extra", "x86_64", "gimp")
            .unwrap()
            .expect("package should resolve");
        assert_eq!(found.id, package.id);
        assert_eq!(package.absolute_url(&repo, &arch), "/packages/extra/x86_64/gimp/");

        let missing = t
            .db
            .packages()
            .get_package_by_path("extra", "i686", "gimp")
            .unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_package_files_in_path_order() {
        let t = TestDb::new();
        let repo = t.repo("core");
        let arch = t.arch("x86_64");
        let package = t.package(&repo, &arch, "pacman");

        t.db.add_package_file(package.id, "usr/bin/pacman").unwrap();
        t.db.add_package_file(package.id, "etc/pacman.conf").unwrap();

        let paths: Vec<String> = t
            .db
            .packages()
            .get_package_files(package.id)
            .unwrap()
            .into_iter()
            .map(|f| f.path)
            .collect();
        assert_eq!(paths, vec!["etc/pacman.conf", "usr/bin/pacman"]);
    }

    #[test]
    fn test_deleting_package_cascades() {
        let t = TestDb::new();
        let repo = t.repo("core");
        let arch = t.arch("x86_64");
        let user = t.user("judd", "Judd");
        let package = t.package(&repo, &arch, "pacman");
        t.depend(&package, "glibc");
        t.db.add_package_file(package.id, "usr/bin/pacman").unwrap();
        t.db.add_signoff(&package, user.id).unwrap();

        assert_eq!(t.db.packages().delete_package(package.id).unwrap(), 1);
        assert!(t.db.get_package(package.id).unwrap().is_none());
        assert!(t.db.packages().get_package_depends(package.id).unwrap().is_empty());
        assert!(t.db.packages().get_package_files(package.id).unwrap().is_empty());
    }
}

mod dependencies {
    use super::*;

    #[test]
    fn test_unmatched_dependency_yields_single_virtual_record() {
        let t = TestDb::new();
        let repo = t.repo("extra");
        let x86_64 = t.arch("x86_64");
        let i686 = t.arch("i686");
        let package = t.package(&repo, &x86_64, "firefox");
        // Only an i686 build exists, which does not count for x86_64
        t.package(&repo, &i686, "libxt");
        t.depend(&package, "libxt");
        t.depend(&package, "sh");

        let records = t.db.get_depends(&package).unwrap();

        assert_eq!(records.len(), 2);
        for record in &records {
            assert!(record.is_virtual());
        }
        let libxt: Vec<_> = records
            .iter()
            .filter(|r| r.depend.depname == "libxt")
            .collect();
        assert_eq!(libxt.len(), 1);
    }

    #[test]
    fn test_depends_match_own_arch_and_any() {
        let t = TestDb::new();
        let repo = t.repo("extra");
        let x86_64 = t.arch("x86_64");
        let i686 = t.arch("i686");
        let any = t.arch("any");

        let package = t.package(&repo, &x86_64, "gimp");
        let gtk = t.package(&repo, &x86_64, "gtk2");
        t.package(&repo, &i686, "gtk2");
        let docs = t.package(&repo, &any, "gimp-help");
        t.depend(&package, "gtk2");
        t.depend(&package, "gimp-help");

        let records = t.db.get_depends(&package).unwrap();

        assert_eq!(records.len(), 2);
        for record in &records {
            let dep = record.package.as_ref().expect("dependency should resolve");
            assert!(dep.arch_id == x86_64.id || dep.arch_id == any.id);
        }
        // depname order: gimp-help before gtk2
        assert_eq!(records[0].depend.depname, "gimp-help");
        assert_eq!(records[0].package.as_ref().unwrap().id, docs.id);
        assert_eq!(records[1].package.as_ref().unwrap().id, gtk.id);
    }

    #[test]
    fn test_dependency_with_several_matches_yields_several_records() {
        let t = TestDb::new();
        let core = t.repo("core");
        let testing = t.repo("testing");
        let x86_64 = t.arch("x86_64");

        let package = t.package(&core, &x86_64, "bash");
        t.package(&core, &x86_64, "readline");
        t.package(&testing, &x86_64, "readline");
        t.depend(&package, "readline");
        t.depend(&package, "glibc");

        let records = t.db.get_depends(&package).unwrap();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_virtual());
        assert_eq!(records[0].depend.depname, "glibc");
        assert_eq!(
            records.iter().filter(|r| r.depend.depname == "readline").count(),
            2
        );
    }

    #[test]
    fn test_requiredby_sorted_by_name_and_arch_scoped() {
        let t = TestDb::new();
        let repo = t.repo("core");
        let x86_64 = t.arch("x86_64");
        let i686 = t.arch("i686");
        let any = t.arch("any");

        let glibc = t.package(&repo, &x86_64, "glibc");
        let zlib = t.package(&repo, &x86_64, "zlib");
        let bash = t.package(&repo, &x86_64, "bash");
        let scripts = t.package(&repo, &any, "ca-certificates");
        let other_arch = t.package(&repo, &i686, "coreutils");
        for dependent in [&zlib, &bash, &scripts, &other_arch] {
            t.depend(dependent, "glibc");
        }

        let required_by = t.db.get_requiredby(&glibc).unwrap();
        let names: Vec<&str> = required_by.iter().map(|p| p.pkgname.as_str()).collect();

        assert_eq!(names, vec!["bash", "ca-certificates", "zlib"]);
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_requiredby_empty_when_nothing_depends() {
        let t = TestDb::new();
        let repo = t.repo("core");
        let arch = t.arch("x86_64");
        let package = t.package(&repo, &arch, "leaf");

        assert!(t.db.get_requiredby(&package).unwrap().is_empty());
    }

    #[test]
    fn test_requiredby_keeps_repeated_declarations() {
        let t = TestDb::new();
        let repo = t.repo("core");
        let arch = t.arch("x86_64");
        let glibc = t.package(&repo, &arch, "glibc");
        let bash = t.package(&repo, &arch, "bash");
        t.depend(&bash, "glibc");
        t.depend(&bash, "glibc");

        assert_eq!(t.db.get_requiredby(&glibc).unwrap().len(), 2);
    }
}

mod signoffs {
    use super::*;

    #[test]
    fn test_approval_needs_two_current_signoffs() {
        let t = TestDb::new();
        let repo = t.repo("testing");
        let arch = t.arch("x86_64");
        let aaron = t.user("aaron", "Aaron");
        let dan = t.user("dan", "Dan");
        let package = t.package(&repo, &arch, "kernel26");

        assert!(!t.db.approved_for_signoff(&package).unwrap());
        t.db.add_signoff(&package, aaron.id).unwrap();
        assert!(!t.db.approved_for_signoff(&package).unwrap());
        t.db.add_signoff(&package, dan.id).unwrap();
        assert!(t.db.approved_for_signoff(&package).unwrap());
        assert_eq!(t.db.get_signoffs(&package).unwrap().len(), 2);
    }

    #[test]
    fn test_version_bump_makes_signoffs_stale() {
        let t = TestDb::new();
        let repo = t.repo("testing");
        let arch = t.arch("x86_64");
        let aaron = t.user("aaron", "Aaron");
        let dan = t.user("dan", "Dan");
        let package = t.package(&repo, &arch, "kernel26");
        t.db.add_signoff(&package, aaron.id).unwrap();
        t.db.add_signoff(&package, dan.id).unwrap();

        let bumped = t
            .db
            .update_package(
                package.id,
                &UpdatePackage {
                    pkgver: Some("1.1".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(t.db.get_signoffs(&bumped).unwrap().is_empty());
        assert!(!t.db.approved_for_signoff(&bumped).unwrap());
        // Old rows still exist and count for the old version
        assert_eq!(t.db.get_signoffs(&package).unwrap().len(), 2);
    }

    #[test]
    fn test_release_bump_makes_signoffs_stale() {
        let t = TestDb::new();
        let repo = t.repo("testing");
        let arch = t.arch("x86_64");
        let aaron = t.user("aaron", "Aaron");
        let package = t.package(&repo, &arch, "udev");
        t.db.add_signoff(&package, aaron.id).unwrap();

        let bumped = t
            .db
            .update_package(
                package.id,
                &UpdatePackage {
                    pkgrel: Some("2".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(t.db.get_signoffs(&bumped).unwrap().is_empty());
    }

    #[test]
    fn test_repeat_signoff_by_same_packager_counts_twice() {
        let t = TestDb::new();
        let repo = t.repo("testing");
        let arch = t.arch("x86_64");
        let aaron = t.user("aaron", "Aaron");
        let package = t.package(&repo, &arch, "kernel26");

        t.db.add_signoff(&package, aaron.id).unwrap();
        t.db.add_signoff(&package, aaron.id).unwrap();

        assert!(t.db.approved_for_signoff(&package).unwrap());
    }
}

mod flag_stats {
    use super::*;

    #[test]
    fn test_orphan_row_always_first() {
        let t = TestDb::new();
        let repo = t.repo("core");
        let arch = t.arch("x86_64");
        // Sorts before "Orphans" alphabetically
        let aaron = t.user("aaron", "Aaron");
        let zed = t.user("zed", "Zed");
        t.package(&repo, &arch, "orphaned");
        t.maintained_package(&repo, &arch, "pacman", &aaron, true);

        let stats = t.db.get_flag_stats().unwrap();

        assert_eq!(stats.len(), 3);
        assert!(stats[0].is_orphan_row());
        assert_eq!(stats[0].display_name, "Orphans");
        assert_eq!(stats[0].total, 1);
        assert_eq!(stats[1].maintainer.as_ref().unwrap().id, aaron.id);
        assert_eq!((stats[1].total, stats[1].flagged), (1, 1));
        // Users without packages still get a row
        assert_eq!(stats[2].maintainer.as_ref().unwrap().id, zed.id);
        assert_eq!((stats[2].total, stats[2].flagged), (0, 0));
    }

    #[test]
    fn test_testing_repo_excluded_from_flagged_count_only() {
        let t = TestDb::new();
        let core = t.repo("core");
        let testing = t.repo("Testing");
        let arch = t.arch("x86_64");
        let dan = t.user("dan", "Dan");

        t.maintained_package(&core, &arch, "glibc", &dan, true);
        t.maintained_package(&testing, &arch, "glibc-next", &dan, true);
        t.maintained_package(&core, &arch, "bash", &dan, false);

        let stats = t.db.get_flag_stats().unwrap();
        let row = stats
            .iter()
            .find(|row| row.maintainer.as_ref().map(|u| u.id) == Some(dan.id))
            .expect("maintainer row");

        assert_eq!(row.total, 3);
        assert_eq!(row.flagged, 1);
    }

    #[test]
    fn test_maintainers_ordered_by_first_name() {
        let t = TestDb::new();
        t.user("tpowa", "Tobias");
        t.user("andyrtr", "Andreas");
        t.user("jgc", "Jan");

        let names: Vec<String> = t
            .db
            .get_flag_stats()
            .unwrap()
            .into_iter()
            .skip(1)
            .map(|row| row.display_name)
            .collect();
        assert_eq!(names, vec!["Andreas", "Jan", "Tobias"]);
    }

    #[test]
    fn test_flagging_updates_report() {
        let t = TestDb::new();
        let repo = t.repo("extra");
        let arch = t.arch("x86_64");
        let package = t.package(&repo, &arch, "orphaned");

        t.db.packages().set_needupdate(package.id, true).unwrap();

        let stats = t.db.get_flag_stats().unwrap();
        assert_eq!((stats[0].total, stats[0].flagged), (1, 1));
    }
}

mod todolists {
    use super::*;

    #[test]
    fn test_duplicate_todolist_entry_rejected() {
        let t = TestDb::new();
        let repo = t.repo("core");
        let arch = t.arch("x86_64");
        let creator = t.user("aaron", "Aaron");
        let package = t.package(&repo, &arch, "perl");
        let list = t
            .db
            .create_todolist(creator.id, "perl rebuild", "Rebuild for perl 5.10", &[])
            .unwrap();

        t.db.add_todolist_package(list.id, package.id).unwrap();
        let err = t.db.add_todolist_package(list.id, package.id).unwrap_err();

        assert!(is_unique_violation(&err));
    }

    #[test]
    fn test_create_with_duplicate_packages_writes_nothing() {
        let t = TestDb::new();
        let repo = t.repo("core");
        let arch = t.arch("x86_64");
        let creator = t.user("aaron", "Aaron");
        let package = t.package(&repo, &arch, "perl");

        let err = t
            .db
            .create_todolist(creator.id, "broken", "", &[package.id, package.id])
            .unwrap_err();

        assert!(is_unique_violation(&err));
        assert!(t.db.todolists().get_todolist(1).unwrap().is_none());
    }

    #[test]
    fn test_incomplete_report_tracks_completion() {
        let t = TestDb::new();
        let repo = t.repo("extra");
        let arch = t.arch("x86_64");
        let creator = t.user("aaron", "Aaron");
        let first = t.package(&repo, &arch, "gtk2");
        let second = t.package(&repo, &arch, "gimp");
        let list = t
            .db
            .create_todolist(creator.id, "gtk rebuild", "", &[first.id])
            .unwrap();

        assert_eq!(t.db.get_incomplete_todolists().unwrap(), vec![list.clone()]);

        t.db
            .set_todolist_package_complete(list.id, first.id, true)
            .unwrap();
        assert!(t.db.get_incomplete_todolists().unwrap().is_empty());

        t.db.add_todolist_package(list.id, second.id).unwrap();
        assert_eq!(t.db.get_incomplete_todolists().unwrap(), vec![list]);
    }

    #[test]
    fn test_incomplete_report_excludes_empty_lists_and_orders_newest_first() {
        use archweb::schema::todolists;
        use chrono::NaiveDate;
        use diesel::prelude::*;

        let t = TestDb::new();
        let repo = t.repo("extra");
        let arch = t.arch("x86_64");
        let creator = t.user("aaron", "Aaron");
        let package = t.package(&repo, &arch, "python");

        t.db.create_todolist(creator.id, "empty", "", &[]).unwrap();
        let older = t
            .db
            .create_todolist(creator.id, "older", "", &[package.id])
            .unwrap();
        let newer = t
            .db
            .create_todolist(creator.id, "newer", "", &[package.id])
            .unwrap();

        // Created last, so it has the highest id, but dated years earlier
        let mut conn = t.db.get_connection().unwrap();
        let backdated = diesel::insert_into(todolists::table)
            .values(&NewTodolist {
                creator_id: creator.id,
                name: "backdated".to_string(),
                description: String::new(),
                date_added: NaiveDate::from_ymd_opt(2008, 1, 15).unwrap(),
            })
            .get_result::<Todolist>(&mut conn)
            .unwrap();
        drop(conn);
        t.db.add_todolist_package(backdated.id, package.id).unwrap();

        let ids: Vec<i32> = t
            .db
            .get_incomplete_todolists()
            .unwrap()
            .into_iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(ids, vec![newer.id, older.id, backdated.id]);
    }

    #[test]
    fn test_package_names_deduplicated_across_arches() {
        let t = TestDb::new();
        let repo = t.repo("core");
        let x86_64 = t.arch("x86_64");
        let i686 = t.arch("i686");
        let creator = t.user("aaron", "Aaron");
        let ids: Vec<i32> = vec![
            t.package(&repo, &x86_64, "openssl").id,
            t.package(&repo, &i686, "openssl").id,
            t.package(&repo, &x86_64, "curl").id,
        ];
        let list = t
            .db
            .create_todolist(creator.id, "openssl", "", &ids)
            .unwrap();

        let detail = t
            .db
            .get_todolist_with_packages(list.id)
            .unwrap()
            .expect("todolist exists");

        assert_eq!(detail.packages.len(), 3);
        let entry_ids: Vec<i32> = detail.packages.iter().map(|e| e.package.id).collect();
        assert_eq!(entry_ids, ids);
        assert_eq!(detail.package_names, "curl\nopenssl");
        assert_eq!(
            t.db.todolists().get_package_names(list.id).unwrap(),
            detail.package_names
        );
    }

    #[test]
    fn test_remove_package_from_list() {
        let t = TestDb::new();
        let repo = t.repo("core");
        let arch = t.arch("x86_64");
        let creator = t.user("aaron", "Aaron");
        let package = t.package(&repo, &arch, "perl");
        let list = t
            .db
            .create_todolist(creator.id, "perl", "", &[package.id])
            .unwrap();

        assert_eq!(t.db.todolists().remove_package(list.id, package.id).unwrap(), 1);
        assert!(t.db.todolists().get_packages(list.id).unwrap().is_empty());
    }
}

mod accounts {
    use super::*;

    #[test]
    fn test_profile_requires_alias_and_public_email() {
        let t = TestDb::new();
        let user = t.user("aaron", "Aaron");

        let err = t
            .db
            .create_profile(&NewUserProfile::new(user.id, "", "aaron@example.org"))
            .unwrap_err();
        assert!(matches!(
            err,
            DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _)
        ));
        assert!(t.db.get_profile_for_user(user.id).unwrap().is_none());
    }

    #[test]
    fn test_one_profile_per_user() {
        let t = TestDb::new();
        let user = t.user("aaron", "Aaron");
        let profile = NewUserProfile::new(user.id, "Aaron", "aaron@example.org");

        let created = t.db.create_profile(&profile).unwrap();
        assert!(created.notify);
        assert_eq!(created.picture, DEFAULT_PICTURE);

        let err = t.db.create_profile(&profile).unwrap_err();
        assert!(is_unique_violation(&err));
    }

    #[test]
    fn test_user_lookup_and_listing() {
        let t = TestDb::new();
        t.user("tpowa", "Tobias");
        let andreas = t.user("andyrtr", "Andreas");

        let found = t.db.get_user_by_username("andyrtr").unwrap().unwrap();
        assert_eq!(found, andreas);
        assert!(t.db.get_user_by_username("nobody").unwrap().is_none());

        let names: Vec<String> = t
            .db
            .list_users()
            .unwrap()
            .into_iter()
            .map(|u| u.first_name)
            .collect();
        assert_eq!(names, vec!["Andreas", "Tobias"]);
    }

    #[test]
    fn test_profile_update() {
        let t = TestDb::new();
        let user = t.user("aaron", "Aaron");
        t.db
            .create_profile(&NewUserProfile::new(user.id, "Aaron", "aaron@example.org"))
            .unwrap();

        let updated = t
            .db
            .update_profile(
                user.id,
                &UpdateUserProfile {
                    notify: Some(false),
                    location: Some(Some("Victoria, BC".to_string())),
                    yob: Some(Some(1980)),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(!updated.notify);
        assert_eq!(updated.location.as_deref(), Some("Victoria, BC"));
        assert_eq!(updated.yob, Some(1980));

        let cleared = t
            .db
            .update_profile(
                user.id,
                &UpdateUserProfile {
                    location: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(cleared.location, None);
        assert_eq!(cleared.yob, Some(1980));
        assert!(!cleared.notify);

        let blanked = UpdateUserProfile {
            public_email: Some(String::new()),
            ..Default::default()
        };
        assert!(t.db.update_profile(user.id, &blanked).is_err());
    }

    #[test]
    fn test_deleting_maintainer_orphans_packages() {
        use archweb::schema::users;
        use diesel::prelude::*;

        let t = TestDb::new();
        let repo = t.repo("core");
        let arch = t.arch("x86_64");
        let user = t.user("retired", "Retired");
        let package = t.maintained_package(&repo, &arch, "abs", &user, false);

        let mut conn = t.db.get_connection().unwrap();
        diesel::delete(users::table.find(user.id))
            .execute(&mut conn)
            .unwrap();

        let package = t.db.get_package(package.id).unwrap().unwrap();
        assert!(package.is_orphan());
    }
}

mod content {
    use super::*;

    #[test]
    fn test_news_newest_first() {
        let t = TestDb::new();
        let author = t.user("aaron", "Aaron");
        let first = t.db.create_news(&NewNews::new(author.id, "First", "...")).unwrap();
        let second = t.db.create_news(&NewNews::new(author.id, "Second", "...")).unwrap();

        let ids: Vec<i32> = t
            .db
            .list_news(None)
            .unwrap()
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec![second.id, first.id]);
        assert_eq!(t.db.latest_news().unwrap().unwrap().id, second.id);
    }

    #[test]
    fn test_news_edit_keeps_postdate() {
        let t = TestDb::new();
        let author = t.user("aaron", "Aaron");
        let item = t.db.create_news(&NewNews::new(author.id, "Draft", "...")).unwrap();

        let edited = t
            .db
            .update_news(
                item.id,
                &UpdateNews {
                    title: Some("Final".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(edited.title, "Final");
        assert_eq!(edited.postdate, item.postdate);
    }

    #[test]
    fn test_wiki_page_edit_tracks_last_author() {
        let t = TestDb::new();
        let aaron = t.user("aaron", "Aaron");
        let dan = t.user("dan", "Dan");
        let page = t
            .db
            .create_wikipage(&NewWikipage::new("Main_Page", "Welcome", aaron.id))
            .unwrap();

        let edited = t.db.update_wikipage(page.id, "Welcome!", dan.id).unwrap();
        assert_eq!(edited.last_author_id, dan.id);

        let found = t.db.get_wikipage_by_title("Main_Page").unwrap().unwrap();
        assert_eq!(found.content, "Welcome!");
        assert_eq!(found.edit_url(), "/wiki/edit/Main_Page/");
    }

    #[test]
    fn test_directory_listings_sorted() {
        let t = TestDb::new();
        t.db
            .create_mirror(&NewMirror::new("mirrors.kernel.org", "USA", "http://mirrors.kernel.org/archlinux"))
            .unwrap();
        t.db
            .create_mirror(&NewMirror::new("ftp.archlinux.org", "USA", "ftp://ftp.archlinux.org"))
            .unwrap();
        t.db.create_donor(&NewDonor { name: "Zane".to_string() }).unwrap();
        t.db.create_donor(&NewDonor { name: "Alice".to_string() }).unwrap();

        let mirrors: Vec<String> = t
            .db
            .list_mirrors()
            .unwrap()
            .iter()
            .map(|m| m.to_string())
            .collect();
        assert_eq!(mirrors, vec!["ftp.archlinux.org", "mirrors.kernel.org"]);

        let donors: Vec<String> = t
            .db
            .list_donors()
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(donors, vec!["Alice", "Zane"]);

        t.db
            .create_press(&NewPress {
                name: "Linux Weekly News".to_string(),
                url: "https://lwn.net".to_string(),
            })
            .unwrap();
        t.db
            .create_alt_forum(&NewAltForum {
                language: "German".to_string(),
                url: "https://bbs.archlinux.de".to_string(),
                name: "archlinux.de".to_string(),
            })
            .unwrap();
        assert_eq!(t.db.list_press().unwrap()[0].to_string(), "Linux Weekly News");
        assert_eq!(t.db.list_alt_forums().unwrap()[0].language, "German");

        let mirror_id = t.db.list_mirrors().unwrap()[0].id;
        assert_eq!(t.db.delete_mirror(mirror_id).unwrap(), 1);
        assert_eq!(t.db.list_mirrors().unwrap().len(), 1);
    }
}
