//! Database module providing organized access to all database operations
//!
//! - `connection`: pool creation, pragmas, embedded migrations
//! - `packages`: arches, repos, packages, dependency resolution, sign-offs,
//!   the flagged-package report
//! - `todolists`: todolists, their entries and the incomplete report
//! - `accounts`, `site`, `content`: users and profiles, directory listings,
//!   news and wiki, implemented directly on `DatabaseService`
//! - `service`: the `DatabaseService` facade

pub mod accounts;
pub mod connection;
pub mod content;
pub mod packages;
pub mod service;
pub mod site;
pub mod todolists;

pub use connection::{DbConnection, DbPool, MIGRATIONS};
pub use service::DatabaseService;

pub use packages::PackageOperations;
pub use todolists::TodolistOperations;
