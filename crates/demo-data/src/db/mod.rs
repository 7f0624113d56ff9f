//! Database integration for seeding demo data.
//!
//! The [`Seeder`] empties the storefront tables and inserts generated
//! records one at a time, returning the id the database assigned.

mod seeder;

pub use seeder::{SeedError, Seeder, TableCounts};
