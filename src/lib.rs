//! In-memory record keeping for two independent domains:
//!
//! - a [library catalog](library), with books, authors and search;
//! - a [university roster](university), with people, courses and groups.
//!
//! Everything a user needs is in the [`prelude`], import it with `records_rs::prelude! {}`.

#![forbid(unsafe_code)]

#[macro_use]
pub mod prelude;

pub mod ids;
pub mod library;
pub mod traits;
pub mod university;
