//! # API crate — remote user store and auth flows for Ultimate Social Suite
//!
//! This crate is the data layer shared by every frontend. There is no
//! application server of our own: the hosted table service *is* the backend,
//! and every operation here is a direct HTTPS call against one user table.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`store`] | [`UserStore`] trait, the HTTP-backed [`AirtableStore`], an in-memory test double, and the shared [`StoreError`] type |
//! | [`models`] | Wire-format user records ([`UserRecord`]) and their display projection ([`UserProfile`]) |
//! | [`auth`] | Email/password login and sign-up built on any [`UserStore`] |
//! | [`dashboard`] | Dashboard load flow: session marker → profile, plus the deferred last-login patch |

pub mod auth;
pub mod dashboard;
pub mod models;
pub mod store;

pub use models::{Attachment, SubscriptionPlan, UserFields, UserProfile, UserRecord};
pub use store::{AirtableStore, MemoryStore, StoreError, TableConfig, UserStore};
