// src/auth/mod.rs

pub mod store;

pub use store::{LoginOutcome, SignupOutcome, StoreError, UserStore};
