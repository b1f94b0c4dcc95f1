//! API surface consumed by the frontend server fns.

pub mod pages;
pub mod search;
