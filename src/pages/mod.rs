//! Top-level screens admitted by the route authority.

pub mod activities;
pub mod activity_detail;
pub mod login;
