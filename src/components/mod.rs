//! Reusable view components for the activity screens.

pub mod activity_form;
pub mod activity_list;
