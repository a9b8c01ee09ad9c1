//! Query implementations, one module per resource. Every statement filters on
//! `user_id`; ownership is enforced here, not in the handlers.

pub(crate) mod calendar;
pub(crate) mod finance;
pub(crate) mod folders;
pub(crate) mod mood;
pub(crate) mod notes;
pub(crate) mod profile;
pub(crate) mod tasks;
pub(crate) mod widgets;
