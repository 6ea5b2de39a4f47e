//! Per-user activity: applications, saved listings and notifications.

pub mod handlers;
