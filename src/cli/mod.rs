//! Command-line front end over conversion tables.

pub mod commands;
