// reword/src/lib.rs
//! # reword CLI Application
//!
//! Command-line front end for `reword-core`. A JSON document plays the part of the
//! host application: it supplies the elements, persists new names and provides the
//! unit of work a batch runs in.

pub mod cli;
pub mod commands;
pub mod document;
pub mod logger;
pub mod ui;
