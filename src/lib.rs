//! Editor profiles - configuration model for rich-text editor toolbars.
//!
//! This library exposes the core of the `edprof` CLI: the toolbar item
//! catalog, the profile document model, the validator for hand-edited
//! documents, the builder transform used by visual editors, and the
//! site/profile association rules.
//!
//! # Modules
//!
//! - `catalog`: Toolbar item definitions
//! - `config`: Profile documents, templates and file loading
//! - `validate`: Validation of raw profile JSON
//! - `builder`: Builder items and the editing session
//! - `sites`: Site model and profile assignment
//! - `error`: Error types with user-recoverable hints
//! - `output`: Output mode abstraction (robot/human)
#![forbid(unsafe_code)]

pub mod builder;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod sites;
pub mod theme;
pub mod validate;
