//! Word Submission Collection Service
//!
//! This library crate defines the core modules that make up the submission service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three loosely coupled subsystems:
//!
//! - **`config`**: Runtime settings (bind address, data directory, capacity
//!   ceiling) together with their command line parsing.
//! - **`intake`**: The HTTP surface. Validates posted submission forms,
//!   enforces the capacity ceiling, and drives the storage port.
//! - **`storage`**: The persistence layer. Renders the fixed record text
//!   format and ships it to a backend (local directory tree, or in-memory
//!   for tests and ephemeral deployments).

pub mod config;
pub mod intake;
pub mod storage;
