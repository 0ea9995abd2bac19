//! Atelier Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Atelier
//! PHP-project scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          atelier-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │        Orchestrates the Use Case        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Driven: Filesystem, CommandRunner)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    atelier-adapters (Infrastructure)    │
//! │  (LocalFilesystem, SystemRunner, etc.)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ScaffoldRequest, Namespace, Manifest) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use atelier_core::{
//!     application::{ScaffoldService, Toolchain},
//!     domain::ScaffoldRequest,
//! };
//!
//! // 1. Describe the project to scaffold
//! let request = ScaffoldRequest::new("blog", None).unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, runner, Toolchain::default());
//! service.scaffold(&request, std::path::Path::new(".")).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService, Toolchain,
        ports::{CommandOutput, CommandRunner, Filesystem},
    };
    pub use crate::domain::{Namespace, ScaffoldRequest};
    pub use crate::error::{AtelierError, AtelierResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
