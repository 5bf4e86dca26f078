//! tinyc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the diagnostic infrastructure shared by every phase
//! of the tinyc toolchain. Phases never print problems themselves: they build
//! a [`Diagnostic`] and hand it to a [`Handler`], and the driver decides how
//! and where collected diagnostics are rendered.
//!
//! DIAGNOSTIC FLOW:
//! ----------------
//! ```text
//!   lexer ──DiagnosticBuilder──▶ Handler (collects) ──▶ driver (renders)
//! ```
//!
//! A diagnostic carries a severity [`Level`], a message, the source line it
//! refers to, an optional [`DiagnosticCode`], and any number of notes and
//! help suggestions.
//!
//! # Example
//!
//! ```
//! use tinyc_util::{DiagnosticBuilder, DiagnosticCode, Handler};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '#'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .line(3)
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
