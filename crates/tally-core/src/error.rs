//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                          │
//! │  ├── CheckoutError    - Catalog/order level failures                    │
//! │  └── ValidationError  - Single-field validation failures                │
//! │                                                                         │
//! │  Flow: ValidationError → CheckoutError → caller (rendered by the app)   │
//! │                                                                         │
//! │  Note: a customer failing a restriction is NOT an error. That is the    │
//! │  designed rejection path and lands on the report, never in a Result.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item label, field name)
//! 3. Errors are enum variants, never String
//! 4. Validation is opt-in: the engine itself never returns these

use thiserror::Error;

// =============================================================================
// Checkout Error
// =============================================================================

/// Catalog and order level errors from the opt-in validation pass.
///
/// The checkout engine never raises these; they come from callers who
/// choose to validate a catalog before ringing it up.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// An item in the catalog failed a field check.
    #[error("Invalid item '{label}': {source}")]
    InvalidItem {
        label: String,
        #[source]
        source: ValidationError,
    },

    /// Order has exceeded maximum allowed items.
    #[error("Order cannot have more than {max} items")]
    OrderTooLarge { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when item data doesn't meet requirements.
/// Used for early validation before a checkout pass runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Unit Tests
// =============================================================================
