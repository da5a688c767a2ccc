/*!
 * Validation of user submissions before any remote call is made.
 *
 * - `input`: text presence, length bound and target-language membership
 */

pub mod input;

// Re-export main types
pub use input::{InputValidator, ValidationResult};
