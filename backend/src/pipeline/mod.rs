//! The voter batch ingestion pipeline.
//!
//! Pure, UI-free logic shared by every way voters enter the system (manual
//! entry and file upload). The flow is: raw rows from a source adapter are
//! normalized into canonical `CuTri` records, validated field by field,
//! checked for duplicate emails, and collected into a validation report plus
//! the subset of records fit for submission.
//!
//! Nothing in this module performs IO or touches the HTTP layer; the
//! `services` modules own all of that.

pub mod batch;
pub mod dedupe;
pub mod normalize;
pub mod validate;
pub mod validators;

pub use batch::BatchBuilder;
pub use validate::{validate_batch, BatchValidation};
