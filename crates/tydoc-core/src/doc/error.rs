//! Extraction error definitions

use crate::provider::ProviderError;
use thiserror::Error;

/// Errors that abort an extraction run.
///
/// The pipeline is a one-shot transformation: a failure here means no
/// documentation model was produced at all. Skippable conditions
/// (unclassifiable declarations, nameless symbols, classes without
/// constructors) never surface as errors.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to build typed program: {0}")]
    Provider(#[from] ProviderError),
}
