//! Resource quantity validation.

use admit_types::resources::SCALE;
use admit_types::{ResourceList, Scalar};

use crate::domain::error::ValidationError;

/// Rejects fractional GPU requests.
///
/// Scalars are only guaranteed three decimal digits, so the check runs on
/// the fixed-point thousandths. An absent `gpus` entry counts as zero.
///
/// # Errors
///
/// Returns an error if the summed `gpus` scalar has a fractional part.
pub fn validate_gpus(resources: &ResourceList) -> Result<(), ValidationError> {
    let gpus = resources.gpus().unwrap_or_default();
    if !is_whole(gpus) {
        return Err(ValidationError::FractionalGpus { quantity: gpus });
    }
    Ok(())
}

fn is_whole(quantity: Scalar) -> bool {
    quantity.millis() % SCALE == 0
}
