/// No contact routine exists for a pair of shape types.
///
/// Returned by the contact dispatcher. The narrow-phase skips such pairs and counts them.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("no contact routine handles this pair of shape types")]
pub struct Unsupported;
