//! Error types for the DMX pixel mapper

use core::fmt;

/// Initialization status of the mapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DmxError {
    /// Wrong input parameters provided (no pixels, or fewer than 4 channels per light)
    BadInput,
    /// Failed to allocate the pixel buffer
    AllocationFailure,
}

impl fmt::Display for DmxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DmxError::BadInput => write!(f, "Bad DMX parameters"),
            DmxError::AllocationFailure => write!(f, "Failed to allocate pixel buffer"),
        }
    }
}

impl core::error::Error for DmxError {}
