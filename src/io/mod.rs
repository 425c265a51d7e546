//! 2D drawing exporters for a computed [`GearLayout`](crate::layout::GearLayout).
//!
//! Both formats carry the same entities: the housing circle, the closed
//! profile outline, one circle per fastener hole (clearance diameter) and the
//! shaft and bearing bores. Nothing is extruded.

#[cfg(feature = "svg-io")]
pub mod svg;

#[cfg(feature = "dxf-io")]
pub mod dxf;

/// Generic I/O and format‑conversion errors.
///
/// Many I/O features are behind cargo feature‑flags.
/// When a feature is disabled the corresponding variant is *not*
/// constructed in user code.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    #[cfg(feature = "dxf-io")]
    /// Error bubbled up from the `dxf` crate while writing a drawing.
    Dxf(String),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),

            #[cfg(feature = "dxf-io")]
            Dxf(msg) => write!(f, "DXF error: {msg}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}
