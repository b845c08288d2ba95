//! Error handling, following the error/Display/`std::error::Error` gating
//! pattern the teacher crate uses: plain enums, `Display` and
//! `std::error::Error` impls gated behind `feature = "std"`, `no_std`
//! builds get the enum and its `Debug`/`PartialEq` but no `Display`.

/// The tessellator's result type.
pub type TessellationResult = Result<(), TessellationError>;

/// An error produced while tessellating a polygon.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TessellationError {
    /// The [`crate::trapezoid::TrapezoidStore`] could not grow to hold another
    /// trapezoid. Only returned by a sink with a caller-imposed capacity
    /// limit; the default store is unbounded and never produces this.
    NoMemory,
    /// A wide-integer computation overflowed its 32-bit result range. This
    /// indicates the input coordinates exceeded what fixed-point arithmetic
    /// at this scale can represent exactly, not a bug in the sweep itself.
    Overflow,
    /// `validate: true` was requested and the input failed validation:
    /// an empty [`crate::geom::PolyArea`], or a contour with fewer than
    /// three vertices.
    InvalidInput(InvalidInputReason),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InvalidInputReason {
    EmptyPolyArea,
    DegenerateContour,
}

#[cfg(feature = "std")]
impl core::fmt::Display for TessellationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TessellationError::NoMemory => std::write!(f, "out of memory"),
            TessellationError::Overflow => {
                std::write!(f, "wide-integer arithmetic overflowed")
            }
            TessellationError::InvalidInput(InvalidInputReason::EmptyPolyArea) => {
                std::write!(f, "poly area has no contours")
            }
            TessellationError::InvalidInput(InvalidInputReason::DegenerateContour) => {
                std::write!(f, "contour has fewer than three vertices")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TessellationError {}
