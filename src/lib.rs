#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::too_many_arguments)]
#![no_std]

//! A fixed-point Bentley-Ottmann polygon tessellator.
//!
//! Given one or more (possibly self-intersecting, possibly multi-contour)
//! polygons expressed in signed 32-bit fixed-point coordinates, this crate
//! sweeps a horizontal line down through the input and emits the shape as a
//! set of non-overlapping trapezoids, honouring either the even-odd or the
//! non-zero winding fill rule.
//!
//! All of the arithmetic that decides edge order is exact: no floating
//! point, no epsilon, ever. See [`wide`] and [`predicates`] for how.
//!
//! ## Overview
//!
//! * [`geom`] - the fixed-point data model: points, lines, edges, contours.
//! * [`trapezoid::TrapezoidStore`] - the output sink.
//! * [`tessellate_polyarea`] / [`tessellate_contour`] - the entry points.
//!
//! ```
//! use trapezoid_tessellation::geom::{Contour, Point};
//! use trapezoid_tessellation::trapezoid::TrapezoidStore;
//! use trapezoid_tessellation::{tessellate_contour, TessellateOptions};
//!
//! let square = Contour::outer(vec![
//!     Point::new(0, 0),
//!     Point::new(10, 0),
//!     Point::new(10, 10),
//!     Point::new(0, 10),
//! ]);
//!
//! let mut traps = TrapezoidStore::new();
//! tessellate_contour(&square, &TessellateOptions::DEFAULT, &mut traps).unwrap();
//! assert_eq!(traps.len(), 1);
//! ```

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "serialization")]
extern crate serde;

pub mod emitter;
pub mod error;
pub mod event_queue;
pub mod geom;
pub mod predicates;
pub mod sweep;
pub mod sweep_line;
pub mod trapezoid;
mod wide;

#[doc(inline)]
pub use crate::emitter::FillRule;
#[doc(inline)]
pub use crate::error::{InvalidInputReason, TessellationError, TessellationResult};
#[doc(inline)]
pub use crate::geom::{Contour, ContourKind, PolyArea};
#[doc(inline)]
pub use crate::sweep::{tessellate_contour, tessellate_polyarea};
#[doc(inline)]
pub use crate::trapezoid::{Trapezoid, TrapezoidStore};

/// Receives a line of tracing output from the sweep. Disabled by default:
/// [`TessellateOptions::trace`] is `None` and the sweep never formats
/// anything unless a sink is installed, so there is no cost to carrying the
/// hook in release builds. Mirrors the teacher crate's `tess_log!` macro,
/// generalized into an injectable sink rather than a compile-time-gated
/// `eprintln!`, since this crate is `no_std` by default and cannot assume a
/// console exists.
pub trait TraceSink {
    fn trace(&mut self, message: &str);
}

/// A [`TraceSink`] that writes to standard output, for local debugging.
/// Only available with the `std` feature.
#[cfg(feature = "std")]
#[derive(Default)]
pub struct StdoutTrace;

#[cfg(feature = "std")]
impl TraceSink for StdoutTrace {
    fn trace(&mut self, message: &str) {
        std::println!("{message}");
    }
}

/// Tessellation parameters.
///
/// Follows the teacher crate's options-struct idiom: a `pub const DEFAULT`
/// plus `with_*` builder methods, `#[non_exhaustive]` so new fields can be
/// added without a breaking change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct TessellateOptions {
    /// Which winding numbers count as "inside" the shape.
    ///
    /// Default value: `FillRule::EvenOdd`.
    pub fill_rule: FillRule,

    /// Whether to validate the input before tessellating (a non-empty
    /// [`PolyArea`] and every contour having at least three vertices),
    /// returning [`TessellationError::InvalidInput`] instead of producing
    /// an empty or degenerate result.
    ///
    /// Default value: `true`.
    pub validate: bool,
}

impl TessellateOptions {
    pub const DEFAULT_FILL_RULE: FillRule = FillRule::EvenOdd;

    pub const DEFAULT: Self = TessellateOptions {
        fill_rule: Self::DEFAULT_FILL_RULE,
        validate: true,
    };

    #[inline]
    pub fn even_odd() -> Self {
        Self::DEFAULT
    }

    #[inline]
    pub fn non_zero() -> Self {
        Self::DEFAULT.with_fill_rule(FillRule::NonZero)
    }

    #[inline]
    pub const fn with_fill_rule(mut self, rule: FillRule) -> Self {
        self.fill_rule = rule;
        self
    }

    #[inline]
    pub const fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

impl Default for TessellateOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
