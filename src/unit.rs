//! The `Unit` type - a value that carries no information.
//!
//! `Unit` is the success type of results whose only interesting property is
//! *whether* they succeeded, for example the outcome of a validation step or
//! of a side-effecting action. It is the library's counterpart of `()`, with
//! a name that reads well inside signatures such as `Result<Unit, LogicError>`.
//!
//! # Examples
//!
//! ```rust
//! use bogoware_monads::Unit;
//!
//! assert_eq!(Unit::INSTANCE, Unit);
//! assert_eq!(Unit.to_string(), "Unit");
//! assert_eq!(Unit::from(()), Unit);
//! ```

use std::fmt;

/// A stateless marker for "no meaningful value".
///
/// Every `Unit` is equal to every other `Unit`. The type is zero-sized, so
/// `Result<Unit, E>` costs no more than the error it may carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl Unit {
    /// The canonical `Unit` value.
    pub const INSTANCE: Self = Self;
}

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Unit")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}

static_assertions::assert_eq_size!(Unit, ());

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unit_is_always_equal_to_itself() {
        assert_eq!(Unit, Unit::INSTANCE);
        assert_eq!(Unit::default(), Unit);
    }

    #[rstest]
    fn unit_displays_its_name() {
        assert_eq!(format!("{Unit}"), "Unit");
    }

    #[rstest]
    fn unit_converts_from_and_to_the_empty_tuple() {
        let unit: Unit = ().into();
        let empty: () = unit.into();
        assert_eq!(unit, Unit);
        assert_eq!(empty, ());
    }
}
