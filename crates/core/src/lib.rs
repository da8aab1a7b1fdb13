//! Carousel core
//!
//! A rotation state machine that cycles the "active" marker over a fixed sequence of
//! display elements, one element forward per tick, wrapping around at the end.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
// Linter configuration
#![warn(unsafe_code, clippy::pedantic, clippy::use_self)]
// Too many false positives.
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::missing_const_for_fn
)]

extern crate alloc;

use alloc::vec::Vec;

pub use crate::{
    config::{Configuration, InitialMarker},
    errors::{Error, Result},
    rotation::RotationController,
    time::{Hertz, Milliseconds},
};

pub mod config;
pub mod errors;
pub mod rotation;
pub mod time;

#[cfg(any(feature = "std", test))]
pub mod test_utils;

/// Default period between two ticks.
pub const DEFAULT_INTERVAL: Milliseconds = Milliseconds(1500);

/// Provides the ordered sequence of display elements.
///
/// The source is queried exactly once, when the [`RotationController`] is initialized.
pub trait ElementSource {
    /// Display element type.
    type Element;
    /// Returns all display elements in their presentation order.
    fn query(&mut self) -> Result<Vec<Self::Element>>;
}

/// A vector is a ready captured sequence, querying it takes the elements out.
impl<E> ElementSource for Vec<E> {
    type Element = E;

    fn query(&mut self) -> Result<Vec<E>> {
        Ok(core::mem::take(self))
    }
}

impl<S: ?Sized + ElementSource> ElementSource for &mut S {
    type Element = S::Element;

    fn query(&mut self) -> Result<Vec<Self::Element>> {
        S::query(self)
    }
}

impl<E: Clone> ElementSource for &[E] {
    type Element = E;

    fn query(&mut self) -> Result<Vec<E>> {
        Ok(self.to_vec())
    }
}

/// Presentation layer capability to toggle the active marker of an element.
pub trait Presenter<E> {
    /// Marks the given element as the active one.
    fn set_active(&mut self, element: &E);
    /// Removes the active marker from the given element.
    fn clear_active(&mut self, element: &E);
}

impl<E, P: ?Sized + Presenter<E>> Presenter<E> for &mut P {
    fn set_active(&mut self, element: &E) {
        P::set_active(self, element);
    }

    fn clear_active(&mut self, element: &E) {
        P::clear_active(self, element);
    }
}
