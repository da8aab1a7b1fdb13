//! Rotation state machine.

use alloc::vec::Vec;

use crate::{Configuration, ElementSource, InitialMarker, Presenter, Result};

/// Holds a cursor into the captured element sequence and moves the active marker
/// one element forward on every [`advance`](Self::advance) call.
///
/// The element at the cursor is the only one that may carry the active marker.
pub struct RotationController<E, P> {
    elements: Vec<E>,
    cursor: usize,
    presenter: P,
}

impl<E, P> RotationController<E, P>
where
    P: Presenter<E>,
{
    /// Captures the element sequence from the given source and sets the cursor to the
    /// first element.
    pub fn initialize<S>(
        mut source: S,
        presenter: P,
        initial_marker: InitialMarker,
    ) -> Result<Self>
    where
        S: ElementSource<Element = E>,
    {
        let elements = source.query()?;
        log::debug!("Captured {} carousel elements", elements.len());

        let mut controller = Self {
            elements,
            cursor: 0,
            presenter,
        };
        if initial_marker == InitialMarker::Apply {
            if let Some(first) = controller.elements.first() {
                controller.presenter.set_active(first);
            }
        }
        Ok(controller)
    }

    /// Same as [`initialize`](Self::initialize), but takes the marker policy from the
    /// configuration.
    pub fn with_config<S>(source: S, presenter: P, config: &Configuration) -> Result<Self>
    where
        S: ElementSource<Element = E>,
    {
        Self::initialize(source, presenter, config.initial_marker)
    }

    /// Moves the active marker to the next element, if it reaches the last element it
    /// turns back to the first one.
    ///
    /// Returns the new cursor, or `None` if there are no elements to rotate.
    pub fn advance(&mut self) -> Option<usize> {
        let len = self.elements.len();
        if len == 0 {
            log::trace!("Nothing to rotate");
            return None;
        }

        // A single element is cleared and marked again.
        self.presenter.clear_active(&self.elements[self.cursor]);
        let previous = self.cursor;
        self.cursor = (self.cursor + 1) % len;
        self.presenter.set_active(&self.elements[self.cursor]);

        log::debug!("Rotated carousel {} -> {}", previous, self.cursor);
        Some(self.cursor)
    }
}

impl<E, P> RotationController<E, P> {
    /// Returns the index of the active element.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the active element.
    pub fn active(&self) -> Option<&E> {
        self.elements.get(self.cursor)
    }

    /// Returns the captured elements in their presentation order.
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Consumes the controller and returns the captured elements and the presenter.
    pub fn into_parts(self) -> (Vec<E>, P) {
        (self.elements, self.presenter)
    }
}
