//! Carousel application
//!
//! Drives a [`RotationController`] from a recurring tokio timer.

pub use carousel_core as core;
pub use carousel_core::{
    Configuration, ElementSource, Error as CarouselError, InitialMarker, Presenter,
    Result as CarouselResult, RotationController,
};

pub use crate::app::Carousel;

mod app;
