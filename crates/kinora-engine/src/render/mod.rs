//! Presentation seam.
//!
//! The UI records a [`DrawList`] in canvas coordinates every frame; turning it
//! into pixels is the job of a [`Presenter`] supplied by the embedder. The
//! engine itself only ships [`LogPresenter`], which rasterizes nothing.

mod presenter;

pub use presenter::{LogPresenter, Presenter};
