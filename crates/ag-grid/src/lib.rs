//! Grid controller for the paginated catalog view
//!
//! Sits between the rendering collaborator (which emits page-change,
//! selection-change and select-all events and displays whatever the
//! snapshot says) and the data/selection layers. All grid state lives here;
//! the widget is expected to be stateless.

mod controller;

pub use controller::{GridController, GridSnapshot};
