//! Polling loop plumbing: change detection and pushbutton debouncing.

mod changed;
mod debounce;

pub use changed::Changed;
pub use debounce::KeyEdgeDetector;
