//! Visibility observation for scrollable documents rendered with [`iced`].
//!
//! The crate is split into two layers:
//! - geometry helpers ([`visible_ratio`], [`overlaps`], [`center_distance`])
//!   that work on plain [`iced::Rectangle`] values;
//! - a stateful [`VisibilityObserver`] that tracks a set of targets and
//!   reports threshold crossings as [`IntersectionEntry`] batches.
//!
//! The observer never measures widgets itself. Callers register target
//! bounds in document coordinates and feed it the scroll viewport whenever
//! it moves:
//! 1. register targets with [`VisibilityObserver::observe`];
//! 2. call [`VisibilityObserver::start`] when the view mounts;
//! 3. pass every viewport change to [`VisibilityObserver::observe_viewport`]
//!    and react to the returned entries;
//! 4. call [`VisibilityObserver::stop`] when the view goes away.
//!
//! # Quick Example
//!
//! ```
//! use canvas_ui_observer::VisibilityObserver;
//! use iced::Rectangle;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Block {
//!     Top,
//!     Bottom,
//! }
//!
//! fn band(y: f32) -> Rectangle {
//!     Rectangle { x: 0.0, y, width: 800.0, height: 600.0 }
//! }
//!
//! let mut observer = VisibilityObserver::new(0.5);
//! observer.observe(Block::Top, band(0.0));
//! observer.observe(Block::Bottom, band(600.0));
//! observer.start();
//!
//! let viewport = band(500.0);
//! let entries = observer.observe_viewport(viewport);
//!
//! assert_eq!(entries.len(), 2);
//! assert!(!entries[0].is_intersecting);
//! assert!(entries[1].is_intersecting);
//! ```

mod geometry;
mod observer;

pub use geometry::{center_distance, overlaps, visible_ratio};
pub use observer::{IntersectionEntry, VisibilityObserver};
