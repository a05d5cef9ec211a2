//! The scroll-offset signal and its subscription plumbing.

pub mod scroll;
