//! Notes system: a single append-only text file of newline-terminated notes
//!
//! The file usually lives on a mounted volume so it outlives the process.
//! Content is never rewritten; each add appends exactly one line.

pub mod file_ops;
pub mod store;

pub use store::NoteStore;
