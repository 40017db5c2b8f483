//! Purpose: Client-side roster library backing a student-roster front end.
//! Exports: `api` (store + endpoint client), `core` (records, errors), `notice`.
//! Role: In-memory view-state model over one remote JSON collection resource.
//! Invariants: The remote collection is the sole arbiter of truth; the local
//! Invariants: roster is a snapshot as of the last successful list call.
pub mod api;
pub mod core;
pub mod notice;
