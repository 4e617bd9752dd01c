//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The only stateful entity in the client is the session; everything else a
//! page shows is fetched on demand through `net`. The session lives in a
//! single [`session::SessionStore`] created by the application root and
//! provided via context, so components read one source of truth and mutation
//! stays behind its narrow operations.

pub mod session;
