//! # agora-forum
//!
//! The peripheral forum-hosting stub plus sample data and runnable
//! scenarios for the Agora authorization core.
//!
//! The interesting decisions live in `agora-guardian`; this crate holds
//! the collaborators around it: the thin `Forum` model, slug derivation,
//! and the fixture site the demo binary walks through.

pub mod fixtures;
pub mod forum;
pub mod scenarios;
pub mod slug;

pub use forum::Forum;

// ── Tests ─────────────────────────────────────────────────────────────────────
