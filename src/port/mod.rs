//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams adapters plug into. The only driven dependency this
//! service has is record storage.
//!
//! ```text
//!     ┌──────────────┐      ┌──────────────┐      ┌──────────────┐
//!     │ HTTP Adapter │ ───▶ │ Application  │ ───▶ │ Store Port   │
//!     └──────────────┘      └──────────────┘      └──────┬───────┘
//!                                                        ▼
//!                                                 ┌──────────────┐
//!                                                 │SQLite Adapter│
//!                                                 └──────────────┘
//! ```

pub mod outbound;
