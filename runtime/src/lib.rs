//! # vault-runtime
//!
//! Async side of the Love Vault: sessions that dispatch achievement
//! notifications, the ledgers that store them, configuration and tracing setup.

pub mod config;
pub mod ledger;
pub mod session;
pub mod telemetry;

pub mod prelude {
    pub use crate::config::VaultConfig;
    pub use crate::ledger::{FileLedger, MemoryLedger};
    pub use crate::session::VaultSession;
    pub use crate::telemetry::init_stderr_tracing;
}

pub use config::{RejectedOverride, VaultConfig};
pub use ledger::{FileLedger, LedgerDocument, MemoryLedger};
pub use session::VaultSession;
