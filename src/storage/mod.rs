//! Storage module for configuration and the flat-file record stores.

pub mod codec;
pub mod config;
pub mod error;
pub mod record_store;

pub use codec::{Record, RecordCodec};
pub use config::{AppConfig, ConfigError, MemberSettings, StorageSettings};
pub use error::{CodecError, RecordKind, StoreError};
pub use record_store::{LoadStatus, RecordStore};
