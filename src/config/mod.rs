//! Process-wide default settings and per-call overrides
//!
//! [`CryptonConfig`] holds the defaults an application configures once.
//! Every operation may pass a partial override ([`CipherOptions`] or
//! [`HashOptions`]); the resolver merges it over the defaults field by field
//! for that call only.

mod settings;
mod resolve;

pub use settings::{CryptonConfig, CipherSettings, HashSettings, CipherOptions, HashOptions};
pub use resolve::{resolve_cipher_settings, resolve_hash_settings, select_config_value, Unset};
