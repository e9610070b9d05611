//! Merging per-call overrides over the configured defaults

use std::borrow::Cow;

use super::settings::{CipherOptions, CipherSettings, HashOptions, HashSettings};

/// Values that count as "not supplied" when empty
pub trait Unset {
    fn is_unset(&self) -> bool;
}

impl Unset for String {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Unset for Vec<T> {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl Unset for u32 {
    fn is_unset(&self) -> bool {
        false
    }
}

/// Pick the override value, or the default when the override is absent or empty
pub fn select_config_value<T: Unset + Clone>(custom: Option<&T>, default: &T) -> T {
    match custom {
        Some(value) if !value.is_unset() => value.clone(),
        _ => default.clone(),
    }
}

/// Effective cipher settings for one call
///
/// Without an override the defaults are borrowed as they are. The defaults
/// are never modified.
pub fn resolve_cipher_settings<'a>(
    defaults: &'a CipherSettings,
    options: Option<&CipherOptions>,
) -> Cow<'a, CipherSettings> {
    let Some(options) = options else {
        return Cow::Borrowed(defaults);
    };

    Cow::Owned(CipherSettings {
        secret_key: select_config_value(options.secret_key.as_ref(), &defaults.secret_key),
        algorithm: select_config_value(options.algorithm.as_ref(), &defaults.algorithm),
        input_encoding: select_config_value(options.input_encoding.as_ref(), &defaults.input_encoding),
        output_encoding: select_config_value(options.output_encoding.as_ref(), &defaults.output_encoding),
    })
}

/// Effective hash settings for one call
pub fn resolve_hash_settings(defaults: &HashSettings, options: Option<&HashOptions>) -> HashSettings {
    let Some(options) = options else {
        return *defaults;
    };

    HashSettings {
        salt_rounds: select_config_value(options.salt_rounds.as_ref(), &defaults.salt_rounds),
    }
}
