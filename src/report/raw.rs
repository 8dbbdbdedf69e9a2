// check-env: Environment Configuration Checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wire shape of the environment report.
//!
//! ```text
//! { "data": {                              OrderedMap<RawTab>
//!     "<tab>": { "services": {             OrderedMap<RawService>
//!       "<service>": { "modules": {        OrderedMap<RawModule>
//!         "<module>": {
//!           "all_keys": { "<KEY>": any },  OrderedMap<IgnoredAny>
//!           "envs" | "Envs": {
//!             "dev" | "staging" | "production": {
//!               "key" | "Key": { "<KEY>": "value" }
//! } } } } } } } }
//! ```
//!
//! Every naming variant the server has produced is folded here, so the
//! transform only ever sees one canonical shape. A module or environment
//! carrying both spellings is merged, with `Envs` and `Key` taking
//! precedence. Object order is kept as
//! it appears in the document.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use super::view::Environment;

/// Top-level report document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReport {
    /// Tabs keyed by an open-ended identifier (`ai`, `backend`, ...).
    pub data: OrderedMap<RawTab>,
}

impl RawReport {
    /// Decode a report from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not JSON or `data` is missing or not an object.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Decode a report from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not JSON or `data` is missing or not an object.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTab {
    #[serde(default)]
    pub services: Option<OrderedMap<RawService>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawService {
    #[serde(default)]
    pub modules: Option<OrderedMap<RawModule>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "ModuleFields")]
pub struct RawModule {
    /// Declared key set; values carry no meaning.
    pub all_keys: Option<OrderedMap<IgnoredAny>>,
    pub envs: Option<RawEnvs>,
}

/// Both spellings as they may appear side by side in one module object.
#[derive(Deserialize)]
struct ModuleFields {
    #[serde(default)]
    all_keys: Option<OrderedMap<IgnoredAny>>,
    #[serde(default)]
    envs: Option<RawEnvs>,
    #[serde(default, rename = "Envs")]
    envs_capitalized: Option<RawEnvs>,
}

impl From<ModuleFields> for RawModule {
    fn from(fields: ModuleFields) -> Self {
        Self {
            all_keys: fields.all_keys,
            envs: overlay(fields.envs, fields.envs_capitalized, RawEnvs::overlay),
        }
    }
}

impl RawModule {
    /// Value of `key` under `env`, if that environment lists it.
    #[must_use]
    pub fn value(&self, env: Environment, key: &str) -> Option<&str> {
        self.envs
            .as_ref()?
            .get(env)?
            .key
            .as_ref()?
            .get(key)
            .map(EnvValue::as_str)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEnvs {
    #[serde(default)]
    pub dev: Option<RawEnv>,
    #[serde(default)]
    pub staging: Option<RawEnv>,
    #[serde(default)]
    pub production: Option<RawEnv>,
}

impl RawEnvs {
    #[must_use]
    pub const fn get(&self, env: Environment) -> Option<&RawEnv> {
        match env {
            Environment::Dev => self.dev.as_ref(),
            Environment::Staging => self.staging.as_ref(),
            Environment::Production => self.production.as_ref(),
        }
    }

    fn overlay(lower: Self, upper: Self) -> Self {
        Self {
            dev: overlay(lower.dev, upper.dev, RawEnv::overlay),
            staging: overlay(lower.staging, upper.staging, RawEnv::overlay),
            production: overlay(lower.production, upper.production, RawEnv::overlay),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "EnvFields")]
pub struct RawEnv {
    pub key: Option<HashMap<String, EnvValue>>,
}

#[derive(Deserialize)]
struct EnvFields {
    #[serde(default)]
    key: Option<HashMap<String, EnvValue>>,
    #[serde(default, rename = "Key")]
    key_capitalized: Option<HashMap<String, EnvValue>>,
}

impl From<EnvFields> for RawEnv {
    fn from(fields: EnvFields) -> Self {
        Self {
            key: overlay(fields.key, fields.key_capitalized, merge_keys),
        }
    }
}

impl RawEnv {
    fn overlay(lower: Self, upper: Self) -> Self {
        Self {
            key: overlay(lower.key, upper.key, merge_keys),
        }
    }
}

fn merge_keys(
    mut lower: HashMap<String, EnvValue>,
    upper: HashMap<String, EnvValue>,
) -> HashMap<String, EnvValue> {
    lower.extend(upper);
    lower
}

/// Folds the lowercase and capitalized spellings of one field.
///
/// When both are present they are merged and the capitalized side wins on
/// every environment or key they share.
fn overlay<T>(lower: Option<T>, upper: Option<T>, merge: impl FnOnce(T, T) -> T) -> Option<T> {
    match (lower, upper) {
        (Some(lower), Some(upper)) => Some(merge(lower, upper)),
        (lower, upper) => upper.or(lower),
    }
}

/// A configured value as reported by the server.
///
/// `null` decodes to the empty string (configured but blank). Numbers and
/// booleans keep their JSON text, so `0` and `false` show up as `"0"` and
/// `"false"` rather than being folded into an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnvValue(String);

impl EnvValue {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for EnvValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EnvValueVisitor;

        impl Visitor<'_> for EnvValueVisitor {
            type Value = EnvValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, number, boolean or null")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(EnvValue(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(EnvValue(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(EnvValue(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(EnvValue(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(EnvValue(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(EnvValue(v.to_string()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(EnvValue(String::new()))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(EnvValue(String::new()))
            }
        }

        deserializer.deserialize_any(EnvValueVisitor)
    }
}

/// String-keyed map that keeps document order.
///
/// A key repeated within one object keeps its first position and takes the
/// last value, matching how JavaScript objects behave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut entries: Vec<(String, V)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for (key, value) in iter {
            if let Some(&pos) = index.get(&key) {
                entries[pos].1 = value;
            } else {
                index.insert(key.clone(), entries.len());
                entries.push((key, value));
            }
        }
        Self(entries)
    }
}

impl<'de, V> Deserialize<'de> for OrderedMap<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V> Visitor<'de> for OrderedMapVisitor<V>
        where
            V: Deserialize<'de>,
        {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(entries.into_iter().collect())
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}
