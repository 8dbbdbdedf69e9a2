// check-env: Environment Configuration Checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display-ready view model.
//!
//! ```text
//! Tab { id, name }
//!  └─ Service { id, name }
//!      └─ Variable { key, dev, staging, production }
//!                         None      = not configured
//!                         Some("")  = configured, empty
//!                         Some("x") = configured
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deployment stage whose values are compared side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Staging,
    Production,
}

impl Environment {
    /// All environments, in column order.
    pub const ALL: [Self; 3] = [Self::Dev, Self::Staging, Self::Production];

    /// Identifier used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// Human-readable column label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dev => "Development",
            Self::Staging => "Staging",
            Self::Production => "Production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configuration key and its value in each environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub key: String,
    pub dev: Option<String>,
    pub staging: Option<String>,
    pub production: Option<String>,
}

impl Variable {
    /// A variable that is known but configured nowhere.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            dev: None,
            staging: None,
            production: None,
        }
    }

    #[must_use]
    pub fn value(&self, env: Environment) -> Option<&str> {
        match env {
            Environment::Dev => self.dev.as_deref(),
            Environment::Staging => self.staging.as_deref(),
            Environment::Production => self.production.as_deref(),
        }
    }

    pub fn set(&mut self, env: Environment, value: impl Into<String>) {
        let slot = match env {
            Environment::Dev => &mut self.dev,
            Environment::Staging => &mut self.staging,
            Environment::Production => &mut self.production,
        };
        *slot = Some(value.into());
    }

    /// True when every environment holds a non-empty value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Environment::ALL
            .into_iter()
            .all(|env| self.value(env).is_some_and(|v| !v.is_empty()))
    }
}

/// A deployable unit and the variables it declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub variables: Vec<Variable>,
}

impl Service {
    /// Number of variables missing or empty in at least one environment.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.variables.iter().filter(|v| !v.is_complete()).count()
    }
}

/// Top-level grouping of services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub name: String,
    pub services: Vec<Service>,
}

/// Selection applied to transformed tabs before display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Tab ids to keep; empty keeps all.
    pub tabs: Vec<String>,
    /// Service ids to keep; empty keeps all.
    pub services: Vec<String>,
    /// Keep only variables that are not complete.
    pub missing_only: bool,
}

impl Filter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty() && self.services.is_empty() && !self.missing_only
    }
}

/// Apply `filter` to `tabs`, dropping services and tabs left empty.
#[must_use]
pub fn filter_tabs(tabs: Vec<Tab>, filter: &Filter) -> Vec<Tab> {
    if filter.is_empty() {
        return tabs;
    }

    tabs.into_iter()
        .filter(|tab| filter.tabs.is_empty() || filter.tabs.contains(&tab.id))
        .filter_map(|mut tab| {
            tab.services = tab
                .services
                .into_iter()
                .filter(|service| {
                    filter.services.is_empty() || filter.services.contains(&service.id)
                })
                .filter_map(|mut service| {
                    if filter.missing_only {
                        service.variables.retain(|v| !v.is_complete());
                    }
                    (!service.variables.is_empty()).then_some(service)
                })
                .collect();
            (!tab.services.is_empty()).then_some(tab)
        })
        .collect()
}
