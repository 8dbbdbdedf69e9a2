// check-env: Environment Configuration Checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Raw report to view model.
//!
//! ```text
//! RawReport.data ──for each tab──> services ──for each service──>
//!   modules ──all_keys──> register key (all envs None)
//!           ──envs.<env>.key──> set value (last module wins)
//!   drop empty services, drop empty tabs
//! ```

use std::collections::HashMap;

use super::raw::{RawModule, RawReport, RawService};
use super::view::{Environment, Service, Tab, Variable};

/// Reshape a raw report into display-ready tabs.
///
/// Document order is preserved for tabs, services and first-seen keys.
/// Services without variables and tabs without services are omitted.
#[must_use]
pub fn transform(raw: RawReport) -> Vec<Tab> {
    raw.data
        .into_iter()
        .filter_map(|(tab_key, tab)| {
            let services: Vec<Service> = tab
                .services
                .unwrap_or_default()
                .into_iter()
                .filter_map(|(service_id, service)| build_service(service_id, &service))
                .collect();

            (!services.is_empty()).then(|| Tab {
                name: tab_display_name(&tab_key),
                id: tab_key,
                services,
            })
        })
        .collect()
}

fn build_service(id: String, service: &RawService) -> Option<Service> {
    let mut variables = VariableSet::default();
    if let Some(modules) = &service.modules {
        for (_, module) in modules.iter() {
            variables.merge_module(module);
        }
    }

    let variables = variables.into_vec();
    (!variables.is_empty()).then(|| Service {
        name: service_display_name(&id),
        id,
        variables,
    })
}

/// Variables of one service in first-registration order.
#[derive(Default)]
struct VariableSet {
    variables: Vec<Variable>,
    index: HashMap<String, usize>,
}

impl VariableSet {
    fn merge_module(&mut self, module: &RawModule) {
        let Some(all_keys) = &module.all_keys else {
            return;
        };

        for key in all_keys.keys() {
            let variable = self.entry(key);
            for env in Environment::ALL {
                if let Some(value) = module.value(env, key) {
                    variable.set(env, value);
                }
            }
        }
    }

    fn entry(&mut self, key: &str) -> &mut Variable {
        let pos = match self.index.get(key) {
            Some(&pos) => pos,
            None => {
                let pos = self.variables.len();
                self.index.insert(key.to_string(), pos);
                self.variables.push(Variable::new(key));
                pos
            }
        };
        &mut self.variables[pos]
    }

    fn into_vec(self) -> Vec<Variable> {
        self.variables
    }
}

/// Tab label: first character uppercased, remainder untouched.
#[must_use]
pub fn tab_display_name(id: &str) -> String {
    capitalize(id)
}

/// Service label: hyphen-separated words, each capitalized, joined by spaces.
#[must_use]
pub fn service_display_name(id: &str) -> String {
    id.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
