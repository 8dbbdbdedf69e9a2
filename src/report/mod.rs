// check-env: Environment Configuration Checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment report model and transform.
//!
//! ```text
//! raw (serde, alias-tolerant) --transform()--> view (Tab/Service/Variable)
//!                                                  |
//!                                   filter_tabs() --+--> render_text()
//!                                                   +--> render_json()
//! ```

pub mod raw;
pub mod render;
pub mod transform;
pub mod view;

#[cfg(test)]
mod tests;

pub use raw::RawReport;
pub use transform::transform;
pub use view::{Environment, Filter, Service, Tab, Variable, filter_tabs};
