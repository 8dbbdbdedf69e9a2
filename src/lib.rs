// check-env: Environment Configuration Checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                      main.rs
//!                         |
//!              +----------+----------+
//!              v                     v
//!           cli (clap)          cmd (handlers)
//!                            show / options / sources
//!              +----------+----------+
//!                         v
//!              ,---------------------,
//!              |        config       |
//!              |  TOML, env, flags   |
//!              '----------+----------'
//!                         |
//!              +----------+----------+
//!              v                     v
//!             net                 report
//!          Fetcher            raw -> transform
//!         (reqwest)           -> view -> render
//!
//!   +-----------------------------------------+
//!   |  foundation        error, logging       |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod net;
pub mod report;
