// Copyright 2018 Alex Crawford
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Startup configuration for a controller-manager process.
//!
//! The centerpiece is leader migration option resolution: turning the
//! `--enable-leader-migration` flag, an optional migration config file and
//! the state of the `ControllerManagerLeaderMigration` feature gate into a
//! single validated [`LeaderMigrationConfiguration`], written into the
//! process' [`GenericControllerManagerConfiguration`].
//!
//! [`LeaderMigrationConfiguration`]: leadermigration::config::LeaderMigrationConfiguration
//! [`GenericControllerManagerConfiguration`]: config::GenericControllerManagerConfiguration

#[macro_use]
extern crate commons;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate smart_default;
#[macro_use]
extern crate structopt;

pub mod config;
pub mod features;
pub mod leadermigration;
