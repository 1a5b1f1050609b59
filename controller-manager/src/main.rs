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

#[macro_use]
extern crate log;

use commons::prelude_errors::*;
use controller_manager::config::AppSettings;
use controller_manager::leadermigration::{self, FilterResult, LeaderMigrator};

fn main() -> Result<(), Error> {
    let mut settings = AppSettings::assemble()?;
    env_logger::Builder::from_default_env()
        .filter(Some(module_path!()), settings.verbosity)
        .filter(Some("controller_manager"), settings.verbosity)
        .init();
    info!("application settings:\n{:#?}", &settings);

    settings
        .resolve_leader_migration()
        .context("failed to resolve leader migration options")?;

    if leadermigration::enabled(&settings.generic) {
        let migrator = LeaderMigrator::new(&settings.generic.leader_migration, &settings.component);
        for name in migrator.migrated_controllers() {
            if settings.generic.is_controller_enabled(name) {
                info!(
                    "controller '{}' runs under migration lock '{}'",
                    name,
                    migrator.leader_name()
                );
            }
        }
        for leader in settings.generic.leader_migration.controller_leaders() {
            if migrator.filter(&leader.name) == FilterResult::Unowned {
                debug!(
                    "controller '{}' is owned by component '{}', skipping",
                    leader.name, leader.component
                );
            }
        }
    }

    println!("{:#?}", settings.generic);
    Ok(())
}
