use commons::Fallible;
use controller_manager::config::AppSettings;
use controller_manager::leadermigration::config::{
    default_leader_migration_configuration, LeaderMigrationConfiguration,
};
use controller_manager::leadermigration::{FilterResult, LeaderMigrationError, LeaderMigrator};
use pretty_assertions::assert_eq;

static GATE_ON: &str = "--feature-gates=ControllerManagerLeaderMigration=true";
static GATE_OFF: &str = "--feature-gates=ControllerManagerLeaderMigration=false";

fn resolve(args: &[&str]) -> Fallible<AppSettings> {
    let mut argv = vec!["controller-manager"];
    argv.extend_from_slice(args);
    let mut settings = AppSettings::assemble_from_iter(argv)?;
    settings.resolve_leader_migration()?;
    Ok(settings)
}

fn resolve_error(args: &[&str]) -> LeaderMigrationError {
    let err = resolve(args).unwrap_err();
    match err.downcast::<LeaderMigrationError>() {
        Ok(e) => e,
        Err(other) => panic!("unexpected error: {:#}", other),
    }
}

#[test]
fn default_disabled_with_feature_gate_disabled() {
    let _ = commons::testing::init_logger();

    let settings = resolve(&[]).unwrap();
    assert!(!settings.generic.leader_migration_enabled);
    assert_eq!(
        settings.generic.leader_migration,
        LeaderMigrationConfiguration::default()
    );
}

#[test]
fn disabled_ignores_config_file() {
    for gate in &[GATE_ON, GATE_OFF] {
        let settings = resolve(&[
            *gate,
            "--leader-migration-config=tests/fixtures/leader-migration-invalid.yaml",
        ])
        .unwrap();
        assert!(!settings.generic.leader_migration_enabled);
        assert_eq!(
            settings.generic.leader_migration,
            LeaderMigrationConfiguration::default()
        );
    }
}

#[test]
fn enabled_with_feature_gate_disabled() {
    let err = resolve_error(&["--enable-leader-migration"]);
    assert!(matches!(err, LeaderMigrationError::GateDisabled { .. }));

    let err = resolve_error(&[
        "--enable-leader-migration",
        GATE_OFF,
        "--leader-migration-config=tests/fixtures/leader-migration.yaml",
    ]);
    assert!(matches!(err, LeaderMigrationError::GateDisabled { .. }));
}

#[test]
fn enabled_with_default_configuration() {
    let settings = resolve(&["--enable-leader-migration", GATE_ON]).unwrap();
    assert!(settings.generic.leader_migration_enabled);
    assert_eq!(
        settings.generic.leader_migration,
        default_leader_migration_configuration()
    );
}

#[test]
fn enabled_with_custom_configuration_file() {
    let settings = resolve(&[
        "--enable-leader-migration",
        GATE_ON,
        "--leader-migration-config=tests/fixtures/leader-migration.yaml",
    ])
    .unwrap();
    assert!(settings.generic.leader_migration_enabled);

    let cfg = &settings.generic.leader_migration;
    assert_eq!(cfg.leader_name, "test-leader-migration");
    assert_eq!(cfg.resource_lock, "leases");
    assert_eq!(cfg.controller_leaders, Some(vec![]));
}

#[test]
fn enabled_with_missing_or_invalid_file() {
    for path in &[
        "tests/fixtures/does-not-exist.yaml",
        "tests/fixtures/leader-migration-invalid.yaml",
    ] {
        let flag = format!("--leader-migration-config={}", path);
        let err = resolve_error(&["--enable-leader-migration", GATE_ON, flag.as_str()]);
        match err {
            LeaderMigrationError::ConfigLoad { path: p, .. } => {
                assert_eq!(p.to_str(), Some(*path))
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}

#[test]
fn file_settings_with_cli_override() {
    let settings = resolve(&["-c", "tests/fixtures/sample-config.toml"]).unwrap();
    assert_eq!(settings.verbosity, log::LevelFilter::Info);
    assert_eq!(settings.component, "cloud-controller-manager");
    assert!(settings.generic.leader_migration_enabled);
    assert_eq!(settings.generic.leader_migration.resource_lock, "endpoints");

    let migrator = LeaderMigrator::new(&settings.generic.leader_migration, &settings.component);
    assert_eq!(migrator.filter("route"), FilterResult::Unowned);
    assert_eq!(migrator.filter("service"), FilterResult::Migrated);
    assert_eq!(migrator.filter("cloud-node-lifecycle"), FilterResult::Migrated);
    assert_eq!(migrator.filter("node-ipam"), FilterResult::NonMigrated);

    // The command-line turns the gate back off, overriding the file.
    let err = resolve_error(&["-c", "tests/fixtures/sample-config.toml", GATE_OFF]);
    assert!(matches!(err, LeaderMigrationError::GateDisabled { .. }));
}

#[test]
fn resolution_is_idempotent() {
    let args = [
        "--enable-leader-migration",
        GATE_ON,
        "--leader-migration-config=tests/fixtures/leader-migration-ccm.yaml",
    ];
    let first = resolve(&args).unwrap();
    let second = resolve(&args).unwrap();
    assert_eq!(first.generic, second.generic);
}
