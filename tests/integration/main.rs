//! Integration tests for hostinfo

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn hostinfo() -> Command {
        let mut cmd = cargo_bin_cmd!("hostinfo");
        cmd.env_remove("HOSTINFO_HOST")
            .env_remove("HOSTINFO_STORE_DIR")
            .env_remove("HOSTINFO_CONFIG");
        cmd
    }

    /// Command bound to an isolated config file and store directory
    fn hostinfo_in(temp: &TempDir) -> Command {
        let mut cmd = hostinfo();
        cmd.arg("--config")
            .arg(temp.path().join("config.toml"))
            .arg("--store-dir")
            .arg(temp.path().join("hosts"));
        cmd
    }

    fn read_host_file(temp: &TempDir, host: &str) -> serde_json::Value {
        let path = temp.path().join("hosts").join(format!("{}.json", host));
        let content = std::fs::read_to_string(&path).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    #[test]
    fn help_displays() {
        hostinfo()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("host labels and attributes"));
    }

    #[test]
    fn version_displays() {
        hostinfo()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("hostinfo"));
    }

    #[test]
    fn show_requires_host() {
        let temp = TempDir::new().unwrap();
        hostinfo_in(&temp)
            .arg("show")
            .assert()
            .failure()
            .stderr(predicate::str::contains("No host given"));
    }

    #[test]
    fn show_missing_host_fails_with_hint() {
        let temp = TempDir::new().unwrap();
        hostinfo_in(&temp)
            .args(["--host", "host1", "show"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load host info"))
            .stderr(predicate::str::contains("Hint:"));
    }

    #[test]
    fn create_writes_versioned_json() {
        let temp = TempDir::new().unwrap();
        hostinfo_in(&temp)
            .args([
                "--host",
                "host1",
                "create",
                "--label",
                "board:eve",
                "--attr",
                "servo_host=labstation1",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Created host info for host1"));

        let doc = read_host_file(&temp, "host1");
        assert_eq!(doc["serializer_version"], 1);
        assert_eq!(doc["labels"][0], "board:eve");
        assert_eq!(doc["attributes"]["servo_host"], "labstation1");
    }

    #[test]
    fn create_refuses_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        hostinfo_in(&temp)
            .args(["--host", "host1", "create", "-l", "board:eve"])
            .assert()
            .success();

        hostinfo_in(&temp)
            .args(["--host", "host1", "create"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));

        hostinfo_in(&temp)
            .args(["--host", "host1", "create", "--force", "-l", "board:kevin"])
            .assert()
            .success();
        assert_eq!(read_host_file(&temp, "host1")["labels"][0], "board:kevin");
    }

    #[test]
    fn create_keeps_unreadable_host_without_force() {
        let temp = TempDir::new().unwrap();
        let hosts = temp.path().join("hosts");
        std::fs::create_dir_all(&hosts).unwrap();
        let original = r#"{"serializer_version": 2, "labels": ["board:eve", "pool:bvt"], "attributes": {"servo_host": "lab1"}}"#;
        std::fs::write(hosts.join("host1.json"), original).unwrap();

        hostinfo_in(&temp)
            .args(["--host", "host1", "create"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("serializer version"))
            .stderr(predicate::str::contains("--force"));
        assert_eq!(
            std::fs::read_to_string(hosts.join("host1.json")).unwrap(),
            original
        );

        hostinfo_in(&temp)
            .args(["--host", "host1", "create", "--force", "-l", "board:kevin"])
            .assert()
            .success();
        let doc = read_host_file(&temp, "host1");
        assert_eq!(doc["serializer_version"], 1);
        assert_eq!(doc["labels"], serde_json::json!(["board:kevin"]));
    }

    #[test]
    fn show_json_includes_derived_properties() {
        let temp = TempDir::new().unwrap();
        hostinfo_in(&temp)
            .args([
                "--host",
                "host1",
                "create",
                "-l",
                "board:eve",
                "-l",
                "os:cros",
                "-l",
                "pool:bvt",
                "-l",
                "pool:suites",
                "-l",
                "ab-version:git_mnc-release/2457013",
                "-l",
                "cros-version:eve-release/R99-1234.0.0",
            ])
            .assert()
            .success();

        let output = hostinfo_in(&temp)
            .args(["--host", "host1", "show", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(view["board"], "eve");
        assert_eq!(view["os"], "cros");
        assert_eq!(view["build"], "eve-release/R99-1234.0.0");
        assert_eq!(view["pools"], serde_json::json!(["bvt", "suites"]));
    }

    #[test]
    fn label_add_remove_and_get() {
        let temp = TempDir::new().unwrap();
        hostinfo_in(&temp)
            .args(["--host", "host1", "create", "-l", "board:eve"])
            .assert()
            .success();

        hostinfo_in(&temp)
            .args(["--host", "host1", "label", "add", "pool:bvt", "pool:cq"])
            .assert()
            .success();
        hostinfo_in(&temp)
            .args(["--host", "host1", "label", "remove", "pool:cq"])
            .assert()
            .success();

        hostinfo_in(&temp)
            .args(["--host", "host1", "label", "get", "pool"])
            .assert()
            .success()
            .stdout("bvt\n");

        hostinfo_in(&temp)
            .args(["--host", "host1", "show", "--format", "plain"])
            .assert()
            .success()
            .stdout("board:eve\npool:bvt\n");
    }

    #[test]
    fn label_set_replaces_prefix() {
        let temp = TempDir::new().unwrap();
        hostinfo_in(&temp)
            .args(["--host", "host1", "create", "-l", "cros-version:old/1"])
            .assert()
            .success();

        hostinfo_in(&temp)
            .args(["--host", "host1", "label", "set", "cros-version", "new/2"])
            .assert()
            .success();

        let doc = read_host_file(&temp, "host1");
        assert_eq!(doc["labels"], serde_json::json!(["cros-version:new/2"]));
    }

    #[test]
    fn label_get_missing_prefix_prints_empty() {
        let temp = TempDir::new().unwrap();
        hostinfo_in(&temp)
            .args(["--host", "host1", "create"])
            .assert()
            .success();

        hostinfo_in(&temp)
            .args(["--host", "host1", "label", "get", "missing"])
            .assert()
            .success()
            .stdout("\n");
    }

    #[test]
    fn attr_set_get_unset() {
        let temp = TempDir::new().unwrap();
        hostinfo_in(&temp)
            .args(["--host", "host1", "create"])
            .assert()
            .success();

        hostinfo_in(&temp)
            .args(["--host", "host1", "attr", "set", "servo_port=9999"])
            .assert()
            .success();
        hostinfo_in(&temp)
            .args(["--host", "host1", "attr", "get", "servo_port"])
            .assert()
            .success()
            .stdout("9999\n");

        hostinfo_in(&temp)
            .args(["--host", "host1", "attr", "unset", "servo_port"])
            .assert()
            .success();
        hostinfo_in(&temp)
            .args(["--host", "host1", "attr", "get", "servo_port"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Attribute not set"));
    }

    #[test]
    fn corrupt_store_file_reports_load_error() {
        let temp = TempDir::new().unwrap();
        let hosts = temp.path().join("hosts");
        std::fs::create_dir_all(&hosts).unwrap();
        std::fs::write(hosts.join("host1.json"), "{\"serializer_version\": 9}").unwrap();

        hostinfo_in(&temp)
            .args(["--host", "host1", "show"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("serializer version"));
    }

    #[test]
    fn debug_logging_traces_refresh_and_commit() {
        let temp = TempDir::new().unwrap();
        hostinfo_in(&temp)
            .args(["--host", "host1", "create", "-l", "board:eve"])
            .assert()
            .success();

        hostinfo_in(&temp)
            .args(["-vv", "--host", "host1", "show", "--format", "plain"])
            .assert()
            .success()
            .stdout("board:eve\n")
            .stderr(predicate::str::contains("Refreshing HostInfo using store FileBackend("))
            .stderr(predicate::str::contains("Old host_info: None"))
            .stderr(predicate::str::contains(
                "New host_info: HostInfo [Labels: [\"board:eve\"]",
            ));

        hostinfo_in(&temp)
            .args(["-vv", "--host", "host1", "label", "add", "pool:bvt"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Committing HostInfo to store FileBackend("))
            .stderr(predicate::str::contains(
                "HostInfo updated to: HostInfo [Labels: [\"board:eve\", \"pool:bvt\"]",
            ));
    }

    #[test]
    fn default_verbosity_hides_debug_lines() {
        let temp = TempDir::new().unwrap();
        hostinfo_in(&temp)
            .args(["--host", "host1", "create"])
            .assert()
            .success();

        hostinfo_in(&temp)
            .args(["--host", "host1", "show"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Refreshing HostInfo").not());

        hostinfo_in(&temp)
            .args(["-v", "--host", "host1", "show"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Refreshing HostInfo").not());
    }

    #[test]
    fn memory_backend_is_ephemeral() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("config.toml"),
            "[store]\nbackend = \"memory\"\n",
        )
        .unwrap();

        hostinfo_in(&temp)
            .args(["--host", "host1", "label", "add", "board:eve"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Changes not persisted"));

        hostinfo_in(&temp)
            .args(["--host", "host1", "show", "--format", "plain"])
            .assert()
            .success()
            .stdout("");
        assert!(!temp.path().join("hosts").exists());
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        hostinfo_in(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        hostinfo_in(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[store]"));
    }

    #[test]
    fn config_set_and_reject_unknown_key() {
        let temp = TempDir::new().unwrap();
        hostinfo_in(&temp)
            .args(["config", "set", "store.backend", "memory"])
            .assert()
            .success();

        let content = std::fs::read_to_string(temp.path().join("config.toml")).unwrap();
        assert!(content.contains("backend = \"memory\""));

        hostinfo_in(&temp)
            .args(["config", "set", "vm.name", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown configuration key"));
    }
}
