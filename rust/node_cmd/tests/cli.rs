use assert_cmd::Command;

fn node_cmd() -> Command {
    Command::cargo_bin("node-cmd").expect("node-cmd binary is built")
}

#[test]
fn prints_options_for_valid_flags() {
    let output = node_cmd()
        .args([
            "--core.remote",
            "tcp://127.0.0.1:26657",
            "--core.grpc",
            "127.0.0.1:9090",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let env: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        env["options"][0]["set_remote_core"]["host"],
        "127.0.0.1:26657"
    );
    assert_eq!(env["options"][0]["set_remote_core"]["scheme"], "tcp");
    assert_eq!(env["options"][1]["set_grpc_endpoint"]["host"], "127.0.0.1:9090");
}

#[test]
fn no_flags_prints_no_options() {
    let output = node_cmd().output().unwrap();
    assert!(output.status.success());

    let env: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(env["options"], serde_json::json!([]));
}

#[test]
fn bad_remote_core_fails_with_flag_name() {
    let output = node_cmd()
        .args(["--core.remote", "127.0.0.1:26657"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cmd: while parsing 'core.remote'"), "{stderr}");
    assert!(stderr.contains("both protocol and host must be present"), "{stderr}");
}

#[test]
fn bad_grpc_endpoint_fails_without_flag_name() {
    let output = node_cmd()
        .args(["--core.grpc", "localhost:notaport"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid port number"), "{stderr}");
    assert!(!stderr.contains("core.grpc"), "{stderr}");
}
