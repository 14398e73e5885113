//! End-to-end tests for the `submit-maya-redshift` binary.
//!
//! Runs the real binary against a mock Afanasy server. Environment
//! fallbacks are scrubbed and the working directory is pointed at a
//! fresh temp dir so a developer's `.env` cannot leak in.

use assert_cmd::Command;
use predicates::prelude::*;

fn submit_cmd(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("submit-maya-redshift").unwrap();
    cmd.current_dir(dir)
        .env_remove("AF_WORKING_DIRECTORY")
        .env_remove("MAYA_RENDER_EXEC")
        .env_remove("MAYA_REDSHIFT_WRAPPER")
        .env_remove("AF_OUTPUT_IMAGE_DIR")
        .env_remove("AF_SERVER_ADDRESS")
        .env_remove("RUST_LOG");
    cmd
}

/// With neither `--output` nor `AF_OUTPUT_IMAGE_DIR` set the run
/// fails before any submission is attempted.
#[test]
fn missing_output_dir_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    submit_cmd(dir.path())
        .args([
            "--scene",
            "/proj/scenes/shot01.ma",
            "--start",
            "1",
            "--end",
            "10",
            "--quality",
            "GT",
        ])
        // Point at a server that must not be reached; the config
        // error fires first, so no connection error shows up.
        .env("AF_SERVER_ADDRESS", "http://127.0.0.1:1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output directory"));
}

/// A single named preset results in exactly one job POSTed to the
/// farm server.
#[test]
fn named_preset_submits_one_job() {
    let dir = tempfile::tempdir().unwrap();
    let server = httpmock::MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/json")
            .body_contains("shot01-render-gt");
        then.status(200);
    });

    submit_cmd(dir.path())
        .args([
            "--scene",
            "/proj/scenes/shot01.ma",
            "--start",
            "1",
            "--end",
            "10",
            "--quality",
            "GT",
            "--output",
            "/out/images",
            "--project_dir",
            "/proj",
        ])
        .env("AF_SERVER_ADDRESS", server.base_url())
        .assert()
        .success();

    mock.assert_hits(1);
}

/// An empty `--quality` fans out to all five presets, submitted
/// sequentially.
#[test]
fn empty_quality_submits_all_presets() {
    let dir = tempfile::tempdir().unwrap();
    let server = httpmock::MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::POST).path("/json");
        then.status(200);
    });

    submit_cmd(dir.path())
        .args([
            "--scene",
            "/proj/scenes/shot01.ma",
            "--start",
            "1",
            "--end",
            "10",
            "--output",
            "/out/images",
            "--project_dir",
            "/proj",
        ])
        .env("AF_SERVER_ADDRESS", server.base_url())
        .assert()
        .success();

    mock.assert_hits(5);
}

/// A rejecting farm server makes the run exit non-zero.
#[test]
fn farm_rejection_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let server = httpmock::MockServer::start();
    server.mock(|when, then| {
        when.method(httpmock::Method::POST).path("/json");
        then.status(403).body("submission denied");
    });

    submit_cmd(dir.path())
        .args([
            "--scene",
            "/proj/scenes/shot01.ma",
            "--start",
            "1",
            "--end",
            "10",
            "--quality",
            "LOW",
            "--output",
            "/out/images",
        ])
        .env("AF_SERVER_ADDRESS", server.base_url())
        .assert()
        .failure()
        .stderr(predicate::str::contains("403"));
}

/// An inverted frame range is rejected up front.
#[test]
fn inverted_frame_range_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    submit_cmd(dir.path())
        .args([
            "--scene",
            "/proj/scenes/shot01.ma",
            "--start",
            "20",
            "--end",
            "10",
            "--output",
            "/out/images",
        ])
        .env("AF_SERVER_ADDRESS", "http://127.0.0.1:1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Start frame"));
}
