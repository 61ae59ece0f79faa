use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::tempdir;

mod common;
use common::{FULL_CLASS, StubServer, rta, write_config, write_photo};

const UNREACHABLE: &str = "http://127.0.0.1:9";

#[test]
fn test_take_without_photo_is_refused_before_any_request() {
    let server = StubServer::start(200, "{}");
    let dir = tempdir().unwrap();
    let cfg = write_config(dir.path(), &server.url, UNREACHABLE);

    rta()
        .arg("--config")
        .arg(&cfg)
        .arg("take")
        .args(FULL_CLASS)
        .args(["--slot", "morning"])
        .assert()
        .failure()
        .stderr(contains("Please take or upload a photo"));

    assert!(server.requests().is_empty());
}

#[test]
fn test_take_without_class_is_refused_before_any_request() {
    let server = StubServer::start(200, "{}");
    let dir = tempdir().unwrap();
    let cfg = write_config(dir.path(), &server.url, UNREACHABLE);
    let photo = write_photo(dir.path());

    rta()
        .arg("--config")
        .arg(&cfg)
        .arg("take")
        .arg("--photo")
        .arg(&photo)
        .args(["--department", "Engineering", "--slot", "evening"])
        .assert()
        .failure()
        .stderr(contains("Please select a class"));

    assert!(server.requests().is_empty());
}

#[test]
fn test_take_without_slot_is_refused_before_any_request() {
    let server = StubServer::start(200, "{}");
    let dir = tempdir().unwrap();
    let cfg = write_config(dir.path(), &server.url, UNREACHABLE);
    let photo = write_photo(dir.path());

    rta()
        .arg("--config")
        .arg(&cfg)
        .arg("take")
        .arg("--photo")
        .arg(&photo)
        .args(FULL_CLASS)
        .assert()
        .failure()
        .stderr(contains("Please select a time slot"));

    assert!(server.requests().is_empty());
}

#[test]
fn test_take_success_shows_present_students() {
    let reply = r#"{
        "attendance": [
            {"studentId": "S101", "status": "present", "distance": 0.31},
            {"studentId": "S102", "status": "present", "distance": 0.42},
            {"studentId": "S103", "status": "present", "distance": 0.28}
        ],
        "facesDetected": 5,
        "collectionName": "engineering_b-tech_computer-science_1st-year_semester-1_morning_attendance",
        "status": "completed"
    }"#;
    let server = StubServer::start(200, reply);
    let dir = tempdir().unwrap();
    let cfg = write_config(dir.path(), &server.url, UNREACHABLE);
    let photo = write_photo(dir.path());

    rta()
        .arg("--config")
        .arg(&cfg)
        .arg("take")
        .arg("--photo")
        .arg(&photo)
        .args(FULL_CLASS)
        .args(["--slot", "morning"])
        .assert()
        .success()
        .stdout(
            contains("Attendance recorded successfully!")
                .and(contains("Faces detected : 5"))
                .and(contains("Present        : 3"))
                .and(contains("S102")),
        );

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].target, "/process-attendance");

    let body = requests[0].body_text();
    assert!(body.contains("name=\"image\""));
    assert!(body.contains("name=\"className\""));
    assert!(body.contains("engineering_b-tech_computer-science_1st-year_semester-1"));
    assert!(body.contains("name=\"timeSlot\""));
    assert!(body.contains("Morning"));
}

#[test]
fn test_take_reads_a_camera_capture_from_stdin() {
    let server = StubServer::start(200, r#"{"attendance": [], "facesDetected": 0}"#);
    let dir = tempdir().unwrap();
    let cfg = write_config(dir.path(), &server.url, UNREACHABLE);

    rta()
        .arg("--config")
        .arg(&cfg)
        .args(["take", "--photo", "-"])
        .args(FULL_CLASS)
        .args(["--slot", "afternoon"])
        .write_stdin(common::png_bytes())
        .assert()
        .success()
        .stdout(contains("No faces detected in the photo"));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body_text().contains("capture.png"));
}

#[test]
fn test_take_server_error_is_shown_verbatim() {
    let server = StubServer::start(400, r#"{"error": "bad image"}"#);
    let dir = tempdir().unwrap();
    let cfg = write_config(dir.path(), &server.url, UNREACHABLE);
    let photo = write_photo(dir.path());

    rta()
        .arg("--config")
        .arg(&cfg)
        .arg("take")
        .arg("--photo")
        .arg(&photo)
        .args(FULL_CLASS)
        .args(["--slot", "morning"])
        .assert()
        .failure()
        .stderr(contains("bad image"))
        .stdout(contains("Attendance recorded successfully!").not());

    assert_eq!(server.requests().len(), 1);
}

#[test]
fn test_take_json_prints_the_handoff() {
    let reply = r#"{"attendance": [{"studentId": "S7", "distance": 0.5}], "facesDetected": 2}"#;
    let server = StubServer::start(200, reply);
    let dir = tempdir().unwrap();
    let cfg = write_config(dir.path(), &server.url, UNREACHABLE);
    let photo = write_photo(dir.path());

    rta()
        .arg("--config")
        .arg(&cfg)
        .arg("take")
        .arg("--photo")
        .arg(&photo)
        .args(FULL_CLASS)
        .args(["--slot", "evening", "--json"])
        .assert()
        .success()
        .stdout(
            contains("\"facesDetected\": 2")
                .and(contains("\"studentId\": \"S7\""))
                .and(contains("semester-1_evening_attendance")),
        );
}

#[test]
fn test_take_matches_without_face_count_are_reported_as_marked() {
    let server = StubServer::start(200, r#"{"attendance": [{"studentId": "S9", "distance": 0.2}]}"#);
    let dir = tempdir().unwrap();
    let cfg = write_config(dir.path(), &server.url, UNREACHABLE);
    let photo = write_photo(dir.path());

    rta()
        .arg("--config")
        .arg(&cfg)
        .arg("take")
        .arg("--photo")
        .arg(&photo)
        .args(FULL_CLASS)
        .args(["--slot", "morning"])
        .assert()
        .success()
        .stdout(
            contains("1 student(s) marked present")
                .and(contains("Faces detected : 1"))
                .and(contains("No faces detected").not()),
        );
}
