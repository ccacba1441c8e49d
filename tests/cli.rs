//! Runs the `obj2msh` binary against files in a temporary directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const TRIANGLE_OBJ: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1/1/1 2/1/1 3/1/1\n";

const TRIANGLE_MSH: &str = "3\n1\nvertices\n0\n-0\n0\n1\n-0\n0\n0\n-0\n1\n\
                            triangles\n0\n1\n2\n\
                            normals\n0\n-1\n0\n0\n-1\n0\n0\n-1\n0\n";

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_obj2msh"))
}

#[test]
fn test_converts_single_triangle() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("triangle.obj");
    let output = dir.path().join("triangle.msh");
    fs::write(&input, TRIANGLE_OBJ).unwrap();

    cli().arg(&input).arg(&output).assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), TRIANGLE_MSH);
}

#[test]
fn test_truncates_existing_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("triangle.obj");
    let output = dir.path().join("triangle.msh");
    fs::write(&input, TRIANGLE_OBJ).unwrap();
    fs::write(&output, "stale content that is much longer than the result ".repeat(10)).unwrap();

    cli().arg(&input).arg(&output).assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), TRIANGLE_MSH);
}

#[test]
fn test_converts_cube_fixture() {
    let dir = TempDir::new().unwrap();
    let input = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/cube.obj");
    let output = dir.path().join("cube.msh");

    cli().arg(input).arg(&output).assert().success();

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(&lines[..3], &["8", "12", "vertices"]);
    assert_eq!(lines[27], "triangles");
    assert_eq!(lines[64], "normals");
}

#[test]
fn test_converts_latin1_comment() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("wuerfel.obj");
    let output = dir.path().join("wuerfel.msh");
    let mut data = b"# W\xfcrfel\n".to_vec();
    data.extend_from_slice(TRIANGLE_OBJ.as_bytes());
    fs::write(&input, data).unwrap();

    cli().arg(&input).arg(&output).assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), TRIANGLE_MSH);
}

#[test]
fn test_hyphen_prefixed_paths() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("-in.obj"), TRIANGLE_OBJ).unwrap();

    cli()
        .current_dir(dir.path())
        .arg("-in.obj")
        .arg("-out.msh")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("-out.msh")).unwrap(),
        TRIANGLE_MSH
    );
}

#[test]
fn test_version_flag() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("obj2msh"));
}

#[test]
fn test_usage_error_without_arguments() {
    cli()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_usage_error_with_extra_argument() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("triangle.obj");
    let output = dir.path().join("triangle.msh");
    fs::write(&input, TRIANGLE_OBJ).unwrap();

    cli()
        .arg(&input)
        .arg(&output)
        .arg("extra")
        .assert()
        .failure()
        .code(2);

    assert!(!output.exists());
}

#[test]
fn test_malformed_face_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.obj");
    let output = dir.path().join("bad.msh");
    fs::write(&input, "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1/1 2/1 3/1\n").unwrap();

    cli()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 5"))
        .stderr(predicate::str::contains("f 1/1 2/1 3/1"));

    assert!(!output.exists());
}

#[test]
fn test_unresolved_normal_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("loose.obj");
    let output = dir.path().join("loose.msh");
    fs::write(&input, "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 5 5 5\nvn 0 0 1\nf 1/1/1 2/1/1 3/1/1\n").unwrap();

    cli()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("vertex 3"));

    assert!(!output.exists());
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.obj");
    let output = dir.path().join("out.msh");

    cli()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.obj"))
        .stderr(predicate::str::contains("I/O error on").count(1));

    assert!(!output.exists());
}
