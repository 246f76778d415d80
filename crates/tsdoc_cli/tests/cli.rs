//! End-to-end tests for the `tsdoc` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::from(std::process::Command::new(env!("CARGO_BIN_EXE_tsdoc")))
}

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (rel, text) in files {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }
    dir
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[test]
fn writes_pages_and_manifest() {
    let dir = project(&[(
        "src/math.ts",
        "/** Adds numbers. */\nexport function add(a: number, b: number): number { return a + b; }\n",
    )]);

    cmd()
        .arg(dir.path())
        .arg("--no-color")
        .env_remove("TSDOC_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote src/math"))
        .stdout(predicate::str::contains("1 page, 1 declaration, 0 diagnostics"));

    let page = read(dir.path(), ".tsdoc/src-math.mdx");
    assert!(page.contains("<Meta title=\"src/math\" />"));
    assert!(page.contains("Adds numbers."));
    assert!(page.contains("Arguments:"));
    assert!(read(dir.path(), ".tsdoc/index.json").contains("\"qualifiedName\": \"add\""));
}

#[test]
fn private_flag_documents_private_members() {
    let source = "export class Box {\n  private secret: string;\n  open(): void {}\n}\n";

    let hidden = project(&[("src/box.ts", source)]);
    cmd().arg(hidden.path()).arg("--no-color").assert().success();
    assert!(!read(hidden.path(), ".tsdoc/src-box.mdx").contains("secret"));

    let shown = project(&[("src/box.ts", source)]);
    cmd()
        .arg(shown.path())
        .args(["--private", "--no-color"])
        .assert()
        .success();
    assert!(read(shown.path(), ".tsdoc/src-box.mdx").contains("secret"));
}

#[test]
fn alias_rewrites_titles_and_slugs() {
    let dir = project(&[("src/lib/point.ts", "export type Point = [number, number];\n")]);

    cmd()
        .arg(dir.path())
        .args(["--alias", "src/lib/=api/", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote api/point"));

    assert!(read(dir.path(), ".tsdoc/api-point.mdx").contains("<Meta title=\"api/point\" />"));
}

#[test]
fn docs_flag_changes_output_directory() {
    let dir = project(&[("src/a.ts", "export const a = 1;\n")]);

    cmd()
        .arg(dir.path())
        .args(["-o", "site/api", "--no-color"])
        .assert()
        .success();

    assert!(dir.path().join("site/api/src-a.mdx").exists());
    assert!(!dir.path().join(".tsdoc").exists());
}

#[test]
fn config_file_is_honored() {
    let dir = project(&[
        ("tsdoc.toml", "entry = \"lib/**/*.ts\"\ndocs = \"out\"\n"),
        ("lib/a.ts", "export type A = string;\n"),
        ("src/b.ts", "export type B = string;\n"),
    ]);

    cmd().arg(dir.path()).arg("--no-color").assert().success();

    assert!(dir.path().join("out/lib-a.mdx").exists());
    assert!(!dir.path().join("out/src-b.mdx").exists());
}

#[test]
fn parse_error_fails_the_run() {
    let dir = project(&[("src/broken.ts", "export function broken( {\n")]);

    cmd()
        .arg(dir.path())
        .arg("--no-color")
        .assert()
        .failure()
        .stderr(predicate::str::contains("tsdoc:"));
}

#[test]
fn bad_alias_is_reported() {
    let dir = project(&[("src/a.ts", "export const a = 1;\n")]);

    cmd()
        .arg(dir.path())
        .args(["--alias", "missing-separator"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid alias"));
}
