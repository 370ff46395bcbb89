use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

fn hyperlink(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hyperlink"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn fixture(files: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().expect("temp dir");
    for (path, contents) in files {
        let path = dir.path().join(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, contents).expect("write fixture");
    }
    dir
}

#[test]
fn clean_site_exits_zero() {
    let dir = fixture(&[
        ("public/index.html", r#"<a href="about.html">about</a> <a href="https://example.com">x</a>"#),
        ("public/about.html", r#"<a href="/">home</a>"#),
    ]);

    hyperlink(dir.path())
        .arg("public")
        .assert()
        .success()
        .stdout("Checking 2 links from 2 files (2 documents)\nFound 0 bad links\n");
}

#[test]
fn bad_links_exit_one() {
    let dir = fixture(&[("public/index.html", r#"<a href="missing.html">gone</a>"#)]);

    hyperlink(dir.path())
        .args(["public", "-j", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("  error: bad link missing.html\n"))
        .stdout(predicate::str::ends_with("Found 1 bad links\n"));
}

#[test]
fn bad_anchors_exit_two() {
    let dir = fixture(&[
        ("public/index.html", r##"<h2 id="top">Top</h2><a href="#top">up</a> <a href="#nowhere">?</a>"##),
    ]);

    hyperlink(dir.path()).arg("public").assert().success();

    hyperlink(dir.path())
        .args(["public", "--check-anchors"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("  warning: bad anchor index.html#nowhere\n"))
        .stdout(predicate::str::contains("Found 0 bad links\nFound 1 bad anchors\n"));
}

#[test]
fn settings_file_and_environment_are_applied() {
    let dir = fixture(&[
        ("public/index.html", r##"<a href="#nowhere">?</a>"##),
        ("hyperlink.toml", "check_anchors = true\n\n[log]\nlevel = \"warn\"\n"),
    ]);

    hyperlink(dir.path()).arg("public").assert().code(2);

    fs::remove_file(dir.path().join("hyperlink.toml")).expect("remove settings");
    hyperlink(dir.path())
        .arg("public")
        .env("HYPERLINK__CHECK_ANCHORS", "true")
        .assert()
        .code(2);
}

#[test]
fn explicit_settings_file_must_exist() {
    let dir = fixture(&[("public/index.html", "")]);

    hyperlink(dir.path())
        .args(["public", "--config", "missing.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load settings from missing.toml"));
}

#[test]
fn sources_receive_the_report() {
    let dir = fixture(&[
        ("public/index.html", r#"<p>See the <a href="old.html">old page</a>.</p>"#),
        ("content/index.md", "See the [old page](old.md).\n"),
    ]);

    let expected =
        format!("{}\n  error: bad link old.html\n", Path::new("content").join("index.md").display());
    hyperlink(dir.path())
        .args(["public", "--sources", "content"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(expected));

    hyperlink(dir.path())
        .args(["public", "--sources", "content", "--verbose"])
        .env("HYPERLINK__LOG__ANSI", "false")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Grouped broken links by file"))
        .stderr(predicate::str::contains("sources=1 documents=0"));
}

#[test]
fn github_actions_annotations() {
    let dir = fixture(&[("public/index.html", r#"<a href="a.html">a</a><a href="b.html">b</a>"#)]);

    hyperlink(dir.path())
        .args(["public", "--github-actions"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("::error file="))
        .stdout(predicate::str::contains("index.html::bad links:%0A  a.html%0A  b.html\n"));
}

#[cfg(unix)]
#[test]
fn symlinks_are_fatal() {
    let dir = fixture(&[("public/index.html", "")]);
    std::os::unix::fs::symlink("index.html", dir.path().join("public/alias.html"))
        .expect("create symlink");

    hyperlink(dir.path())
        .arg("public")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Found unsupported symlink at"));
}

#[test]
fn missing_base_path_is_a_usage_error() {
    let dir = tempdir().expect("temp dir");
    hyperlink(dir.path()).assert().failure().stderr(predicate::str::contains("BASE_PATH"));
}

#[test]
fn dump_paragraphs_prints_sorted_fingerprints() {
    let dir = fixture(&[
        ("page.md", "# Intro\n\nHello, *world*!\n"),
        ("page.html", r#"<h1>Intro</h1><p>Hello, <a href="x.html">world</a>!</p>"#),
    ]);

    hyperlink(dir.path())
        .args(["dump-paragraphs", "page.md"])
        .assert()
        .success()
        .stdout("helloworld\nintro\n");

    hyperlink(dir.path())
        .args(["dump-paragraphs", "page.html"])
        .assert()
        .success()
        .stdout("helloworld\n");
}

#[test]
fn dump_paragraphs_rejects_unknown_files() {
    let dir = fixture(&[("notes.txt", "text"), ("README", "text")]);

    hyperlink(dir.path())
        .args(["dump-paragraphs", "notes.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown file extension"));

    hyperlink(dir.path())
        .args(["dump-paragraphs", "README"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file has no extension"));
}

#[test]
fn match_all_paragraphs_lists_unmatched_links() {
    let dir = fixture(&[
        ("public/index.html", r#"<p>Kept <a href="a.html">here</a>.</p><p>Edited <a href="b.html">there</a>.</p>"#),
        ("content/index.md", "Kept [here](a.md).\n"),
    ]);

    hyperlink(dir.path())
        .args(["match-all-paragraphs", "public", "content"])
        .assert()
        .success()
        .stdout(predicate::str::contains("index.html: b.html\n"))
        .stdout(predicate::str::contains(
            "Matched 1 of 2 links (0 outside of paragraphs, 1 unmatched)",
        ));
}
