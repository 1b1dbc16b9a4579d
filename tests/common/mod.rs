use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub page: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let page = make_fixture_page(tmp.path());

        Self {
            _tmp: tmp,
            home,
            page,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("statfront");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--page")
            .arg(self.page.to_str().expect("page path utf8"))
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Runs a session over the script, returning one parsed envelope per
    /// emitted outcome line.
    pub fn run_session(&self, script: &str) -> Vec<Value> {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--page")
            .arg(self.page.to_str().expect("page path utf8"))
            .arg("session")
            .write_stdin(script)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out)
            .expect("utf8 output")
            .lines()
            .map(|line| serde_json::from_str(line).expect("valid json outcome line"))
            .collect()
    }

    pub fn audit_lines(&self) -> Vec<Value> {
        let path = self.home.join(".config/statfront/audit.jsonl");
        let raw = fs::read_to_string(path).unwrap_or_default();
        raw.lines()
            .map(|line| serde_json::from_str(line).expect("valid audit line"))
            .collect()
    }
}

pub fn make_fixture_page(base: &Path) -> PathBuf {
    let page = serde_json::json!({
        "title": "fixture-page",
        "elements": [
            {"id": "reviewerName", "kind": "input"},
            {"id": "reviewMessage", "kind": "input"},
            {"id": "dynamicReviews", "kind": "section"}
        ],
        "catalog": [
            {
                "name": "Classic Mug",
                "slug": "classic-mug",
                "description": "Ceramic mug with crest",
                "price": 9.99,
                "category": "kitchen",
                "featured": true
            },
            {
                "name": "Stat Tee",
                "slug": "stat-tee",
                "description": "Cotton tee",
                "price": 29.99,
                "category": "apparel"
            },
            {
                "name": "Poster",
                "slug": "poster",
                "description": "Matte wall poster",
                "price": 4.50,
                "category": "decor"
            }
        ]
    });
    let path = base.join("page.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(&page).expect("serialize page fixture"),
    )
    .expect("write page fixture");
    path
}
