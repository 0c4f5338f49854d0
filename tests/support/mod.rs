#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use menucast::application::context::ServiceContext;
use menucast::infrastructure::bootstrap::build_context;
use menucast::infrastructure::config::settings::Config;
use menucast::testkit::fixture;
use tempfile::TempDir;

/// Dataset, model artifact and config file written to a temp directory.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Fixture dataset plus a linear model that matches its schema.
    pub fn new() -> Self {
        let ws = Self::empty();
        ws.write("history.csv", &fixture::history_csv());
        ws.write("model.json", &fixture::linear_model_json(&fixture::schema()));
        ws.write_config("");
        ws
    }

    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    /// Write `config.toml` pointing at this workspace's files, followed by
    /// `extra` TOML.
    pub fn write_config(&self, extra: &str) -> PathBuf {
        let toml = format!(
            r#"
[data]
history_path = "{}"

[model]
path = "{}"

[logging]
level = "warn"
format = "pretty"

{extra}
"#,
            toml_path(&self.path("history.csv")),
            toml_path(&self.path("model.json")),
        );
        self.write("config.toml", &toml)
    }

    pub fn config(&self) -> Config {
        Config::load(self.path("config.toml")).expect("load workspace config")
    }

    pub fn context(&self) -> Arc<ServiceContext> {
        Arc::new(build_context(&self.config()).expect("build service context"))
    }
}

fn toml_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "\\\\")
}
