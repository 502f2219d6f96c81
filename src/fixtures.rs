#[cfg(test)]
pub mod test {
    use std::fs;
    use std::path::{Path, PathBuf};

    use tempfile::TempDir;

    use crate::scenario::{Scenario, Step};
    use crate::types::ValueType;

    /// Write `content` to `dir/name` and return the full path.
    pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn step(file: &Path, key: &str, value_type: ValueType) -> Step {
        Step {
            file: file.to_path_buf(),
            key: key.into(),
            value_type,
            comment: None,
            enum_values: Vec::new(),
            default: None,
        }
    }

    // -- Sample scenario touching all three formats ----------------------------

    pub const APP_CONF: &str = "# app settings\nname=demo\nport=80\n";
    pub const APP_INI: &str = "[log]\nlevel=info\n";
    pub const APP_JSON: &str = r#"{"server":{"port":8080}}"#;

    /// Scenario JSON referencing `app.conf`, `app.ini` and `app.json` in `dir`.
    pub fn scenario_json(dir: &Path) -> String {
        let conf = dir.join("app.conf");
        let ini = dir.join("app.ini");
        let json = dir.join("app.json");
        serde_json::json!({
            "steps": [
                {
                    "file": conf,
                    "key": "port",
                    "type": "port",
                    "comment": "Listening port",
                    "default": "8081"
                },
                {
                    "file": ini,
                    "key": "level",
                    "type": "enum",
                    "enumValues": ["debug", "info", "warn"]
                },
                {
                    "file": json,
                    "key": "server.host",
                    "type": "ip"
                }
            ]
        })
        .to_string()
    }

    /// Create the three target files plus `scenario.json` in a fresh temp dir.
    pub fn sample_workspace() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "app.conf", APP_CONF);
        write_file(&dir, "app.ini", APP_INI);
        write_file(&dir, "app.json", APP_JSON);
        let scenario = write_file(&dir, "scenario.json", &scenario_json(dir.path()));
        (dir, scenario)
    }

    pub fn sample_scenario(dir: &Path) -> Scenario {
        serde_json::from_str(&scenario_json(dir)).unwrap()
    }

    #[test]
    fn sample_scenario_parses() {
        let dir = TempDir::new().unwrap();
        let sc = sample_scenario(dir.path());
        assert_eq!(sc.steps.len(), 3);
        assert_eq!(sc.steps[1].enum_values, vec!["debug", "info", "warn"]);
        assert_eq!(sc.steps[0].default.as_deref(), Some("8081"));
    }
}
