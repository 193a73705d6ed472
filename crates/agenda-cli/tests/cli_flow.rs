//! End-to-end tests driving the `agenda` binary.
//!
//! Each test gets its own home directory and a config file pointing at a
//! database inside it, so nothing leaks between runs.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

struct Sandbox {
    home: TempDir,
    config: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let home = TempDir::new().unwrap();
        let config = home.path().join("agenda.toml");
        let database = home.path().join("data").join("agenda.db");
        let mut file = std::fs::File::create(&config).unwrap();
        writeln!(file, "database_path = {:?}", database.to_string_lossy()).unwrap();
        Self { home, config }
    }

    fn with_untimed(self, policy: &str) -> Self {
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(&self.config)
            .unwrap();
        writeln!(file, "untimed_events = \"{policy}\"").unwrap();
        self
    }

    fn home(&self) -> &Path {
        self.home.path()
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_agenda"))
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env("XDG_DATA_HOME", self.home().join(".local/share"))
            .env_remove("AGENDA_DATABASE_PATH")
            .env_remove("AGENDA_UNTIMED_EVENTS")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(&self.config)
            .args(args)
            .output()
            .expect("failed to run agenda")
    }

    fn stdout(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "agenda {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }

    /// The four events used across the check scenarios.
    fn seed(&self) {
        self.stdout(&[
            "add",
            "personal",
            "Go out for dinner",
            "--date",
            "05/05/20",
            "--time",
            "12 pm",
        ]);
        self.stdout(&["add", "personal", "Stay at home", "--date", "04/05/20"]);
        self.stdout(&[
            "add",
            "zoom",
            "CS2113T tutorial",
            "--link",
            "zoom.com/blahblah",
            "--date",
            "3/10/2020",
            "--time",
            "1330",
        ]);
        self.stdout(&[
            "add",
            "timetable",
            "Science class",
            "--location",
            "S17",
            "--date",
            "4/5/2020",
            "--time",
            "3 pm",
        ]);
    }
}

#[test]
fn test_add_then_list() {
    let sandbox = Sandbox::new();
    sandbox.seed();

    let listing = sandbox.stdout(&["list"]);
    assert_eq!(
        listing,
        "Personal:\n\
         1. [P] Go out for dinner on 2020-05-05, 12:00\n\
         2. [P] Stay at home on 2020-05-04\n\
         Timetable:\n\
         1. [T] Science class, Location: S17 on 2020-05-04, 15:00\n\
         Zoom:\n\
         1. [Z] CS2113T tutorial, Link: zoom.com/blahblah on 2020-10-03, 13:30\n"
    );
}

#[test]
fn test_check_finds_coinciding_events() {
    let sandbox = Sandbox::new();
    sandbox.seed();

    let output = sandbox.stdout(&["check", "04/05/20; 13:15; 05/05/20; 2:30 pm"]);
    assert_eq!(
        output,
        "Here is a list of your coinciding events:\n\
         1. [P] Go out for dinner on 2020-05-05, 12:00\n\
         2. [P] Stay at home on 2020-05-04\n\
         3. [T] Science class, Location: S17 on 2020-05-04, 15:00\n"
    );
}

#[test]
fn test_check_accepts_unquoted_words() {
    let sandbox = Sandbox::new();
    sandbox.seed();

    let output = sandbox.stdout(&["check", "04/05/20;", "13:15;", "05/05/20;", "14:30"]);
    assert!(output.starts_with("Here is a list of your coinciding events:\n"));
    assert_eq!(output.lines().count(), 4, "{output}");
}

#[test]
fn test_repeat_then_check_finds_recurrence() {
    let sandbox = Sandbox::new();
    sandbox.seed();

    let before = sandbox.stdout(&["check", "10/10/2020; 12 pm; 10/10/20; 5 pm"]);
    assert_eq!(before, "You have no coinciding events!\n");

    let repeat = sandbox.stdout(&["repeat", "zoom", "1", "weekly", "1"]);
    assert_eq!(
        repeat,
        "[Z] CS2113T tutorial, Link: zoom.com/blahblah on 2020-10-03, 13:30 repeats weekly for 1 time(s):\n\
         1. 2020-10-10, 13:30\n"
    );

    let after = sandbox.stdout(&["check", "10/10/2020; 12 pm; 10/10/20; 5 pm"]);
    assert_eq!(
        after,
        "Here is a list of your coinciding events:\n\
         1. [Z] CS2113T tutorial, Link: zoom.com/blahblah on 2020-10-10, 13:30\n"
    );

    let listed = sandbox.stdout(&["repeat", "zoom", "1"]);
    assert!(listed.contains("repeats weekly for 1 time(s):"), "{listed}");
}

#[test]
fn test_untimed_policy_from_config_file() {
    let sandbox = Sandbox::new().with_untimed("exclude");
    sandbox.seed();

    let output = sandbox.stdout(&["check", "04/05/20; 13:15; 05/05/20; 14:30"]);
    assert!(!output.contains("Stay at home"), "{output}");
    assert!(output.contains("Science class"), "{output}");
}

#[test]
fn test_inverted_range_has_no_events() {
    let sandbox = Sandbox::new();
    sandbox.seed();

    let output = sandbox.stdout(&["check", "05/05/20; 14:30; 04/05/20; 13:15"]);
    assert_eq!(output, "You have no coinciding events!\n");
}

#[test]
fn test_invalid_input_exits_with_error() {
    let sandbox = Sandbox::new();
    sandbox.seed();

    let output = sandbox.run(&["check", "9/10/2020; 3.00 pm; 10/10/2020; 5.00 pm"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid time '3.00 pm'"), "{stderr}");

    let output = sandbox.run(&["repeat", "zoom", "1", "fortnightly", "2"]);
    assert!(!output.status.success());

    let output = sandbox.run(&["repeat", "personal", "9"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"), "{stderr}");

    let output = sandbox.run(&["repeat", "zoom", "-1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("index -1 is out of range for 1 event(s)"), "{stderr}");
}

#[test]
fn test_no_subcommand_prints_help() {
    let sandbox = Sandbox::new();
    let output = sandbox.stdout(&[]);
    assert!(output.contains("Usage"), "{output}");
}
