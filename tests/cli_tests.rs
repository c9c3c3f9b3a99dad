#![warn(clippy::all, clippy::pedantic, clippy::unwrap_used)]
pub mod test_utils;

#[cfg(test)]
pub mod cli_tests {
    use crate::test_utils::FsMockBuilder;
    use assert_cmd::Command;
    use predicates::str::contains;

    fn produce_list() -> Command {
        Command::cargo_bin("produce-list").expect("could not run program using 'assert_cmd'")
    }

    #[test]
    fn help_lists_options() {
        produce_list()
            .arg("--help")
            .assert()
            .success()
            .stdout(contains("--category"))
            .stdout(contains("--print"));
    }

    #[test]
    fn reject_unknown_category() {
        produce_list()
            .args(["--category", "Grains"])
            .assert()
            .failure()
            .stderr(contains("'Grains' is not a valid category"));
    }

    #[test]
    fn reject_malformed_config() -> Result<(), Box<dyn std::error::Error>> {
        let mock_fs = FsMockBuilder::new()?.mock_file_contents("config.toml", "[log")?;

        produce_list()
            .arg("--local-dir")
            .arg(mock_fs.path())
            .assert()
            .failure()
            .stderr(contains("Could not parse config file 'config.toml'"));

        Ok(())
    }

    #[test]
    fn reject_unknown_log_level() -> Result<(), Box<dyn std::error::Error>> {
        let mock_fs = FsMockBuilder::new()?
            .mock_file_contents("config.toml", "[log]\nlevel = \"chatty\"")?;

        produce_list()
            .arg("--local-dir")
            .arg(mock_fs.path())
            .assert()
            .failure()
            .stderr(contains("'chatty' is not a log level"));

        Ok(())
    }
}
