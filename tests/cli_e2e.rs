//! End-to-end CLI tests for zapstats.
//!
//! These tests verify the complete CLI workflow by running the actual binary
//! with various arguments and checking the reports it writes.
//!
//! # Test Categories
//!
//! - **Basic functionality**: Reports are written with the default settings
//! - **Output formats**: CSV, JSON, JSONL, XLSX tables
//! - **Filters**: Date and sender filtering
//! - **Flags**: Limits, stopwords, delimiter, raw text
//! - **Error handling**: Proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const CHRISTMAS: &str = "WhatsApp Chat with Família
12/24/20, 9:00 PM - Messages and calls are end-to-end encrypted. No one outside of this chat, not even WhatsApp, can read or listen to them. Tap to learn more.
12/24/20, 9:01 PM - Ana: Eu gosto de gatos.
12/24/20, 9:02 PM - Bruno: Feliz Natal pra todos
com muito amor
12/24/20, 9:03 PM - Carla: Oi gente
12/24/20, 9:04 PM - Ana: <Media omitted>
12/24/20, 9:05 PM - Bruno: Vou levar a pizza
12/24/20, 9:06 PM - Ana: Gatos são legais
12/24/20, 9:07 PM - Carla: Chegando
12/24/20, 9:08 PM - Bruno: Pizza de calabresa
12/24/20, 9:09 PM - Ana: Feliz Natal!
12/24/20, 9:10 PM - Bruno: <Media omitted>
12/24/20, 9:11 PM - Carla: Trânsito horrível
12/24/20, 9:12 PM - Ana: Cadê o peru?
12/24/20, 9:13 PM - Bruno: Futebol amanhã?
12/24/20, 9:14 PM - Carla: Boa noite
";

const NEW_YEAR: &str = "WhatsApp Chat with Família
1/1/21, 12:00 AM - Ana: Feliz ano novo
1/1/21, 12:01 AM - Bruno: Feliz ano novo!
1/1/21, 12:02 AM - Carla: Feliz 2021
1/1/21, 12:03 AM - Carla joined using this group's invite link
1/1/21, 12:04 AM - Ana: Gatos dormindo
1/1/21, 12:05 AM - Carla: Fogos lindos
1/1/21, 10:30 AM - Bruno: Pizza de novo
1/1/21, 10:31 AM - Ana: Bom dia
1/1/21, 10:32 AM - Carla: Ressaca
1/1/21, 10:33 AM - Bruno: Acordei agora
1/1/21, 10:34 AM - Ana: Horário: 10:30
1/1/21, 10:35 AM - Carla: Café
1/1/21, 10:36 AM - Bruno: Futebol cancelado
1/1/21, 10:37 AM - Carla: Beijos
1/1/21, 10:38 AM - Ana: Até amanhã
1/1/21, 10:39 AM - Bruno: Tchau pessoal";

/// Creates a temporary directory with a `chats/` folder holding two exports.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    let chats = dir.path().join("chats");
    fs::create_dir(&chats).unwrap();
    fs::write(chats.join("01_natal.txt"), CHRISTMAS).unwrap();
    fs::write(chats.join("02_ano_novo.txt"), NEW_YEAR).unwrap();
    dir
}

/// Helper to get the zapstats command.
fn zapstats() -> Command {
    Command::cargo_bin("zapstats").expect("Failed to find zapstats binary")
}

/// Runs zapstats on the fixture chats, writing into `<dir>/out`.
fn run_on(dir: &TempDir, extra: &[&str]) -> assert_cmd::assert::Assert {
    zapstats()
        .arg(dir.path().join("chats"))
        .arg("-o")
        .arg(dir.path().join("out"))
        .args(extra)
        .assert()
}

fn read_out(dir: &TempDir, name: &str) -> String {
    fs::read_to_string(dir.path().join("out").join(name)).unwrap()
}

fn phrase_count(path: &Path) -> usize {
    fs::read_to_string(path)
        .unwrap()
        .split("\n\n")
        .filter(|p| !p.is_empty())
        .count()
}

// ============================================================================
// Basic Functionality
// ============================================================================

mod basic {
    use super::*;

    #[test]
    fn test_writes_all_reports() {
        let dir = setup_fixtures();

        run_on(&dir, &[])
            .success()
            .stdout(predicate::str::contains("✅ Done"))
            .stdout(predicate::str::contains("Dropped 1 senders"));

        let out = dir.path().join("out");
        assert!(out.join("all_messages.csv").exists());
        assert!(out.join("word_count_data.csv").exists());
        assert!(out.join("rake_phrases.txt").exists());
        assert!(!out.join("all_chat_data.txt").exists());
    }

    #[test]
    fn test_default_paths() {
        let dir = setup_fixtures();

        zapstats().current_dir(dir.path()).assert().success();

        assert!(dir.path().join("all_messages.csv").exists());
        assert!(dir.path().join("word_count_data.csv").exists());
        assert!(dir.path().join("rake_phrases.txt").exists());
    }

    #[test]
    fn test_message_table_contents() {
        let dir = setup_fixtures();
        run_on(&dir, &[]).success();

        let content = read_out(&dir, "all_messages.csv");
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("month;day;year;time;sender;message"));
        assert_eq!(lines.next(), Some("12;24;20;21:01:00;Ana;Eu gosto de gatos."));
        assert!(!content.contains("Carla"));
        assert!(content.contains("1;1;21;10:39:00;Bruno;Tchau pessoal"));
    }

    #[test]
    fn test_word_count_contents() {
        let dir = setup_fixtures();
        run_on(&dir, &[]).success();

        let content = read_out(&dir, "word_count_data.csv");
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("sender;message;count"));
        assert_eq!(lines.next(), Some("Ana;Gatos;3"));
        assert!(content.contains("Bruno;Pizza;3"));
        assert!(!content.contains(";De;"));
    }

    #[test]
    fn test_output_dir_created() {
        let dir = setup_fixtures();

        zapstats()
            .arg(dir.path().join("chats"))
            .arg("-o")
            .arg(dir.path().join("deep").join("reports"))
            .assert()
            .success();

        assert!(dir.path().join("deep/reports/all_messages.csv").exists());
    }
}

// ============================================================================
// Output Formats
// ============================================================================

mod formats {
    use super::*;

    #[test]
    fn test_json_format() {
        let dir = setup_fixtures();
        run_on(&dir, &["--format", "json"]).success();

        let content = read_out(&dir, "word_count_data.json");
        let rows: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(rows[0]["sender"], "Ana");
        assert_eq!(rows[0]["message"], "Gatos");
        assert_eq!(rows[0]["count"], 3);

        // Phrases are always plain text
        assert!(dir.path().join("out/rake_phrases.txt").exists());
        assert!(!dir.path().join("out/all_messages.csv").exists());
    }

    #[test]
    fn test_jsonl_format() {
        let dir = setup_fixtures();
        run_on(&dir, &["-f", "jsonl"]).success();

        let content = read_out(&dir, "all_messages.jsonl");
        assert_eq!(content.lines().count(), 20);
        for line in content.lines() {
            let row: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(row["sender"] == "Ana" || row["sender"] == "Bruno");
        }
    }

    #[test]
    fn test_ndjson_alias() {
        let dir = setup_fixtures();
        run_on(&dir, &["-f", "ndjson"]).success();
        assert!(dir.path().join("out/all_messages.jsonl").exists());
    }

    #[cfg(feature = "xlsx-output")]
    #[test]
    fn test_xlsx_format() {
        use calamine::{Data, Reader, Xlsx, open_workbook};

        let dir = setup_fixtures();
        run_on(&dir, &["-f", "xlsx", "-n", "1"]).success();

        let mut workbook: Xlsx<_> =
            open_workbook(dir.path().join("out/word_count_data.xlsx")).unwrap();
        let range = workbook.worksheet_range_at(0).unwrap().unwrap();
        let rows: Vec<&[Data]> = range.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], Data::String("sender".into()));
        assert_eq!(rows[1][1], Data::String("Gatos".into()));
        assert_eq!(rows[1][2], Data::Float(3.0));

        assert!(dir.path().join("out/all_messages.xlsx").exists());
        assert!(dir.path().join("out/rake_phrases.txt").exists());
    }

    #[test]
    fn test_invalid_format() {
        let dir = setup_fixtures();
        run_on(&dir, &["-f", "parquet"])
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }
}

// ============================================================================
// Filters
// ============================================================================

mod filters {
    use super::*;

    #[test]
    fn test_after_filter_empties_table() {
        let dir = setup_fixtures();
        run_on(&dir, &["--after", "2021-01-01"])
            .failure()
            .stderr(predicate::str::contains("❌ Error"))
            .stderr(predicate::str::contains("No messages found"));
    }

    #[test]
    fn test_after_filter_with_lower_threshold() {
        let dir = setup_fixtures();
        run_on(&dir, &["--after", "2021-01-01", "--min-messages", "5"])
            .success()
            .stdout(predicate::str::contains("📅 After:   2021-01-01"));

        let content = read_out(&dir, "all_messages.csv");
        assert_eq!(content.lines().count(), 16);
        assert!(content.contains("Carla"));
    }

    #[test]
    fn test_before_filter() {
        let dir = setup_fixtures();
        run_on(&dir, &["--before", "2020-12-31", "--min-messages", "1"]).success();

        let content = read_out(&dir, "all_messages.csv");
        assert!(content.contains("12;24;20;21:03:00;Carla;Oi gente"));
        assert!(!content.contains(";21;"));
    }

    #[test]
    fn test_from_filter() {
        let dir = setup_fixtures();
        run_on(&dir, &["--from", "Ana"])
            .success()
            .stdout(predicate::str::contains("👤 From:    Ana"));

        let content = read_out(&dir, "word_count_data.csv");
        assert!(content.lines().skip(1).all(|l| l.starts_with("Ana;")));
    }

    #[test]
    fn test_invalid_date() {
        let dir = setup_fixtures();
        run_on(&dir, &["--after", "01/01/2021"])
            .failure()
            .stderr(predicate::str::contains("Invalid date"));
    }
}

// ============================================================================
// Flags
// ============================================================================

mod flags {
    use super::*;

    #[test]
    fn test_top_words() {
        let dir = setup_fixtures();
        run_on(&dir, &["-n", "1"]).success();

        let content = read_out(&dir, "word_count_data.csv");
        assert_eq!(content, "sender;message;count\nAna;Gatos;3\nBruno;Pizza;3\n");
    }

    #[test]
    fn test_top_phrases() {
        let dir = setup_fixtures();
        run_on(&dir, &["-k", "3"]).success();
        assert_eq!(phrase_count(&dir.path().join("out/rake_phrases.txt")), 3);
    }

    #[test]
    fn test_save_raw() {
        let dir = setup_fixtures();
        run_on(&dir, &["--save-raw"]).success();

        let raw = read_out(&dir, "all_chat_data.txt");
        assert!(!raw.contains("WhatsApp Chat with"));
        assert!(raw.contains("Carla: Oi gente"));
        assert!(raw.ends_with("Tchau pessoal"));
    }

    #[test]
    fn test_delimiter() {
        let dir = setup_fixtures();
        run_on(&dir, &["-d", ","]).success();

        let content = read_out(&dir, "word_count_data.csv");
        assert!(content.starts_with("sender,message,count\n"));
    }

    #[test]
    fn test_english_stopwords() {
        let dir = setup_fixtures();
        run_on(&dir, &["-l", "en"]).success();

        let content = read_out(&dir, "word_count_data.csv");
        assert!(content.contains("Ana;Eu;1"));
        assert!(content.contains("Ana;De;1"));
    }

    #[test]
    fn test_custom_stopwords_file() {
        let dir = setup_fixtures();
        let list = dir.path().join("stop.txt");
        fs::write(&list, "# family words\ngatos\npizza\n").unwrap();

        run_on(&dir, &["--stopwords", list.to_str().unwrap()])
            .success()
            .stdout(predicate::str::contains("(2 words)"));

        let content = read_out(&dir, "word_count_data.csv");
        assert!(!content.contains("Gatos"));
        assert!(!content.contains("Pizza"));
        assert!(content.contains("Ana;Eu;1"));
    }

    #[test]
    fn test_missing_stopwords_file() {
        let dir = setup_fixtures();
        run_on(&dir, &["--stopwords", "/nonexistent/stop.txt"])
            .failure()
            .stderr(predicate::str::contains("❌ Error"));
    }

    #[test]
    fn test_rake_flags() {
        let dir = setup_fixtures();
        run_on(&dir, &["--rake-max-words", "1", "--unique-phrases", "--rake-metric", "frequency"])
            .success();

        let content = read_out(&dir, "rake_phrases.txt");
        for phrase in content.split("\n\n").filter(|p| !p.is_empty()) {
            assert!(!phrase.contains(' '), "multi-word phrase: {phrase}");
        }
    }

    #[test]
    fn test_help() {
        zapstats()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("zapstats"))
            .stdout(predicate::str::contains("--min-messages"));
    }

    #[test]
    fn test_version() {
        zapstats()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_missing_input_dir() {
        zapstats()
            .arg("/nonexistent/chats")
            .assert()
            .failure()
            .stderr(predicate::str::contains("❌ Error"))
            .stderr(predicate::str::contains("Cannot read chat directory"));
    }

    #[test]
    fn test_no_whatsapp_messages() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "title\njust some notes\n").unwrap();

        zapstats()
            .arg(dir.path())
            .arg("-o")
            .arg(dir.path().join("out"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("No messages found in 1 chat file(s)"));
    }

    #[test]
    fn test_malformed_file_skipped() {
        let dir = setup_fixtures();
        fs::write(dir.path().join("chats/03_broken.txt"), "no line break").unwrap();

        run_on(&dir, &[])
            .success()
            .stdout(predicate::str::contains("Skipped"));
    }

    #[test]
    fn test_malformed_file_strict() {
        let dir = setup_fixtures();
        fs::write(dir.path().join("chats/03_broken.txt"), "no line break").unwrap();

        run_on(&dir, &["--strict"])
            .failure()
            .stderr(predicate::str::contains("Missing export header"));
    }

    #[test]
    fn test_invalid_delimiter() {
        let dir = setup_fixtures();
        run_on(&dir, &["-d", ";;"]).failure();
    }
}
