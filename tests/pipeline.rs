//! End-to-end pipeline tests
//!
//! Drives the hhreport binary against a temporary data directory and
//! checks the produced artifacts.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HEADER: &str = "Mthly_HH_Income,Mthly_HH_Expense,Emi_or_Rent_Amt,Annual_HH_Income,No_of_Fly_Members,No_of_Earning_Members,Highest_Qualified_Member";

/// Three rows, one with a non-numeric monthly income.
fn sample_csv() -> String {
    format!(
        "{HEADER}\n\
         5000,2000,800,60000,4,1,Graduate\n\
         oops,3000,0,84000,5,2,Post-Graduate\n\
         9000,4500,1200,108000,3,2,Professional\n"
    )
}

fn setup(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let input = dir.path().join("transactions.csv");
    std::fs::write(&input, sample_csv()).unwrap();
    let output = dir.path().join("output");
    (input, output)
}

fn run(input: &std::path::Path, output: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("hhreport").unwrap();
    cmd.arg("--input").arg(input).arg("--output-dir").arg(output);
    cmd
}

#[test]
fn produces_all_four_artifacts() {
    let dir = TempDir::new().unwrap();
    let (input, output) = setup(&dir);

    run(&input, &output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reports generated successfully!"));

    for name in [
        "financial_summary.xlsx",
        "income_vs_expense.png",
        "earning_members_pie_chart.png",
        "household_financial_report.pdf",
    ] {
        let path = output.join(name);
        assert!(path.exists(), "missing artifact {}", name);
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}

#[test]
fn report_has_one_block_per_row_with_missing_marker() {
    let dir = TempDir::new().unwrap();
    let (input, output) = setup(&dir);

    run(&input, &output).assert().success();

    let doc = lopdf::Document::load(output.join("household_financial_report.pdf")).unwrap();
    let pages: Vec<u32> = (1..=doc.get_pages().len() as u32).collect();
    let text = doc.extract_text(&pages).unwrap();

    assert!(text.contains("Household Financial Report"));
    assert!(text.contains("Household 1:"));
    assert!(text.contains("Household 2:"));
    assert!(text.contains("Household 3:"));
    assert!(!text.contains("Household 4:"));

    // The unparsable income surfaces as the missing marker, and the raw
    // text never leaks through.
    assert!(text.contains("Monthly Household Income: NaN"));
    assert!(!text.contains("oops"));
}

#[test]
fn report_embeds_two_chart_images() {
    let dir = TempDir::new().unwrap();
    let (input, output) = setup(&dir);

    run(&input, &output).assert().success();

    let doc = lopdf::Document::load(output.join("household_financial_report.pdf")).unwrap();
    let image_count = doc
        .objects
        .values()
        .filter(|obj| match obj {
            lopdf::Object::Stream(s) => s
                .dict
                .get(b"Subtype")
                .and_then(|o| o.as_name())
                .map(|name| name == b"Image")
                .unwrap_or(false),
            _ => false,
        })
        .count();

    // Bar chart and pie chart, nothing else.
    assert_eq!(image_count, 2);
}

#[test]
fn spreadsheet_is_idempotent_across_runs() {
    let dir = TempDir::new().unwrap();
    let (input, output) = setup(&dir);

    run(&input, &output).assert().success();
    let first = std::fs::read(output.join("financial_summary.xlsx")).unwrap();

    run(&input, &output).assert().success();
    let second = std::fs::read(output.join("financial_summary.xlsx")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn stale_output_files_are_left_in_place() {
    let dir = TempDir::new().unwrap();
    let (input, output) = setup(&dir);
    std::fs::create_dir_all(&output).unwrap();
    std::fs::write(output.join("unrelated.txt"), b"keep me").unwrap();

    run(&input, &output).assert().success();

    assert_eq!(
        std::fs::read(output.join("unrelated.txt")).unwrap(),
        b"keep me"
    );
}

#[test]
fn missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("output");

    run(&dir.path().join("absent.csv"), &output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input error"));
}

#[test]
fn missing_required_column_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("partial.csv");
    std::fs::write(&input, "Mthly_HH_Income,Mthly_HH_Expense\n5000,2000\n").unwrap();

    run(&input, &dir.path().join("output"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required column"));
}
