use goldcheck_engine::{check_corpus, CorpusConfig, CorpusReport};
use std::path::PathBuf;

pub fn run(root: String, inputs_dir_name: String, expected_dir_name: String, json_output: bool) {
    let config = CorpusConfig {
        corpus_root: PathBuf::from(root),
        expected_dir_name,
        inputs_dir_name,
    };

    let report = check_corpus(&config).unwrap_or_else(|err| {
        eprintln!("error: corpus-check failed: {err}");
        std::process::exit(2);
    });

    if json_output {
        let rendered = serde_json::to_string_pretty(&report).unwrap_or_else(|err| {
            eprintln!("error: failed to render corpus report JSON: {err}");
            std::process::exit(2);
        });
        println!("{rendered}");
    } else {
        print_human_report(&report);
    }

    if !report.is_clean() {
        std::process::exit(1);
    }
}

fn print_human_report(report: &CorpusReport) {
    if report.is_clean() {
        println!(
            "Corpus contract check: OK ({} files)",
            report.documents_checked
        );
        return;
    }

    println!("Corpus contract check: FAILED");
    for line in report.report_lines() {
        println!(" - {line}");
    }
}
