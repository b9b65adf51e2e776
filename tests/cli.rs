use std::io::Cursor;

use clap::Parser;
use sortbench::{
    cli::{CompareArgs, WordsArgs},
    Algorithm, StatPrintFormat,
};


fn run_compare(args: &[&str]) -> anyhow::Result<(String, String)> {
    let args = CompareArgs::try_parse_from(args)?;
    let mut out = vec![];
    let mut err = vec![];
    args.run_with(&mut out, &mut err)?;
    Ok((String::from_utf8(out)?, String::from_utf8(err)?))
}

fn run_words(args: &[&str], input: &[u8]) -> anyhow::Result<String> {
    let args = WordsArgs::try_parse_from(args)?;
    let mut out = vec![];
    args.run_with(Cursor::new(input), &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_parse_positional_arguments() -> anyhow::Result<()> {
    let args =
        CompareArgs::try_parse_from(["sortbench", "ShellSort", "InsertionSort", "1000", "10"])?;
    assert_eq!(args.alg1, Algorithm::ShellSort);
    assert_eq!(args.alg2, Algorithm::InsertionSort);
    assert_eq!(args.n.get(), 1000);
    assert_eq!(args.trials.get(), 10);
    assert_eq!(args.profile, "default");
    assert!(!args.stats);
    assert_eq!(args.stat_format, None);
    Ok(())
}

#[test]
fn test_unknown_algorithm_is_rejected() {
    let err = CompareArgs::try_parse_from(["sortbench", "QuickSort", "ShellSort", "10", "1"])
        .unwrap_err();
    assert!(err.to_string().contains("QuickSort"), "{}", err);
    let err = CompareArgs::try_parse_from(["sortbench", "ShellSort", "shellsort", "10", "1"])
        .unwrap_err();
    assert!(err.to_string().contains("shellsort"), "{}", err);
}

#[test]
fn test_malformed_counts_are_rejected() {
    for (n, t) in [("0", "1"), ("1", "0"), ("abc", "1"), ("1", "-3"), ("1.5", "2")] {
        assert!(
            CompareArgs::try_parse_from(["sortbench", "ShellSort", "BubbleSort", n, t]).is_err(),
            "N = {}, T = {}",
            n,
            t
        );
    }
    assert!(CompareArgs::try_parse_from(["sortbench", "ShellSort", "BubbleSort", "10"]).is_err());
}

#[test]
fn test_compare_prints_result() -> anyhow::Result<()> {
    let (out, err) = run_compare(&[
        "sortbench",
        "SelectionSort",
        "BubbleSort",
        "64",
        "2",
        "--seed",
        "3",
    ])?;
    let lines = out.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "For 64 random floats");
    assert!(lines[1].starts_with("SelectionSort is faster than BubbleSort "));
    assert!(err.is_empty());
    Ok(())
}

#[test]
fn test_compare_prints_stats() -> anyhow::Result<()> {
    let _guard = helper::SYNC.lock().unwrap();
    std::env::remove_var("SORTBENCH_LOG_STAT_FORMAT");
    let (_, err) = run_compare(&[
        "sortbench",
        "InsertionSort",
        "ShellSort",
        "32",
        "2",
        "--seed",
        "1",
        "--count-ops",
        "--stat-format",
        "yaml",
        "--warmup",
        "1",
    ])?;
    assert_eq!(err.matches("Sortbench Statistics Totals").count(), 2);
    assert_eq!(err.matches("End Sortbench Statistics").count(), 2);
    assert!(err.contains("InsertionSort"));
    assert!(err.contains("ShellSort"));
    assert!(err.contains("n: 32\n"));
    assert!(err.contains("trials: 2\n"));
    assert!(err.contains("comparisons: "));
    assert!(err.contains("exchanges: "));
    Ok(())
}

#[test]
fn test_stat_format_values() -> anyhow::Result<()> {
    let args = CompareArgs::try_parse_from([
        "sortbench",
        "ShellSort",
        "ShellSort",
        "5",
        "1",
        "--stat-format",
        "table",
    ])?;
    assert_eq!(args.stat_format, Some(StatPrintFormat::Table));
    assert!(CompareArgs::try_parse_from([
        "sortbench",
        "ShellSort",
        "ShellSort",
        "5",
        "1",
        "--stat-format",
        "json",
    ])
    .is_err());
    Ok(())
}

#[test]
fn test_words_times_every_algorithm_by_default() -> anyhow::Result<()> {
    let out = run_words(&["sortwords"], b"pear fig\napple  kiwi\n")?;
    let lines = out.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "Len: 4");
    assert_eq!(lines.len(), 5);
    for (line, alg) in lines[1..].iter().zip(Algorithm::ALL) {
        assert!(line.starts_with(&format!("{}: ", alg)), "{}", line);
    }
    assert!(!out.contains("Error: not sorted"));
    Ok(())
}

#[test]
fn test_words_show() -> anyhow::Result<()> {
    let out = run_words(
        &["sortwords", "BubbleSort", "ShellSort", "--show"],
        b"banana apple\ncherry\tapple\n",
    )?;
    let lines = out.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("BubbleSort: "));
    assert_eq!(lines[2], "apple apple banana cherry");
    assert!(lines[3].starts_with("ShellSort: "));
    assert_eq!(lines[4], "apple apple banana cherry");
    Ok(())
}

#[test]
fn test_words_empty_input() -> anyhow::Result<()> {
    let out = run_words(&["sortwords", "InsertionSort"], b"")?;
    assert!(out.starts_with("Len: 0\nInsertionSort: "));
    Ok(())
}

#[test]
fn test_words_read_error_is_returned() {
    let result = run_words(&["sortwords"], &[0xff, 0xfe, b'\n']);
    assert!(result.is_err());
}
