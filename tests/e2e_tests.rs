//! End-to-end integration tests
//!
//! These tests validate the complete settlement pipeline using predefined
//! CSV fixtures. Each successful fixture:
//! 1. Reads banks.csv and transactions.csv from a fixture directory
//! 2. Settles the debts through the CSV input strategy
//! 3. Renders the text report
//! 4. Compares the report with expected.txt
//!
//! Failing fixtures have no expected.txt; they are checked against the error
//! kind the run must end with, and must not produce any report output.
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Single transfers and chains that collapse into one transfer
//! - Payment mode constraints that skip the largest creditor
//! - Debtor ordering and tie-breaking
//! - Cycles that net out, self-debts and unknown bank names
//! - Error conditions (incompatible modes, malformed amounts, invalid banks)

#[cfg(test)]
mod tests {
    use cash_flow_minimizer::strategy::{run, CsvInputStrategy};
    use cash_flow_minimizer::types::ErrorKind;
    use cash_flow_minimizer::ReportConfig;
    use rstest::rstest;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn fixture_dir(fixture_name: &str) -> PathBuf {
        Path::new("tests/fixtures").join(fixture_name)
    }

    fn strategy_for(fixture_name: &str) -> CsvInputStrategy {
        let dir = fixture_dir(fixture_name);
        let banks_path = dir.join("banks.csv");
        let transactions_path = dir.join("transactions.csv");

        assert!(
            banks_path.exists(),
            "Banks file not found: {}",
            banks_path.display()
        );
        assert!(
            transactions_path.exists(),
            "Transactions file not found: {}",
            transactions_path.display()
        );

        CsvInputStrategy::new(banks_path, transactions_path)
    }

    /// Run a fixture and compare the text report with expected.txt
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - Fixture files cannot be read
    /// - The run fails
    /// - Output doesn't match expected
    fn run_test_fixture(fixture_name: &str) {
        let expected_path = fixture_dir(fixture_name).join("expected.txt");
        let expected_output = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
            panic!(
                "Failed to read expected file {}: {}",
                expected_path.display(),
                e
            )
        });

        let mut strategy = strategy_for(fixture_name);
        let mut output = Vec::new();
        run(&mut strategy, &ReportConfig::default(), &mut output)
            .unwrap_or_else(|e| panic!("Failed to settle fixture {}: {}", fixture_name, e));

        let actual_output = String::from_utf8(output).expect("Report is not UTF-8");

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    /// End-to-end test for all fixtures that settle successfully
    #[rstest]
    #[case("simple_match")]
    #[case("multi_party_chain")]
    #[case("mode_constrained")]
    #[case("greedy_ordering")]
    #[case("netted_cycle")]
    #[case("unknown_banks")]
    #[case("self_debt")]
    #[case("no_transactions")]
    #[case("whitespace_padding")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }

    /// End-to-end test for fixtures that must fail without output
    #[rstest]
    #[case("incompatible_modes", ErrorKind::IncompatiblePaymentModes)]
    #[case("invalid_amount", ErrorKind::InvalidInput)]
    #[case("non_positive_amount", ErrorKind::InvalidInput)]
    #[case("duplicate_bank", ErrorKind::InvalidInput)]
    #[case("bank_without_modes", ErrorKind::InvalidInput)]
    #[case("empty_banks", ErrorKind::InvalidInput)]
    fn test_failing_fixtures(#[case] fixture: &str, #[case] expected: ErrorKind) {
        let mut strategy = strategy_for(fixture);
        let mut output = Vec::new();

        let err = run(&mut strategy, &ReportConfig::default(), &mut output)
            .expect_err("fixture should fail");

        assert_eq!(err.kind(), expected, "unexpected error: {}", err);
        assert!(output.is_empty(), "no report should be written on failure");
    }
}
