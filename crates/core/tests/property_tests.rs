use proptest::prelude::*;
use sloc_core::classifier::count_significant_lines;
use sloc_core::language::{LanguageSpec, SUPPORTED_EXTENSIONS};
use sloc_core::report::{FileResult, ScanReport};

fn all_languages() -> impl Iterator<Item = &'static LanguageSpec> {
    SUPPORTED_EXTENSIONS
        .iter()
        .filter_map(|ext| LanguageSpec::from_extension(ext))
}

proptest! {
    #[test]
    fn test_whitespace_only_text_has_no_sloc(
        content in "[ \t\r\n]{0,200}"
    ) {
        for spec in all_languages() {
            prop_assert_eq!(count_significant_lines(&content, spec), 0, "{}", spec.name);
        }
    }

    #[test]
    fn test_inline_comment_lines_have_no_sloc(
        bodies in prop::collection::vec("[a-z0-9 ]{0,30}", 0..20),
        indent in "[ \t]{0,4}"
    ) {
        for spec in all_languages().filter(|s| s.has_inline_comments()) {
            let text: String = bodies
                .iter()
                .map(|body| format!("{indent}{}{body}\n", spec.inline))
                .collect();
            prop_assert_eq!(count_significant_lines(&text, spec), 0, "{}", spec.name);
        }
    }

    #[test]
    fn test_plain_code_lines_all_count(
        lines in prop::collection::vec("[a-z][a-z0-9 =;]{0,30}", 0..30)
    ) {
        let text = lines.join("\n");
        for spec in all_languages() {
            prop_assert_eq!(count_significant_lines(&text, spec), lines.len(), "{}", spec.name);
        }
    }

    #[test]
    fn test_report_total_is_sum_of_items(
        counts in prop::collection::vec(("[a-z/]{1,40}", 0usize..100_000), 0..64)
    ) {
        let report: ScanReport = counts
            .iter()
            .map(|(path, sloc)| FileResult::new(path.clone(), *sloc))
            .collect();

        let sum: usize = report.items().iter().map(|i| i.sloc).sum();
        let widest = report.items().iter().map(FileResult::width).max().unwrap_or(0);
        prop_assert_eq!(report.total(), sum);
        prop_assert_eq!(report.max_path_len(), widest);
        prop_assert_eq!(report.len(), counts.len());
    }
}

#[test]
fn test_block_comment_between_two_code_lines() {
    for spec in all_languages().filter(|s| s.has_block_comments()) {
        let text = format!(
            "first\n{} line two\nline three\nline four {}\nlast\n",
            spec.block_start, spec.block_end
        );
        assert_eq!(count_significant_lines(&text, spec), 2, "{}", spec.name);
    }
}
