use linediff::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn document_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-d]{0,2}", 0..20).prop_map(|lines| lines.join("\n"))
}

fn changes(result: &DiffResult) -> Vec<(LineRole, &str)> {
    result
        .hunks
        .iter()
        .flat_map(|h| &h.lines)
        .map(|l| (l.role, l.text.as_str()))
        .collect()
}

fn lcs_len(a: &Document, b: &Document) -> usize {
    let a: Vec<&str> = a.alignable_lines().iter().map(|l| l.text.as_str()).collect();
    let b: Vec<&str> = b.alignable_lines().iter().map(|l| l.text.as_str()).collect();
    align::lcs::lcs_len(&a, &b)
}

fn brute_lcs_len(a: &[&str], b: &[&str]) -> usize {
    match (a, b) {
        ([], _) | (_, []) => 0,
        ([x, a_rest @ ..], [y, b_rest @ ..]) if x == y => 1 + brute_lcs_len(a_rest, b_rest),
        ([_, a_rest @ ..], [_, b_rest @ ..]) => {
            brute_lcs_len(a_rest, b).max(brute_lcs_len(a, b_rest))
        }
    }
}

fn small_document_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[abc]", 0..8).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn test_minimality_against_brute_force(old in small_document_text(), new in small_document_text()) {
        let (a, b) = (tokenize(&old), tokenize(&new));
        let a_lines: Vec<&str> = a.alignable_lines().iter().map(|l| l.text.as_str()).collect();
        let b_lines: Vec<&str> = b.alignable_lines().iter().map(|l| l.text.as_str()).collect();
        let expected = a_lines.len() + b_lines.len() - 2 * brute_lcs_len(&a_lines, &b_lines);
        for algorithm in [Algorithm::Lcs, Algorithm::Myers] {
            let options = DiffOptions::default().with_algorithm(algorithm);
            prop_assert_eq!(align_with(&a, &b, &options).edit_distance(), expected);
        }
    }

    #[test]
    fn test_round_trip(old in document_text(), new in document_text()) {
        let (a, b) = (tokenize(&old), tokenize(&new));
        let script = align(&a, &b);
        prop_assert_eq!(script.replay_original(&a), old);
        prop_assert_eq!(script.replay_modified(&b), new);
    }

    #[test]
    fn test_identity(text in document_text(), context in 0usize..4) {
        let doc = tokenize(&text);
        prop_assert!(align(&doc, &doc).is_identity());
        let options = DiffOptions::default().with_context_lines(context);
        prop_assert!(compute_diff(&text, &text, &options).identical);
    }

    #[test]
    fn test_minimality(old in document_text(), new in document_text()) {
        let (a, b) = (tokenize(&old), tokenize(&new));
        let expected = a.alignable_lines().len() + b.alignable_lines().len() - 2 * lcs_len(&a, &b);
        for algorithm in [Algorithm::Lcs, Algorithm::Myers] {
            let options = DiffOptions::default().with_algorithm(algorithm);
            prop_assert_eq!(align_with(&a, &b, &options).edit_distance(), expected);
        }
    }

    #[test]
    fn test_determinism(old in document_text(), new in document_text(), context in 0usize..4) {
        let options = DiffOptions::default().with_context_lines(context);
        let first = compute_diff(&old, &new, &options);
        let second = compute_diff(&old, &new, &options);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_stats_match_script(old in document_text(), new in document_text(), context in 0usize..4) {
        let (a, b) = (tokenize(&old), tokenize(&new));
        let script = align(&a, &b);
        let options = DiffOptions::default().with_context_lines(context);
        let result = compute_diff(&old, &new, &options);
        prop_assert_eq!(result.stats.added, script.insertions());
        prop_assert_eq!(result.stats.removed, script.deletions());
        prop_assert_eq!(result.identical, script.is_identity());
    }
}

#[test]
fn test_empty_inputs_are_identical() {
    let result = compute_diff("", "", &DiffOptions::default());
    assert!(result.identical);
    assert!(result.hunks.is_empty());
}

#[test]
fn test_empty_to_single_line_is_one_insert() {
    let result = compute_diff("", "X", &DiffOptions::default());
    assert!(!result.identical);
    assert_eq!(changes(&result), vec![(LineRole::Added, "X")]);
}

#[test]
fn test_replaced_last_line() {
    let options = DiffOptions::default().with_context_lines(0);
    let result = compute_diff("Hello\nWorld", "Hello\nThere", &options);
    assert!(!result.identical);
    assert_eq!(result.hunks.len(), 1);
    assert_eq!(
        changes(&result),
        vec![(LineRole::Removed, "World"), (LineRole::Added, "There")]
    );
}

#[test]
fn test_deleted_middle_line_with_context() {
    let options = DiffOptions::default().with_context_lines(1);
    let result = compute_diff("A\nB\nC", "A\nC", &options);
    assert_eq!(result.hunks.len(), 1);
    assert_eq!(
        changes(&result),
        vec![
            (LineRole::Unchanged, "A"),
            (LineRole::Removed, "B"),
            (LineRole::Unchanged, "C")
        ]
    );
}

#[rstest]
#[case(Algorithm::Lcs)]
#[case(Algorithm::Myers)]
#[case(Algorithm::Auto)]
fn test_algorithms_agree_on_simple_replacement(#[case] algorithm: Algorithm) {
    let options = DiffOptions::default().with_algorithm(algorithm);
    let result = compute_diff("Hello\nWorld", "Hello\nThere", &options);
    assert_eq!(
        changes(&result),
        vec![(LineRole::Removed, "World"), (LineRole::Added, "There")]
    );
}

#[test]
fn test_trailing_newline_is_a_change() {
    let result = compute_diff("a", "a\n", &DiffOptions::default());
    assert_eq!(changes(&result), vec![(LineRole::Added, "")]);
}

#[test]
fn test_newline_against_empty_adds_two_empty_lines() {
    // "\n" is two empty lines, while "" has no alignable lines at all
    let result = compute_diff("", "\n", &DiffOptions::default());
    assert_eq!(
        changes(&result),
        vec![(LineRole::Added, ""), (LineRole::Added, "")]
    );
    assert_eq!(result.stats, DiffStats { added: 2, removed: 0 });
}

#[test]
fn test_line_ending_only_change_is_identical() {
    assert!(compute_diff("a\r\nb\r\n", "a\nb\n", &DiffOptions::default()).identical);
}

#[test]
fn test_guard_on_fully_different_inputs() {
    let old: String = (0..400).map(|i| format!("old {i}\n")).collect();
    let new: String = (0..400).map(|i| format!("new {i}\n")).collect();
    // 401 lines a side, past a 10_000 cell table; the trailing empty
    // lines match but stay out of a zero-context hunk
    let options = DiffOptions::default().with_max_table_cells(10_000);
    let result = compute_diff(&old, &new, &options);
    assert_eq!(result.stats, DiffStats { added: 400, removed: 400 });
    assert_eq!(result.hunks.len(), 1);
    let roles: Vec<LineRole> = result.hunks[0].lines.iter().map(|l| l.role).collect();
    let expected: Vec<LineRole> = std::iter::repeat(LineRole::Removed)
        .take(400)
        .chain(std::iter::repeat(LineRole::Added).take(400))
        .collect();
    assert_eq!(roles, expected);
}

#[test]
fn test_large_input_uses_guard() {
    let old: String = (0..300).map(|i| format!("line {i}\n")).collect();
    let new = old.replace("line 150\n", "changed\n");
    let options = DiffOptions::default()
        .with_context_lines(1)
        .with_max_table_cells(1_000);
    let result = compute_diff(&old, &new, &options);
    assert_eq!(result.hunks.len(), 1);
    assert_eq!(
        changes(&result),
        vec![
            (LineRole::Unchanged, "line 149"),
            (LineRole::Removed, "line 150"),
            (LineRole::Added, "changed"),
            (LineRole::Unchanged, "line 151"),
        ]
    );
}

#[test]
fn test_options_from_json_drive_diff() {
    let options = DiffOptions::from_json(r#"{"contextLines": 1, "escape": "html"}"#).unwrap();
    let result = compute_diff("<a>\nb", "<a>\nc", &options);
    assert_eq!(
        changes(&result),
        vec![
            (LineRole::Unchanged, "&lt;a&gt;"),
            (LineRole::Removed, "b"),
            (LineRole::Added, "c")
        ]
    );
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let old = format!("a\nb\n{i}");
                compute_diff(&old, "a\nb\nz", &DiffOptions::default())
            })
        })
        .collect();
    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.stats, DiffStats { added: 1, removed: 1 });
    }
}
