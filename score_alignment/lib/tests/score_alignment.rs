use std::collections::HashSet;
use std::io::Write;

use alignment_quality::{
    parse_aligned_fasta, read_aligned_fasta, score_alignment, AlignmentTable, ScoreError, ScoreParams,
};
use approx::assert_relative_eq;

// column 5 is gap in every sequence, columns 0-3 are gapped in one of three,
// columns 6-9 only carry residues in the first sequence
fn three_sequence_table() -> AlignmentTable {
    AlignmentTable::from_records(vec![
        ("seq0", true, "-CD-F-GHIK"),
        ("seq1", true, "A-DEF-----"),
        ("seq2", true, "AC-EF-----"),
    ])
}

fn untrimmed(cutoff: f64) -> ScoreParams {
    ScoreParams { sparse_column_cutoff: cutoff, align_trim: (0.0, 1.0) }
}

#[test]
fn two_of_three_gaps_stay_dense_at_default_cutoff() {
    let scored = score_alignment(&three_sequence_table(), &untrimmed(0.8)).unwrap();
    // nine columns remain and none reaches 80% gaps
    let expected_missing = [2.0 / 9.0, 5.0 / 9.0, 5.0 / 9.0];
    for (row, missing) in expected_missing.iter().enumerate() {
        let score = scored.score(row).unwrap();
        assert_relative_eq!(score.fx_in_sparse, 0.0);
        assert_relative_eq!(score.fx_missing_dense, *missing);
        assert_eq!(score.sparse_run_length, 0);
    }
}

#[test]
fn insertion_shows_up_as_sparse_run() {
    let scored = score_alignment(&three_sequence_table(), &untrimmed(0.6)).unwrap();
    let first = scored.score(0).unwrap();
    assert_relative_eq!(first.fx_in_sparse, 4.0 / 9.0);
    assert_relative_eq!(first.fx_missing_dense, 2.0 / 5.0);
    assert_eq!(first.sparse_run_length, 4);
    for row in 1..3 {
        let score = scored.score(row).unwrap();
        assert_relative_eq!(score.fx_in_sparse, 0.0);
        assert_relative_eq!(score.fx_missing_dense, 1.0 / 5.0);
        assert_eq!(score.sparse_run_length, 0);
    }
}

#[test]
fn rescoring_is_identical() {
    let table = three_sequence_table();
    let params = untrimmed(0.6);
    let first = score_alignment(&table, &params).unwrap();
    let second = score_alignment(&table, &params).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.table, table);
}

#[test]
fn unkept_rows_keep_their_place_without_scores() {
    let table = AlignmentTable::from_records(vec![
        ("a", true, "ACDEFGHIKL"),
        ("b", false, "??????????"),
        ("c", true, "ACDEF-----"),
        ("d", false, "short"),
        ("e", true, "ACDEFGHIK-"),
    ]);
    let scored = score_alignment(&table, &ScoreParams::default()).unwrap();
    assert_eq!(scored.scores.len(), 5);
    assert!(scored.score(1).is_none());
    assert!(scored.score(3).is_none());
    assert!(scored.score(0).is_some());
    assert!(scored.score(2).is_some());
    assert!(scored.score(4).is_some());
    // trimmed to columns 1..9, 'c' misses four of eight dense columns
    assert_relative_eq!(scored.score(2).unwrap().fx_missing_dense, 4.0 / 8.0);
}

#[test]
fn all_gap_sequence_fails_as_empty_alignment() {
    let table = AlignmentTable::from_records(vec![("only", true, "--------")]);
    let err = score_alignment(&table, &ScoreParams::default()).unwrap_err();
    assert!(err.is_empty_alignment());
    assert!(matches!(err, ScoreError::EmptyAlignment { .. }));
}

#[test]
fn single_column_alignment_is_nudged_open() {
    let table = AlignmentTable::from_records(vec![("a", true, "A"), ("b", true, "C")]);
    let params = ScoreParams { sparse_column_cutoff: 0.8, align_trim: (0.1, 0.4) };
    let scored = score_alignment(&table, &params).unwrap();
    assert_relative_eq!(scored.score(0).unwrap().fx_missing_dense, 0.0);
}

#[test]
fn uneven_alignment_fails() {
    let table = AlignmentTable::from_records(vec![("a", true, "ACDE"), ("b", true, "ACD")]);
    let err = score_alignment(&table, &ScoreParams::default()).unwrap_err();
    assert!(matches!(err, ScoreError::UnevenAlignment { .. }));
    assert!(err.to_string().contains("alignment"));
}

#[test]
fn fasta_file_to_scored_tsv() {
    let dir = tempfile::tempdir().unwrap();
    let fasta_path = dir.path().join("aln.fasta");
    let mut fasta = std::fs::File::create(&fasta_path).unwrap();
    write!(fasta, ">seq0\n-CD-F-\nGHIK\n>seq1\nA-DEF-----\n>seq2\nAC-EF-----\n>drop\nACDEFGHIKL\n").unwrap();
    drop(fasta);

    let records = read_aligned_fasta(&fasta_path).unwrap();
    let exclude: HashSet<String> = ["drop".to_string()].into_iter().collect();
    let table = AlignmentTable::from_fasta(records, &exclude);
    let scored = score_alignment(&table, &untrimmed(0.6)).unwrap();

    let out_path = dir.path().join("aln.fasta_scores.tsv");
    scored.write_tsv_path(&out_path).unwrap();
    let text = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "name\tkeep\talignment\tfx_in_sparse\tfx_missing_dense\tsparse_run_length");
    assert!(lines[1].starts_with("seq0\tTrue\t-CD-F-GHIK\t"));
    assert!(lines[1].ends_with("\t0.4\t4"));
    assert_eq!(lines[4], "drop\tFalse\tACDEFGHIKL\t\t\t");
}

#[test]
fn tsv_table_keeps_extra_columns() {
    let input = "id\tkeep\tspecies\talignment\n1\tTrue\thuman\tACDE\n2\tFalse\tmouse\tAC--\n3\t1\tfly\tA-DE\n";
    let table = AlignmentTable::parse_tsv(input.as_bytes(), "mem").unwrap();
    let scored = score_alignment(&table, &untrimmed(0.5)).unwrap();
    let mut out = Vec::new();
    scored.write_tsv(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "id\tkeep\tspecies\talignment\tfx_in_sparse\tfx_missing_dense\tsparse_run_length");
    assert_eq!(lines[2], "2\tFalse\tmouse\tAC--\t\t\t");
    // column 1 is half gaps and sparse, fly has no residue there
    assert_eq!(lines[1], "1\tTrue\thuman\tACDE\t0.25\t0\t1");
    assert_eq!(lines[3], "3\t1\tfly\tA-DE\t0\t0\t0");
}

#[test]
fn fasta_parse_errors_surface() {
    let err = parse_aligned_fasta("ACDE\n".as_bytes(), "mem").unwrap_err();
    assert!(matches!(err, ScoreError::Parse { .. }));
}

#[test]
fn non_ascii_residues_score_as_gaps() {
    let accented = AlignmentTable::from_records(vec![("a", true, "AÇDE"), ("b", true, "ACDE")]);
    let gapped = AlignmentTable::from_records(vec![("a", true, "A-DE"), ("b", true, "ACDE")]);
    let params = untrimmed(0.5);
    let from_accented = score_alignment(&accented, &params).unwrap();
    let from_gapped = score_alignment(&gapped, &params).unwrap();
    assert_eq!(from_accented.scores, from_gapped.scores);
}
