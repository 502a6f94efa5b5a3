//! End-to-end tests for the analysis pipeline.

use docrank::{
    analyze_text, process_batch, Analyzer, JobSpec, PersonaProfile, Pipeline, PipelineOptions,
    PlainTextExtractor, RawDocument, RunConfig,
};
use std::io::Write;

fn run(doc_text: &str, persona: &str, job: &str) -> docrank::AnalysisResult {
    analyze_text("doc.txt", doc_text, persona, job)
}

// ==================== Ranking Scenarios ====================

#[test]
fn test_food_contractor_menu_over_travel() {
    let result = run(
        "MENU\nrecipe ingredients breakfast\nTRAVEL\nflight hotel",
        "Food Contractor",
        "Plan vegetarian lunch menu",
    );

    assert_eq!(result.sections.len(), 2);
    assert_eq!(result.sections[0].title, "MENU");
    assert_eq!(result.sections[0].rank, 1);
    assert_eq!(result.sections[1].title, "TRAVEL");
    assert_eq!(result.sections[1].rank, 2);
}

#[test]
fn test_unknown_persona_never_raises() {
    let result = run(
        "MENU\nplan the lunch service\nNOTES:\nnothing relevant here",
        "Astronaut",
        "Plan lunch",
    );

    // persona contributes nothing; job tokens still rank the menu first
    assert_eq!(result.sections[0].title, "MENU");
    assert!(result.sections[0].score > 0);
    assert_eq!(result.sections[1].score, 0);
}

#[test]
fn test_rank_values_form_exact_set() {
    let text = (0..9)
        .map(|i| format!("SECTION {i}:\nbody line {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let result = run(&text, "Student", "Review material");

    let n = result.sections.len();
    let mut ranks: Vec<usize> = result.sections.iter().map(|s| s.rank).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, (1..=n).collect::<Vec<_>>());
}

#[test]
fn test_ranking_preserves_section_count() {
    let text = "ALPHA\none\nBETA\ntwo\nGAMMA\nthree";
    let result = run(text, "Researcher", "Survey data");
    assert_eq!(result.sections.len(), 3);
    assert_eq!(result.metadata.total_sections, 3);
}

#[test]
fn test_scoring_is_deterministic() {
    let text = "MENU\nrecipe ingredients\nSTUDY GUIDE\ncourse assignment research";
    let first = run(text, "Student", "Prepare for the university course exam");
    let second = run(text, "Student", "Prepare for the university course exam");

    for (a, b) in first.sections.iter().zip(second.sections.iter()) {
        assert_eq!(a.title, b.title);
        assert_eq!(a.score, b.score);
        assert_eq!(a.rank, b.rank);
    }
}

// ==================== Degradation & Edge Cases ====================

#[test]
fn test_empty_document_is_valid() {
    let result = run("", "Food Contractor", "Plan lunch");
    assert_eq!(result.sections.len(), 0);
    assert_eq!(result.metadata.total_sections, 0);
    assert_eq!(result.metadata.processing_time, "completed");
}

#[test]
fn test_unreadable_file_degrades_to_fallback() {
    let pipeline = Pipeline::new();
    let config = RunConfig::new("Student", "Review notes");
    let result = pipeline.process_file(
        &PlainTextExtractor::new(),
        std::path::Path::new("/no/such/file.txt"),
        &config,
    );

    assert!(result.is_degraded());
    assert_eq!(result.sections.len(), 1);
    assert_eq!(result.sections[0].rank, 1);
    assert!(!result.sections[0].body.is_empty());
    assert_eq!(result.metadata.persona, "Student");
}

#[test]
fn test_batch_reports_counts_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.txt");
    writeln!(
        std::fs::File::create(&good).unwrap(),
        "MENU\nrecipe ingredients"
    )
    .unwrap();

    let paths = vec![good, dir.path().join("absent.txt")];
    let summary = process_batch(
        &paths,
        &PlainTextExtractor::new(),
        &RunConfig::default(),
        &Pipeline::new(),
    );

    assert_eq!(summary.total(), 2);
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.degraded, 1);
    assert!(summary.finished_at >= summary.started_at);
}

#[test]
fn test_empty_batch_is_empty_result_set() {
    let summary = process_batch(
        &[],
        &PlainTextExtractor::new(),
        &RunConfig::default(),
        &Pipeline::new(),
    );
    assert!(summary.results.is_empty());
}

// ==================== Output Schema ====================

#[test]
fn test_output_record_matches_schema() {
    let result = run(
        "MENU\nThis section describes the catering menu with every recipe and its ingredients in depth.",
        "Food Contractor",
        "Plan lunch",
    );
    let json = serde_json::to_value(&result).unwrap();

    assert!(json["filename"].is_string());
    assert!(json["content"].is_string());
    assert!(json["sections"].is_array());
    assert!(json["tables"].is_array());
    assert!(json["images"].is_array());

    let section = &json["sections"][0];
    for field in ["title", "content", "page", "score", "rank", "subsection_analysis"] {
        assert!(!section[field].is_null(), "missing section field {field}");
    }
    let insight = &section["subsection_analysis"][0];
    for field in ["paragraph", "content", "key_points", "relevance_score"] {
        assert!(!insight[field].is_null(), "missing insight field {field}");
    }

    let metadata = &json["metadata"];
    assert_eq!(metadata["persona"], "Food Contractor");
    assert_eq!(metadata["job_to_be_done"], "Plan lunch");
    assert_eq!(metadata["processing_time"], "completed");
}

#[test]
fn test_content_budget_enforced() {
    let body = format!("HEADER\n{}", "long text line\n".repeat(1000));
    let analyzer = Analyzer::new()
        .with_persona("Student")
        .with_job("Review")
        .with_content_budget(500);
    let result = analyzer.analyze_text("big.txt", &body);
    assert!(result.content.chars().count() <= 500);
}

// ==================== Document-Order Properties ====================

#[test]
fn test_ties_keep_document_order() {
    // four sections with identical (zero) scores for this persona
    let text = "AAA\nfirst body\nBBB\nsecond body\nCCC\nthird body\nDDD\nfourth body";
    let result = run(&text, "Astronaut", "xxxx");

    let titles: Vec<&str> = result.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["AAA", "BBB", "CCC", "DDD"]);
}

#[test]
fn test_segmentation_is_lossless_modulo_blanks() {
    let doc = RawDocument::from_text(
        "doc.txt",
        "leading text\n\nCHAPTER ONE\nbody a\nbody b\n\nSummary:\nfinal words\n",
    );
    let (profile, job) = (
        PersonaProfile::named("Student"),
        JobSpec::new("Review notes"),
    );
    // disable ranking effects on order by checking bodies as a set of lines
    let pipeline = Pipeline::with_options(PipelineOptions::new().with_length_bonus(false));
    let result = pipeline.run(&doc, &profile, &job);

    let mut reconstructed: Vec<String> = result
        .sections
        .iter()
        .flat_map(|s| s.body.lines().map(|l| l.to_string()))
        .collect();
    reconstructed.sort();

    let mut original: Vec<String> = doc
        .full_text()
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect();
    original.sort();

    assert_eq!(reconstructed, original);
}

#[test]
fn test_insights_capped_for_huge_bodies() {
    // the segmenter joins a section's non-blank lines with single
    // newlines, so paragraph boundaries only reach the analyzer through
    // its own input; feed it a body with 100 real paragraphs
    let body: Vec<String> = (0..100)
        .map(|i| format!("Paragraph {i} carries enough characters to clear the length filter."))
        .collect();
    let insights = docrank::SubsectionAnalyzer::new().analyze(
        &body.join("\n\n"),
        &PersonaProfile::named("Student"),
    );
    assert_eq!(insights.len(), 3);
    assert_eq!(
        insights.iter().map(|i| i.paragraph).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    // end-to-end, a section's insight list stays within the same bound
    let text = format!("NOTES:\n{}", body.join("\n"));
    let result = run(&text, "Student", "Review");
    for section in &result.sections {
        assert!(section.subsection_analysis.len() <= 3);
    }
}
