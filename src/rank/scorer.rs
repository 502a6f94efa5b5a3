//! Section scoring and stable ranking.

use crate::model::{JobSpec, PersonaProfile, RankedSection, Section};

/// Weight for a persona keyword present in the section body.
const BODY_KEYWORD_WEIGHT: i64 = 2;

/// Weight for a persona keyword present in the section title.
const TITLE_KEYWORD_WEIGHT: i64 = 3;

/// Weight for a job token present in the section body.
const JOB_TOKEN_WEIGHT: i64 = 1;

/// Body length above which the length bonus applies.
const LENGTH_BONUS_THRESHOLD: usize = 200;

/// Scoring policy knobs.
#[derive(Debug, Clone)]
pub struct ScoreOptions {
    /// Award +1 to sections whose body exceeds 200 characters.
    /// On by default.
    pub length_bonus: bool,
}

impl ScoreOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the length bonus.
    pub fn with_length_bonus(mut self, enabled: bool) -> Self {
        self.length_bonus = enabled;
        self
    }
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self { length_bonus: true }
    }
}

/// Scores sections against a persona profile and a job, then ranks them.
///
/// Scoring is a pure function of its inputs: the same sections, profile
/// and job always produce identical scores and ranks.
#[derive(Debug, Default)]
pub struct RelevanceScorer {
    options: ScoreOptions,
}

impl RelevanceScorer {
    /// Create a scorer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with explicit options.
    pub fn with_options(options: ScoreOptions) -> Self {
        Self { options }
    }

    /// Score a single section.
    ///
    /// `score = 2 × persona keywords in body + 3 × persona keywords in
    /// title + 1 × job tokens (length > 3) in body`, plus the optional
    /// length bonus. Each keyword counts once per field regardless of how
    /// often it occurs.
    pub fn score(&self, section: &Section, profile: &PersonaProfile, job: &JobSpec) -> i64 {
        let body_lower = section.body.to_lowercase();
        let title_lower = section.title.to_lowercase();

        let mut score = BODY_KEYWORD_WEIGHT * profile.hits_in(&body_lower) as i64
            + TITLE_KEYWORD_WEIGHT * profile.hits_in(&title_lower) as i64;

        score += JOB_TOKEN_WEIGHT
            * job
                .tokens()
                .iter()
                .filter(|t| body_lower.contains(t.as_str()))
                .count() as i64;

        if self.options.length_bonus && section.body.chars().count() > LENGTH_BONUS_THRESHOLD {
            score += 1;
        }

        score
    }

    /// Score all sections and return them in descending score order with
    /// 1-based ranks assigned.
    ///
    /// The sort is stable, so sections with equal scores keep their
    /// original document order. Ranks always form exactly {1, ..., N}.
    pub fn rank(
        &self,
        sections: Vec<Section>,
        profile: &PersonaProfile,
        job: &JobSpec,
    ) -> Vec<RankedSection> {
        let mut scored: Vec<(Section, i64)> = sections
            .into_iter()
            .map(|section| {
                let score = self.score(&section, profile, job);
                (section, score)
            })
            .collect();

        // stable sort keeps document order for equal scores
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let ranked: Vec<RankedSection> = scored
            .into_iter()
            .enumerate()
            .map(|(i, (section, score))| RankedSection::from_section(section, score, i + 1))
            .collect();

        log::debug!(
            "ranked {} sections for persona '{}'",
            ranked.len(),
            profile.role
        );
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food_profile() -> PersonaProfile {
        PersonaProfile::named("Food Contractor")
    }

    fn job() -> JobSpec {
        JobSpec::new("Plan vegetarian lunch menu")
    }

    fn scorer_no_bonus() -> RelevanceScorer {
        RelevanceScorer::with_options(ScoreOptions::new().with_length_bonus(false))
    }

    #[test]
    fn test_score_weights() {
        // body: "recipe" (2), title "MENU" contains "menu" (3),
        // job tokens "lunch" in body (1)
        let section = Section::new("MENU", "recipe for lunch", 1);
        let score = scorer_no_bonus().score(&section, &food_profile(), &job());
        // body hits: recipe, lunch (persona "lunch" keyword) = 2 × 2
        // title hits: menu = 3
        // job tokens in body: lunch = 1  ("menu" and "vegetarian" absent, "plan" absent)
        assert_eq!(score, 2 * 2 + 3 + 1);
    }

    #[test]
    fn test_keyword_counts_once_per_field() {
        let once = Section::new("x", "menu", 1);
        let thrice = Section::new("x", "menu menu menu", 1);
        let scorer = scorer_no_bonus();
        let profile = food_profile();
        let no_job = JobSpec::new("");
        assert_eq!(
            scorer.score(&once, &profile, &no_job),
            scorer.score(&thrice, &profile, &no_job)
        );
    }

    #[test]
    fn test_two_title_keywords_score_at_least_six() {
        let section = Section::new("menu and recipe", "zzz", 1);
        let score = scorer_no_bonus().score(&section, &food_profile(), &JobSpec::new(""));
        assert!(score >= 6, "title with two persona keywords scored {score}");
    }

    #[test]
    fn test_length_bonus_toggle() {
        let long_body = "x".repeat(201);
        let section = Section::new("t", long_body, 1);
        let profile = PersonaProfile::named("Astronaut");
        let no_job = JobSpec::new("");

        let with_bonus = RelevanceScorer::new().score(&section, &profile, &no_job);
        let without = scorer_no_bonus().score(&section, &profile, &no_job);
        assert_eq!(with_bonus, 1);
        assert_eq!(without, 0);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let sections = vec![
            Section::new("a", "nothing relevant", 1),
            Section::new("b", "also nothing", 1),
            Section::new("c", "menu", 1),
        ];
        let ranked = scorer_no_bonus().rank(sections, &food_profile(), &JobSpec::new(""));
        assert_eq!(ranked[0].title, "c");
        // tie between a and b keeps document order
        assert_eq!(ranked[1].title, "a");
        assert_eq!(ranked[2].title, "b");
        assert_eq!(
            ranked.iter().map(|s| s.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_rank_preserves_count_and_rank_set() {
        let sections: Vec<Section> = (0..7)
            .map(|i| Section::new(format!("s{i}"), format!("body {i}"), 1))
            .collect();
        let ranked = scorer_no_bonus().rank(sections, &food_profile(), &job());
        assert_eq!(ranked.len(), 7);
        let mut ranks: Vec<usize> = ranked.iter().map(|s| s.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn test_deterministic_across_runs() {
        let make = || {
            vec![
                Section::new("MENU", "recipe ingredients breakfast", 1),
                Section::new("TRAVEL", "flight hotel", 1),
            ]
        };
        let scorer = RelevanceScorer::new();
        let first = scorer.rank(make(), &food_profile(), &job());
        let second = scorer.rank(make(), &food_profile(), &job());
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_persona_scores_job_tokens_only() {
        let profile = PersonaProfile::named("Astronaut");
        let section = Section::new("MENU", "plan the lunch for vegetarian guests", 1);
        let score = scorer_no_bonus().score(&section, &profile, &job());
        // persona contributes 0; "plan", "lunch" and "vegetarian" match as job tokens
        assert_eq!(score, 3);
    }
}
