//! Study content synthesis
//!
//! Synthesis is template assembly, not text analysis: the subject's summary
//! template is combined with one randomly chosen phrasing variation, and the
//! subject's flashcards are passed through verbatim. The random source is
//! injected so callers (and tests) control determinism.

use crate::db::models::SubjectConfig;
use crate::error::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Output of synthesizing study content from a subject configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    /// Summary template followed by a blank line and the chosen variation
    pub summary: String,
    /// Subject flashcards, copied unchanged
    pub flashcards: Vec<String>,
}

/// Assemble study content from `config`, drawing the phrasing variation
/// uniformly from `rng`.
///
/// A configuration with no variations cannot produce a summary and is
/// reported as a configuration error rather than a panic.
pub fn synthesize<R: Rng + ?Sized>(config: &SubjectConfig, rng: &mut R) -> Result<Synthesis> {
    let variation = config.variations.choose(rng).ok_or_else(|| {
        Error::Config(format!(
            "subject config '{}' has no variations",
            config.subject
        ))
    })?;

    Ok(Synthesis {
        summary: format!("{}\n\n{}", config.summary_template, variation),
        flashcards: config.flashcards.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::SubjectTag;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_config(variations: Vec<String>) -> SubjectConfig {
        SubjectConfig {
            subject: SubjectTag::Math,
            summary_template: "Template line one\n- bullet".to_string(),
            flashcards: vec!["card a".to_string(), "card b".to_string()],
            variations,
            created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_summary_is_template_blank_line_variation() {
        let config = test_config(vec!["Only variation.".to_string()]);
        let mut rng = StdRng::seed_from_u64(0);

        let synthesis = synthesize(&config, &mut rng).unwrap();
        assert_eq!(
            synthesis.summary,
            "Template line one\n- bullet\n\nOnly variation."
        );
    }

    #[test]
    fn test_flashcards_pass_through_unchanged() {
        let config = test_config(vec!["v".to_string()]);
        let mut rng = StdRng::seed_from_u64(0);

        let synthesis = synthesize(&config, &mut rng).unwrap();
        assert_eq!(synthesis.flashcards, config.flashcards);
    }

    #[test]
    fn test_chosen_variation_comes_from_config() {
        let config = test_config(vec![
            "first".to_string(),
            "second".to_string(),
            "third".to_string(),
        ]);

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let synthesis = synthesize(&config, &mut rng).unwrap();
            let suffix = synthesis
                .summary
                .rsplit("\n\n")
                .next()
                .unwrap()
                .to_string();
            assert!(config.variations.contains(&suffix));
        }
    }

    #[test]
    fn test_same_seed_gives_same_variation() {
        let config = test_config(vec![
            "first".to_string(),
            "second".to_string(),
            "third".to_string(),
        ]);

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            synthesize(&config, &mut a).unwrap(),
            synthesize(&config, &mut b).unwrap()
        );
    }

    #[test]
    fn test_empty_variations_is_config_error() {
        let config = test_config(Vec::new());
        let mut rng = StdRng::seed_from_u64(0);

        let err = synthesize(&config, &mut rng).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
