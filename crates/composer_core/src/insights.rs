//! Caption scoring for the "Optimize Post" panel.
//!
//! Five heuristics each produce a 0..=100 score with a line of advice; the overall score is
//! their rounded mean. Word and hashtag patterns are ASCII-only, so accented letters split words.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{catalog::Platform, identifier::PlatformId};

const CALL_TO_ACTION_WORDS: &str = "click|visit|check|follow|subscribe|like|share|comment|swipe|\
tap|download|buy|shop|learn|discover|explore|join|sign up|register|book|order|get|try|start|\
watch|read|see|view";

/// Lower bound of the readability band reported as good.
pub const READABILITY_TARGET_MIN: u8 = 60;
/// Upper bound of the readability band reported as good.
pub const READABILITY_TARGET_MAX: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Scored aspect of a caption.
pub enum MetricKind {
    /// Caption length.
    TextLength,
    /// Number of hashtags.
    HashtagUsage,
    /// Presence of a call-to-action verb.
    CallToAction,
    /// Count of words with four or more characters.
    Keywords,
    /// Flesch reading ease.
    Readability,
}

impl MetricKind {
    /// Label shown in the panel.
    pub const fn label(self) -> &'static str {
        match self {
            Self::TextLength => "Text Length",
            Self::HashtagUsage => "Hashtag Usage",
            Self::CallToAction => "Call to Action",
            Self::Keywords => "Keywords",
            Self::Readability => "Readability Score",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One scored aspect.
pub struct InsightMetric {
    /// Aspect.
    pub kind: MetricKind,
    /// Score in 0..=100.
    pub score: u8,
    /// Advice for the author.
    pub advice: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Full analysis of a caption.
pub struct CaptionInsights {
    /// Metrics in display order.
    pub metrics: Vec<InsightMetric>,
    /// Rounded mean of the metric scores.
    pub overall: u8,
}

impl CaptionInsights {
    /// Score for one aspect.
    pub fn score(&self, kind: MetricKind) -> Option<u8> {
        self.metrics
            .iter()
            .find(|metric| metric.kind == kind)
            .map(|metric| metric.score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Hashtag count compared with a platform's recommendation.
pub enum HashtagVerdict {
    /// Count is inside the recommended range (or zero on a platform without hashtags).
    WithinRange,
    /// Fewer hashtags than recommended.
    TooFew {
        /// Recommended minimum.
        min: u32,
    },
    /// More hashtags than recommended.
    TooMany {
        /// Recommended maximum.
        max: u32,
    },
    /// The platform does not surface hashtags but the caption has some.
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Hashtag verdict for one selected platform.
pub struct HashtagCheck {
    /// Platform checked.
    pub platform: PlatformId,
    /// Hashtags found in the caption.
    pub count: u32,
    /// Best-performing count for the platform.
    pub optimal: u32,
    /// Outcome.
    pub verdict: HashtagVerdict,
}

fn hashtag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"#(?-u:\w)+").expect("hashtag pattern"))
}

fn keyword_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?-u:\b\w{4,}\b)").expect("keyword pattern"))
}

fn call_to_action_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"(?i-u:\b(?:{CALL_TO_ACTION_WORDS})\b)")).expect("cta pattern")
    })
}

fn sentence_breaks() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence pattern"))
}

fn silent_suffix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("suffix pattern")
    })
}

fn vowel_groups() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[aeiouy]{1,2}").expect("vowel pattern"))
}

/// Counts `#word` hashtags in `caption`.
pub fn count_hashtags(caption: &str) -> u32 {
    saturating_u32(hashtag_pattern().find_iter(caption).count())
}

/// Scores `caption` on every metric.
pub fn analyze_caption(caption: &str) -> CaptionInsights {
    let metrics = vec![
        text_length_metric(caption.chars().count()),
        hashtag_metric(count_hashtags(caption)),
        call_to_action_metric(call_to_action_pattern().is_match(caption)),
        keyword_metric(keyword_pattern().find_iter(caption).count()),
        readability_metric(caption),
    ];
    let total: u32 = metrics.iter().map(|metric| u32::from(metric.score)).sum();
    let overall = (f64::from(total) / metrics.len() as f64).round() as u8;
    CaptionInsights { metrics, overall }
}

/// Compares the caption's hashtag count with each platform's recommendation.
pub fn hashtag_guidance<'a, I>(caption: &str, platforms: I) -> Vec<HashtagCheck>
where
    I: IntoIterator<Item = &'a Platform>,
{
    let count = count_hashtags(caption);
    platforms
        .into_iter()
        .map(|platform| {
            let tags = &platform.hashtags;
            let verdict = if !tags.supported {
                if count > 0 {
                    HashtagVerdict::Unsupported
                } else {
                    HashtagVerdict::WithinRange
                }
            } else if count < tags.min {
                HashtagVerdict::TooFew { min: tags.min }
            } else if count > tags.max {
                HashtagVerdict::TooMany { max: tags.max }
            } else {
                HashtagVerdict::WithinRange
            };
            HashtagCheck {
                platform: platform.id.clone(),
                count,
                optimal: tags.optimal,
                verdict,
            }
        })
        .collect()
}

fn text_length_metric(len: usize) -> InsightMetric {
    let (score, advice) = match len {
        150.. => (100, "Perfect length for maximum engagement!"),
        100.. => (80, "Good length, consider adding a bit more detail."),
        50.. => (60, "Add more content to improve engagement."),
        1.. => (30, "Your post is too short. Add more engaging content."),
        0 => (0, "Add more content to improve engagement."),
    };
    InsightMetric {
        kind: MetricKind::TextLength,
        score,
        advice,
    }
}

fn hashtag_metric(count: u32) -> InsightMetric {
    let (score, advice) = match count {
        3..=8 => (100, "Perfect hashtag usage for maximum reach!"),
        1..=2 => (70, "Consider adding more hashtags for better reach."),
        0 => (0, "Include relevant hashtags to increase reach."),
        _ => (60, "Too many hashtags might look spammy. Try 3-8 hashtags."),
    };
    InsightMetric {
        kind: MetricKind::HashtagUsage,
        score,
        advice,
    }
}

fn call_to_action_metric(present: bool) -> InsightMetric {
    let (score, advice) = if present {
        (100, "Great! Your post includes a clear call to action.")
    } else {
        (0, "Add a clear call to action to drive engagement.")
    };
    InsightMetric {
        kind: MetricKind::CallToAction,
        score,
        advice,
    }
}

fn keyword_metric(count: usize) -> InsightMetric {
    let (score, advice) = match count {
        8.. => (100, "Excellent keyword density for discoverability!"),
        5.. => (80, "Good keyword usage, consider adding a few more."),
        3.. => (60, "Include more relevant keywords for better reach."),
        _ => (0, "Include industry-related keywords for better reach."),
    };
    InsightMetric {
        kind: MetricKind::Keywords,
        score,
        advice,
    }
}

fn readability_metric(caption: &str) -> InsightMetric {
    let sentences = sentence_breaks()
        .split(caption)
        .filter(|sentence| !sentence.trim().is_empty())
        .count();
    let words: Vec<&str> = caption.split_whitespace().collect();
    if sentences == 0 || words.is_empty() {
        return InsightMetric {
            kind: MetricKind::Readability,
            score: 0,
            advice: "Add more content to calculate readability.",
        };
    }

    let syllables: usize = words.iter().map(|word| count_syllables(word)).sum();
    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;
    let flesch = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    let score = flesch.round().clamp(0.0, 100.0) as u8;
    let advice = if (READABILITY_TARGET_MIN..=READABILITY_TARGET_MAX).contains(&score) {
        "Good readability for your audience!"
    } else if score < READABILITY_TARGET_MIN {
        "Use shorter sentences for better engagement."
    } else {
        "Content is very easy to read - consider adding complexity if needed."
    };
    InsightMetric {
        kind: MetricKind::Readability,
        score,
        advice,
    }
}

fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }
    let trimmed = silent_suffix().replace(&word, "");
    let trimmed = trimmed.strip_prefix('y').unwrap_or(&*trimmed);
    match vowel_groups().find_iter(trimmed).count() {
        0 => 1,
        groups => groups,
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::builtin_catalog;

    #[test]
    fn empty_caption_scores_zero_everywhere() {
        let insights = analyze_caption("");
        assert_eq!(insights.overall, 0);
        assert!(insights.metrics.iter().all(|metric| metric.score == 0));
        assert_eq!(
            insights.metrics[4].advice,
            "Add more content to calculate readability."
        );
    }

    #[test]
    fn hashtag_bands() {
        assert_eq!(analyze_caption("#a").score(MetricKind::HashtagUsage), Some(70));
        assert_eq!(
            analyze_caption("#a #b #c").score(MetricKind::HashtagUsage),
            Some(100)
        );
        let many = (0..9).map(|i| format!("#t{i}")).collect::<Vec<_>>().join(" ");
        assert_eq!(analyze_caption(&many).score(MetricKind::HashtagUsage), Some(60));
    }

    #[test]
    fn call_to_action_is_case_insensitive_whole_word() {
        assert_eq!(
            analyze_caption("Please SUBSCRIBE now").score(MetricKind::CallToAction),
            Some(100)
        );
        assert_eq!(
            analyze_caption("Don't forget to sign up").score(MetricKind::CallToAction),
            Some(100)
        );
        assert_eq!(
            analyze_caption("forgetting things").score(MetricKind::CallToAction),
            Some(0)
        );
    }

    #[test]
    fn length_and_keyword_bands() {
        let caption = "word ".repeat(30);
        let insights = analyze_caption(&caption);
        assert_eq!(insights.score(MetricKind::TextLength), Some(100));
        assert_eq!(insights.score(MetricKind::Keywords), Some(100));
        assert_eq!(analyze_caption("tiny").score(MetricKind::TextLength), Some(30));
        assert_eq!(
            analyze_caption("one two three four five").score(MetricKind::Keywords),
            Some(60)
        );
        assert_eq!(
            analyze_caption("one two six ten").score(MetricKind::Keywords),
            Some(0)
        );
    }

    #[test]
    fn syllable_heuristic_matches_common_words() {
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("shapes"), 1);
        assert_eq!(count_syllables("loved"), 1);
        assert_eq!(count_syllables("engagement"), 4);
        assert_eq!(count_syllables("yellow"), 2);
        assert_eq!(count_syllables("rhythm"), 1);
    }

    #[test]
    fn short_plain_sentences_read_easily() {
        let score = analyze_caption("The cat sat. The dog ran.")
            .score(MetricKind::Readability)
            .unwrap();
        assert_eq!(score, 100);
    }

    #[test]
    fn overall_is_rounded_mean() {
        let insights = analyze_caption("#a");
        let total: u32 = insights.metrics.iter().map(|m| u32::from(m.score)).sum();
        assert_eq!(
            u32::from(insights.overall),
            (f64::from(total) / 5.0).round() as u32
        );
    }

    #[test]
    fn hashtag_guidance_checks_each_platform_range() {
        let catalog = builtin_catalog();
        let twitter = catalog
            .get(&PlatformId::parse("x-twitter").unwrap())
            .unwrap();
        let checks = hashtag_guidance("Launch day #a #b #c", [twitter]);
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].count, 3);
        assert_eq!(
            checks[0].verdict,
            HashtagVerdict::TooMany {
                max: twitter.hashtags.max
            }
        );

        let youtube = catalog.get(&PlatformId::parse("youtube").unwrap()).unwrap();
        let checks = hashtag_guidance("no tags", [youtube]);
        assert_eq!(
            checks[0].verdict,
            HashtagVerdict::TooFew {
                min: youtube.hashtags.min
            }
        );
    }

    #[test]
    fn unsupported_platforms_flag_any_hashtag() {
        let catalog = builtin_catalog();
        let Some(platform) = catalog.all().iter().find(|p| !p.hashtags.supported) else {
            return;
        };
        assert_eq!(
            hashtag_guidance("#tag", [platform])[0].verdict,
            HashtagVerdict::Unsupported
        );
        assert_eq!(
            hashtag_guidance("plain", [platform])[0].verdict,
            HashtagVerdict::WithinRange
        );
    }
}
