//! Property-based tests for urlprobe using proptest
//!
//! These tests generate random inputs to check the ordering and
//! ingestion guarantees across a wide range of potential inputs.

use async_trait::async_trait;
use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;
use urlprobe::ingest::{dedup_urls, parse_text_urls, read_csv_urls};
use urlprobe::{Probe, ProbeOutcome, Prober, WorkerPool};

/// Parses `fake://<status>/<delay ms>`, sleeps for the delay and answers with
/// the status. Anything else is unreachable.
struct LatencyProbe;

#[async_trait]
impl Probe for LatencyProbe {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        let Some((status, delay)) = url
            .strip_prefix("fake://")
            .and_then(|rest| rest.split_once('/'))
        else {
            return ProbeOutcome::Unreachable;
        };
        match (status.parse::<u16>(), delay.parse::<u64>()) {
            (Ok(status), Ok(delay)) => {
                tokio::time::sleep(Duration::from_millis(delay)).await;
                ProbeOutcome::StatusCode(status)
            }
            _ => ProbeOutcome::Unreachable,
        }
    }
}

/// Either a fake URL with a random latency or a malformed one
fn fake_url_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (100u16..600, 0u64..20).prop_map(|(status, delay)| format!("fake://{status}/{delay}")),
        1 => Just("not a url".to_string()),
        1 => Just(String::new()),
    ]
}

fn expected_outcome(url: &str) -> ProbeOutcome {
    url.strip_prefix("fake://")
        .and_then(|rest| rest.split_once('/'))
        .and_then(|(status, _)| status.parse().ok())
        .map_or(ProbeOutcome::Unreachable, ProbeOutcome::StatusCode)
}

/// Lines mixing URLs, blanks and padding
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            r"https://[a-z]{3,10}\.com",
            r"[ \t]{0,3}http://[a-z]{1,8}\.org[ \t]{0,3}",
            Just(String::new()),
            Just("   ".to_string()),
        ],
        0..30,
    )
    .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_check_all_preserves_length_and_order(
        urls in prop::collection::vec(fake_url_strategy(), 0..50),
        pool_size in 1usize..8,
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let prober = Prober::new(LatencyProbe, WorkerPool::new(pool_size));

        let results = runtime.block_on(prober.check_all(urls.clone())).unwrap();

        prop_assert_eq!(results.len(), urls.len());
        for (result, url) in results.iter().zip(&urls) {
            prop_assert_eq!(&result.url, url);
            prop_assert_eq!(result.outcome, expected_outcome(url));
        }
    }

    #[test]
    fn test_parse_text_urls_yields_trimmed_non_blank_lines(text in text_strategy()) {
        let urls = parse_text_urls(&text);
        let non_blank = text.lines().filter(|line| !line.trim().is_empty()).count();

        prop_assert_eq!(urls.len(), non_blank);
        for url in &urls {
            prop_assert!(!url.is_empty());
            prop_assert_eq!(url.trim(), url.as_str());
        }
    }

    #[test]
    fn test_dedup_urls_keeps_first_occurrences(
        urls in prop::collection::vec(r"http://[a-c]{1,2}\.io", 0..40)
    ) {
        let unique = dedup_urls(&urls);

        let as_set: HashSet<&String> = urls.iter().collect();
        prop_assert_eq!(unique.len(), as_set.len());

        let mut seen = HashSet::new();
        let first_occurrences: Vec<&String> =
            urls.iter().filter(|url| seen.insert(url.as_str())).collect();
        prop_assert_eq!(unique.iter().collect::<Vec<_>>(), first_occurrences);
    }

    #[test]
    fn test_read_csv_urls_takes_first_column(
        rows in prop::collection::vec((r"https://[a-z]{1,8}\.net", r"[a-z ]{0,8}"), 0..20)
    ) {
        let mut csv = String::from("url,comment\n");
        for (url, comment) in &rows {
            csv.push_str(&format!("{url},{comment}\n"));
        }

        let urls = read_csv_urls(csv.as_bytes()).unwrap();

        let expected: Vec<&String> = rows.iter().map(|(url, _)| url).collect();
        prop_assert_eq!(urls.iter().collect::<Vec<_>>(), expected);
    }
}
