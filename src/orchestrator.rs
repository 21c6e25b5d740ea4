//! Top-level coordination of a scrape run.
//!
//! One browser, one shared context, one page per source. All sources run
//! concurrently on the current task and are joined positionally, so the
//! merged list is ordered by launch order (Times of India, The Hindu
//! BusinessLine, Indian Express), never by which site answered first.

use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{error, info, instrument, warn};

use crate::browser::{Browser, BrowserContext};
use crate::models::Record;
use crate::outputs::csv::{export_filename, write_records};
use crate::scrapers::express::IndianExpress;
use crate::scrapers::hindu::HinduBusinessLine;
use crate::scrapers::toi::TimesOfIndia;
use crate::scrapers::scrape;

/// How a run ended.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// No source produced a record; nothing was written.
    NoData,
    Exported { path: PathBuf, count: usize },
}

/// Scrape every source on `context` and merge the results in launch order.
#[instrument(level = "info", skip_all)]
pub async fn scrape_all<C: BrowserContext>(context: &C) -> Vec<Record> {
    let (toi, hindu, express) = futures::join!(
        scrape::<TimesOfIndia, _>(context),
        scrape::<HinduBusinessLine, _>(context),
        scrape::<IndianExpress, _>(context)
    );

    info!(
        toi_count = toi.len(),
        hindu_count = hindu.len(),
        express_count = express.len(),
        "All scrapers finished"
    );

    [toi, hindu, express].into_iter().flatten().collect()
}

/// Run one complete scrape with `browser` and export into `output_dir`.
///
/// The browser is closed before this returns, whatever happened. Only a
/// failure to write the export file is an error; every scraping failure has
/// already been absorbed into a smaller result.
#[instrument(level = "info", skip(browser))]
pub async fn run<B: Browser>(
    browser: B,
    output_dir: &Path,
) -> Result<RunOutcome, Box<dyn Error>> {
    let records = match browser.new_context().await {
        Ok(context) => scrape_all(&context).await,
        Err(e) => {
            error!(error = %e, "Could not open a browsing context; no source can be scraped");
            Vec::new()
        }
    };

    if let Err(e) = browser.close().await {
        warn!(error = %e, "Failed to close browser");
    }

    if records.is_empty() {
        warn!("No articles scraped; skipping export");
        return Ok(RunOutcome::NoData);
    }

    let count = records.len();
    info!(count, "Total headlines to export");
    let path = write_records(&records, output_dir, &export_filename(&Local::now())).await?;
    Ok(RunOutcome::Exported { path, count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::browser::testing::{FakeBrowser, FakeContext, FakeSite};
    use crate::models::NOT_AVAILABLE;
    use crate::scrapers::NewsSource;

    const TOI_HTML: &str = r#"
        <title>TOI Tech</title>
        <div class="wAaWq"><a href="/t1"><h5>TOI one</h5></a><div class="c6AKk">Oct 19</div></div>
        <div class="wAaWq"><a href="/t2"><h5>TOI two</h5></a><div class="c6AKk">Oct 18</div></div>
    "#;

    const HINDU_HTML: &str = r#"
        <title>BusinessLine</title>
        <div class="element"><div class="title"><a href="/h1">Hindu one</a></div></div>
    "#;

    const EXPRESS_HTML: &str = r#"
        <title>Explained</title>
        <div class="story_title"><a href="/e1">Express one</a></div>
    "#;

    fn all_sites(latency: [u64; 3]) -> FakeContext {
        FakeContext::new([
            (
                TimesOfIndia::URL,
                FakeSite::new(TOI_HTML).with_latency(Duration::from_millis(latency[0])),
            ),
            (
                HinduBusinessLine::URL,
                FakeSite::new(HINDU_HTML).with_latency(Duration::from_millis(latency[1])),
            ),
            (
                IndianExpress::URL,
                FakeSite::new(EXPRESS_HTML).with_latency(Duration::from_millis(latency[2])),
            ),
        ])
    }

    #[tokio::test]
    async fn test_one_failed_source_leaves_others_in_order() {
        let context = FakeContext::new([
            (TimesOfIndia::URL, FakeSite::new(TOI_HTML)),
            (HinduBusinessLine::URL, FakeSite::failing()),
            (IndianExpress::URL, FakeSite::new(EXPRESS_HTML)),
        ]);
        let records = scrape_all(&context).await;

        let headlines: Vec<_> = records.iter().map(|r| r.headline.as_str()).collect();
        assert_eq!(headlines, ["TOI one", "TOI two", "Express one"]);
        assert_eq!(records[2].scraped_at_date, NOT_AVAILABLE);
        assert_eq!(context.opened.get(), 3);
        assert_eq!(context.closed.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_merge_follows_launch_order_not_completion_order() {
        // Times of India answers last
        let context = all_sites([300, 20, 10]);
        let records = scrape_all(&context).await;

        let headlines: Vec<_> = records.iter().map(|r| r.headline.as_str()).collect();
        assert_eq!(headlines, ["TOI one", "TOI two", "Hindu one", "Express one"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sources_run_concurrently() {
        let context = all_sites([300, 200, 100]);
        let started = tokio::time::Instant::now();
        let _ = scrape_all(&context).await;
        let elapsed = started.elapsed();

        assert!(elapsed >= Duration::from_millis(300));
        assert!(elapsed < Duration::from_millis(600));
    }

    #[tokio::test]
    async fn test_run_exports_merged_records() {
        let dir = tempfile::tempdir().unwrap();
        let context = FakeContext::new([
            (TimesOfIndia::URL, FakeSite::new(TOI_HTML)),
            (HinduBusinessLine::URL, FakeSite::failing()),
            (IndianExpress::URL, FakeSite::new(EXPRESS_HTML)),
        ]);
        let browser = FakeBrowser::new(context);
        let closed = browser.closed.clone();

        let outcome = run(browser, dir.path()).await.unwrap();
        let (path, count) = match outcome {
            RunOutcome::Exported { path, count } => (path, count),
            other => panic!("expected an export, got {other:?}"),
        };
        assert_eq!(count, 3);
        assert!(closed.get());

        let file_name = path.file_name().unwrap().to_str().unwrap();
        assert!(file_name.ends_with("_news_scraped.csv"));
        assert_eq!(file_name.len(), "YYYYMMDD_HHMMSS_news_scraped.csv".len());

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Headline,Link,Source,Date");
        assert_eq!(lines[3], "Express one,/e1,Explained,N/A");
    }

    #[tokio::test]
    async fn test_run_without_data_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let context = FakeContext::new([
            (TimesOfIndia::URL, FakeSite::failing()),
            (HinduBusinessLine::URL, FakeSite::failing()),
            (IndianExpress::URL, FakeSite::new("<title>Redesigned</title><p>nothing here</p>")),
        ]);
        let browser = FakeBrowser::new(context);
        let closed = browser.closed.clone();

        let outcome = run(browser, dir.path()).await.unwrap();
        assert_eq!(outcome, RunOutcome::NoData);
        assert!(closed.get());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_run_closes_browser_when_context_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut browser = FakeBrowser::new(all_sites([0, 0, 0]));
        browser.fail_context = true;
        let closed = browser.closed.clone();

        let outcome = run(browser, dir.path()).await.unwrap();
        assert_eq!(outcome, RunOutcome::NoData);
        assert!(closed.get());
    }
}
