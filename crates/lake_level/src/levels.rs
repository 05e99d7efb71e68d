use lake_logging::{lake_debug, lake_info};

use crate::decode::decode_page;
use crate::extract::{parse_detail, parse_summary};
use crate::fetch::{FetchSettings, PageFetcher, ReqwestFetcher};
use crate::{LakeSources, Lakes, LevelError};

/// Scrape every lake from the published Groupe E pages.
pub async fn get_levels(fetcher: &dyn PageFetcher) -> Result<Lakes, LevelError> {
    get_levels_from(fetcher, &LakeSources::default()).await
}

/// Scrape the overview page, then each configured detail page in turn.
///
/// Any failure aborts the whole scrape; no partial collection is returned.
pub async fn get_levels_from(
    fetcher: &dyn PageFetcher,
    sources: &LakeSources,
) -> Result<Lakes, LevelError> {
    let overview = fetch_html(fetcher, &sources.overview_url).await?;
    let summary = parse_summary(&overview)?;
    lake_debug!(
        "overview lists {} lakes for {} and {}",
        summary.lakes.len(),
        summary.dates[0],
        summary.dates[1]
    );

    let mut lakes = Lakes::new();
    for mut lake in summary.lakes {
        if let Some(url) = sources.detail_url(&lake.name) {
            let detail = fetch_html(fetcher, url).await?;
            let series = parse_detail(&detail)?;
            lake_debug!("{}: {} detail measurements", lake.name, series.len());
            lake.merge(series);
        }
        lakes.insert(lake.name.clone(), lake);
    }

    lake_info!("scraped levels for {} lakes", lakes.len());
    Ok(lakes)
}

/// [`get_levels_from`] for synchronous callers, on a private single-threaded
/// runtime.
///
/// Must not be called from inside another tokio runtime.
pub fn get_levels_blocking(
    settings: FetchSettings,
    sources: &LakeSources,
) -> Result<Lakes, LevelError> {
    let fetcher = ReqwestFetcher::new(settings)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| LevelError::Runtime(err.to_string()))?;
    runtime.block_on(get_levels_from(&fetcher, sources))
}

async fn fetch_html(fetcher: &dyn PageFetcher, url: &str) -> Result<String, LevelError> {
    let output = fetcher.fetch(url).await?;
    Ok(decode_page(&output.bytes, output.content_type.as_deref())?)
}
