//! One-shot `--search` command: query the service and print the results.

use std::io;

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::cli_output::write_results;
use crate::error::QhResult;
use crate::models::SearchQuery;
use crate::render::{render_results, RenderedResults};
use crate::retrieval::{RetrievalClient, SearchBackend};
use crate::startup::AppConfig;

/// Run `text` against `backend` and render the outcome.
///
/// Blank text returns `None` without making a request.
pub async fn run_search<B>(backend: &B, text: &str) -> QhResult<Option<RenderedResults>>
where
    B: SearchBackend + ?Sized,
{
    let Some(query) = SearchQuery::from_input(text) else {
        return Ok(None);
    };
    let result = backend.search(&query).await?;
    Ok(Some(render_results(&result)))
}

/// Entry point for `--search`. Owns its own runtime.
pub fn handle_search_command(config: &AppConfig, text: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let client = RetrievalClient::new(config.search_url.clone());

    let rendered = runtime.block_on(run_search(&client, text)).map_err(|err| {
        eyre!(
            "{} [{}]\nHint: {}",
            err.user_message(),
            err.error_code(),
            err.recovery_hint()
        )
    })?;

    if let Some(rendered) = rendered {
        write_results(&mut io::stdout().lock(), &rendered)?;
    }
    Ok(())
}
