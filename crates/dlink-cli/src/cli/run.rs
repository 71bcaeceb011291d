//! Wire the real extractor, browser and terminal into a session.

use anyhow::Result;
use dlink_core::config::DlinkConfig;
use dlink_core::extractor::YtDlp;
use dlink_core::prompt::Prompt;
use dlink_core::session::{Listing, Session, SessionOptions};
use std::io;

use super::Cli;

pub(super) fn session_options(cli: &Cli, cfg: &DlinkConfig) -> SessionOptions {
    SessionOptions {
        listing: if cli.table {
            Listing::Table
        } else {
            Listing::Raw
        },
        format_id: cli.format.clone(),
        expiry_notice: cfg.expiry_notice.clone(),
    }
}

pub fn run_session(cli: &Cli, cfg: &DlinkConfig) -> Result<()> {
    let extractor = YtDlp::new(cfg.extractor.command());
    let browser = cfg.browser.launcher();
    let session = Session::new(&extractor, &browser, session_options(cli, cfg));

    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());
    let outcome = session.run(&cli.url, &mut prompt)?;
    tracing::info!(
        format_id = %outcome.format_id,
        resolved = !outcome.direct_url.is_empty(),
        opened_browser = outcome.opened_browser,
        "session finished"
    );
    Ok(())
}
