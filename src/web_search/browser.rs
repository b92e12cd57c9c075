//! Browser lifecycle for one search run
//!
//! Launches a chromiumoxide browser with stealth flags, tracks its CDP handler
//! task, and tears everything down (process, handler, temp profile) when the
//! run ends.

use anyhow::{Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfigBuilder, HeadlessMode};
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::path::PathBuf;
use tokio::task::{self, JoinHandle};
use tracing::{error, info, trace, warn};

use crate::browser_setup::resolve_browser_executable;
use crate::config::ScrapeConfig;

/// Wrapper for Browser and its event handler task
///
/// The handler MUST be aborted once the browser is closed, otherwise it keeps
/// polling a dead connection. `Drop` takes care of it on error paths.
pub struct BrowserWrapper {
    browser: Browser,
    handler: JoinHandle<()>,
    /// Profile directory to remove on shutdown. `None` for caller-owned profiles.
    temp_profile_dir: Option<PathBuf>,
}

impl BrowserWrapper {
    /// Get reference to inner browser
    pub(crate) fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Close the browser, wait for the process to exit, and remove the temp profile.
    ///
    /// Failures are logged, not returned: the search result is already known
    /// by the time this runs.
    pub async fn shutdown(mut self) {
        info!("Shutting down search browser");

        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {}", e);
        }

        self.cleanup_temp_dir();
    }

    /// Remove the temp profile directory (blocking).
    ///
    /// MUST run after `browser.wait()` so Chrome has released its file handles.
    fn cleanup_temp_dir(&mut self) {
        if let Some(path) = self.temp_profile_dir.take() {
            info!("Cleaning up temp directory: {}", path.display());
            if let Err(e) = std::fs::remove_dir_all(&path) {
                warn!(
                    "Failed to clean up temp directory {}: {}. Manual cleanup may be required.",
                    path.display(),
                    e
                );
            }
        }
    }
}

impl Drop for BrowserWrapper {
    fn drop(&mut self) {
        self.handler.abort();

        if self.temp_profile_dir.is_some() {
            warn!("BrowserWrapper dropped without shutdown() - removing temp dir in Drop");
            self.cleanup_temp_dir();
        }
    }
}

/// Launch a browser configured from `config`
///
/// Headless unless `config.headless()` is false. The profile lives in
/// `config.chrome_data_dir()` when set (and is kept), otherwise in a
/// per-process temp directory that is removed on shutdown.
pub async fn launch_browser(config: &ScrapeConfig) -> Result<BrowserWrapper> {
    let chrome_path = resolve_browser_executable().await?;

    let (user_data_dir, temp_profile_dir) = match config.chrome_data_dir() {
        Some(dir) => (dir.clone(), None),
        None => {
            let dir =
                std::env::temp_dir().join(format!("pricescrape_chrome_{}", std::process::id()));
            (dir.clone(), Some(dir))
        }
    };

    std::fs::create_dir_all(&user_data_dir).context("Failed to create user data directory")?;

    let mut builder = BrowserConfigBuilder::default()
        .request_timeout(config.page_load_timeout())
        .window_size(1920, 1080)
        .user_data_dir(user_data_dir)
        .chrome_executable(chrome_path);

    builder = if config.headless() {
        builder.headless_mode(HeadlessMode::default())
    } else {
        builder.with_head()
    };

    let browser_config = builder
        .arg(format!("--user-agent={}", config.user_agent()))
        .arg("--lang=es-MX")
        .arg("--disable-blink-features=AutomationControlled")
        .arg("--disable-infobars")
        .arg("--disable-notifications")
        .arg("--disable-popup-blocking")
        .arg("--disable-extensions")
        .arg("--disable-background-networking")
        .arg("--disable-background-timer-throttling")
        .arg("--disable-backgrounding-occluded-windows")
        .arg("--disable-breakpad")
        .arg("--disable-features=TranslateUI")
        .arg("--disable-hang-monitor")
        .arg("--disable-prompt-on-repost")
        .arg("--disable-setuid-sandbox")
        .arg("--no-first-run")
        .arg("--no-default-browser-check")
        .arg("--no-sandbox")
        .arg("--password-store=basic")
        .arg("--use-mock-keychain")
        .arg("--mute-audio")
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build browser config: {e}"))?;

    info!(headless = config.headless(), "Launching browser");

    let (browser, mut handler) = Browser::launch(browser_config)
        .await
        .context("Failed to launch browser")?;

    let handler_task = task::spawn(async move {
        while let Some(event) = handler.next().await {
            if let Err(e) = event {
                let message = e.to_string();
                // chromiumoxide cannot decode some newer CDP events; those are harmless
                if message.contains("data did not match any variant of untagged enum Message")
                    || message.contains("Failed to deserialize WS response")
                {
                    trace!("Suppressed benign CDP serialization error: {}", message);
                } else {
                    error!("Browser handler error: {:?}", e);
                }
            }
        }
        info!("Browser event handler task completed");
    });

    Ok(BrowserWrapper {
        browser,
        handler: handler_task,
        temp_profile_dir,
    })
}

/// Create a blank page.
///
/// Stealth scripts must be registered on `about:blank` before the first real
/// navigation, otherwise the results page loads without them.
pub async fn create_blank_page(wrapper: &BrowserWrapper) -> Result<Page> {
    let page = wrapper
        .browser()
        .new_page("about:blank")
        .await
        .context("Failed to create blank page")?;

    info!("Created blank page");
    Ok(page)
}
