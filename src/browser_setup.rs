use anyhow::{Context, Result};
use chromiumoxide::cdp::browser_protocol::page::AddScriptToEvaluateOnNewDocumentParams;
use chromiumoxide::fetcher::{BrowserFetcher, BrowserFetcherOptions};
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info, warn};

/// Find Chrome/Chromium executable on the system with platform-specific search paths.
///
/// `CHROMIUM_PATH` overrides every other lookup when it points at an existing file.
pub async fn find_browser_executable() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("CHROMIUM_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!(
                "Using browser from CHROMIUM_PATH environment variable: {}",
                path.display()
            );
            return Ok(path);
        }
        warn!(
            "CHROMIUM_PATH environment variable points to non-existent file: {}",
            path.display()
        );
    }

    let candidates: &[&str] = if cfg!(target_os = "windows") {
        &[
            r"C:\Program Files\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files\Chromium\Application\chrome.exe",
        ]
    } else if cfg!(target_os = "macos") {
        &[
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "/Applications/Chromium.app/Contents/MacOS/Chromium",
            "~/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "~/Applications/Chromium.app/Contents/MacOS/Chromium",
            "/opt/homebrew/bin/chromium",
        ]
    } else {
        &[
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/usr/bin/chromium",
            "/usr/bin/chromium-browser",
            "/snap/bin/chromium",
            "/usr/local/bin/chromium",
            "/opt/google/chrome/chrome",
        ]
    };

    for candidate in candidates {
        let path = match candidate.strip_prefix("~/") {
            Some(rest) => match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => continue,
            },
            None => PathBuf::from(candidate),
        };

        if path.exists() {
            info!("Found browser at: {}", path.display());
            return Ok(path);
        }
    }

    if !cfg!(target_os = "windows") {
        for cmd in &["chromium", "chromium-browser", "google-chrome", "chrome"] {
            if let Ok(output) = Command::new("which").arg(cmd).output()
                && output.status.success()
            {
                let found = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !found.is_empty() {
                    info!("Found browser using 'which' command: {}", found);
                    return Ok(PathBuf::from(found));
                }
            }
        }
    }

    warn!("No Chrome/Chromium executable found. Will download and use fetcher.");
    Err(anyhow::anyhow!("Chrome/Chromium executable not found"))
}

/// Downloads and manages Chromium browser if not found locally.
/// Returns a path to the downloaded executable.
pub async fn download_managed_browser() -> Result<PathBuf> {
    info!("Downloading managed Chromium browser...");

    let cache_dir = dirs::cache_dir()
        .unwrap_or_else(|| {
            let fallback = std::env::temp_dir();
            warn!(
                "Could not determine user cache directory, using temp directory fallback: {}",
                fallback.display()
            );
            fallback
        })
        .join("pricescrape")
        .join("chromium");

    std::fs::create_dir_all(&cache_dir).context("Failed to create cache directory")?;

    let fetcher = BrowserFetcher::new(
        BrowserFetcherOptions::builder()
            .with_path(&cache_dir)
            .build()
            .context("Failed to build fetcher options")?,
    );

    let revision_info = fetcher.fetch().await.context("Failed to fetch browser")?;

    info!(
        "Downloaded Chromium to: {}",
        revision_info.folder_path.display()
    );

    Ok(revision_info.executable_path)
}

/// Locate a local Chrome, downloading one when none is installed
pub async fn resolve_browser_executable() -> Result<PathBuf> {
    match find_browser_executable().await {
        Ok(path) => Ok(path),
        Err(_) => download_managed_browser().await,
    }
}

/// Scripts that hide the most common automation fingerprints.
///
/// Each entry is `(name, source)`; the source may contain `{user_agent}`.
const STEALTH_SCRIPTS: &[(&str, &str)] = &[
    (
        "navigator.webdriver",
        r"Object.defineProperty(navigator, 'webdriver', { get: () => false });",
    ),
    (
        "navigator.userAgent",
        r"Object.defineProperty(navigator, 'userAgent', { get: () => '{user_agent}' });",
    ),
    (
        "navigator.languages",
        r"Object.defineProperty(navigator, 'languages', { get: () => ['es-MX', 'es', 'en'] });",
    ),
    (
        "navigator.plugins",
        r"Object.defineProperty(navigator, 'plugins', {
            get: () => {
                const plugins = [
                    { name: 'Chrome PDF Plugin', filename: 'internal-pdf-viewer' },
                    { name: 'Chrome PDF Viewer', filename: 'mhjfbmdgcfjbbpaeojofohoefgiehjai' },
                    { name: 'Native Client', filename: 'internal-nacl-plugin' }
                ];
                Object.setPrototypeOf(plugins, PluginArray.prototype);
                return plugins;
            }
        });",
    ),
    (
        "window.chrome",
        r"if (!window.chrome) { window.chrome = {}; }
        if (!window.chrome.runtime) {
            window.chrome.runtime = {
                connect: () => ({
                    onMessage: { addListener: () => {}, removeListener: () => {} },
                    postMessage: () => {}
                })
            };
        }",
    ),
    (
        "webgl.vendor",
        r"if (window.WebGLRenderingContext) {
            const getParameter = WebGLRenderingContext.prototype.getParameter;
            WebGLRenderingContext.prototype.getParameter = new Proxy(getParameter, {
                apply(target, ctx, args) {
                    const param = (args && args[0]) || null;
                    if (param === 37445) { return 'Intel Inc.'; }
                    if (param === 37446) { return 'Intel Iris OpenGL Engine'; }
                    return Reflect.apply(target, ctx, args);
                }
            });
        }",
    ),
];

/// Apply stealth mode settings to evade bot detection
///
/// Registers every script to run on each new document, so they apply to the
/// next navigation. Individual failures are logged; the call fails only if no
/// script could be registered.
pub async fn apply_stealth_measures(page: &chromiumoxide::Page, user_agent: &str) -> Result<()> {
    info!("Applying stealth measures to page");

    let escaped_agent = user_agent.replace('\\', "\\\\").replace('\'', "\\'");
    let mut applied = 0;

    for (name, source) in STEALTH_SCRIPTS {
        let source = source.replace("{user_agent}", &escaped_agent);
        let params = AddScriptToEvaluateOnNewDocumentParams {
            source,
            include_command_line_api: None,
            world_name: None,
            run_immediately: None,
        };
        match page.execute(params).await {
            Ok(_) => {
                debug!("✓ Injected: {}", name);
                applied += 1;
            }
            Err(e) => warn!("✗ Failed to inject {}: {}", name, e),
        }
    }

    if applied == 0 {
        return Err(anyhow::anyhow!(
            "Failed to inject any of {} stealth scripts",
            STEALTH_SCRIPTS.len()
        ));
    }

    info!(
        "Applied {}/{} stealth scripts",
        applied,
        STEALTH_SCRIPTS.len()
    );
    Ok(())
}
