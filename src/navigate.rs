use crate::error::{LandingError, Result};

/// Seam between the companion widget and the hosting environment's browser.
/// The production impl launches the default browser; tests substitute a
/// recording stub.
pub trait Navigate: std::fmt::Debug + Send {
    /// Points the user's browser at `url`. Called exactly once per activation.
    fn navigate(&self, url: &str) -> Result<()>;
}

/// Hands the URL to the default system browser.
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl Navigate for SystemBrowser {
    fn navigate(&self, url: &str) -> Result<()> {
        webbrowser::open(url).map_err(|e| LandingError::BrowserError(e.to_string()))?;
        Ok(())
    }
}
