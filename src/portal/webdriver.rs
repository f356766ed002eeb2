use crate::config::settings::PortalSettings;
use crate::core::status::classify;
use crate::domain::model::{Credentials, FieldEntry, Mva, WorkItemStatus};
use crate::domain::ports::FleetPortal;
use crate::portal::selectors;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use std::time::Duration;
use thirtyfour::prelude::*;

/// WebDriver-backed portal. Owns the browser session for the lifetime of the
/// run; `close` consumes it and quits the browser.
pub struct WebDriverPortal {
    driver: WebDriver,
    base_url: String,
    wait_timeout: Duration,
    poll_interval: Duration,
}

impl WebDriverPortal {
    /// Create the browser session against a running WebDriver server.
    pub async fn connect(settings: &PortalSettings) -> Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        if settings.headless {
            caps.set_headless()?;
        }

        let driver = WebDriver::new(&settings.webdriver_url, caps).await?;
        tracing::debug!("WebDriver session created at {}", settings.webdriver_url);

        Ok(Self {
            driver,
            base_url: settings.base_url.clone(),
            wait_timeout: settings.wait_timeout,
            poll_interval: settings.poll_interval,
        })
    }

    async fn wait_for(&self, xpath: &'static str) -> WebDriverResult<WebElement> {
        self.driver
            .query(By::XPath(xpath))
            .wait(self.wait_timeout, self.poll_interval)
            .first()
            .await
    }

    /// Two independent bounded waits: tab clickable, then label present.
    /// Any failure bubbles up and is absorbed into Unknown by the caller.
    async fn read_status_label(&self) -> WebDriverResult<String> {
        let tab = self.wait_for(selectors::WORK_ITEM_TAB).await?;
        tab.wait_until()
            .wait(self.wait_timeout, self.poll_interval)
            .clickable()
            .await?;
        tab.click().await?;

        let label = self.wait_for(selectors::PM_STATUS_LABEL).await?;
        label.text().await
    }
}

#[async_trait]
impl FleetPortal for WebDriverPortal {
    async fn login(&self, credentials: &Credentials) -> Result<()> {
        self.driver.goto(&self.base_url).await?;

        let username = self.wait_for(selectors::LOGIN_USERNAME).await?;
        username.clear().await?;
        username.send_keys(&credentials.username).await?;

        let password = self.driver.find(By::XPath(selectors::LOGIN_PASSWORD)).await?;
        password.clear().await?;
        password.send_keys(&credentials.password).await?;

        let login_id = self.driver.find(By::XPath(selectors::LOGIN_ID)).await?;
        login_id.clear().await?;
        login_id.send_keys(&credentials.login_id).await?;

        self.driver
            .find(By::XPath(selectors::LOGIN_SUBMIT))
            .await?
            .click()
            .await?;

        // Login has settled once the MVA search input renders.
        self.wait_for(selectors::MVA_SEARCH_INPUT)
            .await
            .map_err(|e| AppError::Login {
                message: format!("search input never appeared after login: {}", e),
            })?;

        Ok(())
    }

    async fn enter_mva(&self, mva: &Mva) -> Result<FieldEntry> {
        let field = match self.wait_for(selectors::MVA_SEARCH_INPUT).await {
            Ok(field) => field,
            Err(_) => return Ok(FieldEntry::FieldMissing),
        };

        field.clear().await?;
        field.send_keys(mva.as_str()).await?;
        Ok(FieldEntry::Entered)
    }

    async fn is_mva_known(&self, _mva: &Mva) -> Result<bool> {
        // An explicit no-results banner wins over waiting out the record query.
        if self
            .driver
            .find(By::XPath(selectors::NO_RESULTS_BANNER))
            .await
            .is_ok()
        {
            return Ok(false);
        }

        Ok(self.wait_for(selectors::SCAN_RECORD).await.is_ok())
    }

    async fn work_item_status(&self, mva: &Mva) -> WorkItemStatus {
        tracing::info!("Checking work item status for {}", mva);

        match self.read_status_label().await {
            Ok(text) => {
                tracing::info!("Found PM work item status: {}", text.trim().to_lowercase());
                classify(&text)
            }
            Err(e) => {
                tracing::warn!(
                    "Could not find a PM work item status for {}, status is UNKNOWN: {}",
                    mva,
                    e
                );
                WorkItemStatus::Unknown
            }
        }
    }

    async fn close(self) -> Result<()> {
        self.driver.quit().await?;
        Ok(())
    }
}
