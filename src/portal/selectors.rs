// XPath selectors for the fleet-operations web application.

// Login form
pub const LOGIN_USERNAME: &str = "//input[@name='username']";
pub const LOGIN_PASSWORD: &str = "//input[@name='password']";
pub const LOGIN_ID: &str = "//input[@name='loginId']";
pub const LOGIN_SUBMIT: &str = "//button[@type='submit']";

// MVA search
pub const MVA_SEARCH_INPUT: &str = "//input[@data-test-id='mva-search-input']";
pub const NO_RESULTS_BANNER: &str =
    "//div[contains(@class, 'fleet-operations-pwa__no-results')]";
pub const SCAN_RECORD: &str = "//div[contains(@class, 'fleet-operations-pwa__scan-record__')]";

// Work item tab and the PM status label: the label sits under the scan-record
// ancestor that also holds the literal 'Complaints' reference label.
pub const WORK_ITEM_TAB: &str = "//div[@data-tab-id='workItems']";
pub const PM_STATUS_LABEL: &str = "//strong[text()='Complaints']/parent::div/ancestor::div[contains(@class, 'fleet-operations-pwa__scan-record__')]/descendant::div[contains(@class, 'fleet-operations-pwa__scan-record-header-title-right')]";
