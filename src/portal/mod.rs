// Adapter layer: thirtyfour-backed implementation of the FleetPortal port.

pub mod selectors;
pub mod webdriver;

pub use webdriver::WebDriverPortal;
