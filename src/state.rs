use crate::config::AppConfig;
use crate::services::sheets::SpreadsheetStore;

pub struct AppState {
    pub config: AppConfig,
    pub sheets: Box<dyn SpreadsheetStore>,
}
