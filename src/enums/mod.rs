pub mod commands;
pub mod scrape_state;
