pub mod app;
pub mod error;
pub mod models {
    pub mod resume;
}
pub mod api {
    pub mod client;
}
pub mod state {
    pub mod dashboard;
    pub mod filter;
    pub mod upload;
}
pub mod components {
    pub mod dashboard;
    pub mod filter_bar;
    pub mod resume_card;
    pub mod stats_bar;
    pub mod upload_form;
}
