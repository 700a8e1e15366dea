pub mod executor;
pub mod media_select;
pub mod svs_api_client;
