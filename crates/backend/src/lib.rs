//! Natural-disaster aggregation site: server-rendered pages over the disaster
//! timeline, JSON datasets under `/api`, and NASA SVS media summaries.

pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod state;
pub mod usecases;
pub mod views;
