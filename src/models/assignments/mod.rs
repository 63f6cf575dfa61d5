pub mod entities;
pub mod requests;
pub mod responses;
pub mod stats_responses;
