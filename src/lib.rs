//! Backend for the movie recommendation client: validates questionnaire
//! answers, forwards them to the recommendation service, and turns its
//! free-text movie descriptions into structured records.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod parser;
pub mod routes;
pub mod services;
