//! Trip search server.
//!
//! The front end of a travel booking site: a tabbed landing page whose bus
//! tab holds a search form, and a results page that reads the search back
//! out of the URL.

pub mod config;
pub mod domain;
pub mod form;
pub mod locations;
pub mod query;
pub mod web;
