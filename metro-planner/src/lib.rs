//! Metro route planner.
//!
//! Answers: "what is the shortest way from this metro station to that one,
//! which lines do I ride, where do I change, and what does it cost?"

pub mod dataset;
pub mod domain;
pub mod geo;
pub mod itinerary;
pub mod network;
pub mod planner;
