// Sentiscope: sentiment classification of movie reviews
//
// This is the library root. Each module corresponds to one part of the
// pipeline, from corpus loading through chart rendering.

pub mod charts;
pub mod config;
pub mod corpus;
pub mod evaluate;
pub mod features;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod status;
pub mod store;
pub mod text;
