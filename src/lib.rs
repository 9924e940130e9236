#![doc = include_str!("../README.md")]
pub mod audit;
pub mod boilerplate;
pub mod config;
pub mod dictionary;
pub mod driver;
pub mod error;
pub mod io;
pub mod lang;
pub mod noise;
pub mod ocr;
pub mod patterns;
pub mod pipeline;
pub mod report;
pub mod triage;
pub mod unicode;
pub mod unwrap;
pub mod vocab;
