pub mod config;
pub mod consts;
pub mod dataset;
pub mod drift;
pub mod error;
pub mod io;
pub mod matching;
pub mod region;
pub mod stack;
