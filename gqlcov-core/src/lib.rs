pub mod capture;
pub mod classify;
pub mod cli;
pub mod conf;
pub mod coverage;
pub mod evomaster;
pub mod logging;
pub mod operation;
