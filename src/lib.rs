extern crate serde;
extern crate serde_json;

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate log;

extern crate time;

pub mod engine;
pub mod input;
pub mod logger;
pub mod runner;
pub mod strategy;
