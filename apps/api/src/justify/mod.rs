// Text justification: greedy wrapping, gap distribution, paragraph reassembly.
// The formatting modules are pure; service.rs ties them to the word quota.

pub mod handlers;
pub mod justifier;
pub mod paragraph;
pub mod service;
pub mod wrap;
