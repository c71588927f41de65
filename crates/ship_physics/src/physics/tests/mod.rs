//! Scenario tests exercising bodies and pairwise queries together

mod scenarios;
