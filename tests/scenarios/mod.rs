//! Engine-driven scenario tests, distinct from `tests/unit`'s direct calls
//! into the scheduler/governor/spread-builder functions: every test here
//! goes through a real `Engine` handle and a `ReplayBrokerAdapter`.

mod common;
mod engine_scenarios;
mod persistence;
