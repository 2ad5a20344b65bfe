//! Integration tests: whole pipelines across the public surface.
//!
//! Each scenario builds a chain the way a consumer would — lenient
//! ingestion at the boundary, strict combinators in the middle,
//! extraction at the end — and checks which rail the chain ends on.

use shunt_outcome::{Deferred, Outcome, Procedure, defer};
use std::cell::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
enum PipelineFault {
    Parse(String),
    Range(u32),
}

fn parse(raw: &str) -> Result<u32, PipelineFault> {
    raw.trim()
        .parse()
        .map_err(|_| PipelineFault::Parse(raw.to_string()))
}

fn check_range(n: u32) -> Outcome<u32, PipelineFault> {
    if n <= 100 {
        Outcome::success(n)
    } else {
        Outcome::failure(PipelineFault::Range(n))
    }
}

#[test]
fn a_healthy_chain_stays_on_the_success_rail() {
    let outcome = Outcome::wrap(parse("1"))
        .and_then(|n| Outcome::success(n + 1))
        .and_then(|n| Outcome::success(n * 2));
    assert_eq!(outcome.value(), 4);
}

#[test]
fn a_fault_skips_every_later_success_step() {
    let later_steps = Cell::new(0);
    let outcome = Outcome::wrap(parse("not a number"))
        .and_then(|n| {
            later_steps.set(later_steps.get() + 1);
            check_range(n)
        })
        .and_then(|n| {
            later_steps.set(later_steps.get() + 1);
            Outcome::success(n * 2)
        });

    assert!(outcome.is_failure());
    assert_eq!(later_steps.get(), 0);
}

#[test]
fn recovery_re_enters_the_success_rail() {
    let outcome = Outcome::wrap(parse("boom"))
        .or_else(|_| Outcome::<_, PipelineFault>::success(0))
        .and_then(|n| Outcome::success(n + 1));
    assert_eq!(outcome.value_or(99), 1);
}

#[test]
fn recovery_never_runs_on_a_healthy_chain() {
    let recoveries = Cell::new(0);
    let outcome = Outcome::wrap(parse("7")).or_else(|fault| {
        recoveries.set(recoveries.get() + 1);
        Outcome::<_, PipelineFault>::failure(fault)
    });
    assert_eq!(outcome.value(), 7);
    assert_eq!(recoveries.get(), 0);
}

#[test]
fn extraction_reports_the_original_fault() {
    let fault = Outcome::wrap(parse("120").and_then(|n| check_range(n).into_result()))
        .and_then(check_range)
        .failure_value();
    assert_eq!(fault, Some(PipelineFault::Range(120)));
}

#[test]
fn deferred_pipelines_run_only_when_invoked() {
    let runs = Cell::new(0);
    let pipeline = defer(|raw: &str| {
        runs.set(runs.get() + 1);
        Outcome::wrap(parse(raw)).and_then(check_range)
    });
    assert_eq!(runs.get(), 0);

    assert_eq!(pipeline.call("42"), Outcome::Success(42));
    assert_eq!(
        pipeline.call("120"),
        Outcome::Failure(PipelineFault::Range(120))
    );
    assert_eq!(runs.get(), 2);
}

#[test]
fn deferred_thunks_default_to_the_unit_argument() {
    let thunk: Deferred<_> = defer(|()| Ok::<_, PipelineFault>("ready"));
    assert_eq!(thunk.invoke(), Outcome::Success("ready"));
}

struct Validate;

impl Procedure for Validate {
    type Input = String;
    type Value = u32;
    type Failure = PipelineFault;
    type Raw = Outcome<u32, PipelineFault>;

    fn run(&self, input: String) -> Outcome<u32, PipelineFault> {
        Outcome::wrap(parse(&input)).and_then(check_range)
    }
}

#[test]
fn procedures_hand_back_outcomes_from_every_invocation() {
    assert_eq!(Validate.call("55".to_string()), Outcome::Success(55));
    assert_eq!(
        Validate.call("555".to_string()),
        Outcome::Failure(PipelineFault::Range(555))
    );
    assert!(Validate.call("?".to_string()).is_failure());
}
