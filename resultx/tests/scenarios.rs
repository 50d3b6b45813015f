use std::cell::Cell;

use resultx::{Result, State, wrap};

/// A dynamically typed operand, so `add` can be handed mismatched types at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Operand {
    Int(i64),
    Text(String),
}

impl Operand {
    const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Text(_) => "str",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported operand type(s) for +: '{left}' and '{right}'")]
struct TypeError {
    left: &'static str,
    right: &'static str,
}

fn int(n: i64) -> Operand {
    Operand::Int(n)
}

fn text(s: &str) -> Operand {
    Operand::Text(s.to_owned())
}

fn add(left: Operand, right: Operand) -> std::result::Result<Operand, TypeError> {
    match (left, right) {
        (Operand::Int(a), Operand::Int(b)) => Ok(Operand::Int(a + b)),
        (Operand::Text(a), Operand::Text(b)) => Ok(Operand::Text(a + &b)),
        (left, right) => Err(TypeError {
            left: left.kind(),
            right: right.kind(),
        }),
    }
}

fn increment(operand: Operand) -> Operand {
    match operand {
        Operand::Int(n) => Operand::Int(n + 1),
        other => other,
    }
}

#[test]
fn test_valid_call() {
    let res = wrap(add).call((int(10), int(10)));

    assert!(res.to_string().contains("(Success)"));
    assert!(res.is_success());
    assert!(!res.is_failure());
    assert_eq!(res.state(), State::Success);
    assert_eq!(res.clone().unwrap_value(), int(20));
    assert_eq!(res.clone().value_or(int(21)), int(20));
    assert_eq!(res.clone().map_value(increment), int(21));
    assert_eq!(res.clone().map_value_or(increment, int(21)), int(21));

    let handled = Cell::new(false);
    let value = res.clone().value_or_else(|_| {
        handled.set(true);
        int(0)
    });
    assert_eq!(value, int(20));
    assert!(!handled.get());

    let produced = Cell::new(false);
    let value = res.clone().value_or_compute(|| {
        produced.set(true);
        text("20")
    });
    assert_eq!(value, int(20));
    assert!(!produced.get());

    let misuse = res.clone().checked_unwrap_error().unwrap_error();
    assert_eq!(misuse.to_string(), "cannot use success result as failure value");
    assert_eq!(misuse.into_payload(), int(20));

    let fallback = TypeError {
        left: "int",
        right: "int",
    };
    assert_eq!(res.error_or(fallback.clone()), fallback);
}

#[test]
#[should_panic(expected = "cannot use success result as failure value")]
fn test_valid_call_as_error() {
    let _ = wrap(add).call((int(10), int(10))).unwrap_error();
}

#[test]
fn test_mismatched_operands() {
    let res = wrap(add).call((int(10), text("10")));

    assert!(res.to_string().contains("(Failure)"));
    assert!(!res.is_success());
    assert!(res.is_failure());
    assert_eq!(res.clone().value_or(int(21)), int(21));
    assert_eq!(res.clone().map_value_or(increment, int(21)), int(22));
    assert_eq!(res.clone().value_or_compute(|| add(text("2"), text("0")).unwrap()), text("20"));

    let error = res.clone().unwrap_error();
    assert_eq!(error.to_string(), "unsupported operand type(s) for +: 'int' and 'str'");
    assert_eq!(res.clone().error(), Some(error));
}

#[test]
fn test_mismatched_operands_handler_result_is_returned() {
    let res = wrap(add).call((int(10), text("10")));

    let calls = Cell::new(0);
    let seen = res.clone().map(Some).value_or_else(|error| {
        calls.set(calls.get() + 1);
        assert_eq!(error.left, "int");
        None
    });
    assert_eq!(seen, None);
    assert_eq!(calls.get(), 1);

    let recovered = res.value_or_else(|error| text(error.right));
    assert_eq!(recovered, text("str"));
}

#[test]
#[should_panic(expected = "cannot use failure result as success value")]
fn test_mismatched_operands_as_value() {
    let _ = wrap(add).call((int(10), text("10"))).map_value(increment);
}

#[test]
fn test_checked_access_on_mismatched_operands() {
    let res: Result<Operand, TypeError> = wrap(add).call((int(10), text("10")));
    let misuse = res.checked_map_value(increment).unwrap_error();

    assert_eq!(misuse.expected(), State::Success);
    assert_eq!(misuse.found(), State::Failure);
    assert_eq!(
        misuse.into_payload(),
        TypeError {
            left: "int",
            right: "str"
        }
    );
}

#[cfg(feature = "std")]
#[test]
fn test_overflow_panic_is_captured() {
    let add = resultx::wrap_unwind(|a: i32, b: i32| a.checked_add(b).expect("overflow"));

    assert_eq!(add.call((10, 10)).unwrap_value(), 20);

    let res = add.call((i32::MAX, 1));
    assert_eq!(res.as_ref().map_value_or(|n| n + 1, &21), 22);
    assert_eq!(res.unwrap_error().message(), Some("overflow"));
}
