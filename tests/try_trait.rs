#![cfg(feature = "try_trait")]
#![feature(try_trait_v2, try_trait_v2_residual)]

use std::ops::{Residual, Try};

use twotrack::Outcome;

#[derive(Debug, PartialEq)]
struct Endpoint {
    host: String,
    port: u16,
}

fn endpoint(raw: &str) -> Outcome<Endpoint, String> {
    let (host, port) = raw
        .split_once(':')
        .ok_or_else(|| format!("missing port in {raw:?}"))?;
    let port: u16 = port
        .parse()
        .map_err(|e| format!("bad port {port:?}: {e}"))?;
    Outcome::success(Endpoint {
        host: host.to_string(),
        port,
    })
}

#[test]
fn test_question_mark_on_std_results() {
    assert_eq!(
        endpoint("db:5432"),
        Outcome::Success(Endpoint {
            host: "db".to_string(),
            port: 5432,
        })
    );
    assert_eq!(
        endpoint("db"),
        Outcome::Failure("missing port in \"db\"".to_string())
    );
    assert!(endpoint("db:http")
        .failure_value()
        .is_some_and(|e| e.starts_with("bad port \"http\"")));
}

#[test]
fn test_question_mark_inside_async_blocks() {
    fn replica_of(primary: &Endpoint) -> Outcome<Endpoint, String> {
        match primary.port.checked_add(1) {
            Some(port) => Outcome::success(Endpoint {
                host: format!("{}-replica", primary.host),
                port,
            }),
            None => Outcome::failure(format!("no port above {}", primary.port)),
        }
    }

    let pair = |raw: &'static str| async move {
        let primary = endpoint(raw)?;
        let replica = replica_of(&primary)?;
        Outcome::<(u16, u16), String>::success((primary.port, replica.port))
    };

    assert_eq!(tokio_test::block_on(pair("db:5432")), Outcome::Success((5432, 5433)));
    assert_eq!(
        tokio_test::block_on(pair("db:65535")),
        Outcome::Failure("no port above 65535".to_string())
    );
}

#[test]
fn test_residual_retypes_the_success_channel() {
    fn label<T>(value: T) -> <T::Residual as Residual<String>>::TryType
    where
        T: Try<Output = u16>,
        T::Residual: Residual<String>,
    {
        let port = value?;
        Try::from_output(format!("port {port}"))
    }

    let ok: Outcome<u16, String> = Outcome::success(80);
    assert_eq!(label(ok), Outcome::Success("port 80".to_string()));

    let bad: Outcome<u16, String> = Outcome::failure("closed".to_string());
    assert_eq!(label(bad), Outcome::Failure("closed".to_string()));
}

#[test]
fn test_question_mark_widens_failure_with_from() {
    #[derive(Debug, PartialEq)]
    enum AppError {
        Parse(String),
        Range(u8),
    }

    impl From<u8> for AppError {
        fn from(value: u8) -> Self {
            AppError::Range(value)
        }
    }

    fn in_range(n: u8) -> Outcome<u8, u8> {
        if n <= 100 {
            Outcome::success(n)
        } else {
            Outcome::failure(n)
        }
    }

    fn load(raw: &str) -> Outcome<u8, AppError> {
        let n = Outcome::from(raw.parse::<u8>())
            .map_failure(|e| AppError::Parse(e.to_string()))?;
        let n = in_range(n)?;
        Outcome::success(n)
    }

    assert_eq!(load("7"), Outcome::Success(7));
    assert_eq!(load("200"), Outcome::Failure(AppError::Range(200)));
    assert!(matches!(load("x"), Outcome::Failure(AppError::Parse(_))));
}

#[test]
fn test_question_mark_short_circuits() {
    let mut call_count = 0;

    fn check_positive(n: i32) -> Outcome<i32, String> {
        if n > 0 {
            Outcome::success(n)
        } else {
            Outcome::failure("Must be positive".to_string())
        }
    }

    fn process_with_side_effect(a: i32, call_count: &mut i32) -> Outcome<i32, String> {
        let value = check_positive(a)?;
        *call_count += 1;
        Outcome::success(value)
    }

    let result = process_with_side_effect(-1, &mut call_count);
    assert!(result.is_failure());
    assert_eq!(call_count, 0);

    let result = process_with_side_effect(1, &mut call_count);
    assert!(result.is_success());
    assert_eq!(call_count, 1);
}

#[test]
fn test_question_mark_matches_flat_map() {
    fn step1(n: i32) -> Outcome<i32, &'static str> {
        if n > 0 {
            Outcome::success(n)
        } else {
            Outcome::failure("step 1")
        }
    }

    fn step2(n: i32) -> Outcome<i32, &'static str> {
        if n % 2 == 0 {
            Outcome::success(n / 2)
        } else {
            Outcome::failure("step 2")
        }
    }

    fn with_question_mark(n: i32) -> Outcome<i32, &'static str> {
        let n = step1(n)?;
        step2(n)
    }

    for n in [-3, 0, 3, 8] {
        assert_eq!(with_question_mark(n), step1(n).flat_map(step2));
    }
}
