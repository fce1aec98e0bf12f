use super::*;

#[test]
fn as_str_matches_variant_name() {
    assert_eq!(ErrorCode::E0001.as_str(), "E0001");
    assert_eq!(ErrorCode::E0002.to_string(), "E0002");
}

#[test]
fn parse_accepts_common_spellings() {
    assert_eq!("E0001".parse(), Ok(ErrorCode::E0001));
    assert_eq!("e0002".parse(), Ok(ErrorCode::E0002));
    assert_eq!("0002".parse(), Ok(ErrorCode::E0002));
    assert_eq!(" E0001 ".parse(), Ok(ErrorCode::E0001));
}

#[test]
fn parse_rejects_unknown_codes() {
    assert_eq!(
        "E9999".parse::<ErrorCode>(),
        Err(UnknownErrorCode("E9999".to_string()))
    );
    assert!("".parse::<ErrorCode>().is_err());
}

#[test]
fn every_code_round_trips_and_is_explained() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse(), Ok(code));
        assert!(!code.explanation().is_empty(), "{code} has no explanation");
    }
}

#[test]
fn unknown_code_message() {
    let err = UnknownErrorCode("X1".to_string());
    assert_eq!(err.to_string(), "unknown error code `X1`");
}
