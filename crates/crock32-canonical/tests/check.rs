use crock32_canonical::{
    encode, is_valid, Base32, Check, CheckError, CheckedCode, CodeError, DecodeError,
    CHECK_MODULUS,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rng() -> StdRng {
    StdRng::seed_from_u64(37)
}

#[test]
fn generated_check_validates_its_value() {
    let check = Check::generate(12);
    assert!(encode(12).is_valid(check));
    assert!(Base32::new_unchecked("z").is_valid(Check::parse("Z").unwrap()));

    let mut rng = rng();
    for _ in 0..100_000 {
        let value: u32 = rng.random();
        assert!(is_valid(encode(value).as_str(), Check::generate(value)), "{}", value);
    }
}

#[test]
fn checks_differ_when_residues_differ() {
    let mut rng = rng();
    for _ in 0..100_000 {
        let a: u32 = rng.random();
        let b: u32 = rng.random();
        if a % CHECK_MODULUS != b % CHECK_MODULUS {
            assert_ne!(Check::generate(a), Check::generate(b), "{} vs {}", a, b);
        } else {
            assert_eq!(Check::generate(a), Check::generate(b));
        }
    }
}

#[test]
fn every_residue_has_a_distinct_symbol() {
    let symbols: std::collections::BTreeSet<char> =
        (0..CHECK_MODULUS).map(|n| Check::generate(n).as_char()).collect();
    assert_eq!(symbols.len(), CHECK_MODULUS as usize);
}

#[test]
fn single_digit_errors_are_detected() {
    let value = 8730;
    let check = Check::generate(value);
    assert!(is_valid("8GT", check));
    assert!(!is_valid("8GV", check));
    assert!(!is_valid("G8T", check));
    assert!(!is_valid("9GT", check));
}

#[test]
fn decode_failure_invalidates_check() {
    let check = Check::generate(0);
    assert!(!is_valid("", check));
    assert!(!is_valid("CUT", check));
    assert!(!is_valid("4000000", check));
    assert!(!Base32::invalid().is_valid(check));
}

#[test]
fn parse_accepts_check_symbols() {
    let cases = [
        ("0", '0'),
        ("o", '0'),
        ("O", '0'),
        ("i", '1'),
        ("L", '1'),
        ("z", 'Z'),
        ("*", '*'),
        ("~", '~'),
        ("$", '$'),
        ("=", '='),
        ("U", 'U'),
        ("u", 'U'),
    ];
    for (input, expected) in cases {
        assert_eq!(Check::parse(input).unwrap().as_char(), expected, "{:?}", input);
    }
    assert_eq!("u".parse::<Check>(), Ok(Check::generate(36)));
}

#[test]
fn parse_rejects_bad_symbols() {
    assert_eq!(Check::parse(""), Err(CheckError::InvalidLength(0)));
    assert_eq!(Check::parse("AB"), Err(CheckError::InvalidLength(2)));
    assert_eq!(Check::parse("-"), Err(CheckError::InvalidDigit('-')));
    assert_eq!(Check::parse("!"), Err(CheckError::InvalidDigit('!')));
    assert_eq!(Check::parse(" "), Err(CheckError::InvalidDigit(' ')));
    assert_eq!(Check::parse("é"), Err(CheckError::InvalidDigit('é')));
    assert_eq!(Check::parse("€"), Err(CheckError::InvalidDigit('€')));
}

#[test]
fn checked_code_round_trips() {
    let mut rng = rng();
    for _ in 0..10_000 {
        let value: u32 = rng.random();
        let code = CheckedCode::generate(value);
        let parsed = CheckedCode::parse(&code.to_string().to_lowercase()).unwrap();
        assert_eq!(parsed, code);
        assert!(parsed.verify());
        assert_eq!(parsed.decode(), Ok(value));
    }
}

#[test]
fn checked_code_parses_sloppy_input() {
    let code = CheckedCode::parse("00-8gt-=").unwrap();
    assert_eq!(code.value, encode(8730));
    assert_eq!(code.decode(), Ok(8730));

    assert_eq!(CheckedCode::generate(12).to_string(), "CC");
    assert_eq!(CheckedCode::generate(36).to_string(), "14U");
}

#[test]
fn checked_code_reports_each_failure() {
    assert_eq!(
        CheckedCode::parse(""),
        Err(CodeError::Value(DecodeError::EmptyInput))
    );
    assert_eq!(
        CheckedCode::parse("C"),
        Err(CodeError::Value(DecodeError::EmptyInput))
    );
    assert_eq!(
        CheckedCode::parse("8GT!"),
        Err(CodeError::Check(CheckError::InvalidDigit('!')))
    );
    assert_eq!(
        CheckedCode::parse("8UT="),
        Err(CodeError::Value(DecodeError::InvalidDigit('U')))
    );

    let wrong = CheckedCode::parse("8GT0").unwrap();
    assert!(!wrong.verify());
    assert_eq!(wrong.decode(), Err(CodeError::Mismatch));

    let too_big = CheckedCode::parse("4000000*").unwrap();
    assert_eq!(too_big.decode(), Err(CodeError::Value(DecodeError::Overflow)));
}
