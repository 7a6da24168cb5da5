use crock32_canonical::{CheckedCode, MAX_DIGITS};

fn main() {
    let values = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<u32>())
        .collect::<Result<Vec<_>, _>>();

    let values = match values {
        Ok(values) if !values.is_empty() => values,
        Ok(_) => vec![0, 12, 90, 8730, u32::MAX],
        Err(err) => {
            eprintln!("invalid integer: {}", err);
            std::process::exit(1);
        }
    };

    for value in values {
        let code = CheckedCode::generate(value);
        println!(
            "{:>10}  {}  {}",
            value,
            code.value.pad(MAX_DIGITS),
            code
        );
    }
}
