use chess_movegen::Slider;
use chess_movegen::buildutils::{SearchConfig, find_all_magics, format_magic_array};

const USAGE: &str = "Usage: find_magics [--seed <n|0xN>] [--max-attempts <n>] [--piece bishop|rook|both]";

fn parse_u64(text: &str) -> Option<u64> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

fn usage_error(message: &str) -> ! {
    eprintln!("{message}\n\n{USAGE}");
    std::process::exit(2);
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut config = SearchConfig::default();
    let mut sliders = vec![Slider::Bishop, Slider::Rook];

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let value = match flag.as_str() {
            "-h" | "--help" => {
                println!("{USAGE}");
                return;
            }
            "--seed" | "--max-attempts" | "--piece" => match iter.next() {
                Some(value) => value.as_str(),
                None => usage_error(&format!("Missing value for {flag}")),
            },
            other => usage_error(&format!("Unknown argument: {other}")),
        };

        match flag.as_str() {
            "--seed" => {
                config.seed = parse_u64(value)
                    .unwrap_or_else(|| usage_error(&format!("Invalid seed: {value}")));
            }
            "--max-attempts" => {
                config.max_attempts = parse_u64(value)
                    .filter(|&n| n > 0)
                    .unwrap_or_else(|| usage_error(&format!("Invalid attempt count: {value}")));
            }
            _ => {
                sliders = match value {
                    "bishop" => vec![Slider::Bishop],
                    "rook" => vec![Slider::Rook],
                    "both" => vec![Slider::Bishop, Slider::Rook],
                    other => usage_error(&format!("Unknown piece: {other}")),
                };
            }
        }
    }

    println!("Seed: {:#X}, max attempts per square: {}", config.seed, config.max_attempts);

    for slider in sliders {
        let set = match find_all_magics(slider, &config) {
            Ok(set) => set,
            Err(e) => {
                eprintln!("Magic search failed: {e}");
                std::process::exit(1);
            }
        };

        println!("============================================================");
        for (rank, attempts) in set.attempts.chunks(8).enumerate() {
            println!(
                "{slider:?} rank {}: {} attempts",
                rank + 1,
                attempts.iter().sum::<u64>()
            );
        }
        println!("============================================================");

        let name = match slider {
            Slider::Bishop => "BISHOP_MAGIC_NUMS",
            Slider::Rook => "ROOK_MAGIC_NUMS",
        };
        println!("{}", format_magic_array(name, &set.magics));
    }
}
