// Prints the grammar verdict and display form for each argument.
// Run with: cargo run --bin titla_preview -- "=дн1ь" "б=гъ"
// src/bin/titla_preview.rs
use titlo_core::{validate, TitlaTable};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let table = TitlaTable::default();
    let mut lines: Vec<String> = std::env::args().skip(1).collect();
    if lines.is_empty() {
        lines = [
            "", "=д", "=а", "б=гъ", "=дн1ь", "а12", "6а", "на=", "=q", "а==б", "a@b", "х=с ч=р",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
    }

    for line in &lines {
        let verdict = match validate(line) {
            Ok(_) => "ok".to_string(),
            Err(e) => format!("rejected: {}", e),
        };
        println!("{:?} => {:?} [{}]", line, table.expand(line), verdict);
    }
}
