//! Minimal CLI around the codec and the frequency attack. All analysis
//! lives in the library; this binary only parses arguments, calls the core,
//! and prints the structured results.

use std::env;

use vigenere_rs::analysis::attack::attack;
use vigenere_rs::analysis::ic::index_of_coincidence;
use vigenere_rs::cipher::{decrypt, encrypt};
use vigenere_rs::config::load_config;
use vigenere_rs::language::{normalize, LanguageModel, ENGLISH, PORTUGUESE};

fn print_usage() {
    eprintln!("Commands:\n  encrypt <key> <text>\n  decrypt <key> <text>\n  attack <english|portuguese> <max-key-length> <ciphertext>\n  attack-with-config <config.json> <ciphertext>\n  ic <text>");
}

fn model_by_name(name: &str) -> Option<&'static LanguageModel> {
    match name.to_ascii_lowercase().as_str() {
        "english" | "en" => Some(&ENGLISH),
        "portuguese" | "pt" => Some(&PORTUGUESE),
        _ => None,
    }
}

fn run_attack(ciphertext: &str, max_key_length: usize, model: &LanguageModel) {
    let report = attack(ciphertext, max_key_length, model);
    if report.is_inconclusive() {
        eprintln!("attack inconclusive: ciphertext too short or not alphabetic");
        return;
    }
    println!("{}", serde_json::to_string_pretty(&report).unwrap());
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "encrypt" => {
            if args.len() != 4 {
                return print_usage();
            }
            match encrypt(&args[3], &args[2]) {
                Ok(ciphertext) => println!("{ciphertext}"),
                Err(err) => eprintln!("encryption failed: {err}"),
            }
        }
        "decrypt" => {
            if args.len() != 4 {
                return print_usage();
            }
            match decrypt(&args[3], &args[2]) {
                Ok(plaintext) => println!("{plaintext}"),
                Err(err) => eprintln!("decryption failed: {err}"),
            }
        }
        "attack" => {
            if args.len() != 5 {
                return print_usage();
            }
            let model = match model_by_name(&args[2]) {
                Some(m) => m,
                None => return eprintln!("unknown language: {}", args[2]),
            };
            let max_key_length = match args[3].parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return eprintln!("max key length must be a positive integer"),
            };
            run_attack(&args[4], max_key_length, model);
        }
        "attack-with-config" => {
            if args.len() != 4 {
                return print_usage();
            }
            let config = match load_config(&args[2]) {
                Ok(cfg) => cfg,
                Err(err) => return eprintln!("config load failed: {err}"),
            };
            let model = match config.model() {
                Ok(m) => m,
                Err(err) => return eprintln!("config load failed: {err}"),
            };
            run_attack(&args[3], config.max_key_length, model);
        }
        "ic" => {
            if args.len() != 3 {
                return print_usage();
            }
            let normalized = normalize(&args[2]);
            println!("{:.6}", index_of_coincidence(normalized.as_bytes()));
        }
        _ => print_usage(),
    }
}
