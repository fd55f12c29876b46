// Copyright (C) 2020-2026 Andy Kurnia.

use scrabble_helper::{alphabet, dictionary, display, error, game_config, hand, kibitzer};
use std::io::Read;
use tracing_subscriber::{EnvFilter, prelude::*};

// usage: json <word-list> [question.json]
// the question is read from stdin when no file is given, e.g.
//   {
//     "board": [
//       { "word": "waggoning", "col": 5, "row": 7 },
//       { "word": "whizzing", "col": 8, "row": 14, "down": true, "blanks": [3, 4] }
//     ],
//     "hand": "uqikoj",
//     "count": 5
//   }
// the board and the words the hand spells alone go to stderr, the plays go
// to stdout as a json array.

fn init_tracing() -> error::Returns<()> {
    let filter = EnvFilter::builder()
        .with_default_directive("scrabble_helper=info".parse()?)
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}

pub fn main() -> error::Returns<()> {
    init_tracing()?;
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 || args.len() > 3 {
        scrabble_helper::return_error!(format!(
            "usage: {} <word-list> [question.json]",
            args.first().map_or("json", |s| s.as_str())
        ));
    }

    let t0 = std::time::Instant::now();
    let dictionary = dictionary::Dictionary::from_file(&args[1])?;
    tracing::info!(words = dictionary.len(), elapsed = ?t0.elapsed(), "read {}", args[1]);

    let data = match args.get(2) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut data = String::new();
            std::io::stdin().read_to_string(&mut data)?;
            data
        }
    };
    let question = serde_json::from_str::<kibitzer::Question>(&data)?;

    let game_config = game_config::make_common_english_game_config();
    let kibitzer = kibitzer::Kibitzer::prepare(&game_config, &question)?;
    eprint!("{}", display::BoardDisplay(&kibitzer.board));
    eprintln!("hand: {}", kibitzer.hand);
    for (word, score) in
        hand::raw_hand_scores(&game_config, &kibitzer.hand, &dictionary, kibitzer.count)
    {
        let word = word
            .iter()
            .filter_map(|&tile| alphabet::ENGLISH_ALPHABET.from_board(tile))
            .collect::<String>();
        eprintln!("  {word}: {score}");
    }

    let t0 = std::time::Instant::now();
    let plays = kibitzer.best_plays(&game_config, &dictionary);
    tracing::info!(found = plays.len(), elapsed = ?t0.elapsed(), "kibitzed");

    println!("{}", serde_json::to_string_pretty(&plays)?);
    Ok(())
}
