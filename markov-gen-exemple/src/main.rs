use std::env;

use log::info;
use markov_gen_core::{LanguageModel, ModelConfig};

const USAGE: &str = "usage: markov-gen-exemple <corpus> <window_length> <initial_text> <text_length> [seed]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 4 || args.len() > 5 {
        return Err(USAGE.into());
    }

    // Window length must be >= 1, the seed is optional
    let mut config = ModelConfig::new(args[1].parse()?)?;
    if let Some(seed) = args.get(4) {
        config = config.with_seed(seed.parse()?);
    }
    let text_length: usize = args[3].parse()?;

    // The corpus is read before training: an unreadable file is reported here
    let mut model = LanguageModel::from_config(&config);
    model.train_from_file(&args[0])?;
    info!("{} windows learned from {}", model.window_count(), args[0]);

    // Stops early if the model reaches a window it never saw
    println!("{}", model.generate(&args[2], text_length)?);

    Ok(())
}
