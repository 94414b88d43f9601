//! Simply Dice CLI - the terminal front end.
//!
//! Drives the same roll animator as the 3D app at a fixed 30 Hz tick,
//! rendering each die as a tumbling glyph until it settles.

use std::f32::consts::FRAC_PI_2;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use simply_dice::roller::{Die, RollAnimator, RollOutcome, DIE_COUNT};

const FACE_GLYPHS: [&str; 6] = ["\u{2680}", "\u{2681}", "\u{2682}", "\u{2683}", "\u{2684}", "\u{2685}"];
const TICK_SECS: f32 = 1.0 / 30.0;

/// Simply Dice - roll two dice in the terminal
#[derive(Parser)]
#[command(name = "sdice")]
#[command(author, version, about = "Simply Dice - roll two dice in the terminal")]
struct Cli {
    /// Number of dice to roll
    #[arg(short = 'n', long, default_value_t = DIE_COUNT, value_parser = clap::value_parser!(usize))]
    dice: usize,

    /// Seed the RNG for a reproducible roll
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the animation and print the result immediately
    #[arg(short, long)]
    quiet: bool,
}

/// Picks a glyph from the die's in-flight rotation so the animation reads
/// as tumbling rather than cycling 1-6 in order.
fn tumbling_glyph(die: &Die) -> &'static str {
    let quarter_turns = (die.orientation().x / FRAC_PI_2).floor() as i64;
    FACE_GLYPHS[quarter_turns.rem_euclid(6) as usize]
}

fn print_outcome(outcome: &RollOutcome) {
    let glyphs = outcome
        .faces
        .iter()
        .map(|&f| FACE_GLYPHS[usize::from(f - 1)])
        .collect::<Vec<_>>()
        .join(" ");
    let sum = outcome
        .faces
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" + ");
    println!(
        "{}   {} = {}",
        glyphs.bold().yellow(),
        sum,
        outcome.total().to_string().bold().green()
    );
}

fn main() {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut animator = RollAnimator::new(cli.dice, &mut rng);
    if let Err(e) = animator.roll(&mut rng) {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }

    let outcome = loop {
        if let Some(outcome) = animator.advance(TICK_SECS) {
            break outcome;
        }
        if !cli.quiet {
            let frame = animator
                .dice()
                .iter()
                .map(tumbling_glyph)
                .collect::<Vec<_>>()
                .join(" ");
            print!("\r{}", frame.bold());
            let _ = io::stdout().flush();
            thread::sleep(Duration::from_secs_f32(TICK_SECS));
        }
    };

    if !cli.quiet {
        print!("\r");
    }
    print_outcome(&outcome);
}
