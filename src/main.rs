//! Iron Arena - Entry Point
//!
//! A terminal front end for the duel core: pick a fighter, trade moves
//! with the computer opponent, watch status effects and the opponent's
//! mode shift turn by turn.

use clap::Parser;
use iron_arena::arena::{Duel, TurnReport};
use iron_arena::combat::MoveKind;
use iron_arena::core::error::Result;
use iron_arena::core::types::{Difficulty, Side};
use iron_arena::roster;

use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "iron-arena", about = "Turn-based duel against a fuzzy-logic opponent")]
struct Args {
    /// Fighter to play: warrior, tank, assassin, mage, or samurai
    #[arg(short, long, default_value = "warrior")]
    character: String,

    /// Opponent difficulty: easy, medium, or hard
    #[arg(short, long, default_value = "medium")]
    difficulty: String,

    /// Fixed RNG seed for a reproducible match
    #[arg(short, long)]
    seed: Option<u64>,

    /// List the roster and exit
    #[arg(long)]
    roster: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iron_arena=info".into()),
        )
        .init();

    let args = Args::parse();

    if args.roster {
        print_roster();
        return Ok(());
    }

    let difficulty = Difficulty::from_id(&args.difficulty).unwrap_or(Difficulty::Medium);
    let mut duel = match args.seed {
        Some(seed) => Duel::new_seeded(&args.character, difficulty, seed)?,
        None => Duel::new(&args.character, difficulty)?,
    };

    println!("\n=== IRON ARENA ===");
    println!(
        "{} vs {} ({} difficulty)",
        duel.profile(Side::Player).name,
        duel.profile(Side::Opponent).name,
        difficulty
    );
    println!();
    println!("Moves: punch, kick, block, evade, rest, special");
    println!("Other: status / s, quit / q");
    println!();

    loop {
        let tick = duel.tick()?;
        let player_name = duel.profile(Side::Player).name;
        let opponent_name = duel.profile(Side::Opponent).name;
        for (who, effect) in tick
            .player_effects
            .iter()
            .map(|e| (player_name, e))
            .chain(tick.opponent_effects.iter().map(|e| (opponent_name, e)))
        {
            for line in effect.description(who) {
                println!("{line}.");
            }
        }
        if tick.match_over {
            print_result(&duel);
            break;
        }

        display_status(&duel);

        print!("turn {} > ", duel.turn());
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim().to_ascii_lowercase();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }
        if input == "status" || input == "s" {
            display_detailed_status(&duel);
            continue;
        }

        let Some(kind) = MoveKind::from_id(&input) else {
            println!("Unknown move: {input}");
            continue;
        };

        match duel.submit_player_move(kind) {
            Ok(report) => {
                print_turn(
                    &report,
                    duel.profile(Side::Player).name,
                    duel.profile(Side::Opponent).name,
                );
                if report.match_over {
                    print_result(&duel);
                    break;
                }
            }
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

fn print_roster() {
    println!("Roster:");
    for profile in roster::all_profiles() {
        println!(
            "  {:<9} {:>3} HP  {:>2} ST  {:>2} dmg  special: {} ({})",
            profile.name,
            profile.max_hp,
            profile.max_stamina,
            profile.base_damage,
            profile.special.name,
            profile.special.description
        );
    }
}

fn display_status(duel: &Duel) {
    let player = duel.fighter(Side::Player);
    let opponent = duel.fighter(Side::Opponent);
    println!(
        "You: {}/{} HP, {}/{} ST | Opponent: {}/{} HP, {}/{} ST",
        player.hp, player.max_hp, player.stamina, player.max_stamina,
        opponent.hp, opponent.max_hp, opponent.stamina, opponent.max_stamina,
    );
}

fn display_detailed_status(duel: &Duel) {
    let snapshot = duel.snapshot();
    for (label, fighter) in [("You", &snapshot.player), ("Opponent", &snapshot.opponent)] {
        println!(
            "{label}: {} - {}/{} HP, {}/{} ST, special {} ({})",
            fighter.name,
            fighter.hp,
            fighter.max_hp,
            fighter.stamina,
            fighter.max_stamina,
            fighter.special_name,
            if fighter.special_cooldown == 0 {
                "ready".to_string()
            } else {
                format!("{} turn(s)", fighter.special_cooldown)
            },
        );
        for effect in &fighter.effects {
            println!("  {} ({} turn(s) left)", effect.kind.display_name(), effect.remaining);
        }
    }
    println!("Opponent mode: {}", snapshot.opponent_mode.display_name());
    println!("Legal moves:");
    for report in duel.legal_moves(Side::Player) {
        if report.legal {
            println!("  {} ({} ST)", report.name, report.stamina_cost);
        } else if let Some(reason) = report.reason {
            println!("  {} - unavailable: {}", report.name, reason);
        }
    }
}

fn print_turn(report: &TurnReport, player_name: &str, opponent_name: &str) {
    if let Some(outcome) = &report.player_outcome {
        println!("{}.", outcome.description(player_name));
    }
    if let Some(opponent) = &report.opponent {
        println!("Opponent mode: {}", opponent.mode.display_name());
        println!("{}.", opponent.outcome.description(opponent_name));
    }
}

fn print_result(duel: &Duel) {
    use iron_arena::core::types::Winner;
    match duel.winner() {
        Some(Winner::Player) => println!("\nYou win!"),
        Some(Winner::Opponent) => println!("\nThe opponent wins."),
        Some(Winner::Draw) => println!("\nBoth fighters fall. Draw."),
        None => {}
    }
}
