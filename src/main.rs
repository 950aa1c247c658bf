//! Merge Grid - native demo
//!
//! Plays a full session with the greedy autoplay policy and prints the board
//! as it goes.
//!
//! Usage: `merge-grid [SEED] [SETTINGS.json]`

use std::path::Path;

use merge_grid::catalog::{self, Visual};
use merge_grid::sim::autoplay;
use merge_grid::{Board, GridEngine, Outcome, Settings};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5eed);
    let settings_path = args.next();
    let settings = Settings::load_or_default(settings_path.as_deref().map(Path::new));

    let mut engine = match GridEngine::new(settings, seed) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Cannot start session: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Merge Grid (native) starting...");

    let mut steps = 0u32;
    while let Some(action) = autoplay::next_action(engine.state()) {
        match engine.apply(action) {
            Ok(Outcome::Fulfilled(done)) => {
                println!(
                    "Delivered {} (+{} points), next: {}",
                    catalog::lookup(done.item).name,
                    done.reward,
                    catalog::lookup(done.next_order.target()).name
                );
                print_board(engine.state().board());
            }
            Ok(Outcome::BonusClaimed { gained }) => println!("Daily bonus: +{} energy", gained),
            Ok(_) => {}
            Err(e) => log::warn!("{:?} rejected: {}", action, e),
        }
        steps += 1;
    }

    let state = engine.state();
    println!(
        "\nFinished after {} actions: {} points, energy {}/{}",
        steps,
        state.points(),
        state.energy(),
        state.max_energy()
    );
    print_board(state.board());

    match serde_json::to_string(state) {
        Ok(json) => log::debug!("Final state: {}", json),
        Err(e) => log::warn!("Failed to serialize final state: {}", e),
    }
}

/// Draw the board with catalog icons (image-backed items show their tag)
fn print_board(board: &Board) {
    let mut line = Vec::with_capacity(board.grid_size());
    for (index, slot) in board.iter().enumerate() {
        line.push(match slot {
            Some(item) => match catalog::lookup(*item).visual() {
                Visual::Icon(icon) => format!("{}{}", icon, item.level()),
                Visual::Image(_) => format!("[{}]", item),
            },
            None => " . ".to_string(),
        });
        let (_, col) = board.row_col(index);
        if col + 1 == board.grid_size() {
            println!("{}", line.join(" "));
            line.clear();
        }
    }
}
