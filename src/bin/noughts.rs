use std::io;

use anyhow::Result;
use noughts::{LeaderboardStore, adapters::JsonFileRepository, cli};
use rand::{SeedableRng, rngs::StdRng};

fn main() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    // One OS-seeded generator for the whole process; games are only
    // deterministic under an injected seed in tests.
    let mut rng = StdRng::from_os_rng();
    let store = LeaderboardStore::new(JsonFileRepository::default());

    cli::menu::run(&mut stdin.lock(), &mut stdout.lock(), &mut rng, &store)?;
    Ok(())
}
