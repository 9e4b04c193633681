use anyhow::{Result, ensure};
use clap::Parser;
use nozoki_core::mapgen::generate_dungeon;
use nozoki_core::spatial::can_occupy;
use nozoki_core::{Direction, DungeonConfig, Entity, MoveInput, TileKind, World};
use nozoki_tools::logging;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{debug, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of dungeons to generate
    #[arg(short, long, default_value_t = 200)]
    runs: u32,
    /// Simulation steps per dungeon
    #[arg(short, long, default_value_t = 600)]
    ticks: u32,
    #[arg(short, long)]
    verbose: bool,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn random_input(rng: &mut ChaCha8Rng) -> MoveInput {
    let bits = rng.next_u64();
    MoveInput { right: bits & 1 != 0, left: bits & 2 != 0, up: bits & 4 != 0, down: bits & 8 != 0 }
}

fn fuzz_one(run_seed: u64, rng: &mut ChaCha8Rng, ticks: u32) -> Result<()> {
    let config = DungeonConfig {
        branch_depth: choose(rng, &[0, 3, 6, 6, 10, 20]),
        ..DungeonConfig::default()
    };
    let dungeon = generate_dungeon(config, run_seed)?;
    let grid = &dungeon.grid;

    ensure!(grid.count(TileKind::PlayerSpawn) == 1, "seed {run_seed}: expected one player spawn");
    let passable = grid.width() * grid.height() - grid.count(TileKind::None);
    ensure!(
        grid.reachable_from(dungeon.player_spawn) == passable,
        "seed {run_seed}: carved tiles are not all connected to the spawn"
    );

    let mut world = World::from_dungeon(dungeon);
    let mut input = MoveInput::default();
    for tick in 0..ticks {
        // Hold each input for a while so the player actually reaches walls.
        if tick % 20 == 0 {
            input = if rng.next_u64() % 4 == 0 {
                MoveInput::toward(choose(rng, &Direction::ALL))
            } else {
                random_input(rng)
            };
        }
        let delta_ms = choose(rng, &[0, 16, 33, 100, 250]);
        world.step(input, delta_ms);

        ensure!(
            can_occupy(world.grid(), &world.player().aabb()),
            "seed {run_seed}: player left passable ground at tick {tick}"
        );
        for (id, enemy) in world.enemies() {
            ensure!(
                can_occupy(world.grid(), &enemy.aabb()),
                "seed {run_seed}: enemy {id:?} left passable ground at tick {tick}"
            );
        }
    }
    debug!(run_seed, enemies = world.enemy_count(), "run survived");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    info!(seed = args.seed, runs = args.runs, ticks = args.ticks, "starting fuzz harness");
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    for _ in 0..args.runs {
        let run_seed = rng.next_u64();
        fuzz_one(run_seed, &mut rng, args.ticks)?;
    }

    info!("fuzzing completed successfully");
    Ok(())
}
