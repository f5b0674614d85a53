use std::time::Instant;
use torus_life::{Config, NiceInt};

fn main() -> torus_life::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    const SIDE: usize = 512;
    const GENERATIONS: u64 = 1_000;

    let timer = Instant::now();
    let mut engine = Config::default()
        .with_size(SIDE, SIDE)
        .with_seed(Config::DEFAULT_SEED)
        .build_engine()?;
    log::info!("Time on building field: {:?}", timer.elapsed());

    let timer = Instant::now();
    engine.run(GENERATIONS);
    let elapsed = timer.elapsed();
    log::info!(
        "Time on {} generations: {:?} ({} cell updates/s)",
        NiceInt::from(GENERATIONS),
        elapsed,
        NiceInt::from(
            ((SIDE * SIDE) as f64 * GENERATIONS as f64 / elapsed.as_secs_f64()) as u64
        )
    );
    println!("{}", engine.stats());
    Ok(())
}
