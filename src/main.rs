use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use brogue_variants::config::{ConfigHandle, GameConstants};
use brogue_variants::variant::{VolatileClass, VolatileRuntime, VolatileTuning};

/// Activate the Volatile Brogue variant and report its configuration.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Tuning override file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pre-select a class instead of leaving the choice pending
    #[arg(long, value_enum)]
    class: Option<VolatileClass>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { TraceLevel::DEBUG } else { TraceLevel::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let tuning = VolatileTuning::load(args.config.as_deref())?;

    let handle = ConfigHandle::new(GameConstants::brogue());
    let runtime = VolatileRuntime::new(handle.clone(), tuning);
    runtime.activate();

    if let Some(class) = args.class {
        runtime.select_class(class);
        info!(?class, "Pre-selected class");
    }

    let active = handle.active();
    println!("variant:    {}", active.variant_name);
    println!("version:    {}", active.version_string);
    println!("dungeon:    {}", active.dungeon_version_string);
    println!("patch match: {}", active.patch_version_pattern);
    println!("recording:  {}", active.recording_version_string);
    println!();
    println!("deepest level:        {}", active.deepest_level);
    println!("amulet level:         {}", active.amulet_level);
    println!("out-of-depth chance:  {}%", active.monster_out_of_depth_chance);
    println!("minimum altar level:  {}", active.minimum_altar_level);
    println!("fall damage:          {}-{}", active.fall_damage_min, active.fall_damage_max);
    println!(
        "class selection:      {}",
        match runtime.class_selection() {
            Some(class) => format!("{:?}", class),
            None => "pending".to_string(),
        }
    );

    Ok(())
}
