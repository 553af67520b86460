use anyhow::{Context, Result};
use clap::Parser;
use img_rescale::cli::Args;
use img_rescale::{
    info, logger, report, spawn_interrupt_listener, CancellationToken, ImageCrateCodec,
    RunConfig, RunController,
};

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.quiet, args.verbose);

    let cwd = std::env::current_dir().context("Failed to resolve the working directory")?;
    let config = RunConfig::from_args(&args, &cwd).context("Invalid arguments")?;

    let token = CancellationToken::new();
    // Must outlive the run so interrupts keep reaching the token
    let _listener = spawn_interrupt_listener(token.clone())
        .context("Failed to install the Ctrl+C handler")?;

    info!("🚀 Resizing images by {}x...", config.scale);
    let mut controller = RunController::new(config, ImageCrateCodec, token);
    let summary = controller.run().context("Resize run aborted")?;

    report::print_summary(&summary);
    Ok(())
}
