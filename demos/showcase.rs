//! Example walking through every kind of bar

use color_eyre::Result;
use pbar::{BarBuilder, ColorBar, ProgressIndicator, TextBar};
use rand::Rng;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const STEPS: u64 = 100;
const PAUSE: Duration = Duration::from_millis(50);

/// Drive any bar to completion, one unit at a time
async fn run(indicator: &mut dyn ProgressIndicator) {
    for _ in 0..indicator.capacity() {
        indicator.advance(1);
        tokio::time::sleep(PAUSE).await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("Testing the text progress bar:");
    let mut bar = BarBuilder::new(STEPS).show_prefix(true).build()?;
    run(&mut bar).await;
    drop(bar);

    println!("Testing the custom callbacks:");
    let mut ticks = 0;
    let mut round = 0;
    let mut pos = 0;
    let mut bar = BarBuilder::new(STEPS)
        .show_prefix(true)
        // Set an arbitrary string for the prefix
        .prefix_callback(move |_width| {
            ticks += 1;
            format!("1/10 * {}", ticks / 10)
        })
        // Move a "(db)" marker to a random spot every 25 renders
        .value_callback(move |meter: &mut String| {
            let marker = "(db)";
            if meter.len() < 2 * marker.len() {
                return;
            }
            if round % 25 == 0 {
                let quarter = meter.len() / 4;
                pos = quarter + rand::rng().random_range(0..(meter.len() - marker.len()) / 2);
            }
            round += 1;
            let at = pos.min(meter.len() - marker.len());
            meter.replace_range(at..at + marker.len(), marker);
        })
        .build()?;
    run(&mut bar).await;
    drop(bar);

    println!("Testing the color progress bar:");
    let mut bar = ColorBar::new(STEPS)?;
    run(&mut bar).await;
    drop(bar);

    println!("Testing the plain progress bar:");
    let mut bar = TextBar::new(STEPS)?;
    run(&mut bar).await;
    drop(bar);

    #[cfg(feature = "window")]
    {
        println!("Testing the window progress bar:");
        let mut bar = pbar::WindowBar::new(STEPS)?;
        run(&mut bar).await;
        bar.close()?;
    }

    println!("Tests complete");
    Ok(())
}
