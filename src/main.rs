use channel_equalizer::config::load_config;
use channel_equalizer::error::PipelineError;
use channel_equalizer::io::{load_color_image, save_color_image, write_json_file};
use channel_equalizer::pipeline::process;
use channel_equalizer::plot::{save_histogram_chart, HistogramTag};
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), PipelineError> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    // A missing input halts everything before any artifact is written.
    let image = load_color_image(&config.input)?;

    if !config.output_dir.exists() {
        fs::create_dir_all(&config.output_dir)?;
        println!("Created directory: {}", config.output_dir.display());
    }

    let report = process(image)?;

    for trace in &report.channels {
        let path =
            save_histogram_chart(&trace.pre, trace.label, HistogramTag::Original, &config.output_dir)?;
        println!("Saved {}", path.display());
    }

    let image_path = config.output_dir.join(&config.image_name);
    save_color_image(&report.image, &image_path)?;
    println!("Saved {}", image_path.display());

    for trace in &report.channels {
        let path = save_histogram_chart(
            &trace.post,
            trace.label,
            HistogramTag::Equalized,
            &config.output_dir,
        )?;
        println!("Saved {}", path.display());
    }

    if let Some(report_path) = &config.report_json {
        write_json_file(report_path, &report)?;
        println!("Saved {}", report_path.display());
    }

    println!(
        "Processing complete in {:.3} ms. Check the '{}' folder.",
        report.total_latency_ms,
        config.output_dir.display()
    );
    Ok(())
}

fn usage() -> PipelineError {
    PipelineError::Usage("Usage: equalize_channels <config.json>".to_string())
}
