use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use genepi_plot::charts::{FitChart, ProgressChart, ProgressSeries, YScale};
use genepi_plot::config::ConfigManager;
use genepi_plot::data::Batch;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Charts for genetic polynomial fitting results", long_about = None)]
struct Cli {
    /// TOML configuration file (default: ./genepi-plot.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the `{batch}_*.tsv` result files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Best and/or average error over generations
    Progress {
        /// Batch name (default from configuration)
        batch: Option<String>,

        #[arg(long, value_enum, default_value_t = SeriesOpt::Both)]
        series: SeriesOpt,

        /// Plot log10 of the errors
        #[arg(long)]
        log_scale: bool,
    },
    /// Training points with the given and the result polynomial
    Fit {
        /// Batch name (default from configuration)
        batch: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SeriesOpt {
    Both,
    Average,
    Best,
}

impl From<SeriesOpt> for ProgressSeries {
    fn from(opt: SeriesOpt) -> Self {
        match opt {
            SeriesOpt::Both => ProgressSeries::Both,
            SeriesOpt::Average => ProgressSeries::Average,
            SeriesOpt::Best => ProgressSeries::Best,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut manager = ConfigManager::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        manager.update(|c| c.data.results_dir = dir)?;
    }
    let config = manager.get();

    let chart = match cli.command {
        Command::Progress { batch, series, log_scale } => {
            let batch = Batch::resolve(batch, &config.data);
            let scale = if log_scale { YScale::Log10 } else { YScale::Linear };
            ProgressChart::new(series.into())
                .with_scale(scale)
                .from_batch(&batch)
                .with_context(|| format!("Cannot chart progress of batch '{}'", batch.name()))?
        }
        Command::Fit { batch } => {
            let batch = Batch::resolve(batch, &config.data);
            FitChart::new()
                .from_batch(&batch)
                .with_context(|| format!("Cannot chart fit of batch '{}'", batch.name()))?
        }
    };

    genepi_plot::ui::show(chart, &config.window)?;
    Ok(())
}
