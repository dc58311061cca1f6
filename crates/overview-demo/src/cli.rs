// File: crates/overview-demo/src/cli.rs
// Summary: Command-line surface for rendering and sample generation.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use overview_chart::{theme, RenderOptions};

#[derive(Debug, Parser)]
#[command(name = "annual-overview", version, about = "Budget vs actual annual overview charts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a chart from monthly budget and actual CSV files.
    Render {
        /// Twelve monthly budget amounts.
        #[arg(long)]
        budget: PathBuf,
        /// Observed monthly actuals, January first (1 to 12 rows).
        #[arg(long)]
        actual: PathBuf,
        #[arg(long, default_value = "target/out/annual_overview.png")]
        out: PathBuf,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Generate a sample year and render it.
    Sample {
        /// Generator seed; defaults to the current time.
        #[arg(long)]
        seed: Option<u64>,
        /// Months of actuals to observe.
        #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=12))]
        months: u8,
        #[arg(long, default_value = "target/out/annual_sample.png")]
        out: PathBuf,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Print generated numbers as JSON.
    Numbers {
        /// JSON sample config; omitted fields take their defaults.
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Args)]
pub struct StyleArgs {
    #[arg(long, default_value = "dark")]
    pub theme: String,
    #[arg(long)]
    pub width: Option<i32>,
    #[arg(long)]
    pub height: Option<i32>,
    /// Skip text (ticks, months, legend).
    #[arg(long)]
    pub no_labels: bool,
}

impl StyleArgs {
    pub fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            theme: theme::find(&self.theme),
            draw_labels: !self.no_labels,
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn style_args_map_to_render_options() {
        let cli = Cli::try_parse_from([
            "annual-overview", "sample", "--seed", "7", "--months", "3", "--theme", "light", "--width", "400", "--no-labels",
        ])
        .unwrap();
        let Command::Sample { seed, months, style, .. } = cli.command else { panic!("expected sample") };
        assert_eq!((seed, months), (Some(7), 3));
        let opts = style.render_options();
        assert_eq!(opts.width, 400);
        assert_eq!(opts.theme.name, "light");
        assert!(!opts.draw_labels);
    }

    #[test]
    fn months_outside_year_rejected() {
        assert!(Cli::try_parse_from(["annual-overview", "sample", "--months", "13"]).is_err());
        assert!(Cli::try_parse_from(["annual-overview", "sample", "--months", "0"]).is_err());
    }
}
