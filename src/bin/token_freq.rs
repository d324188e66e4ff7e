use clap::Parser;
use corpus_token_freq::config::{self, Config};
use corpus_token_freq::{TieBreak, emit_console_summary, run};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "token-freq",
    version,
    about = "Token frequency tables for a text corpus"
)]
struct Args {
    /// Project root containing data/ and output/ [default: crate directory]
    #[arg(long)]
    project_root: Option<PathBuf>,

    /// Corpus file (overrides <project_root>/data/presidential_speeches_corpus.txt)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output directory (overrides <project_root>/output)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Rows in the top-N report
    #[arg(long, default_value_t = config::DEFAULT_TOP_N)]
    top: usize,

    /// Order among tokens with equal counts
    #[arg(long, value_enum, default_value_t = TieBreak::EncounterOrder)]
    tie_break: TieBreak,

    /// Apply Unicode NFC normalization before tokenizing
    #[arg(long)]
    normalize: bool,
}

impl Args {
    fn into_config(self) -> Config {
        let root = self
            .project_root
            .unwrap_or_else(config::default_project_root);
        let mut config = Config::from_project_root(root)
            .with_top_n(self.top)
            .with_tie_break(self.tie_break)
            .with_normalize(self.normalize);
        if let Some(input) = self.input {
            config = config.with_input_path(input);
        }
        if let Some(output_dir) = self.output_dir {
            config = config.with_output_dir(output_dir);
        }
        config
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                "corpus_token_freq=info"
                    .parse()
                    .expect("valid directive literal"),
            ),
        )
        .init();

    let config = Args::parse().into_config();

    let summary = match run(&config) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = emit_console_summary(&summary, &mut stdout.lock()) {
        eprintln!("Error: failed to write summary: {}", e);
        std::process::exit(1);
    }
}
