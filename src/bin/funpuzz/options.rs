use anyhow::{anyhow, Result};
use clap::ArgMatches;

use funpuzz::UniquenessStrategy;

const DEFAULT_SIZE: usize = 4;

#[derive(Clone)]
pub(crate) struct Options {
    size: usize,
    strategy: UniquenessStrategy,
    demo: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let size = match matches.value_of("size") {
            Some(s) => s.parse().map_err(|_| anyhow!("invalid size: {}", s))?,
            None => DEFAULT_SIZE,
        };
        let strategy = match matches.value_of("strategy") {
            Some("binary") => UniquenessStrategy::BinaryNotEqual,
            Some("nary") | None => UniquenessStrategy::AllDifferent,
            Some(s) => return Err(anyhow!("invalid strategy: {}", s)),
        };
        Ok(Self {
            size,
            strategy,
            demo: matches.is_present("demo"),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn strategy(&self) -> UniquenessStrategy {
        self.strategy
    }

    pub fn demo(&self) -> bool {
        self.demo
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("funpuzz")
        .about("Encode FunPuzz puzzles as extensional CSP models")
        .arg(
            Arg::with_name("size")
                .short("n")
                .long("size")
                .takes_value(true)
                .value_name("SIZE")
                .help("width and height of the grid"),
        )
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .takes_value(true)
                .value_name("STRATEGY")
                .help("uniqueness constraint shape: binary or nary"),
        )
        .arg(
            Arg::with_name("demo")
                .short("d")
                .long("demo")
                .conflicts_with_all(&["size", "strategy"])
                .help("encode the built-in demo caged puzzle"),
        )
}
