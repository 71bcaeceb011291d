//! CLI parse tests.

use super::{parse_exit_code, Cli};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}
