//! # travelrs Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! `travelrs ask <QUERY>...` answers one question and exits, which is handy
//! for scripts. The words are joined with spaces, so quoting is optional:
//!
//! ```bash
//! travelrs ask route from paris to lyon
//! travelrs --at 09:00 ask "travel lyon paris"
//! ```
//!
use super::AppContext;
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question, e.g. "route from paris to lyon".
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

pub fn handle_ask(args: AskArgs, ctx: &AppContext) -> Result<()> {
    let query = args.query.join(" ");
    info!("Answering one-shot query: {query:?}");
    let response = ctx.assistant().process(&query);
    println!("{}", response.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_words() {
        let args = AskArgs::try_parse_from(["ask", "route", "from", "paris"]).unwrap();
        assert_eq!(args.query.join(" "), "route from paris");
    }

    #[test]
    fn requires_a_query() {
        assert!(AskArgs::try_parse_from(["ask"]).is_err());
    }
}
