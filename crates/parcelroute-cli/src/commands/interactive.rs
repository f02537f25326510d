//! Interactive command: collect the parcel and endpoints from prompts.
//!
//! Questions and validation messages go to the prompt stream (stderr when run
//! from the binary) so the rendered route on stdout stays machine-readable.
//! An invalid answer is reported and asked again; end of input aborts.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::debug;

use parcelroute_lib::parcel::parse_weight;
use parcelroute_lib::{
    Error as LibError, Graph, Parcel, ParcelSize, ParcelType, RouteRequest,
};

use crate::commands::route::{format_unknown_location_message, write_route};
use crate::commands::AppContext;
use crate::output::OutputFormat;

pub fn handle_interactive_command(ctx: &AppContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompts = io::stderr();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_interactive(ctx, &graph, &mut input, &mut prompts, &mut out)
}

/// Drive the prompt sequence: size, weight, type, start, destination.
pub fn run_interactive<R, P, W>(
    ctx: &AppContext,
    graph: &Graph,
    input: &mut R,
    prompts: &mut P,
    out: &mut W,
) -> Result<()>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    let mut session = Prompter {
        ctx,
        input,
        prompts,
    };

    let size: ParcelSize = session.ask("Parcel size (A, B, C)", |s| s.parse())?;
    let weight = session.ask("Parcel weight in kg", parse_weight)?;
    let parcel_type: ParcelType = session.ask(
        "Parcel type (1 = weapons, 2 = cautious parcels, 3 = refrigerated goods)",
        |s| s.parse(),
    )?;
    let parcel = Parcel::new(weight, size, parcel_type)?;

    session.show_locations(graph)?;
    let start = session.ask_location("Start location", graph)?;
    let goal = session.ask_location("Destination", graph)?;
    debug!(%start, %goal, "interactive request collected");

    write_route(
        ctx,
        graph,
        &RouteRequest::new(start, goal),
        Some(&parcel),
        out,
    )
}

struct Prompter<'a, R, P> {
    ctx: &'a AppContext,
    input: &'a mut R,
    prompts: &'a mut P,
}

impl<R: BufRead, P: Write> Prompter<'_, R, P> {
    fn ask<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> parcelroute_lib::Result<T>,
    ) -> Result<T> {
        loop {
            let answer = self.read_answer(question)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => self.report(&err.to_string())?,
            }
        }
    }

    fn ask_location(&mut self, question: &str, graph: &Graph) -> Result<String> {
        loop {
            let answer = self.read_answer(question)?;
            match graph.resolve(&answer) {
                Ok(id) => {
                    return Ok(graph.name_of(id).unwrap_or(answer.as_str()).to_string());
                }
                Err(LibError::UnknownLocation { name, suggestions }) => {
                    self.report(&format_unknown_location_message(&name, &suggestions))?
                }
                Err(other) => return Err(other.into()),
            }
        }
    }

    /// List every location so the endpoints are not asked for blind.
    fn show_locations(&mut self, graph: &Graph) -> Result<()> {
        writeln!(self.prompts, "Locations:")?;
        OutputFormat::Text.render_locations(&mut *self.prompts, graph)?;
        Ok(())
    }

    fn read_answer(&mut self, question: &str) -> Result<String> {
        write!(self.prompts, "{question}: ")?;
        self.prompts.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from standard input")?;
        if read == 0 {
            bail!("input ended before '{question}' was answered");
        }
        Ok(line.trim().to_string())
    }

    fn report(&mut self, message: &str) -> Result<()> {
        let palette = &self.ctx.palette;
        writeln!(self.prompts, "{}{message}{}", palette.red, palette.reset)?;
        Ok(())
    }
}
