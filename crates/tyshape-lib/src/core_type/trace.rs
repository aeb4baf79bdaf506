//! Tracing for core-type folding.
//!
//! `NoopTracer` compiles away entirely: its methods are empty and
//! `#[inline(always)]`, so the plain `core_type`/`core_string` entry points
//! carry no tracing cost. `PrintTracer` renders each fold step as a line,
//! which is how fold decisions are inspected when debugging a constraint.

use tyshape_core::{Colors, Interner};

use crate::types::{TYPE_UINT8, Term, TypeContext, TypeId, TypePrinter};

use super::error::NoCoreType;
use super::matching::Operand;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Matches and the final outcome.
    #[default]
    Default,
    /// Also every resolved term and string substitution.
    Verbose,
}

/// Output settings for `PrintTracer`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraceConfig {
    pub verbosity: Verbosity,
    pub colors: Colors,
}

impl TraceConfig {
    pub fn verbose(mut self) -> Self {
        self.verbosity = Verbosity::Verbose;
        self
    }

    pub fn with_colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }
}

/// Instrumentation points of the fold.
///
/// Exactly one of `trace_failure`/`trace_success` ends every fold that
/// reaches a type parameter.
pub trait FoldTracer {
    /// A term was enumerated and resolved to `underlying`.
    fn trace_term(&mut self, index: usize, term: Term, underlying: TypeId);

    /// A string term was replaced by the byte-slice stand-in.
    fn trace_substitute(&mut self, index: usize);

    /// `acc` and the term's operand matched, yielding `result`.
    fn trace_match(&mut self, index: usize, acc: Operand, operand: Operand, result: Operand);

    fn trace_failure(&mut self, error: &NoCoreType);

    fn trace_success(&mut self, result: TypeId);
}

/// Tracer that gets optimized away.
pub struct NoopTracer;

impl FoldTracer for NoopTracer {
    #[inline(always)]
    fn trace_term(&mut self, _index: usize, _term: Term, _underlying: TypeId) {}

    #[inline(always)]
    fn trace_substitute(&mut self, _index: usize) {}

    #[inline(always)]
    fn trace_match(&mut self, _index: usize, _acc: Operand, _operand: Operand, _result: Operand) {}

    #[inline(always)]
    fn trace_failure(&mut self, _error: &NoCoreType) {}

    #[inline(always)]
    fn trace_success(&mut self, _result: TypeId) {}
}

/// Tracer that collects fold steps as printable lines.
pub struct PrintTracer<'a> {
    printer: TypePrinter<'a>,
    config: TraceConfig,
    lines: Vec<String>,
}

impl<'a> PrintTracer<'a> {
    pub fn new(ctx: &'a TypeContext, interner: &'a Interner, config: TraceConfig) -> Self {
        Self {
            printer: TypePrinter::new(ctx, interner).with_colors(config.colors),
            config,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined with newlines.
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn verbose(&self) -> bool {
        self.config.verbosity == Verbosity::Verbose
    }

    fn operand(&self, operand: Operand) -> String {
        match operand {
            Operand::Type(id) => self.printer.render(id),
            Operand::ByteSlice => format!("[]{}", self.printer.render(TYPE_UINT8)),
        }
    }

    fn push_step(&mut self, index: usize, content: String) {
        let c = self.config.colors;
        self.lines.push(format!("  {}#{index}{} {content}", c.dim, c.reset));
    }
}

impl FoldTracer for PrintTracer<'_> {
    fn trace_term(&mut self, index: usize, term: Term, underlying: TypeId) {
        if !self.verbose() {
            return;
        }
        let tilde = if term.tilde { "~" } else { "" };
        let content = format!(
            "{tilde}{} : {}",
            self.printer.display(term.ty),
            self.printer.display(underlying)
        );
        self.push_step(index, content);
    }

    fn trace_substitute(&mut self, index: usize) {
        if !self.verbose() {
            return;
        }
        let content = format!("string as {}", self.operand(Operand::ByteSlice));
        self.push_step(index, content);
    }

    fn trace_match(&mut self, index: usize, acc: Operand, operand: Operand, result: Operand) {
        let content = format!(
            "{} & {} = {}",
            self.operand(acc),
            self.operand(operand),
            self.operand(result)
        );
        self.push_step(index, content);
    }

    fn trace_failure(&mut self, error: &NoCoreType) {
        let c = self.config.colors;
        self.lines.push(format!("  {}✗{} {error}", c.red, c.reset));
    }

    fn trace_success(&mut self, result: TypeId) {
        let c = self.config.colors;
        let line = format!("  {}✓{} {}", c.green, c.reset, self.printer.display(result));
        self.lines.push(line);
    }
}
