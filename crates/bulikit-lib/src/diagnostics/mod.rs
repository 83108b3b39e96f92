//! Rendering of parser errors for humans.

mod printer;

#[cfg(test)]
mod tests;

pub use printer::DiagnosticsPrinter;
