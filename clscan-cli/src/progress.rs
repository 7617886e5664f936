//! Progress printing for scan events.

use clscan_solve::{Observer, limit::Event};

/// Prints one line per solver event, in the conventional scan format.
pub struct ProgressPrinter {
    rule_label: &'static str,
}

impl ProgressPrinter {
    pub fn new(rule_label: &'static str) -> Self {
        Self { rule_label }
    }
}

impl Observer<Event> for ProgressPrinter {
    fn observe(&mut self, event: &Event) {
        match *event {
            Event::Evaluated { r, sample, .. } => {
                println!(
                    "r = {r}: {} = {} +/- {}",
                    self.rule_label, sample.value, sample.error
                );
            }
            Event::BracketDoubled { r_max } => {
                println!("No upper bound yet, extending the search to r < {r_max}");
            }
            Event::BracketFound { r_max } => {
                println!("Now doing proper bracketing & bisection below r = {r_max}");
            }
            Event::Bisected { iter, bracket, .. } => {
                println!(
                    "Bisection iteration {iter}: r in [{}, {}]",
                    bracket[0], bracket[1]
                );
            }
            Event::ReachedAccuracy { .. } => {
                println!("reached accuracy.");
            }
        }
    }
}
