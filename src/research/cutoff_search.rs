use colored::Colorize;
use serde::{Serialize, Deserialize};
use tracing::{debug, info};

use crate::common::ams;
use crate::error::Result;
use crate::hypothesis::{Classifier, ScoreCache, Scorer};
use crate::sample::TrainingSet;


const WIDTH: usize = 12;


/// The cutoff picked by a [`CutoffSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutoffChoice {
    /// The cutoff, `e^exponent`.
    pub cutoff: f64,
    /// The exponent the cutoff was derived from.
    pub exponent: f64,
    /// The AMS on the training store at this cutoff.
    pub ams: f64,
}


/// Picks the cutoff `e^x` that maximizes the AMS on a training store,
/// for `x` on the grid `start, start + step, ..., stop`.
///
/// By default the grid is `-0.5, -0.4, ..., 0.5`.
#[derive(Debug, Clone)]
pub struct CutoffSearch {
    start: f64,
    stop: f64,
    step: f64,
    verbose: bool,
}


impl Default for CutoffSearch {
    fn default() -> Self {
        Self {
            start: -0.5,
            stop: 0.5,
            step: 0.1,
            verbose: false,
        }
    }
}


impl CutoffSearch {
    /// Construct a search over the default grid.
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the exponent range, both ends included.
    pub fn range(mut self, start: f64, stop: f64) -> Self {
        assert!(start <= stop, "the range must not be empty");
        self.start = start;
        self.stop = stop;
        self
    }


    /// Set the exponent step.
    pub fn step(mut self, step: f64) -> Self {
        assert!(step > 0f64, "the step must be positive");
        self.step = step;
        self
    }


    /// Print a table of every cutoff to the standard output.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// The exponents on the grid.
    pub fn exponents(&self) -> Vec<f64> {
        let n_step = ((self.stop - self.start) / self.step + 1e-9).floor() as usize;
        (0..=n_step)
            .map(|i| self.start + i as f64 * self.step)
            .collect()
    }


    /// Evaluates every cutoff of the grid on `train`.
    /// `scorer` runs once; its score is reused for every cutoff.
    ///
    /// Stops at the first AMS domain error.
    pub fn run<S: Scorer>(&self, scorer: S, train: &TrainingSet, parallel: bool)
        -> Result<CutoffChoice>
    {
        let exponents = self.exponents();
        info!(n_cutoff = exponents.len(), rows = train.len(), "searching cutoff");

        let mut classifier = Classifier::new(ScoreCache::new(scorer));
        if self.verbose {
            print_header();
        }

        let mut best: Option<CutoffChoice> = None;
        for exponent in exponents {
            let cutoff = exponent.exp();
            classifier.set_cutoff(cutoff);

            let predictions = classifier.classify(train, parallel);
            let ams = ams(&predictions[..], train)?;

            debug!(exponent, cutoff, ams, "evaluated cutoff");
            if self.verbose {
                print_row(exponent, cutoff, ams);
            }

            if best.map_or(true, |b| ams > b.ams) {
                best = Some(CutoffChoice { cutoff, exponent, ams });
            }
        }

        // The grid holds at least `start`.
        let best = best.expect("the exponent grid is never empty");
        info!(cutoff = best.cutoff, ams = best.ams, "picked cutoff");
        Ok(best)
    }
}


fn print_header() {
    println!(
        "{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
        "EXPONENT".bold().red(),
        "CUTOFF".bold().blue(),
        "AMS".bold().green(),
    );
}


fn print_row(exponent: f64, cutoff: f64, ams: f64) {
    println!(
        "{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
        format!("{exponent:+.2}").red(),
        format!("{cutoff:.4}").blue(),
        format!("{ams:.5}").green(),
    );
}
