use clap::Parser;

use crate::time::Time;

#[derive(Parser)]
pub struct ShortTimeArgs {
    /// Times in `H[:M[:S]]` form.
    #[clap(required = true)]
    pub times: Vec<Time>,
}

impl ShortTimeArgs {
    pub fn run(&self) {
        for time in &self.times {
            println!("{time} → {}", time.short());
        }
    }
}
