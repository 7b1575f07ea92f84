use canlii_metadata::{court_level_name, jurisdiction_name};

#[derive(Debug, clap::Parser)]
pub struct Lookup {
    /// Which table to search
    #[arg(value_enum)]
    table: Table,

    /// The code to resolve, e.g. `sk` or `skca`
    code: String,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Table {
    Jurisdiction,
    Court,
}

impl Lookup {
    /// Unknown codes print unchanged.
    pub fn run(self) {
        let name = match self.table {
            Table::Jurisdiction => jurisdiction_name(&self.code),
            Table::Court => court_level_name(&self.code),
        };
        println!("{name}");
    }
}
