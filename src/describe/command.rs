//! Functionality related to the `galore describe` command itself.

use anyhow::bail;
use clap::{builder::PossibleValuesParser, Args};
use prettytable::{row, Table};

use crate::meta;

//========================//
// Command-line arguments //
//========================//

/// Command line arguments for `galore describe`.
#[derive(Args)]
pub struct DescribeArgs {
    /// The subject which you want to describe.
    #[arg(value_parser = PossibleValuesParser::new([
        "parameters",
        "sections",
        "launch-plans",
        "metadata",
    ]))]
    subject: String,
}

//==============//
// Main command //
//==============//

/// Main method for the `galore describe` subcommand.
pub fn describe(args: DescribeArgs) -> anyhow::Result<()> {
    let metadata = meta::metadata();

    match args.subject.as_str() {
        "parameters" => {
            let mut table = Table::new();

            table.add_row(row!["Name", "Display Name", "Description"]);
            for parameter in &metadata.parameters {
                table.add_row(row![
                    parameter.name,
                    parameter.display_name,
                    parameter.description,
                ]);
            }

            table.printstd();

            Ok(())
        }
        "sections" => {
            for section in &metadata.flow {
                let mut table = Table::new();
                table.add_row(row!["Name", "Display Name"]);

                for name in &section.parameters {
                    // Section membership is checked by the metadata tests, so
                    // a miss here is a programming error.
                    if let Some(parameter) = metadata.parameter(name) {
                        table.add_row(row![parameter.name, parameter.display_name]);
                    }
                }

                println!("{}:", section.name);
                println!();
                table.printstd();
                println!();
            }

            Ok(())
        }
        "launch-plans" => {
            let mut table = Table::new();

            table.add_row(row!["Plan", "Parameter", "Value"]);
            for plan in &metadata.launch_plans {
                for (name, value) in &plan.defaults {
                    table.add_row(row![plan.name, name, value]);
                }
            }

            table.printstd();

            Ok(())
        }
        "metadata" => {
            println!("{}", serde_json::to_string_pretty(&metadata)?);
            Ok(())
        }
        s => bail!("Unsupported subject: {}", s),
    }
}
