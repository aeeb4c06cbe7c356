//! Declarative display metadata for the trim workflow.
//!
//! None of this carries any logic: it is the parameter table a hosting
//! system (or the `galore describe` subcommand) uses to present the workflow
//! to users — display names, help prose, section grouping, and canned test
//! data for a quick first launch. It is built once and never mutated.

use indexmap::IndexMap;
use serde::Serialize;

//==================//
// Metadata entries //
//==================//

/// A single entry in the workflow parameter table.
#[derive(Clone, Debug, Serialize)]
pub struct Parameter {
    /// Machine name of the parameter, matching the `galore trim` argument.
    pub name: &'static str,

    /// Human-facing name of the parameter.
    pub display_name: &'static str,

    /// One or two sentences describing what the parameter does.
    pub description: &'static str,

    /// Whether the parameter is worth a column in a batch results table.
    pub batch_table_column: bool,
}

/// A named group of parameters, in display order.
#[derive(Clone, Debug, Serialize)]
pub struct Section {
    /// Human-facing name of the section.
    pub name: &'static str,

    /// Names of the parameters shown under this section, in order.
    pub parameters: Vec<&'static str>,
}

/// A canned set of parameter values for a quick first launch.
#[derive(Clone, Debug, Serialize)]
pub struct LaunchPlan {
    /// Human-facing name of the launch plan.
    pub name: &'static str,

    /// Parameter values the plan fills in, keyed by parameter name.
    pub defaults: IndexMap<&'static str, &'static str>,
}

/// The complete display metadata for the workflow.
#[derive(Clone, Debug, Serialize)]
pub struct WorkflowMetadata {
    /// Human-facing name of the workflow.
    pub display_name: &'static str,

    /// Link to the external tool's documentation.
    pub documentation: &'static str,

    /// License the workflow is distributed under.
    pub license: &'static str,

    /// The full parameter table, in declaration order.
    pub parameters: Vec<Parameter>,

    /// The display flow: sections shown to the user, in order.
    pub flow: Vec<Section>,

    /// Canned launches with prefilled test data.
    pub launch_plans: Vec<LaunchPlan>,
}

impl WorkflowMetadata {
    /// Looks up a parameter by its machine name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

//====================//
// The workflow table //
//====================//

/// Builds the display metadata for the paired-end trim workflow.
pub fn metadata() -> WorkflowMetadata {
    let parameters = vec![
        Parameter {
            name: "input_forward",
            display_name: "Input forward",
            description: "Forward (read 1) input FASTQ file.",
            batch_table_column: true,
        },
        Parameter {
            name: "input_reverse",
            display_name: "Input reverse",
            description: "Reverse (read 2) input FASTQ file.",
            batch_table_column: true,
        },
        Parameter {
            name: "base_out",
            display_name: "Basename for output files",
            description: "Default is to derive the basename from the input files.",
            batch_table_column: true,
        },
        Parameter {
            name: "output_directory",
            display_name: "Output directory name",
            description: "Destination the trimmed output is published to.",
            batch_table_column: true,
        },
        Parameter {
            name: "gzip_output_files",
            display_name: "GZip output",
            description: "Compress the output files with gzip.",
            batch_table_column: false,
        },
        Parameter {
            name: "retain_unpaired",
            display_name: "Retain unpaired reads",
            description: "If only one of the two paired-end reads became too short, write the \
                longer read to an '.unpaired_1.fq' or '.unpaired_2.fq' output file.",
            batch_table_column: false,
        },
        Parameter {
            name: "base_quality_encoding",
            display_name: "Base quality encoding",
            description: "Specify whether the Phred33 or Phred64 scoring schema is used.",
            batch_table_column: false,
        },
        Parameter {
            name: "quality",
            display_name: "Quality threshold",
            description: "Trim low-quality ends from reads in addition to adapter removal.",
            batch_table_column: false,
        },
        Parameter {
            name: "length",
            display_name: "Read length cutoff",
            description: "Discard reads that became shorter than this because of either quality \
                or adapter trimming.",
            batch_table_column: false,
        },
        Parameter {
            name: "length_1",
            display_name: "Unpaired single-end read 1 length cutoff",
            description: "Length cutoff needed for read 1 to be written to the '.unpaired_1.fq' \
                output file.",
            batch_table_column: false,
        },
        Parameter {
            name: "length_2",
            display_name: "Unpaired single-end read 2 length cutoff",
            description: "Length cutoff needed for read 2 to be written to the '.unpaired_2.fq' \
                output file.",
            batch_table_column: false,
        },
        Parameter {
            name: "max_n",
            display_name: "Max Ns in a read",
            description: "The total number of Ns a read may contain before it is removed \
                altogether.",
            batch_table_column: false,
        },
        Parameter {
            name: "trim_n",
            display_name: "Trim Ns at ends",
            description: "Removes Ns from either side of the read.",
            batch_table_column: false,
        },
        Parameter {
            name: "max_length",
            display_name: "Max length",
            description: "Discard reads that are longer than this many bp after trimming. Only \
                advised for small RNA sequencing.",
            batch_table_column: false,
        },
        Parameter {
            name: "adapter_preset",
            display_name: "Adapter sequence to be trimmed from precurated set",
            description: "Options are auto-detect, illumina, stranded_illumina, nextera, and \
                small_rna.",
            batch_table_column: true,
        },
        Parameter {
            name: "error_rate",
            display_name: "Error rate",
            description: "Maximum allowed error rate: the number of errors divided by the length \
                of the matching region.",
            batch_table_column: false,
        },
        Parameter {
            name: "stringency",
            display_name: "Stringency",
            description: "Overlap with the adapter sequence required to trim a sequence.",
            batch_table_column: false,
        },
        Parameter {
            name: "adapter",
            display_name: "Adapter sequence to be trimmed",
            description: "If not specified, Trim Galore will try to auto-detect it.",
            batch_table_column: false,
        },
        Parameter {
            name: "adapter2",
            display_name: "Adapter sequence to be trimmed for read 2",
            description: "Adapter sequence to be trimmed from read 2 of paired-end files.",
            batch_table_column: false,
        },
        Parameter {
            name: "consider_already_trimmed",
            display_name: "Consider already trimmed",
            description: "During adapter auto-detection, the threshold up to which the file is \
                considered already adapter-trimmed.",
            batch_table_column: false,
        },
        Parameter {
            name: "fastqc",
            display_name: "Enable FastQC",
            description: "Run FastQC on the trimmed output.",
            batch_table_column: true,
        },
        Parameter {
            name: "fastqc_args",
            display_name: "Additional FastQC arguments",
            description: "Extra arguments passed through to FastQC, as a single string.",
            batch_table_column: false,
        },
        Parameter {
            name: "report_file",
            display_name: "Generate report files",
            description: "Generate report files (on by default).",
            batch_table_column: false,
        },
        Parameter {
            name: "hardtrim5",
            display_name: "Hard-trim 5'-end",
            description: "Hard-trim sequences to this many bp at the 5'-end instead of \
                performing adapter/quality trimming.",
            batch_table_column: false,
        },
        Parameter {
            name: "hardtrim3",
            display_name: "Hard-trim 3'-end",
            description: "Hard-trim sequences to this many bp at the 3'-end instead of \
                performing adapter/quality trimming.",
            batch_table_column: false,
        },
        Parameter {
            name: "clip_r1",
            display_name: "Trim 5' end of read 1",
            description: "Remove this many bp from the 5' end of read 1.",
            batch_table_column: false,
        },
        Parameter {
            name: "clip_r2",
            display_name: "Trim 5' end of read 2",
            description: "Remove this many bp from the 5' end of read 2.",
            batch_table_column: false,
        },
        Parameter {
            name: "three_prime_clip_r1",
            display_name: "Trim 3' end of read 1",
            description: "Remove this many bp from the 3' end of read 1 after adapter/quality \
                trimming has been performed.",
            batch_table_column: false,
        },
        Parameter {
            name: "three_prime_clip_r2",
            display_name: "Trim 3' end of read 2",
            description: "Remove this many bp from the 3' end of read 2 after adapter/quality \
                trimming has been performed.",
            batch_table_column: false,
        },
        Parameter {
            name: "polya",
            display_name: "Remove poly-A tails",
            description: "Identify and remove poly-A tails from sequences (experimental Trim \
                Galore mode).",
            batch_table_column: false,
        },
        Parameter {
            name: "implicon",
            display_name: "IMPLICON mode",
            description: "For paired-end data, transfer a unique molecular identifier from the \
                start of read 2 to the read ID of both reads.",
            batch_table_column: false,
        },
    ];

    let flow = vec![
        Section {
            name: "Input/Output",
            parameters: vec![
                "input_forward",
                "input_reverse",
                "base_out",
                "output_directory",
                "gzip_output_files",
                "retain_unpaired",
            ],
        },
        Section {
            name: "Quality",
            parameters: vec![
                "base_quality_encoding",
                "quality",
                "length",
                "length_1",
                "length_2",
                "max_n",
                "trim_n",
                "max_length",
            ],
        },
        Section {
            name: "Adapters",
            parameters: vec![
                "adapter_preset",
                "error_rate",
                "stringency",
                "adapter",
                "adapter2",
                "consider_already_trimmed",
            ],
        },
        Section {
            name: "Reporting",
            parameters: vec!["fastqc", "fastqc_args", "report_file"],
        },
        Section {
            name: "Miscellaneous",
            parameters: vec![
                "hardtrim5",
                "hardtrim3",
                "clip_r1",
                "clip_r2",
                "three_prime_clip_r1",
                "three_prime_clip_r2",
                "polya",
                "implicon",
            ],
        },
    ];

    let launch_plans = vec![LaunchPlan {
        name: "Small test data",
        defaults: IndexMap::from([
            (
                "input_forward",
                "s3://latch-public/test-data/1656/SRR23924051_1_subset.fq",
            ),
            (
                "input_reverse",
                "s3://latch-public/test-data/1656/SRR23924051_2_subset.fq",
            ),
        ]),
    }];

    WorkflowMetadata {
        display_name: "Trim Galore",
        documentation: "https://www.bioinformatics.babraham.ac.uk/projects/trim_galore/",
        license: "MIT",
        parameters,
        flow,
        launch_plans,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::metadata;

    #[test]
    pub fn it_declares_unique_parameter_names() {
        let metadata = metadata();
        let names: HashSet<_> = metadata.parameters.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), metadata.parameters.len());
    }

    #[test]
    pub fn it_only_references_declared_parameters_in_the_flow() {
        let metadata = metadata();

        for section in &metadata.flow {
            for name in &section.parameters {
                assert!(
                    metadata.parameter(name).is_some(),
                    "section {} references undeclared parameter {}",
                    section.name,
                    name
                );
            }
        }
    }

    #[test]
    pub fn it_shows_every_parameter_exactly_once() {
        let metadata = metadata();

        let mut shown: Vec<&str> = metadata
            .flow
            .iter()
            .flat_map(|s| s.parameters.iter().copied())
            .collect();
        shown.sort_unstable();
        shown.dedup();

        assert_eq!(shown.len(), metadata.parameters.len());
    }

    #[test]
    pub fn it_prefills_both_inputs_in_the_test_launch_plan() {
        let metadata = metadata();
        let plan = &metadata.launch_plans[0];
        assert!(plan.defaults.contains_key("input_forward"));
        assert!(plan.defaults.contains_key("input_reverse"));
    }
}
