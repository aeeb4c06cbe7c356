//! The parameter surface for a single trim operation.
//!
//! Every field here is independently defaultable: the two input files are the
//! only required arguments. Optional numeric and string parameters that are
//! left unset suppress their Trim Galore switch entirely, which is distinct
//! from passing a zero or empty value (see [`crate::trim::builder`] for the
//! exact emission rules).

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

use super::DEFAULT_PROGRAM;

//=======================//
// Base quality encoding //
//=======================//

/// The quality score encoding of the input FASTQ files. Unlike most other
/// parameters, there is no "absent" state: one of the two encodings is always
/// spelled out in the invocation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum BaseQualityEncoding {
    /// Sanger/Illumina 1.9+ encoding (ASCII offset 33).
    Phred33,

    /// Illumina 1.5 encoding (ASCII offset 64).
    Phred64,
}

impl BaseQualityEncoding {
    /// The Trim Galore switch for this encoding.
    pub fn flag(&self) -> &'static str {
        match self {
            BaseQualityEncoding::Phred33 => "--phred33",
            BaseQualityEncoding::Phred64 => "--phred64",
        }
    }
}

//================//
// Adapter preset //
//================//

/// A precurated adapter family to trim. The `Auto` member is a sentinel: it
/// maps to no switch at all so that Trim Galore performs its own adapter
/// detection, while every other member maps to exactly one literal token.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum AdapterPreset {
    /// Let Trim Galore auto-detect the adapter from the first reads.
    Auto,

    /// Illumina universal adapter.
    Illumina,

    /// Stranded Illumina (TruSeq stranded mRNA/total RNA) adapter.
    #[value(name = "stranded_illumina")]
    StrandedIllumina,

    /// Nextera transposase adapter.
    Nextera,

    /// Illumina small RNA 3' adapter.
    #[value(name = "small_rna")]
    SmallRna,
}

impl AdapterPreset {
    /// The Trim Galore switch for this preset, if any.
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            AdapterPreset::Auto => None,
            AdapterPreset::Illumina => Some("--illumina"),
            AdapterPreset::StrandedIllumina => Some("--stranded_illumina"),
            AdapterPreset::Nextera => Some("--nextera"),
            AdapterPreset::SmallRna => Some("--small_rna"),
        }
    }
}

//===============//
// Parameter set //
//===============//

/// The complete set of parameters for one trim operation. Constructed once
/// per invocation and treated as read-only afterwards.
#[derive(Args, Clone, Debug)]
pub struct TrimParams {
    /// Forward (read 1) input FASTQ file.
    #[arg(value_name = "FORWARD")]
    pub input_forward: PathBuf,

    /// Reverse (read 2) input FASTQ file.
    #[arg(value_name = "REVERSE")]
    pub input_reverse: PathBuf,

    /// Trim Galore executable to invoke.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_PROGRAM)]
    pub program: PathBuf,

    /// Use this basename for output files instead of deriving it from the
    /// input file names.
    #[arg(long, value_name = "STRING")]
    pub base_out: Option<String>,

    /// Destination location the staged output directory is published to.
    /// Defaults to a fixed location next to the working directory.
    #[arg(short = 'o', long, value_name = "LOCATION")]
    pub output_directory: Option<String>,

    /// Trim low-quality ends from reads in addition to adapter removal.
    #[arg(long, value_name = "U32", default_value_t = 20)]
    pub quality: u32,

    /// Quality score encoding of the input files.
    #[arg(long, value_enum, default_value_t = BaseQualityEncoding::Phred33)]
    pub base_quality_encoding: BaseQualityEncoding,

    /// Discard reads that became shorter than this because of either quality
    /// or adapter trimming.
    #[arg(long, value_name = "U32", default_value_t = 20)]
    pub length: u32,

    /// Length cutoff needed for read 1 to be written to the unpaired output
    /// file when its mate became too short.
    #[arg(long, value_name = "U32", default_value_t = 35)]
    pub length_1: u32,

    /// Length cutoff needed for read 2 to be written to the unpaired output
    /// file when its mate became too short.
    #[arg(long, value_name = "U32", default_value_t = 35)]
    pub length_2: u32,

    /// Discard reads that are longer than this many bp after trimming. Only
    /// advised for small RNA sequencing.
    #[arg(long, value_name = "U32")]
    pub max_length: Option<u32>,

    /// Total number of Ns a read may contain before it is removed altogether.
    #[arg(long, value_name = "F64")]
    pub max_n: Option<f64>,

    /// Remove Ns from either side of the read.
    #[arg(long)]
    pub trim_n: bool,

    /// Precurated adapter family to trim.
    #[arg(long, value_enum, default_value_t = AdapterPreset::Auto)]
    pub adapter_preset: AdapterPreset,

    /// Maximum allowed error rate (errors divided by the length of the
    /// matching region).
    #[arg(short = 'e', long, value_name = "F64")]
    pub error_rate: Option<f64>,

    /// Overlap with the adapter sequence required to trim a sequence.
    #[arg(long, value_name = "U32", default_value_t = 1)]
    pub stringency: u32,

    /// Adapter sequence to be trimmed. If unset, Trim Galore will try to
    /// auto-detect it.
    #[arg(long, value_name = "STRING")]
    pub adapter: Option<String>,

    /// Adapter sequence to be trimmed from read 2 of paired-end files.
    #[arg(long, value_name = "STRING")]
    pub adapter2: Option<String>,

    /// During adapter auto-detection, the threshold up to which the file is
    /// considered already adapter-trimmed.
    #[arg(long, value_name = "U32")]
    pub consider_already_trimmed: Option<u32>,

    /// Run FastQC on the trimmed output.
    #[arg(long)]
    pub fastqc: bool,

    /// Extra arguments passed through to FastQC, as a single string.
    #[arg(long, value_name = "STRING")]
    pub fastqc_args: Option<String>,

    /// Do not generate report files.
    #[arg(long = "no-report-file", action = ArgAction::SetFalse)]
    pub report_file: bool,

    /// Compress the output files with gzip instead of leaving them
    /// uncompressed.
    #[arg(long = "gzip")]
    pub gzip_output_files: bool,

    /// Do not write reads whose mate became too short to the unpaired output
    /// files.
    #[arg(long = "no-retain-unpaired", action = ArgAction::SetFalse)]
    pub retain_unpaired: bool,

    /// Hard-trim sequences to this many bp at the 5'-end instead of
    /// performing adapter/quality trimming.
    #[arg(long, value_name = "U32")]
    pub hardtrim5: Option<u32>,

    /// Hard-trim sequences to this many bp at the 3'-end instead of
    /// performing adapter/quality trimming.
    #[arg(long, value_name = "U32")]
    pub hardtrim3: Option<u32>,

    /// Remove this many bp from the 5' end of read 1.
    #[arg(long, value_name = "U32")]
    pub clip_r1: Option<u32>,

    /// Remove this many bp from the 5' end of read 2.
    #[arg(long, value_name = "U32")]
    pub clip_r2: Option<u32>,

    /// Identify and remove poly-A tails from sequences.
    #[arg(long)]
    pub polya: bool,

    /// Transfer a unique molecular identifier from the start of read 2 to the
    /// read ID of both reads (IMPLICON mode).
    #[arg(long)]
    pub implicon: bool,

    /// Remove this many bp from the 3' end of read 1 after adapter/quality
    /// trimming has been performed.
    #[arg(long, value_name = "U32")]
    pub three_prime_clip_r1: Option<u32>,

    /// Remove this many bp from the 3' end of read 2 after adapter/quality
    /// trimming has been performed.
    #[arg(long, value_name = "U32")]
    pub three_prime_clip_r2: Option<u32>,
}

impl TrimParams {
    /// Creates a parameter set for the given read pair with every other
    /// parameter at its default value.
    pub fn new<P>(input_forward: P, input_reverse: P) -> Self
    where
        P: Into<PathBuf>,
    {
        TrimParams {
            input_forward: input_forward.into(),
            input_reverse: input_reverse.into(),
            program: PathBuf::from(DEFAULT_PROGRAM),
            base_out: None,
            output_directory: None,
            quality: 20,
            base_quality_encoding: BaseQualityEncoding::Phred33,
            length: 20,
            length_1: 35,
            length_2: 35,
            max_length: None,
            max_n: None,
            trim_n: false,
            adapter_preset: AdapterPreset::Auto,
            error_rate: None,
            stringency: 1,
            adapter: None,
            adapter2: None,
            consider_already_trimmed: None,
            fastqc: false,
            fastqc_args: None,
            report_file: true,
            gzip_output_files: false,
            retain_unpaired: true,
            hardtrim5: None,
            hardtrim3: None,
            clip_r1: None,
            clip_r2: None,
            polya: false,
            implicon: false,
            three_prime_clip_r1: None,
            three_prime_clip_r2: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AdapterPreset, BaseQualityEncoding};

    #[test]
    pub fn it_maps_encodings_to_their_switches() {
        assert_eq!(BaseQualityEncoding::Phred33.flag(), "--phred33");
        assert_eq!(BaseQualityEncoding::Phred64.flag(), "--phred64");
    }

    #[test]
    pub fn it_maps_only_the_auto_preset_to_no_switch() {
        assert_eq!(AdapterPreset::Auto.flag(), None);
        assert_eq!(AdapterPreset::Illumina.flag(), Some("--illumina"));
        assert_eq!(
            AdapterPreset::StrandedIllumina.flag(),
            Some("--stranded_illumina")
        );
        assert_eq!(AdapterPreset::Nextera.flag(), Some("--nextera"));
        assert_eq!(AdapterPreset::SmallRna.flag(), Some("--small_rna"));
    }
}
