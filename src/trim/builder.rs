//! Translation of a [`TrimParams`] parameter set into a Trim Galore
//! invocation.
//!
//! # Overview
//!
//! [`build`] is a pure function from a parameter set to an ordered argument
//! list. It performs no I/O, never fails, and produces the same list for the
//! same input every time. The emission order is fixed so that downstream
//! tooling (and our own tests) can assert on exact sequences, even though
//! Trim Galore itself does not care about the order of its switches.
//!
//! The emission rules are not uniform across parameters, which is what makes
//! this mapping worth keeping in one place:
//!
//! 1. A handful of parameters carry defaults and are always spelled out
//!    (quality, encoding, the three length cutoffs, stringency).
//! 2. Compression is exhaustive: exactly one of `--gzip`/`--dont_gzip`
//!    appears in every invocation, never both, never neither.
//! 3. The `auto` adapter preset is a sentinel that emits no token at all,
//!    while every other preset emits exactly one literal token.
//! 4. Optional numeric switches are only emitted for nonzero values: a value
//!    of 0 disables the switch entirely rather than emitting `<flag> 0`. The
//!    exceptions are `--max_n`, which is emitted whenever it is set, and
//!    `-e`, where exactly 0.0 is treated as unset.

use super::params::TrimParams;
use super::STAGING_DIR;

/// Builds the full Trim Galore argument list for the given parameter set.
/// The first element is the program itself, ready to be handed to
/// [`run`](crate::trim::driver::run).
pub fn build(params: &TrimParams) -> Vec<String> {
    // Input/output arguments.
    let mut cmd = vec![
        params.program.display().to_string(),
        params.input_forward.display().to_string(),
        params.input_reverse.display().to_string(),
        String::from("--paired"),
        String::from("--output_dir"),
        String::from(STAGING_DIR),
    ];

    if let Some(base_out) = nonempty(&params.base_out) {
        cmd.push(String::from("--basename"));
        cmd.push(String::from(base_out));
    }

    if params.gzip_output_files {
        cmd.push(String::from("--gzip"));
    } else {
        cmd.push(String::from("--dont_gzip"));
    }

    if params.retain_unpaired {
        cmd.push(String::from("--retain_unpaired"));
    }

    // Quality arguments. These all carry defaults and are always spelled out.
    cmd.push(String::from("--quality"));
    cmd.push(params.quality.to_string());
    cmd.push(String::from(params.base_quality_encoding.flag()));
    cmd.push(String::from("--length"));
    cmd.push(params.length.to_string());
    cmd.push(String::from("--length_1"));
    cmd.push(params.length_1.to_string());
    cmd.push(String::from("--length_2"));
    cmd.push(params.length_2.to_string());

    push_nonzero(&mut cmd, "--max_length", params.max_length);

    // Unlike the other optional numerics, max_n is emitted whenever it is
    // set, including for a value of 0.0.
    if let Some(max_n) = params.max_n {
        cmd.push(String::from("--max_n"));
        cmd.push(max_n.to_string());
    }

    if params.trim_n {
        cmd.push(String::from("--trim-n"));
    }

    // Arguments for handling adapters.
    if let Some(preset) = params.adapter_preset.flag() {
        cmd.push(String::from(preset));
    }

    // An error rate of exactly zero is treated as unset.
    if let Some(error_rate) = params.error_rate {
        if error_rate != 0.0 {
            cmd.push(String::from("-e"));
            cmd.push(error_rate.to_string());
        }
    }

    cmd.push(String::from("--stringency"));
    cmd.push(params.stringency.to_string());

    if let Some(adapter) = nonempty(&params.adapter) {
        cmd.push(String::from("--adapter"));
        cmd.push(String::from(adapter));
    }

    if let Some(adapter2) = nonempty(&params.adapter2) {
        cmd.push(String::from("--adapter2"));
        cmd.push(String::from(adapter2));
    }

    push_nonzero(
        &mut cmd,
        "--consider_already_trimmed",
        params.consider_already_trimmed,
    );

    // Reporting arguments.
    if params.fastqc {
        cmd.push(String::from("--fastqc"));
    }

    if let Some(fastqc_args) = nonempty(&params.fastqc_args) {
        cmd.push(String::from("--fastqc_args"));
        // Trim Galore expects the pass-through FastQC arguments as a single
        // double-quoted token.
        cmd.push(format!("\"{}\"", fastqc_args));
    }

    if !params.report_file {
        cmd.push(String::from("--no_report_file"));
    }

    // Miscellaneous arguments.
    push_nonzero(&mut cmd, "--hardtrim5", params.hardtrim5);
    push_nonzero(&mut cmd, "--hardtrim3", params.hardtrim3);
    push_nonzero(&mut cmd, "--clip_R1", params.clip_r1);
    push_nonzero(&mut cmd, "--clip_R2", params.clip_r2);

    if params.polya {
        cmd.push(String::from("--polyA"));
    }

    if params.implicon {
        cmd.push(String::from("--implicon"));
    }

    push_nonzero(&mut cmd, "--three_prime_clip_R1", params.three_prime_clip_r1);
    push_nonzero(&mut cmd, "--three_prime_clip_R2", params.three_prime_clip_r2);

    cmd
}

/// Emits `<flag> <n>` for a present-and-nonzero value. A value of 0 disables
/// the switch entirely.
fn push_nonzero(cmd: &mut Vec<String>, flag: &str, value: Option<u32>) {
    if let Some(n) = value {
        if n > 0 {
            cmd.push(String::from(flag));
            cmd.push(n.to_string());
        }
    }
}

/// An empty string counts as absent for the optional string parameters.
fn nonempty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::params::{AdapterPreset, TrimParams};
    use super::build;

    fn params() -> TrimParams {
        TrimParams::new("reads_1.fastq", "reads_2.fastq")
    }

    const DEFAULT_INVOCATION: [&str; 19] = [
        "trim_galore",
        "reads_1.fastq",
        "reads_2.fastq",
        "--paired",
        "--output_dir",
        "trim_galore_out",
        "--dont_gzip",
        "--retain_unpaired",
        "--quality",
        "20",
        "--phred33",
        "--length",
        "20",
        "--length_1",
        "35",
        "--length_2",
        "35",
        "--stringency",
        "1",
    ];

    #[test]
    pub fn it_builds_the_default_invocation() {
        assert_eq!(build(&params()), DEFAULT_INVOCATION.to_vec());
    }

    #[test]
    pub fn it_is_deterministic() {
        let params = params();
        assert_eq!(build(&params), build(&params));
    }

    #[test]
    pub fn it_emits_exactly_one_compression_switch() {
        let mut params = params();
        params.gzip_output_files = true;

        let mut expected: Vec<&str> = DEFAULT_INVOCATION.to_vec();
        expected[6] = "--gzip";
        assert_eq!(build(&params), expected);

        // One of the two switches appears in every invocation, never both.
        for gzip in [false, true] {
            params.gzip_output_files = gzip;
            let cmd = build(&params);
            assert_eq!(cmd.iter().filter(|t| *t == "--gzip").count(), gzip as usize);
            assert_eq!(
                cmd.iter().filter(|t| *t == "--dont_gzip").count(),
                !gzip as usize
            );
        }
    }

    #[test]
    pub fn it_appends_the_preset_and_error_rate() {
        let mut params = params();
        params.adapter_preset = AdapterPreset::Nextera;
        params.error_rate = Some(0.05);

        // The preset token and the error rate slot in just before the
        // stringency pair.
        let mut expected: Vec<&str> = DEFAULT_INVOCATION[..17].to_vec();
        expected.extend(["--nextera", "-e", "0.05"]);
        expected.extend_from_slice(&DEFAULT_INVOCATION[17..]);
        assert_eq!(build(&params), expected);
    }

    #[test]
    pub fn it_maps_each_adapter_preset_to_a_single_token() {
        let cases = [
            (AdapterPreset::Illumina, "--illumina"),
            (AdapterPreset::StrandedIllumina, "--stranded_illumina"),
            (AdapterPreset::Nextera, "--nextera"),
            (AdapterPreset::SmallRna, "--small_rna"),
        ];

        for (preset, token) in cases {
            let mut params = params();
            params.adapter_preset = preset;
            let cmd = build(&params);
            assert_eq!(cmd.iter().filter(|t| *t == token).count(), 1);
        }

        // The auto sentinel emits nothing.
        let cmd = build(&params());
        for (_, token) in cases {
            assert!(!cmd.iter().any(|t| t == token));
        }
    }

    #[test]
    pub fn it_suppresses_zero_valued_numeric_switches() {
        let mut params = params();
        params.max_length = Some(0);
        params.consider_already_trimmed = Some(0);
        params.hardtrim5 = Some(0);
        params.hardtrim3 = Some(0);
        params.clip_r1 = Some(0);
        params.clip_r2 = Some(0);
        params.three_prime_clip_r1 = Some(0);
        params.three_prime_clip_r2 = Some(0);
        params.error_rate = Some(0.0);

        assert_eq!(build(&params), DEFAULT_INVOCATION.to_vec());
    }

    #[test]
    pub fn it_emits_max_n_even_when_zero() {
        let mut params = params();
        params.max_n = Some(0.0);

        let cmd = build(&params);
        let at = cmd.iter().position(|t| t == "--max_n").unwrap();
        assert_eq!(cmd[at + 1], "0");
    }

    #[test]
    pub fn it_emits_optional_value_switches_independently() {
        let mut params = params();
        params.base_out = Some(String::from("sample"));
        params.adapter = Some(String::from("AGATCGGAAGAGC"));
        params.adapter2 = Some(String::from("CTGTCTCTTATACACATCT"));
        params.consider_already_trimmed = Some(10);

        let cmd = build(&params);
        for (flag, value) in [
            ("--basename", "sample"),
            ("--adapter", "AGATCGGAAGAGC"),
            ("--adapter2", "CTGTCTCTTATACACATCT"),
            ("--consider_already_trimmed", "10"),
        ] {
            let at = cmd.iter().position(|t| t == flag).unwrap();
            assert_eq!(cmd[at + 1], value);
        }

        // An empty string is treated the same as an unset parameter.
        params.base_out = Some(String::new());
        assert!(!build(&params).iter().any(|t| t == "--basename"));
    }

    #[test]
    pub fn it_quotes_the_fastqc_pass_through_arguments() {
        let mut params = params();
        params.fastqc = true;
        params.fastqc_args = Some(String::from("--noextract"));

        let cmd = build(&params);
        assert!(cmd.iter().any(|t| t == "--fastqc"));
        let at = cmd.iter().position(|t| t == "--fastqc_args").unwrap();
        assert_eq!(cmd[at + 1], "\"--noextract\"");
    }

    #[test]
    pub fn it_flags_the_disabled_report_file() {
        assert!(!build(&params()).iter().any(|t| t == "--no_report_file"));

        let mut params = params();
        params.report_file = false;
        assert!(build(&params).iter().any(|t| t == "--no_report_file"));
    }

    #[test]
    pub fn it_orders_the_miscellaneous_block() {
        let mut params = params();
        params.hardtrim5 = Some(50);
        params.hardtrim3 = Some(40);
        params.clip_r1 = Some(1);
        params.clip_r2 = Some(2);
        params.polya = true;
        params.implicon = true;
        params.three_prime_clip_r1 = Some(3);
        params.three_prime_clip_r2 = Some(4);

        let cmd = build(&params);
        let tail = cmd[cmd.len() - 14..].to_vec();
        assert_eq!(
            tail,
            vec![
                "--hardtrim5",
                "50",
                "--hardtrim3",
                "40",
                "--clip_R1",
                "1",
                "--clip_R2",
                "2",
                "--polyA",
                "--implicon",
                "--three_prime_clip_R1",
                "3",
                "--three_prime_clip_R2",
                "4",
            ]
        );
    }
}
