// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs, Debug, Default)]
/// fasta-checksum - checksum FASTA files and their individual contigs
pub struct Args {
    /// a FASTA file to checksum
    #[argh(positional)]
    pub fasta: Option<String>,

    /// genome ID to include, if --out-format is set to bento-json
    #[argh(option)]
    pub genome_id: Option<String>,

    /// output format: text, bento-json (default: text)
    #[argh(option)]
    pub out_format: Option<String>,

    /// comma-separated checksum algorithms (default: md5,trunc512)
    #[argh(option)]
    pub algorithms: Option<String>,

    /// algorithm option as algorithm.key=value, e.g. trunc512.offset=32 (repeatable)
    #[argh(option)]
    pub option: Vec<String>,

    /// path to the FASTA index (default: <fasta>.fai, computed in memory if absent)
    #[argh(option)]
    pub fai: Option<String>,

    /// bytes read per chunk for whole-file checksums (default: 16384)
    #[argh(option)]
    pub chunk_size: Option<usize>,

    /// bases fetched per chunk for contig checksums (default: 16384)
    #[argh(option)]
    pub sequence_chunk_size: Option<u64>,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// list available checksum algorithms and exit
    #[argh(switch)]
    pub list_algorithms: bool,

    /// show a progress bar over contigs on stderr
    #[argh(switch)]
    pub progress: bool,

    /// log run details to stderr
    #[argh(switch, short = 'v')]
    pub verbose: bool,

    /// print version information and exit
    #[argh(switch)]
    pub version: bool,
}
