mod dictionary;
mod report;
mod trie;

use anyhow::Context as _;
use clap::{Parser as _, ValueEnum as _};

const DEFAULT_PROBES: [&str; 5] = ["notaword", "ucf", "no", "note", "corg"];

#[derive(clap::ValueEnum, Clone, Copy)]
enum Format {
    Text,
    Json,
}

#[derive(clap::Parser)]
struct Args {
    /// Word list, one word per line.
    #[arg(long, default_value = "dictionary.txt")]
    dictionary: std::path::PathBuf,

    /// Refuse dictionaries with more words than this.
    #[arg(long)]
    capacity: Option<usize>,

    #[arg(long, default_value = "text")]
    format: Format,

    /// Don't echo the dictionary before the counts.
    #[arg(long)]
    quiet: bool,

    /// Words to count. Defaults to a fixed sample.
    probes: Vec<String>,
}

fn build(mut handle: Option<trie::Trie>, words: &[String]) -> Option<trie::Trie> {
    let mut skipped = 0;

    for word in words {
        if let Err(e) = trie::insert(handle.as_mut(), Some(word.as_str())) {
            log::warn!(word = word.as_str(); "skipping dictionary entry: {e}");
            skipped += 1;
        }
    }

    if let Some(trie) = &handle {
        if trie.is_empty() {
            log::warn!("no dictionary entry was inserted");
        }
        log::info!(inserted = words.len() - skipped, skipped = skipped, nodes = trie.node_count(); "trie built");
    }

    handle
}

fn count(trie: Option<&trie::Trie>, probes: &[String]) -> Vec<report::Probe> {
    probes
        .iter()
        .map(|word| {
            let count = trie::number_of_occurrences(trie, Some(word.as_str())).unwrap_or_else(|e| {
                log::warn!(word = word.as_str(); "probe can never match: {e}");
                0
            });
            report::Probe {
                word: word.clone(),
                count,
            }
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let words = dictionary::load(&args.dictionary, args.capacity)
        .with_context(|| format!("loading {}", args.dictionary.display()))?;

    let probes = if args.probes.is_empty() {
        DEFAULT_PROBES.iter().map(|word| word.to_string()).collect()
    } else {
        args.probes
    };

    log::info!(words = words.len(), probes = probes.len(), format = args.format.to_possible_value().unwrap().get_name(); "trie-count");

    let mut handle = build(Some(trie::Trie::new()), &words);

    let report = report::Report {
        words: (!args.quiet).then_some(words.as_slice()),
        probes: count(handle.as_ref(), &probes),
    };

    match args.format {
        Format::Text => print!("{}", report.to_text()),
        Format::Json => println!("{}", report.to_json()?),
    }

    handle = trie::Trie::destroy(handle);
    if handle.is_some() {
        println!("There is an error in this program");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn default_probes_against_sample_dictionary() {
        let handle = build(Some(trie::Trie::new()), &strings(&["no", "no", "note", "corg"]));
        let probes = count(handle.as_ref(), &strings(&DEFAULT_PROBES));
        let counts = probes
            .iter()
            .map(|probe| (probe.word.as_str(), probe.count))
            .collect::<Vec<_>>();
        assert_eq!(
            counts,
            [("notaword", 0), ("ucf", 0), ("no", 2), ("note", 1), ("corg", 1)]
        );
        assert!(trie::Trie::destroy(handle).is_none());
    }

    #[test]
    fn invalid_entries_are_skipped() {
        let handle = build(Some(trie::Trie::new()), &strings(&["no", "", "No", "no"]));
        let probes = count(handle.as_ref(), &strings(&["no", "No", ""]));
        assert_eq!(
            probes.iter().map(|probe| probe.count).collect::<Vec<_>>(),
            [2, 0, 0]
        );
    }

    #[test]
    fn absent_trie_counts_nothing() {
        let handle = build(None, &strings(&["no"]));
        assert!(handle.is_none());
        let probes = count(handle.as_ref(), &strings(&["no"]));
        assert_eq!(probes[0].count, 0);
    }

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from([
            "trie-count",
            "--format",
            "json",
            "--capacity",
            "256",
            "no",
            "ucf",
        ])
        .unwrap();
        assert!(matches!(args.format, Format::Json));
        assert_eq!(args.capacity, Some(256));
        assert_eq!(args.dictionary, std::path::PathBuf::from("dictionary.txt"));
        assert!(!args.quiet);
        assert_eq!(args.probes, ["no", "ucf"]);
    }
}
