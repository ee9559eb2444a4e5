extern crate clap;

use clap::{App, Arg, ArgMatches, SubCommand};
use serde::Serialize;
use simple_error::SimpleError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::process::exit;

use anaexplorer::*;

#[derive(Serialize)]
struct PairReport {
    word_a: String,
    word_b: String,
    valid: bool,
    reason: Option<String>,
}

///Parse the letters for a round, either as a run of letters (`rat`) or comma separated (`r,a,t`)
fn parse_letters(value: &str) -> Result<Vec<char>, SimpleError> {
    if value.contains(',') {
        let items: Vec<&str> = value.split(',').map(|item| item.trim()).filter(|item| !item.is_empty()).collect();
        letters_from_strs(&items)
            .ok_or_else(|| SimpleError::new(format!("Letters should be single characters, got: {}", value)))
    } else {
        Ok(value.chars().filter(|c| !c.is_whitespace()).collect())
    }
}

///Parse a pair of words from an input line, tab separated or else whitespace separated
fn parse_pair(line: &str) -> Result<(&str, &str), SimpleError> {
    let fields: Vec<&str> = if line.contains('\t') {
        line.split('\t').collect()
    } else {
        line.split_whitespace().collect()
    };
    match fields.as_slice() {
        [word_a, word_b] => Ok((*word_a, *word_b)),
        _ => Err(SimpleError::new(format!("Expected exactly two words, got: {}", line))),
    }
}

fn output_to_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("ERROR: Unable to serialize output: {}", e);
            exit(1);
        }
    }
}

fn output_index(explorer: &AnagramExplorer, json: bool) {
    let groups = explorer.get_lookup_dict().groups();
    if json {
        output_to_json(groups);
    } else {
        for group in groups {
            print!("{}", group.key);
            for word in group.words.iter() {
                print!("\t{}", word);
            }
            println!();
        }
    }
}

fn output_words(words: &[String], json: bool) {
    if json {
        output_to_json(words);
    } else {
        for word in words {
            println!("{}", word);
        }
    }
}

///Validate all pairs in the input; prints them as tsv, or collects them for json output if
///`reports` is set
fn process(explorer: &AnagramExplorer, inputstream: impl Read, letters: &[char], reports: &mut Option<Vec<PairReport>>) {
    let f_buffer = BufReader::new(inputstream);
    for line in f_buffer.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("ERROR: Unable to read input: {}", e);
                exit(1);
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let (word_a, word_b) = match parse_pair(&line) {
            Ok(pair) => pair,
            Err(e) => {
                eprintln!("WARNING: skipping line: {}", e);
                continue;
            }
        };
        let verdict = explorer.validate_anagram_pair((word_a, word_b), letters);
        if let Some(reports) = reports.as_mut() {
            reports.push(PairReport {
                word_a: word_a.to_owned(),
                word_b: word_b.to_owned(),
                valid: verdict.is_ok(),
                reason: verdict.err().map(|e| e.to_string()),
            });
        } else {
            match verdict {
                Ok(()) => println!("{}\t{}\tvalid\t", word_a, word_b),
                Err(e) => println!("{}\t{}\tinvalid\t{}", word_a, word_b, e),
            }
        }
    }
}

pub fn common_arguments<'a, 'b>() -> Vec<clap::Arg<'a, 'b>> {
    let mut args: Vec<Arg> = Vec::new();
    args.push(Arg::with_name("corpus")
        .long("corpus")
        .short("f")
        .help("Word list that makes up the corpus, one word per line. Lines may contain multiple tab-separated columns, see --text-column. This option may be used multiple times, the lists are concatenated.")
        .takes_value(true)
        .number_of_values(1)
        .multiple(true)
        .required(true));
    args.push(Arg::with_name("text-column")
        .long("text-column")
        .help("Column in the corpus files that holds the word (0-indexed)")
        .takes_value(true)
        .default_value("0"));
    args.push(Arg::with_name("letters")
        .long("letters")
        .short("l")
        .help("The letters available in the round, either as a single string (rat) or comma separated (r,a,t)")
        .takes_value(true));
    args.push(Arg::with_name("json")
        .long("json")
        .short("j")
        .help("Output json instead of tsv")
        .required(false));
    args.push(Arg::with_name("single-thread")
        .long("single-thread")
        .help("Build the index on a single thread")
        .required(false));
    args
}

fn load_corpus(args: &ArgMatches) -> Result<Vec<String>, SimpleError> {
    let text_column = args
        .value_of("text-column")
        .unwrap_or("0")
        .parse::<u8>()
        .map_err(|e| SimpleError::new(format!("Text column should be an integer between 0 and 255: {}", e)))?;
    let params = CorpusParams::default().with_text_column(text_column);
    let mut words: Vec<String> = Vec::new();
    if let Some(filenames) = args.values_of("corpus") {
        for filename in filenames {
            let corpus = Corpus::read_from_file(filename, &params)
                .map_err(|e| SimpleError::new(format!("Error reading corpus {}: {}", filename, e)))?;
            words.extend(corpus.words().iter().cloned());
        }
    }
    Ok(words)
}

fn build_app<'a, 'b>() -> App<'a, 'b> {
    App::new("Anaexplorer")
                    .version("0.1")
                    .author("Maarten van Gompel (proycon) <proycon@anaproy.nl>")
                    .about("Anagram groups and anagram pair validation over a word list")
                    .subcommand(
                        SubCommand::with_name("index")
                            .about("Compute and output the anagram index")
                            .args(&common_arguments())
                    )
                    .subcommand(
                        SubCommand::with_name("all")
                            .about("Output all words in the corpus that form at least one anagram pair")
                            .args(&common_arguments())
                    )
                    .subcommand(
                        SubCommand::with_name("most")
                            .about("Output one word from each of the largest anagram groups")
                            .args(&common_arguments())
                    )
                    .subcommand(
                        SubCommand::with_name("check")
                            .about("Validate anagram pairs read from the input, one tab or space separated pair per line")
                            .args(&common_arguments())
                            .arg(Arg::with_name("files")
                                .help("Input files")
                                .takes_value(true)
                                .multiple(true)
                                .required(false))
                    )
                    .arg(Arg::with_name("debug")
                        .long("debug")
                        .short("D")
                        .help("Debug")
                        .global(true)
                        .required(false))
}

fn main() {
    let rootargs = build_app().get_matches();

    let (command, args) = match rootargs.subcommand() {
        (command, Some(args)) => (command, args),
        _ => {
            eprintln!("No command specified, see --help");
            exit(2);
        }
    };

    let letters = match parse_letters(args.value_of("letters").unwrap_or("")) {
        Ok(letters) => letters,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            exit(2);
        }
    };

    eprintln!("Loading corpus...");
    let words = match load_corpus(args) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            exit(1);
        }
    };

    let mut params = ExplorerParams::default();
    if args.is_present("single-thread") {
        params = params.with_single_thread();
    }
    if rootargs.is_present("debug") || args.is_present("debug") {
        params = params.with_debug();
    }

    eprintln!("Building index...");
    let explorer = AnagramExplorer::new_with_params(words, params);
    let json = args.is_present("json");

    match command {
        "index" => {
            eprintln!("Outputting anagram index...");
            output_index(&explorer, json);
        }
        "all" => {
            let mut words: Vec<String> = explorer.get_all_anagrams(&letters).into_iter().collect();
            words.sort();
            output_words(&words, json);
        }
        "most" => {
            output_words(&explorer.get_most_anagrams(&letters), json);
        }
        _ => {
            eprintln!("Validating pairs...");
            let mut reports = if json {
                Some(Vec::new())
            } else {
                None
            };
            let files: Vec<_> = if let Some(files) = args.values_of("files") {
                files.collect()
            } else {
                vec!("-")
            };
            for filename in files {
                match filename {
                    "-" | "STDIN" | "stdin" => {
                        eprintln!("(accepting standard input; enter one pair per line)");
                        let stdin = io::stdin();
                        process(&explorer, stdin, &letters, &mut reports);
                    },
                    _ => {
                        match File::open(filename) {
                            Ok(f) => process(&explorer, f, &letters, &mut reports),
                            Err(e) => {
                                eprintln!("ERROR: Unable to open file {}: {}", filename, e);
                                exit(1);
                            }
                        }
                    }
                }
            }
            if let Some(reports) = reports {
                output_to_json(&reports);
            }
        }
    }
}
